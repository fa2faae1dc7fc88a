//! Result listener — receives PASS/FAIL/SKIP events from the runner
//!
//! The listener is injected into the runner's constructor. `StdoutListener`
//! writes the canonical one-line-per-case format; `SilentListener` is for
//! callers that only want the report (JSON and silent output modes).

use crate::case::CaseError;

/// Observer of per-case outcomes, notified in invocation order.
pub trait Listener {
    fn case_passed(&mut self, name: &str);
    fn case_failed(&mut self, name: &str, error: &CaseError);
    fn case_skipped(&mut self, name: &str);
}

/// Writes one line per case to standard output:
///
/// ```text
/// <name> - PASS
/// <name> - FAIL
/// Error: <message>
/// <name> - SKIP
/// ```
#[derive(Debug, Default)]
pub struct StdoutListener;

impl Listener for StdoutListener {
    fn case_passed(&mut self, name: &str) {
        println!("{name} - PASS");
    }

    fn case_failed(&mut self, name: &str, error: &CaseError) {
        println!("{name} - FAIL");
        println!("Error: {error}");
    }

    fn case_skipped(&mut self, name: &str) {
        println!("{name} - SKIP");
    }
}

/// Discards all events.
#[derive(Debug, Default)]
pub struct SilentListener;

impl Listener for SilentListener {
    fn case_passed(&mut self, _name: &str) {}
    fn case_failed(&mut self, _name: &str, _error: &CaseError) {}
    fn case_skipped(&mut self, _name: &str) {}
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// Captures formatted event lines; test double for listener consumers.
    #[derive(Debug, Default)]
    pub struct RecordingListener {
        pub lines: Vec<String>,
    }

    impl Listener for RecordingListener {
        fn case_passed(&mut self, name: &str) {
            self.lines.push(format!("{name} - PASS"));
        }

        fn case_failed(&mut self, name: &str, error: &CaseError) {
            self.lines.push(format!("{name} - FAIL"));
            self.lines.push(format!("Error: {error}"));
        }

        fn case_skipped(&mut self, name: &str) {
            self.lines.push(format!("{name} - SKIP"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::RecordingListener;
    use super::*;

    #[test]
    fn fail_event_carries_error_line() {
        let mut listener = RecordingListener::default();
        listener.case_passed("entity_folder_exists");
        listener.case_failed(
            "user_login_invalid",
            &CaseError::Assertion("response should contain error message".into()),
        );
        listener.case_skipped("later_case");

        insta::assert_snapshot!(listener.lines.join("\n"), @r"
        entity_folder_exists - PASS
        user_login_invalid - FAIL
        Error: response should contain error message
        later_case - SKIP
        ");
    }
}
