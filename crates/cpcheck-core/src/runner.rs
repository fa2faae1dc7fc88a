//! Single-threaded, priority-ordered case runner
//!
//! Invokes each registered case once, in ascending priority order, notifying
//! the listener and accumulating the report. A failing case never stops the
//! run; every error a case can raise is a `CaseError` value.

use crate::case::{CaseStatus, Registry};
use crate::listener::Listener;
use crate::report::{CaseRecord, Outcome, RunReport};

/// Executes a registry against suite state `S`.
pub struct Runner<L: Listener> {
    listener: L,
}

impl<L: Listener> Runner<L> {
    #[must_use]
    pub fn new(listener: L) -> Self {
        Self { listener }
    }

    /// Run every case in ascending priority order.
    pub fn run<S>(&mut self, registry: &Registry<S>, suite: &mut S) -> RunReport {
        let mut report = RunReport::default();

        for case in registry.ordered() {
            let record = match (case.run)(suite) {
                Ok(CaseStatus::Passed) => {
                    self.listener.case_passed(&case.name);
                    CaseRecord {
                        name: case.name.clone(),
                        outcome: Outcome::Pass,
                        error: None,
                    }
                }
                Ok(CaseStatus::Skipped) => {
                    self.listener.case_skipped(&case.name);
                    CaseRecord {
                        name: case.name.clone(),
                        outcome: Outcome::Skip,
                        error: None,
                    }
                }
                Err(error) => {
                    self.listener.case_failed(&case.name, &error);
                    CaseRecord {
                        name: case.name.clone(),
                        outcome: Outcome::Fail,
                        error: Some(error.to_string()),
                    }
                }
            };
            report.push(record);
        }

        report
    }

    /// Hand the listener back, e.g. to inspect a recording double.
    pub fn into_listener(self) -> L {
        self.listener
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{Case, CaseError, CaseResult};
    use crate::listener::recording::RecordingListener;
    use proptest::prelude::*;

    /// Suite double: remembers which priorities ran, in order.
    #[derive(Default)]
    struct Trace {
        ran: Vec<&'static str>,
    }

    fn case(priority: u32, name: &str, run: fn(&mut Trace) -> CaseResult) -> Case<Trace> {
        Case {
            priority,
            name: name.to_string(),
            description: String::new(),
            run,
        }
    }

    fn passes(trace: &mut Trace) -> CaseResult {
        trace.ran.push("pass");
        Ok(CaseStatus::Passed)
    }

    fn fails(trace: &mut Trace) -> CaseResult {
        trace.ran.push("fail");
        Err(CaseError::Assertion("expected condition did not hold".into()))
    }

    fn skips(trace: &mut Trace) -> CaseResult {
        trace.ran.push("skip");
        Ok(CaseStatus::Skipped)
    }

    #[test]
    fn outcomes_map_to_records_and_events() {
        let mut registry = Registry::new();
        registry.register(case(1, "first", passes)).unwrap();
        registry.register(case(2, "second", fails)).unwrap();
        registry.register(case(3, "third", skips)).unwrap();

        let mut runner = Runner::new(RecordingListener::default());
        let mut trace = Trace::default();
        let report = runner.run(&registry, &mut trace);

        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(
            report.records[1].error.as_deref(),
            Some("expected condition did not hold")
        );

        let listener = runner.into_listener();
        assert_eq!(
            listener.lines,
            vec![
                "first - PASS",
                "second - FAIL",
                "Error: expected condition did not hold",
                "third - SKIP",
            ]
        );
    }

    #[test]
    fn failure_does_not_stop_subsequent_cases() {
        let mut registry = Registry::new();
        registry.register(case(1, "failing", fails)).unwrap();
        registry.register(case(2, "after", passes)).unwrap();

        let mut runner = Runner::new(RecordingListener::default());
        let mut trace = Trace::default();
        let report = runner.run(&registry, &mut trace);

        assert_eq!(trace.ran, vec!["fail", "pass"]);
        assert_eq!(report.records[1].outcome, Outcome::Pass);
    }

    #[test]
    fn every_error_kind_is_a_fail() {
        fn transport(_: &mut Trace) -> CaseResult {
            Err(CaseError::Transport("connection refused".into()))
        }
        fn parse(_: &mut Trace) -> CaseResult {
            Err(CaseError::Parse("field 'token' missing".into()))
        }
        fn structural(_: &mut Trace) -> CaseResult {
            Err(CaseError::Structural("src/main missing".into()))
        }

        let mut registry = Registry::new();
        registry.register(case(1, "t", transport)).unwrap();
        registry.register(case(2, "p", parse)).unwrap();
        registry.register(case(3, "s", structural)).unwrap();

        let mut runner = Runner::new(RecordingListener::default());
        let report = runner.run(&registry, &mut Trace::default());

        assert_eq!(report.failed(), 3);
        assert_eq!(report.exit_code(), 1);
    }

    proptest! {
        /// The runner invokes cases in strictly ascending priority order for
        /// any registration order; record order mirrors invocation order.
        #[test]
        fn runs_in_ascending_priority(priorities in proptest::collection::hash_set(1u32..10_000, 1..40)) {
            let mut registry = Registry::new();
            for p in &priorities {
                registry.register(case(*p, &p.to_string(), passes)).unwrap();
            }

            let mut runner = Runner::new(crate::listener::SilentListener);
            let report = runner.run(&registry, &mut Trace::default());

            let seen: Vec<u32> = report
                .records
                .iter()
                .map(|r| r.name.parse().unwrap())
                .collect();
            for pair in seen.windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
            prop_assert_eq!(seen.len(), priorities.len());
        }
    }
}
