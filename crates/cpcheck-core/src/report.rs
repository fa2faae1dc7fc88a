//! Run report — per-case outcomes in invocation order
//!
//! The report is the machine-readable side of the listener output: one record
//! per case, totals, and the process exit code. Serialized as JSON for
//! `--output json`; `generate_schema` exports its JSON Schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of a single case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Skip,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Fail => write!(f, "FAIL"),
            Self::Skip => write!(f, "SKIP"),
        }
    }
}

/// One case outcome, produced once per run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CaseRecord {
    pub name: String,
    pub outcome: Outcome,
    /// Failure message, only present on FAIL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// All case records of one run, in invocation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct RunReport {
    pub records: Vec<CaseRecord>,
}

impl RunReport {
    pub fn push(&mut self, record: CaseRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.count(Outcome::Pass)
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(Outcome::Fail)
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(Outcome::Skip)
    }

    fn count(&self, outcome: Outcome) -> usize {
        self.records.iter().filter(|r| r.outcome == outcome).count()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// 0 iff zero FAIL records, else 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() { 0 } else { 1 }
    }

    /// One-line totals for the terminal output.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} cases: {} passed, {} failed, {} skipped",
            self.records.len(),
            self.passed(),
            self.failed(),
            self.skipped()
        )
    }
}

/// Generate JSON Schema for the report interchange format.
#[must_use]
pub fn generate_schema() -> String {
    let schema = schemars::schema_for!(RunReport);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, outcome: Outcome, error: Option<&str>) -> CaseRecord {
        CaseRecord {
            name: name.to_string(),
            outcome,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn totals_and_exit_code() {
        let mut report = RunReport::default();
        report.push(record("a", Outcome::Pass, None));
        report.push(record("b", Outcome::Fail, Some("boom")));
        report.push(record("c", Outcome::Skip, None));
        report.push(record("d", Outcome::Pass, None));

        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.skipped(), 1);
        assert!(!report.all_passed());
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn skip_does_not_fail_the_run() {
        let mut report = RunReport::default();
        report.push(record("a", Outcome::Pass, None));
        report.push(record("b", Outcome::Skip, None));
        assert!(report.all_passed());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn summary_line() {
        let mut report = RunReport::default();
        report.push(record("a", Outcome::Pass, None));
        report.push(record("b", Outcome::Fail, Some("boom")));
        insta::assert_snapshot!(report.summary(), @"2 cases: 1 passed, 1 failed, 0 skipped");
    }

    #[test]
    fn serialization_roundtrip() {
        let mut report = RunReport::default();
        report.push(record("login_valid", Outcome::Fail, Some("no token")));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"outcome\":\"fail\""));
        let parsed: RunReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].error.as_deref(), Some("no token"));
    }

    #[test]
    fn pass_record_omits_error_field() {
        let mut report = RunReport::default();
        report.push(record("a", Outcome::Pass, None));
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("error"));
    }

    #[test]
    fn schema_is_valid_json_titled_run_report() {
        let schema = generate_schema();
        let parsed: serde_json::Value = serde_json::from_str(&schema).unwrap();
        assert_eq!(
            parsed.get("title").and_then(|v| v.as_str()),
            Some("RunReport")
        );
    }
}
