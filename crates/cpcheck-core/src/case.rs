//! Prioritized test cases and the registry that orders them
//!
//! A case is a plain value: priority, name, description, and a function
//! pointer taking the suite state. Priorities are unique across a registry
//! and execution order is strictly ascending.

use thiserror::Error;

/// How a case that ran to completion finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStatus {
    Passed,
    /// The case asked to be skipped instead of running its checks.
    Skipped,
}

/// Error raised by a case body.
///
/// Every kind surfaces as FAIL of the current case only; the runner always
/// proceeds to the next case. The display form is the message printed on the
/// `Error:` line of the listener output.
#[derive(Debug, Clone, Error)]
pub enum CaseError {
    /// A predicate did not hold.
    #[error("{0}")]
    Assertion(String),
    /// Connection refused, timeout, or a malformed response.
    #[error("{0}")]
    Transport(String),
    /// JSON parsing failed or a required field is absent.
    #[error("{0}")]
    Parse(String),
    /// An expected filesystem path is missing.
    #[error("{0}")]
    Structural(String),
}

/// Result of one case invocation.
pub type CaseResult = Result<CaseStatus, CaseError>;

/// One registered case. Immutable after registration, invoked once per run.
pub struct Case<S> {
    /// Unique positive ordering key.
    pub priority: u32,
    /// Name printed in the listener output.
    pub name: String,
    /// Human-readable description shown by `cpcheck list`.
    pub description: String,
    /// The case body.
    pub run: fn(&mut S) -> CaseResult,
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("priority {priority} already taken by '{existing}', cannot register '{rejected}'")]
    DuplicatePriority {
        priority: u32,
        existing: String,
        rejected: String,
    },
    #[error("case '{name}' has priority 0; priorities start at 1")]
    ZeroPriority { name: String },
}

/// Set of cases with unique priorities.
pub struct Registry<S> {
    cases: Vec<Case<S>>,
}

impl<S> Registry<S> {
    #[must_use]
    pub fn new() -> Self {
        Self { cases: Vec::new() }
    }

    /// Add a case, rejecting priority collisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the priority is zero or already registered.
    pub fn register(&mut self, case: Case<S>) -> Result<(), RegistryError> {
        if case.priority == 0 {
            return Err(RegistryError::ZeroPriority { name: case.name });
        }
        if let Some(existing) = self.cases.iter().find(|c| c.priority == case.priority) {
            return Err(RegistryError::DuplicatePriority {
                priority: case.priority,
                existing: existing.name.clone(),
                rejected: case.name,
            });
        }
        self.cases.push(case);
        Ok(())
    }

    /// Cases in strictly ascending priority order.
    #[must_use]
    pub fn ordered(&self) -> Vec<&Case<S>> {
        let mut ordered: Vec<&Case<S>> = self.cases.iter().collect();
        ordered.sort_by_key(|c| c.priority);
        ordered
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<S> Default for Registry<S> {
    fn default() -> Self {
        Self::new()
    }
}
