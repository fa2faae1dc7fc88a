//! Assertion helpers
//!
//! Each helper returns `Err(CaseError::Assertion)` carrying the mandatory
//! message, so case bodies compose them with `?`. A failed check ends the
//! current case only.

use std::fmt::Debug;

use crate::case::CaseError;

/// Fail with `msg` unless `cond` holds.
///
/// # Errors
///
/// Returns `CaseError::Assertion` when the condition is false.
pub fn that(cond: bool, msg: impl Into<String>) -> Result<(), CaseError> {
    if cond {
        Ok(())
    } else {
        Err(CaseError::Assertion(msg.into()))
    }
}

/// Fail with `msg` if `cond` holds.
///
/// # Errors
///
/// Returns `CaseError::Assertion` when the condition is true.
pub fn not(cond: bool, msg: impl Into<String>) -> Result<(), CaseError> {
    that(!cond, msg)
}

/// Fail unless `actual` equals `expected`; both values are rendered into the
/// failure message.
///
/// # Errors
///
/// Returns `CaseError::Assertion` when the values differ.
pub fn eq<T: PartialEq + Debug>(actual: T, expected: T, msg: &str) -> Result<(), CaseError> {
    if actual == expected {
        Ok(())
    } else {
        Err(CaseError::Assertion(format!(
            "{msg} (expected {expected:?}, got {actual:?})"
        )))
    }
}

/// Unwrap an optional value or fail with `msg`.
///
/// # Errors
///
/// Returns `CaseError::Assertion` when the value is `None`.
pub fn present<T>(value: Option<T>, msg: impl Into<String>) -> Result<T, CaseError> {
    value.ok_or_else(|| CaseError::Assertion(msg.into()))
}
