//! Minimal JSON field access
//!
//! The suite only ever reads `token` and `message`, so a generic `Value`
//! tree plus a string extractor is the whole helper.

use cpcheck_core::CaseError;
use serde_json::Value;

/// Parse a response body into a generic value tree.
///
/// # Errors
///
/// Returns `CaseError::Parse` if the body is not valid JSON.
pub fn parse(body: &str) -> Result<Value, CaseError> {
    serde_json::from_str(body).map_err(|e| CaseError::Parse(format!("invalid JSON response: {e}")))
}

/// Whether the value has the named field.
#[must_use]
pub fn has(value: &Value, field: &str) -> bool {
    value.get(field).is_some()
}

/// The named field rendered as a string.
///
/// # Errors
///
/// Returns `CaseError::Parse` if the field is absent.
pub fn field_str(value: &Value, field: &str) -> Result<String, CaseError> {
    match value.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
        None => Err(CaseError::Parse(format!(
            "field '{field}' missing from response"
        ))),
    }
}
