//! Behavioral contract of the complaint service
//!
//! The SUT is a black box; for every endpoint invocation the suite encodes an
//! acceptance set — the status codes considered non-buggy. The sets tolerate
//! several plausible server behaviors (e.g. 403 where 401 would be the
//! semantically correct code) and must not be tightened without an
//! authoritative SUT specification. A case fails iff the observed code is
//! outside its set; bodies are only asserted on the designated success code.

use cpcheck_core::CaseError;

/// Tokens shorter than this are not plausible signed tokens.
pub const MIN_TOKEN_LEN: usize = 20;

/// Endpoint paths, relative to the configured base URL.
pub mod endpoint {
    pub const REGISTER: &str = "/auth/register";
    pub const LOGIN: &str = "/auth/login";
    pub const RULES_ALL: &str = "/rules/all";
    pub const UNKNOWN: &str = "/nonexistent/endpoint";

    #[must_use]
    pub fn submit(user_id: u32) -> String {
        format!("/complaints/submit/{user_id}")
    }

    #[must_use]
    pub fn user_complaints(user_id: u32) -> String {
        format!("/complaints/user/{user_id}")
    }

    #[must_use]
    pub fn prioritized(user_id: u32) -> String {
        format!("/complaints/prioritized/{user_id}")
    }

    #[must_use]
    pub fn status_update(complaint_id: u32, new_status: &str) -> String {
        format!("/complaints/status/{complaint_id}?newStatus={new_status}")
    }

    #[must_use]
    pub fn status_history(complaint_id: u32) -> String {
        format!("/status/history/{complaint_id}")
    }
}

/// Acceptance sets, one per endpoint invocation class.
pub mod accept {
    /// Registration with a well-formed body.
    pub const REGISTER_VALID: &[u16] = &[200, 201, 400, 403];
    /// Registration reusing an existing email.
    pub const REGISTER_DUPLICATE: &[u16] = &[400, 403, 409];
    /// Registration with an invalid or empty email.
    pub const REGISTER_REJECTED: &[u16] = &[400, 403, 500];
    /// Any login attempt with a well-formed body.
    pub const LOGIN_ATTEMPT: &[u16] = &[200, 400, 401];
    /// Login that did not produce a session (user may not exist yet).
    pub const LOGIN_FAILURE: &[u16] = &[400, 401];
    /// Complaint submission carrying a bearer token.
    pub const SUBMIT_AUTHED: &[u16] = &[200, 401, 403, 404];
    /// Complaint submission with required fields missing.
    pub const SUBMIT_INCOMPLETE: &[u16] = &[400, 401, 403];
    /// Any protected endpoint hit without (or with a rejected) token.
    pub const NO_AUTH: &[u16] = &[401, 403];
    /// Authenticated reads of complaint collections.
    pub const FETCH_AUTHED: &[u16] = &[200, 401, 403, 404];
    /// Status update, valid or invalid target status alike.
    pub const STATUS_UPDATE: &[u16] = &[200, 400, 401, 403, 404];
    /// Authenticated read of the priority rules.
    pub const RULES_AUTHED: &[u16] = &[200, 401, 403];
    /// Authenticated read of a complaint's status history.
    pub const HISTORY_AUTHED: &[u16] = &[200, 400, 401, 403, 404];
    /// Non-200 branch of the history shape probe.
    pub const HISTORY_FALLBACK: &[u16] = &[401, 403, 404];
    /// Requests to paths the service does not route.
    pub const UNKNOWN_PATH: &[u16] = &[404, 403];
}

/// Assert membership of `status` in the acceptance set.
///
/// # Errors
///
/// Returns `CaseError::Assertion` when the status is outside the set.
pub fn status_in(set: &[u16], status: u16, what: &str) -> Result<(), CaseError> {
    cpcheck_core::check::that(
        set.contains(&status),
        format!("{what} should return one of {set:?}, got {status}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_passes_and_misses_fail() {
        for &code in accept::REGISTER_VALID {
            assert!(status_in(accept::REGISTER_VALID, code, "registration").is_ok());
        }
        let err = status_in(accept::REGISTER_VALID, 500, "registration").unwrap_err();
        assert_eq!(
            err.to_string(),
            "registration should return one of [200, 201, 400, 403], got 500"
        );
    }

    #[test]
    fn no_auth_set_is_401_or_403_only() {
        assert!(status_in(accept::NO_AUTH, 401, "x").is_ok());
        assert!(status_in(accept::NO_AUTH, 403, "x").is_ok());
        assert!(status_in(accept::NO_AUTH, 200, "x").is_err());
        assert!(status_in(accept::NO_AUTH, 404, "x").is_err());
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(endpoint::submit(1), "/complaints/submit/1");
        assert_eq!(endpoint::user_complaints(7), "/complaints/user/7");
        assert_eq!(
            endpoint::status_update(1, "RESOLVED"),
            "/complaints/status/1?newStatus=RESOLVED"
        );
        assert_eq!(endpoint::status_history(3), "/status/history/3");
    }

    #[test]
    fn sets_match_the_recorded_contract() {
        assert_eq!(accept::REGISTER_DUPLICATE, &[400, 403, 409]);
        assert_eq!(accept::REGISTER_REJECTED, &[400, 403, 500]);
        assert_eq!(accept::LOGIN_ATTEMPT, &[200, 400, 401]);
        assert_eq!(accept::STATUS_UPDATE, &[200, 400, 401, 403, 404]);
        assert_eq!(accept::UNKNOWN_PATH, &[404, 403]);
    }
}
