//! Status-code probes: one per documented class

use cpcheck_core::{CaseResult, CaseStatus, check};

use super::{Suite, payload};
use crate::contract::{accept, endpoint, status_in};
use crate::http::RequestSpec;

pub(super) fn status_code_registration(suite: &mut Suite) -> CaseResult {
    let email = suite.unique_email("statustest");
    let resp = suite.http.execute(&RequestSpec::post_json(
        endpoint::REGISTER,
        &payload::register("Status Test", &email),
    ))?;
    status_in(accept::REGISTER_VALID, resp.status, "registration")?;
    Ok(CaseStatus::Passed)
}

pub(super) fn status_code_login(suite: &mut Suite) -> CaseResult {
    let resp = suite.http.execute(&RequestSpec::post_json(
        endpoint::LOGIN,
        &payload::login("testuser@example.com", "password123"),
    ))?;
    status_in(accept::LOGIN_ATTEMPT, resp.status, "login")?;
    Ok(CaseStatus::Passed)
}

pub(super) fn status_code_invalid_credentials(suite: &mut Suite) -> CaseResult {
    let resp = suite.http.execute(&RequestSpec::post_json(
        endpoint::LOGIN,
        &payload::login("testuser@example.com", "wrongpassword"),
    ))?;
    check::eq(resp.status, 400, "invalid credentials should return 400")?;
    Ok(CaseStatus::Passed)
}

pub(super) fn status_code_unauthorized(suite: &mut Suite) -> CaseResult {
    let resp = suite.http.execute(&RequestSpec::get(endpoint::user_complaints(1)))?;
    status_in(accept::NO_AUTH, resp.status, "unauthorized access")?;
    Ok(CaseStatus::Passed)
}

pub(super) fn status_code_unknown_path(suite: &mut Suite) -> CaseResult {
    let resp = suite.http.execute(&RequestSpec::get(endpoint::UNKNOWN))?;
    status_in(accept::UNKNOWN_PATH, resp.status, "an unrouted path")?;
    Ok(CaseStatus::Passed)
}
