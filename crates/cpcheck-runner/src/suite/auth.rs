//! Registration and login cases

use cpcheck_core::{CaseResult, CaseStatus, check};

use super::{Suite, payload};
use crate::contract::{accept, endpoint, status_in};
use crate::http::RequestSpec;
use crate::json;

pub(super) fn register_valid_user(suite: &mut Suite) -> CaseResult {
    let email = suite.unique_email("testuser");
    let resp = suite.http.execute(&RequestSpec::post_json(
        endpoint::REGISTER,
        &payload::register("Test User", &email),
    ))?;

    status_in(accept::REGISTER_VALID, resp.status, "registration with valid data")?;
    if resp.status == 200 || resp.status == 201 {
        check::that(
            resp.body.contains("User registered successfully") || resp.body.contains("message"),
            "registration response should contain a success message",
        )?;
    }
    Ok(CaseStatus::Passed)
}

pub(super) fn register_duplicate_email(suite: &mut Suite) -> CaseResult {
    // Fixed address: only truly duplicate on re-runs, and the acceptance set
    // also admits the first-run "no such user yet" outcomes.
    let resp = suite.http.execute(&RequestSpec::post_json(
        endpoint::REGISTER,
        &payload::register("Test User 2", "testuser@example.com"),
    ))?;
    status_in(accept::REGISTER_DUPLICATE, resp.status, "registering a duplicate email")?;
    Ok(CaseStatus::Passed)
}

pub(super) fn register_invalid_email(suite: &mut Suite) -> CaseResult {
    let resp = suite.http.execute(&RequestSpec::post_json(
        endpoint::REGISTER,
        &payload::register("Test User", "invalid-email"),
    ))?;
    status_in(accept::REGISTER_REJECTED, resp.status, "registering an invalid email")?;
    Ok(CaseStatus::Passed)
}

pub(super) fn login_valid_credentials(suite: &mut Suite) -> CaseResult {
    let resp = suite.http.execute(&RequestSpec::post_json(
        endpoint::LOGIN,
        &payload::login("testuser@example.com", "password123"),
    ))?;

    if resp.status == 200 {
        let value = json::parse(&resp.body)?;
        check::that(
            json::has(&value, "token"),
            "login response should contain a token",
        )?;
        let token = json::field_str(&value, "token")?;
        check::not(token.is_empty(), "token should not be empty")?;
        suite.auth_token = token;
    } else {
        // The user may not exist yet on a fresh SUT.
        status_in(accept::LOGIN_FAILURE, resp.status, "login before the user exists")?;
    }
    Ok(CaseStatus::Passed)
}

pub(super) fn login_invalid_credentials(suite: &mut Suite) -> CaseResult {
    let resp = suite.http.execute(&RequestSpec::post_json(
        endpoint::LOGIN,
        &payload::login("testuser@example.com", "wrongpassword"),
    ))?;
    check::eq(resp.status, 400, "invalid credentials should return 400")?;
    check::that(
        resp.body.contains("Invalid credentials"),
        "response should contain the invalid-credentials message",
    )?;
    Ok(CaseStatus::Passed)
}

pub(super) fn login_unknown_email(suite: &mut Suite) -> CaseResult {
    let resp = suite.http.execute(&RequestSpec::post_json(
        endpoint::LOGIN,
        &payload::login("nonexistent@example.com", "password123"),
    ))?;
    check::eq(resp.status, 400, "unknown email should return 400")?;
    Ok(CaseStatus::Passed)
}

pub(super) fn register_response_has_message(suite: &mut Suite) -> CaseResult {
    let resp = suite.http.execute(&RequestSpec::post_json(
        endpoint::REGISTER,
        &payload::register("Response Test", "responsetest@example.com"),
    ))?;
    if resp.status == 200 {
        check::that(
            resp.body.contains("message"),
            "registration response should contain a message field",
        )?;
    }
    Ok(CaseStatus::Passed)
}

pub(super) fn login_response_has_token(suite: &mut Suite) -> CaseResult {
    let resp = suite.http.execute(&RequestSpec::post_json(
        endpoint::LOGIN,
        &payload::login("testuser@example.com", "password123"),
    ))?;
    if resp.status == 200 {
        let value = json::parse(&resp.body)?;
        check::that(
            json::has(&value, "token"),
            "login response should contain a token field",
        )?;
    }
    Ok(CaseStatus::Passed)
}

pub(super) fn register_empty_email(suite: &mut Suite) -> CaseResult {
    let resp = suite.http.execute(&RequestSpec::post_json(
        endpoint::REGISTER,
        &payload::register("Test User", ""),
    ))?;
    status_in(accept::REGISTER_REJECTED, resp.status, "registering an empty email")?;
    Ok(CaseStatus::Passed)
}
