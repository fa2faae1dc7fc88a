//! The 43-case suite encoding the complaint service contract
//!
//! Cases are grouped the way the catalog is: structural checks on the SUT
//! source tree, registration/login behavior, the complaint endpoints,
//! status-code probes, and the bearer-token checks. Every case is a plain
//! `fn(&mut Suite) -> CaseResult` registered with its stable priority in
//! [`Suite::catalog`].

mod auth;
mod complaints;
mod status_codes;
mod structural;
mod tokens;

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use cpcheck_core::{Case, CaseError, CaseResult, Config, Registry, RegistryError};

use crate::contract::endpoint;
use crate::http::{HttpClient, RequestSpec};
use crate::json;
use crate::tree::SourceTree;

/// Shared state of one suite run.
///
/// The cached token starts empty and is filled by the first login case that
/// succeeds. Later cases read it without checking: an empty cache sends
/// `Authorization: Bearer ` and thereby exercises the unauthenticated branch
/// of the acceptance sets.
pub struct Suite {
    http: HttpClient,
    tree: SourceTree,
    auth_token: String,
    rng: SmallRng,
}

impl Suite {
    /// Build the suite from harness config.
    ///
    /// # Errors
    ///
    /// Returns `CaseError::Transport` if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, CaseError> {
        Ok(Self {
            http: HttpClient::from_config(config)?,
            tree: SourceTree::from_config(config),
            auth_token: String::new(),
            rng: SmallRng::from_entropy(),
        })
    }

    /// Cached bearer token; empty until a login case succeeds.
    #[must_use]
    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    /// One-shot unique email: `<prefix><millis><nonce>@example.com`.
    fn unique_email(&mut self, prefix: &str) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let nonce: u16 = self.rng.r#gen();
        format!("{prefix}{millis}{nonce:04x}@example.com")
    }

    /// Log in and return the token on a 200, `None` on any other status.
    fn login_for_token(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<String>, CaseError> {
        let resp = self
            .http
            .execute(&RequestSpec::post_json(
                endpoint::LOGIN,
                &payload::login(email, password),
            ))?;
        if resp.status == 200 {
            let value = json::parse(&resp.body)?;
            Ok(Some(json::field_str(&value, "token")?))
        } else {
            Ok(None)
        }
    }

    /// The full catalog, priorities 1–43.
    ///
    /// # Errors
    ///
    /// Returns an error on a priority collision; the table below keeps them
    /// unique by construction.
    pub fn catalog() -> Result<Registry<Suite>, RegistryError> {
        type Entry = (u32, &'static str, &'static str, fn(&mut Suite) -> CaseResult);

        let cases: [Entry; 43] = [
            (1, "entity_folder_exists", "Entity folder exists in the service tree", structural::entity_folder_exists),
            (2, "controller_folder_exists", "Controller folder exists in the service tree", structural::controller_folder_exists),
            (3, "service_folder_exists", "Service folder exists in the service tree", structural::service_folder_exists),
            (4, "repository_folder_exists", "Repository folder exists in the service tree", structural::repository_folder_exists),
            (5, "user_entity_file_exists", "User entity source file exists", structural::user_entity_file_exists),
            (6, "complaint_entity_file_exists", "Complaint entity source file exists", structural::complaint_entity_file_exists),
            (7, "auth_controller_file_exists", "Auth controller source file exists", structural::auth_controller_file_exists),
            (8, "complaint_controller_file_exists", "Complaint controller source file exists", structural::complaint_controller_file_exists),
            (9, "register_valid_user", "Register a new user with valid data", auth::register_valid_user),
            (10, "register_duplicate_email", "Register with an already-used email", auth::register_duplicate_email),
            (11, "register_invalid_email", "Register with a malformed email", auth::register_invalid_email),
            (12, "login_valid_credentials", "Log in with valid credentials and cache the token", auth::login_valid_credentials),
            (13, "login_invalid_credentials", "Log in with a wrong password", auth::login_invalid_credentials),
            (14, "login_unknown_email", "Log in with an email that has no account", auth::login_unknown_email),
            (15, "submit_complaint_valid", "Submit a complaint with a freshly provisioned user", complaints::submit_complaint_valid),
            (16, "submit_complaint_without_auth", "Submit a complaint with no Authorization header", complaints::submit_complaint_without_auth),
            (17, "submit_complaint_missing_fields", "Submit a complaint missing required fields", complaints::submit_complaint_missing_fields),
            (18, "list_user_complaints", "Fetch a user's complaints", complaints::list_user_complaints),
            (19, "list_user_complaints_without_auth", "Fetch a user's complaints with no Authorization header", complaints::list_user_complaints_without_auth),
            (20, "list_prioritized_complaints", "Fetch a user's prioritized complaints", complaints::list_prioritized_complaints),
            (21, "list_prioritized_complaints_without_auth", "Fetch prioritized complaints with no Authorization header", complaints::list_prioritized_complaints_without_auth),
            (22, "update_complaint_status", "Move a complaint to IN_PROGRESS", complaints::update_complaint_status),
            (23, "update_complaint_status_without_auth", "Update a complaint status with no Authorization header", complaints::update_complaint_status_without_auth),
            (24, "update_complaint_status_invalid_value", "Update a complaint to a status the service does not define", complaints::update_complaint_status_invalid_value),
            (25, "list_priority_rules", "Fetch all priority rules", complaints::list_priority_rules),
            (26, "list_priority_rules_without_auth", "Fetch priority rules with no Authorization header", complaints::list_priority_rules_without_auth),
            (27, "fetch_status_history", "Fetch a complaint's status history", complaints::fetch_status_history),
            (28, "fetch_status_history_without_auth", "Fetch status history with no Authorization header", complaints::fetch_status_history_without_auth),
            (29, "register_response_has_message", "Successful registration body carries a message field", auth::register_response_has_message),
            (30, "login_response_has_token", "Successful login body carries a token field", auth::login_response_has_token),
            (31, "submit_response_has_complaint_fields", "Successful submission body carries complaint fields", complaints::submit_response_has_complaint_fields),
            (32, "status_update_response_has_message", "Successful status update body carries a message field", complaints::status_update_response_has_message),
            (33, "rules_response_shape", "Priority rules body is an array or names a category", complaints::rules_response_shape),
            (34, "status_history_response_shape", "Status history body is an array or names a status", complaints::status_history_response_shape),
            (35, "register_empty_email", "Register with an empty email", auth::register_empty_email),
            (36, "status_code_registration", "Registration status code stays in its acceptance set", status_codes::status_code_registration),
            (37, "status_code_login", "Login status code stays in its acceptance set", status_codes::status_code_login),
            (38, "status_code_invalid_credentials", "Wrong password returns exactly 400", status_codes::status_code_invalid_credentials),
            (39, "status_code_unauthorized", "Protected endpoint without auth returns 401 or 403", status_codes::status_code_unauthorized),
            (40, "status_code_unknown_path", "Unrouted path returns 404 or 403", status_codes::status_code_unknown_path),
            (41, "token_generated_on_login", "Login produces a plausible signed token", tokens::token_generated_on_login),
            (42, "token_grants_protected_access", "A fresh token is accepted by a protected endpoint", tokens::token_grants_protected_access),
            (43, "token_required_for_protected_access", "Missing and bogus tokens are both rejected", tokens::token_required_for_protected_access),
        ];

        let mut registry = Registry::new();
        for (priority, name, description, run) in cases {
            registry.register(Case {
                priority,
                name: name.to_string(),
                description: description.to_string(),
                run,
            })?;
        }
        Ok(registry)
    }
}

/// Request bodies the suite sends.
mod payload {
    use serde_json::{Value, json};

    pub(super) fn register(name: &str, email: &str) -> Value {
        json!({"name": name, "email": email, "password": "password123"})
    }

    pub(super) fn login(email: &str, password: &str) -> Value {
        json!({"email": email, "password": password})
    }

    pub(super) fn complaint(title: &str, description: &str, category: &str) -> Value {
        json!({"title": title, "description": description, "category": category})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_43_unique_ascending_priorities() {
        let registry = Suite::catalog().unwrap();
        assert_eq!(registry.len(), 43);

        let ordered = registry.ordered();
        let priorities: Vec<u32> = ordered.iter().map(|c| c.priority).collect();
        assert_eq!(priorities, (1..=43).collect::<Vec<u32>>());

        let names: HashSet<&str> = ordered.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), 43, "case names must be unique");
    }

    #[test]
    fn catalog_sections_are_where_the_contract_puts_them() {
        let registry = Suite::catalog().unwrap();
        let ordered = registry.ordered();
        assert!(ordered[..8].iter().all(|c| c.name.contains("folder") || c.name.contains("file")));
        assert_eq!(ordered[8].name, "register_valid_user");
        assert_eq!(ordered[35].name, "status_code_registration");
        assert_eq!(ordered[40].name, "token_generated_on_login");
    }

    #[test]
    fn unique_emails_do_not_collide() {
        let mut suite = Suite::new(&Config::default()).unwrap();
        let a = suite.unique_email("testuser");
        let b = suite.unique_email("testuser");
        assert!(a.starts_with("testuser"));
        assert!(a.ends_with("@example.com"));
        assert_ne!(a, b);
    }

    #[test]
    fn token_cache_starts_empty() {
        let suite = Suite::new(&Config::default()).unwrap();
        assert_eq!(suite.auth_token(), "");
    }
}
