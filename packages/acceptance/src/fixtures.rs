//! Canonical test data shared by every feature.
//!
//! One table replaces the per-file fixture names: each entity has a valid
//! and an invalid variant selected by [`Validity`].

use kbase_client::{Credentials, NewOrganization, NewTeam, NewUser};

use crate::params::Validity;

/// Identifier meaning "assume this entity does not exist; do not create it".
pub const SENTINEL_ABSENT: &str = "fake";

pub const PASSWORD: &str = "testpassword";
pub const FIRST_NAME: &str = "Jack";
pub const LAST_NAME: &str = "Gore";

/// Username registered by the signup scenario.
pub const SIGNUP_USERNAME: &str = "Test";
/// Shorter than the service's four character minimum.
pub const SHORT_USERNAME: &str = "a";

/// Account the session scenarios register and log in with.
pub const SESSION_USERNAME: &str = "SessionsTest";
/// Never registered, so logging in with it fails.
pub const UNKNOWN_USERNAME: &str = "Invalid";

pub const ORGANIZATION_NAME: &str = "TestOrganization";
pub const TEAM_NAME: &str = "TestTeam";

/// Whether a retrieval step should create the entity before fetching it.
pub fn should_precreate(identifier: &str) -> bool {
    identifier != SENTINEL_ABSENT
}

pub fn user_named(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: PASSWORD.to_string(),
        first_name: FIRST_NAME.to_string(),
        last_name: LAST_NAME.to_string(),
    }
}

/// Signup payload: `Test` when valid, a one-letter username otherwise.
pub fn signup_user(validity: Validity) -> NewUser {
    user_named(validity.pick(SIGNUP_USERNAME, SHORT_USERNAME))
}

/// The account used by session scenarios.
pub fn session_user() -> NewUser {
    user_named(SESSION_USERNAME)
}

/// Login payload. Valid credentials belong to [`session_user`].
pub fn login_credentials(validity: Validity) -> Credentials {
    Credentials {
        username: validity.pick(SESSION_USERNAME, UNKNOWN_USERNAME).to_string(),
        password: PASSWORD.to_string(),
    }
}

pub fn organization_named(name: &str) -> NewOrganization {
    NewOrganization {
        name: name.to_string(),
        is_public: true,
    }
}

/// Organization payload: `TestOrganization` when valid, an empty name otherwise.
pub fn organization(validity: Validity) -> NewOrganization {
    organization_named(validity.pick(ORGANIZATION_NAME, ""))
}

pub fn team_named(name: &str, organization_name: &str) -> NewTeam {
    NewTeam {
        name: name.to_string(),
        organization: organization_name.to_string(),
        is_public: true,
    }
}

/// Team payload under `organization_name`: `TestTeam` when valid, an empty name otherwise.
pub fn team(validity: Validity, organization_name: &str) -> NewTeam {
    team_named(validity.pick(TEAM_NAME, ""), organization_name)
}
