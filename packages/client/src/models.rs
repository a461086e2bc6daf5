//! Request and response bodies exchanged with the service.
//!
//! Field names follow the service's JSON keys; note the hyphenated
//! `is-public`.

use serde::{Deserialize, Serialize};

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl From<&NewUser> for Credentials {
    fn from(user: &NewUser) -> Self {
        Self {
            username: user.username.clone(),
            password: user.password.clone(),
        }
    }
}

/// Body of `POST /organizations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrganization {
    pub name: String,
    #[serde(rename = "is-public")]
    pub is_public: bool,
}

/// Body of `POST /organizations/{org}/teams`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub organization: String,
    #[serde(rename = "is-public")]
    pub is_public: bool,
}

/// Body of `POST /questions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub author: i64,
    pub title: String,
    pub content: String,
}

/// Error body the service returns alongside 4xx/5xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default)]
    pub code: Option<u16>,
}

/// Body of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub sid: Option<String>,
}
