//! Knowledge-base client - talk to the knowledge-base service over HTTP.
//!
//! This crate is the request layer of the acceptance suite: it sends the
//! service's REST calls and hands back raw statuses and response snapshots
//! for the scenario steps to assert on.
//!
//! # Example
//!
//! ```
//! use kbase_client::HarnessConfig;
//!
//! let config = HarnessConfig::new("http://localhost:3001");
//! assert_eq!(config.endpoint("users"), "http://localhost:3001/users");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Base URL and timeout settings
//! - [`error`]: Error types and Result alias
//! - [`http`]: Single-attempt HTTP adapter
//! - [`response`]: Captured response snapshots
//! - [`models`]: JSON bodies for each resource
//! - [`api`]: One wrapper per endpoint
//! - [`cli`]: Command-line probe

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod response;

pub use api::ApiClient;
pub use config::HarnessConfig;
pub use error::{ClientError, Result};
pub use http::{HttpClient, RequestDescriptor};
pub use models::{Credentials, ErrorBody, LoginBody, NewOrganization, NewQuestion, NewTeam, NewUser};
pub use response::ResponseSnapshot;
