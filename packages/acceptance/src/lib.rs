//! Knowledge-base acceptance suite - scenario support for the cucumber runner.
//!
//! Step definitions under `tests/bdd/` stay thin: they parse a phrase, pick a
//! fixture, call the client, and hand the outcome to this crate to record or
//! check.
//!
//! # Example
//!
//! ```
//! use kbase_acceptance::{fixtures, Validity};
//!
//! let validity: Validity = "true".parse().unwrap();
//! assert_eq!(fixtures::organization(validity).name, "TestOrganization");
//! ```
//!
//! # Architecture
//!
//! - [`params`]: `Validity`, the valid/invalid switch feature files pass as a word
//! - [`fixtures`]: Canonical test data and the `fake` sentinel
//! - [`scenario`]: Per-scenario state and Given/When/Then lifecycle
//! - [`assertions`]: Checks used by Then steps
//! - [`stub`]: In-process stand-in for the service
//! - [`error`]: Error types and Result alias

pub mod assertions;
pub mod error;
pub mod fixtures;
pub mod params;
pub mod scenario;
pub mod stub;

pub use error::{HarnessError, Result};
pub use params::Validity;
pub use scenario::{Phase, ScenarioState};
pub use stub::StandInService;
