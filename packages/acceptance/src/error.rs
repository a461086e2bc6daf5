//! Error types for scenario orchestration.

use kbase_client::ClientError;
use thiserror::Error;

use crate::scenario::Phase;

/// Scenario-level failures.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The request layer failed (connection, timeout, malformed response).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// An observed value did not match the expected one.
    #[error("Assertion failed for {what}: expected {expected}, got {actual}")]
    Assertion {
        what: String,
        expected: String,
        actual: String,
    },

    /// A step read scenario state that no earlier step recorded.
    #[error("No {0} recorded yet; an earlier step must set it")]
    MissingState(&'static str),

    /// Steps ran in an order the scenario lifecycle does not allow.
    #[error("Cannot move from {from} to {to}")]
    PhaseViolation { from: Phase, to: Phase },
}

impl HarnessError {
    pub fn assertion(
        what: impl Into<String>,
        expected: impl ToString,
        actual: impl ToString,
    ) -> Self {
        Self::Assertion {
            what: what.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Result type alias for scenario operations.
pub type Result<T> = std::result::Result<T, HarnessError>;
