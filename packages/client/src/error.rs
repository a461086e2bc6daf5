//! Error types for the knowledge-base client.

use thiserror::Error;

/// Failures raised while talking to the service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The host could not be reached or refused the connection.
    #[error("Could not connect to {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// No response arrived within the configured timeout.
    #[error("No response from {url} within {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    /// Any other transport failure.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response could not be interpreted.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Request body could not be encoded as JSON.
    #[error("Failed to encode request body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
