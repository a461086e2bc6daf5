//! Configuration for reaching the knowledge-base service.

use std::time::Duration;

use url::Url;

use crate::error::{ClientError, Result};

/// Base URL used when `KBASE_BASE_URL` is not set.
///
/// Port 3001 is the service's default listening port.
pub const DEFAULT_BASE_URL: &str = "http://0.0.0.0:3001";

/// Per-request timeout in seconds used when `KBASE_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Environment variable holding the service base URL.
pub const BASE_URL_ENV: &str = "KBASE_BASE_URL";

/// Environment variable holding the per-request timeout in seconds.
pub const TIMEOUT_ENV: &str = "KBASE_TIMEOUT_SECS";

/// Connection settings shared by every request a client issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub cookie_store: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            cookie_store: true,
        }
    }
}

impl HarnessConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to the defaults; an unparseable timeout is
    /// reported instead of silently ignored.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let timeout_secs = match std::env::var(TIMEOUT_ENV) {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                ClientError::Config(format!("{TIMEOUT_ENV} must be a whole number, got '{raw}'"))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Self::new(base_url).with_timeout_secs(timeout_secs).validated()
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_cookie_store(mut self, enabled: bool) -> Self {
        self.cookie_store = enabled;
        self
    }

    /// Check the base URL parses as an absolute http(s) URL and the timeout is non-zero.
    pub fn validated(self) -> Result<Self> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", self.base_url)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(ClientError::Config("timeout must be at least one second".into()));
        }

        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Join a path onto the base URL without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
