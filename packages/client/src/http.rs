//! HTTP client adapter: the single request/response boundary to the service.
//!
//! Every request is attempted exactly once. Connection and timeout failures
//! are reported as distinct errors so a failing scenario says why.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::Serialize;

use crate::config::HarnessConfig;
use crate::error::{ClientError, Result};
use crate::response::ResponseSnapshot;

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("kbase-client/", env!("CARGO_PKG_VERSION"));

/// What to send: method, absolute URL and an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

impl RequestDescriptor {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            body: None,
        }
    }

    pub fn post(url: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            body: Some(body),
        }
    }

    /// Build a POST descriptor from any serializable payload.
    pub fn post_json<T: Serialize>(url: impl Into<String>, payload: &T) -> Result<Self> {
        Ok(Self::post(url, serde_json::to_value(payload)?))
    }

    /// An empty POST, for endpoints that act on the session alone.
    pub fn post_empty(url: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            body: None,
        }
    }
}

/// Thin wrapper around a configured `reqwest::Client`.
///
/// With the cookie store enabled, cookies set by one response are sent on
/// later requests from the same client, so one client per scenario keeps
/// sessions from leaking between scenarios.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    timeout_secs: u64,
}

impl HttpClient {
    pub fn new(config: &HarnessConfig) -> Result<Self> {
        let inner = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.timeout())
            .user_agent(USER_AGENT)
            .cookie_store(config.cookie_store)
            .build()?;

        Ok(Self {
            inner,
            timeout_secs: config.timeout_secs,
        })
    }

    /// POST `json_body` to `url` with `Content-Type: application/json`.
    pub async fn send_post(&self, url: &str, json_body: &str) -> Result<ResponseSnapshot> {
        let request = self
            .inner
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(json_body.to_string());
        self.execute(url, request).await
    }

    pub async fn send_get(&self, url: &str) -> Result<ResponseSnapshot> {
        self.execute(url, self.inner.get(url)).await
    }

    /// Send a descriptor. A present body is encoded as JSON.
    pub async fn send(&self, descriptor: &RequestDescriptor) -> Result<ResponseSnapshot> {
        match (&descriptor.method, &descriptor.body) {
            (method, Some(body)) if *method == Method::POST => {
                let encoded = serde_json::to_string(body)?;
                self.send_post(&descriptor.url, &encoded).await
            }
            (method, None) if *method == Method::GET => self.send_get(&descriptor.url).await,
            (method, body) => {
                let mut request = self.inner.request(method.clone(), &descriptor.url);
                if let Some(body) = body {
                    request = request
                        .header(CONTENT_TYPE, "application/json")
                        .body(serde_json::to_string(body)?);
                }
                self.execute(&descriptor.url, request).await
            }
        }
    }

    async fn execute(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<ResponseSnapshot> {
        tracing::debug!(url, "Sending request");

        let response = request.send().await.map_err(|e| self.classify(url, e))?;
        let snapshot = ResponseSnapshot::capture(response)
            .await
            .map_err(|e| match e {
                ClientError::Http(inner) => self.classify(url, inner),
                other => other,
            })?;

        tracing::debug!(url, status = snapshot.status(), "Received response");
        Ok(snapshot)
    }

    fn classify(&self, url: &str, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            tracing::warn!(url, timeout_secs = self.timeout_secs, "Request timed out");
            ClientError::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout_secs,
            }
        } else if error.is_connect() {
            tracing::warn!(url, error = %error, "Connection failed");
            ClientError::Connection {
                url: url.to_string(),
                source: error,
            }
        } else {
            ClientError::Http(error)
        }
    }
}
