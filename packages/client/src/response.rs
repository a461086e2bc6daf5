//! Immutable view of an HTTP response.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// Status, headers and body of one response, captured once and never mutated.
///
/// Header names are stored lower-cased. A header that appears several times
/// (`Set-Cookie` in particular) keeps every value in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSnapshot {
    status: u16,
    headers: BTreeMap<String, Vec<String>>,
    body: Vec<u8>,
}

impl ResponseSnapshot {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// Capture a `reqwest` response, reading the body to completion.
    pub(crate) async fn capture(response: reqwest::Response) -> Result<Self> {
        let mut snapshot = Self::new(response.status().as_u16());
        // Non-UTF-8 header bytes are replaced, the status must still come through
        for (name, value) in response.headers() {
            snapshot = snapshot.with_header(
                name.as_str(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            );
        }

        snapshot.body = response.bytes().await?.to_vec();
        Ok(snapshot)
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// First value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_values(name).first().map(String::as_str)
    }

    pub fn header_values(&self, name: &str) -> &[String] {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn has_header(&self, name: &str) -> bool {
        !self.header_values(name).is_empty()
    }

    pub fn headers(&self) -> &BTreeMap<String, Vec<String>> {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            ClientError::MalformedResponse(format!(
                "status {} body is not the expected JSON: {e}",
                self.status
            ))
        })
    }
}
