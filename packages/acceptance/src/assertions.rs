//! Checks run by Then steps.
//!
//! Each check returns [`HarnessError::Assertion`] with both the expected and
//! the observed value so a failed scenario reports the mismatch.

use kbase_client::{ErrorBody, ResponseSnapshot};

use crate::error::{HarnessError, Result};

/// Exact status-code equality.
pub fn expect_status(expected: u16, actual: u16) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(HarnessError::assertion("status code", expected, actual))
    }
}

pub fn expect_success(response: &ResponseSnapshot) -> Result<()> {
    if response.is_success() {
        Ok(())
    } else {
        Err(HarnessError::assertion(
            "status code",
            "a 2xx status",
            describe(response),
        ))
    }
}

/// A `Set-Cookie` header is present and its value is a non-empty string.
pub fn expect_cookie_header(response: &ResponseSnapshot) -> Result<()> {
    match response.header("set-cookie") {
        None => Err(HarnessError::assertion(
            "Set-Cookie header",
            "a header",
            "no header",
        )),
        Some("") => Err(HarnessError::assertion(
            "Set-Cookie header",
            "a non-empty value",
            "an empty value",
        )),
        Some(_) => Ok(()),
    }
}

/// The body is a JSON object with a top-level `field`.
pub fn expect_json_field(response: &ResponseSnapshot, field: &str) -> Result<()> {
    let body: serde_json::Value = response.json()?;
    match body.get(field) {
        Some(_) => Ok(()),
        None => Err(HarnessError::assertion(
            format!("response field '{field}'"),
            "present",
            format!("absent in {body}"),
        )),
    }
}

/// Status plus the service's error message when it sent one.
fn describe(response: &ResponseSnapshot) -> String {
    match response.json::<ErrorBody>() {
        Ok(error) => format!("{} ({})", response.status(), error.message),
        Err(_) => response.status().to_string(),
    }
}
