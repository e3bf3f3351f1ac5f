//! The `{success, data, message}` response envelope and HTTP outcome mapping.
//!
//! ERROR HANDLING
//! ==============
//! Every backend call funnels through [`interpret`], which separates the four
//! fetch-layer failure kinds (transport, non-2xx status, `success=false`,
//! undecodable body) so views only ever see one `FetchError` value. A
//! successful envelope whose collection is empty is *not* an error.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Fallback shown when the backend rejects a request without a message.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Backend response wrapper used by every endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error returned by the data fetcher.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The envelope reported `success: false`.
    #[error("{0}")]
    Rejected(String),
    /// The body was not the expected envelope shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status for [`FetchError::Status`], `None` otherwise.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` when the backend refused the bearer credential.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

fn status_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

fn non_empty(message: Option<String>) -> Option<String> {
    message.filter(|m| !m.trim().is_empty())
}

impl<T> Envelope<T> {
    /// Collapse the envelope into its payload or a [`FetchError`].
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Rejected`] when `success` is false, or
    /// [`FetchError::Decode`] when a successful envelope has no `data`.
    pub fn into_result(self) -> Result<T, FetchError> {
        if !self.success {
            let message = non_empty(self.message).unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned());
            return Err(FetchError::Rejected(message));
        }
        self.data
            .ok_or_else(|| FetchError::Decode("response missing data".to_owned()))
    }
}

/// Map an HTTP status and raw body to the decoded envelope payload.
///
/// # Errors
///
/// Returns [`FetchError::Status`] for non-2xx responses (carrying the body's
/// `message` when one is present), [`FetchError::Decode`] for malformed
/// bodies, and [`FetchError::Rejected`] for `success: false` envelopes.
pub fn interpret<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, FetchError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<Envelope<serde_json::Value>>(body)
            .ok()
            .and_then(|envelope| non_empty(envelope.message))
            .unwrap_or_else(|| status_failed_message(status));
        return Err(FetchError::Status { status, message });
    }

    // Decode the wrapper loosely first so a rejected envelope carrying an
    // unexpected `data` shape still reports its message.
    let envelope: Envelope<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    let data = envelope.into_result()?;
    serde_json::from_value(data).map_err(|e| FetchError::Decode(e.to_string()))
}
