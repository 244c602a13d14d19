//! Error type surfaced by the HTTP gateway.
//!
//! ERROR HANDLING
//! ==============
//! Every failed request resolves to an [`ApiError`] with a `message` the UI
//! can show directly. For 401/403 responses whose body carries no message,
//! the gateway synthesizes one here so callers never have to special-case
//! an empty body.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// A failed API operation: transport failure or non-2xx response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status, when a response was received at all.
    pub status: Option<u16>,
    /// Human-readable message, always present.
    pub message: String,
}

impl ApiError {
    /// A request that never produced a response (network down, CORS, abort).
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// A response with a non-2xx status.
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Stub error for code paths that only exist in the browser build.
    pub fn unavailable() -> Self {
        Self::transport("not available on server")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({status})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

/// Shape of the server's error bodies, all fields optional.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Fallback message for statuses the session layer treats specially.
///
/// Other statuses get no synthesized text; the generic formatter in the
/// gateway covers them.
pub fn fallback_message(status: u16) -> Option<&'static str> {
    match status {
        401 => Some("Unauthenticated"),
        403 => Some("Forbidden"),
        _ => None,
    }
}

/// Resolve the message for a failed response from its (possibly absent)
/// body message, the 401/403 fallbacks, or a generic status line.
pub fn resolve_message(status: u16, body_message: Option<String>) -> String {
    body_message
        .filter(|m| !m.trim().is_empty())
        .or_else(|| fallback_message(status).map(str::to_owned))
        .unwrap_or_else(|| format!("request failed: {status}"))
}
