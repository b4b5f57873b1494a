//! API client error types

use domain::DomainError;
use thiserror::Error;

/// Fallback text shown when the server gave no usable message
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Errors that can occur while talking to the Trivesha backend
///
/// Transport failures and non-2xx statuses are not classified further;
/// callers decide how to surface them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request never produced a response (DNS, TLS, timeout, reset)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered 401; the session has already been cleared
    #[error("Unauthorized")]
    Unauthorized,

    /// The server answered with any other non-2xx status
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body, or the generic fallback
        message: String,
    },

    /// The response body was not valid JSON
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The request could not be built (bad multipart part, bad path segment)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The payload failed submit-time validation and was not sent
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// Session storage could not be read or written
    #[error("Session storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the server responded
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for a toast notification
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::Unauthorized => "Your session has expired. Please log in again.".to_string(),
            Self::Validation(e) => e.to_string(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Pull a human-readable message out of an error response body
///
/// Looks at `message`, then `error`, then the first entry of `errors`
/// (either a string or an object with `msg`/`message`).
pub(crate) fn extract_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<serde_json::Value>(body) else {
        return GENERIC_ERROR_MESSAGE.to_string();
    };

    let from_errors = json
        .get("errors")
        .and_then(|v| v.as_array())
        .and_then(|errors| errors.first())
        .and_then(|first| {
            first.as_str().or_else(|| {
                first
                    .get("msg")
                    .or_else(|| first.get("message"))
                    .and_then(|v| v.as_str())
            })
        });

    json.get("message")
        .and_then(|v| v.as_str())
        .or_else(|| json.get("error").and_then(|v| v.as_str()))
        .or(from_errors)
        .filter(|m| !m.trim().is_empty())
        .map_or_else(|| GENERIC_ERROR_MESSAGE.to_string(), ToString::to_string)
}
