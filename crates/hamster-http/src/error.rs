//! Internal error types for backend HTTP operations.
//!
//! These errors stay inside `hamster-http` and are mapped to
//! [`hamster_core::ApiError`] at the port boundary.

use thiserror::Error;

/// Result type alias for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

#[derive(Debug, Error)]
pub enum HttpError {
    /// The backend answered with a non-success status.
    #[error("Request to {url} failed with status {status}: {message}")]
    Status {
        status: u16,
        /// The `error` field of the response body, or the status reason
        message: String,
        url: String,
    },

    /// The request exceeded the configured timeout.
    #[error("Request to {url} timed out")]
    Timeout { url: String },

    /// The response was well-formed JSON but not the expected shape.
    #[error("Invalid response from backend: {message}")]
    InvalidResponse { message: String },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl HttpError {
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
