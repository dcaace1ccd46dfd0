//! Error types for the Dynatrace client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Dynatrace client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status returned by the environment, after retries.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// The response body was not the JSON shape the caller expected.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// A model treats this key as required and it was absent.
    #[error("Missing required field '{field}' on {model}")]
    MissingField {
        model: &'static str,
        field: &'static str,
    },

    /// A follow-up operation was invoked on an object built without a transport handle.
    #[error("{0} has no transport handle attached")]
    Detached(&'static str),

    /// The configured base URL or a derived request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A request body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Check if this transport error is worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_connect() || e.is_timeout(),
            Self::ApiError { status, .. } => Self::is_retryable_status(*status),
            _ => false,
        }
    }

    /// Check if an HTTP status code is retryable.
    ///
    /// Retryable status codes are exactly
    /// [`RETRY_STATUS_CODES`](dynatrace_config::constants::RETRY_STATUS_CODES):
    /// 429 plus the transient 5xx family (500, 502, 503, 504).
    pub fn is_retryable_status(status: u16) -> bool {
        dynatrace_config::constants::RETRY_STATUS_CODES.contains(&status)
    }

    /// HTTP status carried by this error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the environment reported the resource as absent.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
