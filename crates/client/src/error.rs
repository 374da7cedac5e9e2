//! Error types for the Splunk search job client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while running a search job.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error (connect, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Splunk.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// Response body did not have the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The job reached the `failed` or `canceled` dispatch state.
    #[error("Job {sid} failed: {state}")]
    JobFailed { sid: String, state: String },

    /// The job did not finish within the configured polling timeout.
    #[error("Job {sid} timeout: not done after {timeout:?}")]
    JobTimeout { sid: String, timeout: Duration },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Proxy URL rejected by the HTTP client. Carries the masked URL only.
    #[error("Invalid proxy URL: {0}")]
    InvalidProxy(String),

    /// The API token is missing or cannot be sent in an HTTP header.
    #[error("Invalid API token: {0}")]
    InvalidToken(String),
}

impl ClientError {
    /// Network failure or non-success HTTP status.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::ApiError { .. })
    }

    /// Response arrived but could not be interpreted.
    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::InvalidResponse(_))
    }

    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
