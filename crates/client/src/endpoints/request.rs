//! Request execution and HTTP error mapping.
//!
//! Responsibilities:
//! - Send a prepared `reqwest::RequestBuilder` exactly once.
//! - Turn non-2xx responses into [`ClientError::ApiError`], preferring Splunk's
//!   `messages` body for the error text.
//!
//! Does NOT handle:
//! - Retries of any kind; a failed request fails the run.
//! - Body parsing for successful responses (see `parsing`).

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::SplunkMessages;

/// Sends an HTTP request and checks its status.
///
/// # Arguments
///
/// * `builder` - The `reqwest::RequestBuilder` to execute
/// * `endpoint` - Endpoint label used only for debug logging
/// * `method` - HTTP method label used only for debug logging
///
/// # Errors
///
/// Returns `ClientError::HttpError` when the request never produced a response
/// (connect, TLS, timeout) and `ClientError::ApiError` for non-success statuses.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    debug!(endpoint, method, "Sending request");

    let response = builder.send().await?;
    if response.status().is_success() {
        debug!(endpoint, status = response.status().as_u16(), "Request succeeded");
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get("X-Splunk-Request-Id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Try to parse Splunk error messages for a cleaner display
    let message = match serde_json::from_str::<SplunkMessages>(&body).map(|m| m.summary()) {
        Ok(summary) if !summary.is_empty() => summary,
        _ => body,
    };

    debug!(endpoint, status, "Request failed");
    Err(ClientError::ApiError {
        status,
        url,
        message,
        request_id,
    })
}
