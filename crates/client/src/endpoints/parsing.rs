//! Helpers for decoding Splunk JSON response bodies.

use serde_json::Value;

use crate::error::{ClientError, Result};

/// Parse a response body as JSON, reporting failures as protocol errors.
pub fn parse_json_body(body: &str, what: &str) -> Result<Value> {
    serde_json::from_str(body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse {what} response: {e}")))
}

/// Return `entry[0].content` from an Atom-style Splunk response.
pub fn extract_entry_content(resp: &Value) -> Result<&Value> {
    resp.get("entry")
        .and_then(|entry| entry.get(0))
        .and_then(|first| first.get("content"))
        .ok_or_else(|| ClientError::InvalidResponse("Missing entry[0].content in response".into()))
}
