//! Search job operations.
//!
//! This module provides endpoints for creating a search job, reading its
//! status, and fetching its results.
//!
//! # What this module handles:
//! - `POST {jobs}` to create a job
//! - `GET {jobs}/{sid}` for status
//! - `GET {jobs}/{sid}/results` for results
//!
//! # What this module does NOT handle:
//! - Deciding when to stop polling (see [`crate::polling`])

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use splunk_search_config::constants::{STATUS_REQUEST_TIMEOUT_SECS, SUBMIT_TIMEOUT_SECS};
use tracing::{debug, info};

use crate::auth::make_headers;
use crate::endpoints::{encode_path_segment, extract_entry_content, parse_json_body, send_request};
use crate::error::{ClientError, Result};
use crate::models::{SearchJobStatus, SearchResults};

use super::types::{OutputMode, normalize_search};

/// Create a new search job and return its sid.
///
/// The creation response is always requested as JSON, whatever encoding the
/// results will later be fetched in, so the sid can be read reliably.
pub async fn create_job(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    search: &str,
) -> Result<String> {
    let search = normalize_search(search);
    info!("Creating search job...");
    debug!(query_len = search.len(), "Submitting search");

    let form_data = [("search", search.as_str()), ("output_mode", "json")];

    let builder = client
        .post(base_url)
        .headers(make_headers(auth_token)?)
        .form(&form_data)
        .timeout(Duration::from_secs(SUBMIT_TIMEOUT_SECS));
    let response = send_request(builder, "/services/search/jobs", "POST").await?;

    let body = response.text().await?;
    let resp = parse_json_body(&body, "job creation")?;

    // Splunk can return either:
    // - `{ "sid": "<sid>" }` (common on newer versions / certain output modes)
    // - `{ "entry": [ { "content": { "sid": "<sid>" } } ] }` (older/alternate shape)
    let sid = resp
        .get("sid")
        .and_then(|v| v.as_str())
        .or_else(|| {
            resp.get("entry")?
                .get(0)?
                .get("content")?
                .get("sid")?
                .as_str()
        })
        .filter(|sid| !sid.is_empty())
        .ok_or_else(|| ClientError::InvalidResponse("Missing sid in response".to_string()))?;

    info!("Search job created. SID: {}", sid);
    Ok(sid.to_string())
}

/// Get the status of a search job.
pub async fn get_job_status(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    sid: &str,
) -> Result<SearchJobStatus> {
    debug!("Getting status for job: {}", sid);

    let url = format!("{}/{}", base_url, encode_path_segment(sid));

    let builder = client
        .get(&url)
        .headers(make_headers(auth_token)?)
        .query(&[("output_mode", "json")])
        .timeout(Duration::from_secs(STATUS_REQUEST_TIMEOUT_SECS));
    let response = send_request(builder, "/services/search/jobs/{sid}", "GET").await?;

    let body = response.text().await?;
    let resp = parse_json_body(&body, "job status")?;
    let content = extract_entry_content(&resp)?;

    serde_json::from_value(content.clone())
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse job status: {}", e)))
}

/// Get all results of a finished search job.
///
/// `count=0` asks Splunk for every row. JSON bodies yield the `results` array
/// (empty when absent); CSV bodies are returned untouched.
pub async fn get_results(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    sid: &str,
    output_mode: OutputMode,
) -> Result<SearchResults> {
    info!("Fetching results for job {}", sid);

    let url = format!("{}/{}/results", base_url, encode_path_segment(sid));

    let builder = client
        .get(&url)
        .headers(make_headers(auth_token)?)
        .query(&[("output_mode", output_mode.as_str()), ("count", "0")]);
    let response = send_request(builder, "/services/search/jobs/{sid}/results", "GET").await?;

    let body = response.text().await?;
    match output_mode {
        OutputMode::Csv => Ok(SearchResults::Csv(body)),
        OutputMode::Json => parse_json_results(&body).map(SearchResults::Json),
    }
}

fn parse_json_results(body: &str) -> Result<Vec<serde_json::Map<String, Value>>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let json = parse_json_body(body, "search results")?;
    let rows = match json.get("results") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(rows)) => rows,
        Some(other) => {
            return Err(ClientError::InvalidResponse(format!(
                "Expected results array, got {}",
                json_kind(other)
            )));
        }
    };

    rows.iter()
        .enumerate()
        .map(|(i, row)| match row {
            Value::Object(map) => Ok(map.clone()),
            other => Err(ClientError::InvalidResponse(format!(
                "Expected result row {i} to be an object, got {}",
                json_kind(other)
            ))),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
