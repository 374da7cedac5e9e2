//! Job listing endpoint, used as a read-only connectivity probe.

use std::time::Duration;

use reqwest::Client;
use splunk_search_config::constants::PROBE_TIMEOUT_SECS;
use tracing::debug;

use crate::auth::make_headers;
use crate::endpoints::{parse_json_body, send_request};
use crate::error::Result;

/// List up to `count` jobs and return how many entries came back.
pub async fn list_jobs(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    count: usize,
) -> Result<usize> {
    debug!("Listing up to {} jobs", count);

    let count = count.to_string();
    let builder = client
        .get(base_url)
        .headers(make_headers(auth_token)?)
        .query(&[("output_mode", "json"), ("count", count.as_str())])
        .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS));
    let response = send_request(builder, "/services/search/jobs", "GET").await?;

    let body = response.text().await?;
    let resp = parse_json_body(&body, "job listing")?;

    Ok(resp
        .get("entry")
        .and_then(|e| e.as_array())
        .map(|entries| entries.len())
        .unwrap_or(0))
}
