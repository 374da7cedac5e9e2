//! The search job run: submit, poll, fetch, write.
//!
//! Responsibilities:
//! - Build one HTTP client from the `[splunk]` settings.
//! - Drive the lifecycle steps strictly in order, one attempt each.
//!
//! Does NOT handle:
//! - Logging setup or exit codes (see the `splunk-search` binary).
//!
//! Invariants:
//! - Exactly one job is created per run and its sid is never reused.
//! - Nothing is written unless the job completed and its results were fetched.

use std::path::PathBuf;

use anyhow::{Context, Result};
use splunk_search_client::{PollSettings, SearchJobClient};
use splunk_search_config::SplunkConfig;
use tracing::info;

use crate::writer::write_results;

/// Run one search job to completion and save its results.
///
/// Returns the path of the written output file.
pub async fn run(config: &SplunkConfig) -> Result<PathBuf> {
    info!(
        output_mode = %config.output_mode,
        "Starting search job run against {}",
        config.url
    );

    let client = SearchJobClient::builder()
        .from_config(config)
        .build()
        .context("Failed to build HTTP client")?;

    let sid = client
        .create_search_job(&config.search)
        .await
        .context("Failed to create search job")?;

    let settings = PollSettings::new(config.poll_interval(), config.poll_timeout());
    client
        .wait_for_job(&sid, settings)
        .await
        .with_context(|| format!("Search job {sid} did not complete"))?;

    let results = client
        .fetch_results(&sid, config.output_mode)
        .await
        .with_context(|| format!("Failed to fetch results for job {sid}"))?;
    if results.is_empty() {
        info!("Job {} returned no results", sid);
    }

    let path = write_results(
        &results,
        &config.output_file,
        config.append_date_to_output_file,
    )
    .context("Failed to write results")?;

    info!("Search completed. Results saved to {}", path.display());
    Ok(path)
}
