//! Search job lifecycle methods for [`SearchJobClient`].
//!
//! # What this module handles:
//! - Submitting a search job
//! - Reading job status and polling it to completion
//! - Retrieving search results
//!
//! # What this module does NOT handle:
//! - Low-level search endpoint HTTP calls (in [`crate::endpoints::search`])
//! - The polling state machine itself (in [`crate::polling`])

use crate::client::SearchJobClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{SearchJobStatus, SearchResults};
use crate::polling::{self, PollSettings};
use splunk_search_config::OutputMode;

impl SearchJobClient {
    /// Submit `search` as a new job and return its sid.
    ///
    /// The query is prefixed with `search ` unless it already starts with it.
    pub async fn create_search_job(&self, search: &str) -> Result<String> {
        endpoints::create_job(&self.http, &self.base_url, self.auth_token(), search).await
    }

    /// Read the current status of job `sid`.
    pub async fn get_job_status(&self, sid: &str) -> Result<SearchJobStatus> {
        endpoints::get_job_status(&self.http, &self.base_url, self.auth_token(), sid).await
    }

    /// Poll job `sid` until it succeeds, fails, or `settings.timeout` elapses.
    pub async fn wait_for_job(&self, sid: &str, settings: PollSettings) -> Result<SearchJobStatus> {
        polling::wait_for_job(self, sid, settings).await
    }

    /// Fetch every result row of job `sid` in the given encoding.
    pub async fn fetch_results(&self, sid: &str, output_mode: OutputMode) -> Result<SearchResults> {
        endpoints::get_results(
            &self.http,
            &self.base_url,
            self.auth_token(),
            sid,
            output_mode,
        )
        .await
    }
}
