//! Search job models for the Splunk search API.
//!
//! # What this module handles:
//! - Job status as reported by `GET {jobs}/{sid}`
//! - Classification of the dispatch state into terminal/non-terminal outcomes
//! - The result set returned by `GET {jobs}/{sid}/results`
//!
//! # What this module does NOT handle:
//! - Polling cadence or timeouts (see [`crate::polling`])
//! - HTTP transport (see [`crate::endpoints::search`])

use serde::Deserialize;
use serde_json::{Map, Value};

/// Search job status information.
///
/// Only the fields that drive the lifecycle are kept; Splunk returns many more.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchJobStatus {
    #[serde(
        rename = "dispatchState",
        default,
        deserialize_with = "crate::serde_helpers::string_or_null"
    )]
    pub dispatch_state: String,
    #[serde(
        rename = "isDone",
        default,
        deserialize_with = "crate::serde_helpers::bool_from_any"
    )]
    pub is_done: bool,
}

/// What a single status observation means for the polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOutcome {
    /// The job finished and its results can be fetched.
    Succeeded,
    /// The job ended in `failed` or `canceled`.
    Failed,
    /// Anything else; keep polling.
    Pending,
}

impl SearchJobStatus {
    pub fn new(dispatch_state: impl Into<String>, is_done: bool) -> Self {
        Self {
            dispatch_state: dispatch_state.into(),
            is_done,
        }
    }

    /// Classify this observation.
    ///
    /// Either `isDone` or a `done` dispatch state counts as success; Splunk does
    /// not always set both. Success is checked before failure.
    pub fn outcome(&self) -> JobOutcome {
        let state = self.dispatch_state.to_ascii_lowercase();
        if self.is_done || state == "done" {
            JobOutcome::Succeeded
        } else if state == "failed" || state == "canceled" {
            JobOutcome::Failed
        } else {
            JobOutcome::Pending
        }
    }
}

/// Results of a completed search job.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults {
    /// Rows from `output_mode=json`, in the order Splunk returned them.
    Json(Vec<Map<String, Value>>),
    /// Body from `output_mode=csv`, uninterpreted.
    Csv(String),
}

impl SearchResults {
    /// True when there are no rows (JSON) or no text (CSV).
    pub fn is_empty(&self) -> bool {
        match self {
            SearchResults::Json(rows) => rows.is_empty(),
            SearchResults::Csv(text) => text.is_empty(),
        }
    }
}
