//! Data models for Splunk search job API responses.
//!
//! # Submodules
//! - `common`: error message bodies shared by all endpoints
//! - `jobs`: job status and search results
//!
//! # What this module does NOT handle:
//! - HTTP request logic (see [`crate::endpoints`])
//! - Polling decisions (see [`crate::polling`])

mod common;
mod jobs;

pub use common::{MessageType, SplunkMessage, SplunkMessages};
pub use jobs::{JobOutcome, SearchJobStatus, SearchResults};
