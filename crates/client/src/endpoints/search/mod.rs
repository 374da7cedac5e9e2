//! Search job endpoints.
//!
//! This module provides low-level HTTP endpoints for one search job's lifecycle.
//!
//! # What this module handles:
//! - Search job creation (with SPL normalization)
//! - Job status lookup
//! - Results retrieval in JSON or CSV
//!
//! # What this module does NOT handle:
//! - Polling until completion (see [`crate::polling`])
//! - Writing results to disk (see the CLI crate)

pub mod jobs;
pub mod types;

pub use jobs::{create_job, get_job_status, get_results};
pub use types::{OutputMode, normalize_search};
