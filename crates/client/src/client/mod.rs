//! The search job client and its API methods.
//!
//! This module provides [`SearchJobClient`], a handle on one Splunk search
//! jobs endpoint authenticated with a static API token.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `search`: Submit, poll and fetch methods
//! - `jobs`: Connectivity probe
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Proxy resolution (delegated to [`crate::proxy`])
//!
//! # Invariants
//! - The base URL is the jobs collection itself, with no trailing slash.
//! - Every request carries `Authorization: Splunk <token>`.
//! - No request is retried; a failure surfaces on the first attempt.

pub mod builder;

mod jobs;
mod search;

use secrecy::{ExposeSecret, SecretString};

use crate::error::Result;
use crate::models::SearchJobStatus;
use crate::polling::JobStatusSource;

/// Splunk search jobs REST client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use splunk_search_client::SearchJobClient;
/// use secrecy::SecretString;
///
/// let client = SearchJobClient::builder()
///     .base_url("https://splunk.example.com:8089/services/search/jobs".to_string())
///     .token(SecretString::new("my-token".to_string().into()))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct SearchJobClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) token: SecretString,
}

impl SearchJobClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SearchJobClientBuilder {
        builder::SearchJobClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn auth_token(&self) -> &str {
        self.token.expose_secret()
    }
}

impl JobStatusSource for SearchJobClient {
    async fn job_status(&self, sid: &str) -> Result<SearchJobStatus> {
        self.get_job_status(sid).await
    }
}
