//! Splunk search job lifecycle client.
//!
//! This crate submits a single search job to the Splunk search jobs REST
//! endpoint, polls it until it reaches a terminal state, and fetches its
//! results as JSON rows or raw CSV text. It also resolves which proxy (if any)
//! the HTTP client should use and masks proxy credentials for display.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod polling;
pub mod proxy;
mod serde_helpers;
#[cfg(test)]
mod test_support;

pub use auth::{AUTH_SCHEME, make_headers};
pub use client::SearchJobClient;
pub use client::builder::SearchJobClientBuilder;
pub use endpoints::search::normalize_search;
pub use error::{ClientError, Result};
pub use models::{JobOutcome, SearchJobStatus, SearchResults};
pub use polling::{JobStatusSource, PollSettings, wait_for_job};
pub use proxy::{ProxySettings, ProxySource, mask_proxy_url, resolve_proxies};
pub use splunk_search_config::OutputMode;
