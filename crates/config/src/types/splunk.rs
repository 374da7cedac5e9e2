//! Connection, search and output settings from the `[splunk]` section.
//!
//! Responsibilities:
//! - Hold the validated settings for one search job run.
//! - Expose poll timing as `Duration`s.
//!
//! Does NOT handle:
//! - Validation (see `loader` module).
//! - Proxy resolution against the environment (see client crate).

use std::time::Duration;

use secrecy::SecretString;

use super::OutputMode;

/// Settings for submitting, polling, fetching and writing one search job.
#[derive(Debug, Clone)]
pub struct SplunkConfig {
    /// Search jobs endpoint, e.g. `https://splunk:8089/services/search/jobs`.
    /// Always stored without a trailing slash.
    pub url: String,
    /// API token sent as `Authorization: Splunk <token>`.
    pub token: SecretString,
    /// SPL search text as configured (normalized at submission time).
    pub search: String,
    /// Result encoding requested from the results endpoint.
    pub output_mode: OutputMode,
    /// Output path as configured; may start with `~`.
    pub output_file: String,
    /// Whether to verify TLS certificates.
    pub verify_ssl: bool,
    /// Explicit proxy URL; empty means "consult the environment".
    pub proxy: String,
    /// Whether to stamp the run date into the output file name.
    pub append_date_to_output_file: bool,
    /// Seconds between job status polls.
    pub poll_interval_seconds: u64,
    /// Seconds to wait for job completion before giving up.
    pub poll_timeout_seconds: u64,
}

impl SplunkConfig {
    /// Interval between job status polls.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }

    /// Overall job completion timeout.
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.poll_timeout_seconds)
    }
}
