//! Serde shapes of the config file before validation.
//!
//! Every field is optional here so that missing sections and fields can be
//! reported as [`ConfigError`](super::ConfigError) variants naming exactly what
//! is absent, rather than as a generic parse failure.

use serde::Deserialize;

#[derive(Default, Deserialize)]
pub(super) struct RawConfig {
    pub splunk: Option<RawSplunk>,
    pub logging: Option<RawLogging>,
}

/// Not `Debug`: the token is still a plain string at this stage.
#[derive(Default, Deserialize)]
pub(super) struct RawSplunk {
    pub url: Option<String>,
    pub token: Option<String>,
    pub search: Option<String>,
    pub output_mode: Option<String>,
    pub output_file: Option<String>,
    pub verify_ssl: Option<bool>,
    pub proxy: Option<String>,
    pub append_date_to_output_file: Option<bool>,
    pub poll_interval_seconds: Option<i64>,
    pub poll_timeout_seconds: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct RawLogging {
    pub log_dir: Option<String>,
    pub log_level: Option<String>,
}
