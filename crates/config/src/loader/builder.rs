//! Config loader implementation.
//!
//! Responsibilities:
//! - Resolve the config file path (CLI value or `config.toml`).
//! - Turn the raw TOML shape into a validated [`SearchConfig`].
//!
//! Does NOT handle:
//! - Logging initialization (the log settings are consumed by the CLI).
//!
//! Invariants:
//! - `url` is an absolute http(s) URL with a host, stored without trailing slashes.
//! - `poll_interval_seconds` is at least 1; `poll_timeout_seconds` is non-negative.

use std::path::PathBuf;

use secrecy::SecretString;

use crate::constants::{
    DEFAULT_CONFIG_PATH, DEFAULT_LOG_DIR, DEFAULT_LOG_LEVEL, DEFAULT_POLL_INTERVAL_SECS,
    DEFAULT_POLL_TIMEOUT_SECS, LOGGING_SECTION, SPLUNK_SECTION,
};
use crate::types::{LoggingConfig, OutputMode, SearchConfig, SplunkConfig};

use super::error::ConfigError;
use super::raw::{RawConfig, RawLogging, RawSplunk};

/// Loads a [`SearchConfig`] from a TOML file.
///
/// # Example
///
/// ```rust,ignore
/// use splunk_search_config::ConfigLoader;
///
/// let config = ConfigLoader::new()
///     .with_config_path("/etc/splunk-search/config.toml".into())
///     .load()?;
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }
}

impl ConfigLoader {
    /// Create a loader pointed at `config.toml` in the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific config file. Blank paths are ignored.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        if !path.as_os_str().to_string_lossy().trim().is_empty() {
            self.config_path = path;
        }
        self
    }

    /// Read, parse and validate the config file.
    pub fn load(&self) -> Result<SearchConfig, ConfigError> {
        let path = &self.config_path;
        if !path.is_file() {
            return Err(ConfigError::ConfigFileNotFound(path.clone()));
        }

        let contents =
            std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
                path: path.clone(),
                source,
            })?;

        let raw: RawConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ConfigFileParse {
                path: path.clone(),
                message: e.message().to_string(),
            })?;

        build(raw)
    }

    /// Parse and validate config text that did not come from a file.
    pub fn load_from_str(contents: &str) -> Result<SearchConfig, ConfigError> {
        let raw: RawConfig = toml::from_str(contents).map_err(|e| ConfigError::ConfigFileParse {
            path: PathBuf::from("<inline>"),
            message: e.message().to_string(),
        })?;
        build(raw)
    }
}

fn build(raw: RawConfig) -> Result<SearchConfig, ConfigError> {
    let splunk = raw
        .splunk
        .ok_or(ConfigError::MissingSection(SPLUNK_SECTION))?;
    let logging = raw
        .logging
        .ok_or(ConfigError::MissingSection(LOGGING_SECTION))?;

    Ok(SearchConfig {
        splunk: build_splunk(splunk)?,
        logging: build_logging(logging),
    })
}

fn build_splunk(raw: RawSplunk) -> Result<SplunkConfig, ConfigError> {
    let url = required(raw.url, "url")?;
    let url = validate_and_normalize_url(&url)?;

    let token = SecretString::new(required(raw.token, "token")?.into());

    let search = required(raw.search, "search")?;
    let output_file = required(raw.output_file, "output_file")?;

    let output_mode = match raw.output_mode {
        Some(mode) => mode
            .parse::<OutputMode>()
            .map_err(|message| ConfigError::InvalidValue {
                var: "output_mode".into(),
                message,
            })?,
        None => OutputMode::default(),
    };

    let poll_interval_seconds = non_negative(
        raw.poll_interval_seconds,
        "poll_interval_seconds",
        DEFAULT_POLL_INTERVAL_SECS,
    )?;
    if poll_interval_seconds == 0 {
        return Err(ConfigError::InvalidValue {
            var: "poll_interval_seconds".into(),
            message: "must be at least 1".into(),
        });
    }
    let poll_timeout_seconds = non_negative(
        raw.poll_timeout_seconds,
        "poll_timeout_seconds",
        DEFAULT_POLL_TIMEOUT_SECS,
    )?;

    let verify_ssl = raw.verify_ssl.unwrap_or(true);

    Ok(SplunkConfig {
        url,
        token,
        search,
        output_mode,
        output_file,
        verify_ssl,
        proxy: raw.proxy.unwrap_or_default().trim().to_string(),
        append_date_to_output_file: raw.append_date_to_output_file.unwrap_or(false),
        poll_interval_seconds,
        poll_timeout_seconds,
    })
}

fn build_logging(raw: RawLogging) -> LoggingConfig {
    LoggingConfig {
        log_dir: PathBuf::from(
            raw.log_dir
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_DIR.to_string()),
        ),
        log_level: raw
            .log_level
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ConfigError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingField {
            section: SPLUNK_SECTION,
            field,
        })
}

fn non_negative(value: Option<i64>, var: &str, default: u64) -> Result<u64, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => u64::try_from(v).map_err(|_| ConfigError::InvalidValue {
            var: var.into(),
            message: format!("must not be negative, got {v}"),
        }),
    }
}

/// Validates and normalizes the search jobs endpoint URL.
///
/// Validation rules:
/// - Trim surrounding whitespace
/// - Treat blank as missing
/// - Parse as an absolute URL
/// - Require scheme is http or https
/// - Require host is present
/// - Normalize by stripping trailing slashes
fn validate_and_normalize_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://localhost:8089/services/search/jobs): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "url".into(),
            message: "host is required".into(),
        });
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
