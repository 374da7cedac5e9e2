//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Does NOT handle:
//! - Errors raised while talking to Splunk (see client crate).
//!
//! Invariants:
//! - All error variants include context for debugging (section, field, path).
//! - No variant ever carries the API token or other raw secret values.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to read config file at {}", .path.display())]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {}: {message}", .path.display())]
    ConfigFileParse { path: PathBuf, message: String },

    #[error("Missing [{0}] section in config")]
    MissingSection(&'static str),

    #[error("Missing required field '{field}' in [{section}] section")]
    MissingField {
        section: &'static str,
        field: &'static str,
    },

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}
