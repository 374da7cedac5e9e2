//! Configuration management for the Splunk search runner.
//!
//! This crate provides the types and loader for the TOML configuration file
//! that drives a single search job run: connection settings, the search
//! itself, the output target, and logging.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader};
pub use types::{LoggingConfig, OutputMode, SearchConfig, SplunkConfig};
