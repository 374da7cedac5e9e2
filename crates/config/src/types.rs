//! Configuration type definitions for the Splunk search runner.
//!
//! Responsibilities:
//! - Define the validated `[splunk]` and `[logging]` settings.
//! - Define the negotiated result encoding (`OutputMode`).
//!
//! Does NOT handle:
//! - Reading or parsing the TOML file (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - The API token is a `secrecy::SecretString` and never appears in `Debug` output.
//! - Values in these types have already passed validation.

mod logging;
mod output_mode;
mod splunk;

pub use logging::LoggingConfig;
pub use output_mode::OutputMode;
pub use splunk::SplunkConfig;

/// Fully validated configuration for one run.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Connection, search and output settings.
    pub splunk: SplunkConfig,
    /// Log destination and level.
    pub logging: LoggingConfig,
}
