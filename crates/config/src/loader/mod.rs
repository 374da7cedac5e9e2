//! Configuration loader for TOML config files.
//!
//! Responsibilities:
//! - Read the config file and parse it as TOML.
//! - Require the `[splunk]` and `[logging]` sections and the mandatory fields.
//! - Apply defaults and validate values into a [`SearchConfig`].
//!
//! Does NOT handle:
//! - Environment-derived proxy settings (resolved by the client crate at run time).
//! - Creating the log directory (done by the CLI logging setup).
//!
//! Invariants / Assumptions:
//! - Unknown keys are ignored so older/newer config files still load.
//! - A blank required string is treated the same as a missing one.

mod builder;
mod error;
mod raw;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use error::ConfigError;
