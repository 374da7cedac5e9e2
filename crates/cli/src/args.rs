//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the argument structure of both binaries using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not load the config file (see `splunk_search_config::ConfigLoader`).

use std::path::PathBuf;

use clap::Parser;
use splunk_search_config::constants::DEFAULT_CONFIG_PATH;

/// Arguments of `splunk-search`.
#[derive(Debug, Parser)]
#[command(name = "splunk-search")]
#[command(
    about = "Run one Splunk search job and save its results to a file",
    long_about = None
)]
#[command(version)]
#[command(after_help = "Examples:\n  splunk-search\n  splunk-search /etc/splunk-search/prod.toml\n")]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(value_name = "CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Arguments of `splunk-test-connection`.
#[derive(Debug, Parser)]
#[command(name = "splunk-test-connection")]
#[command(
    about = "Check that the configured Splunk search jobs endpoint is reachable",
    long_about = None
)]
#[command(version)]
pub struct TestConnectionCli {
    /// Path to the TOML configuration file
    #[arg(value_name = "CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}
