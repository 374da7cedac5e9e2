//! splunk-test-connection - check that the configured endpoint answers.
//!
//! Responsibilities:
//! - Load the same config file as `splunk-search`.
//! - Probe the jobs endpoint once and print the report to stdout.
//!
//! Does NOT handle:
//! - Creating jobs or writing output files.

use clap::Parser;
use splunk_search_cli::args::TestConnectionCli;
use splunk_search_cli::connectivity::test_connection;
use splunk_search_cli::{ExitCode, logging};
use splunk_search_config::ConfigLoader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let cli = TestConnectionCli::parse();
    let _logging = logging::init_stderr_logging();

    let config = match ConfigLoader::new().with_config_path(cli.config).load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::GeneralError.into();
        }
    };

    let report = test_connection(&config.splunk).await;
    for line in report.lines() {
        println!("{}", line);
    }

    if report.is_success() {
        ExitCode::Success.into()
    } else {
        ExitCode::GeneralError.into()
    }
}
