//! splunk-search - run one Splunk search job and save its results.
//!
//! Responsibilities:
//! - Parse the config path argument and load the config file.
//! - Set up file logging for the run.
//! - Execute the pipeline on a single-threaded runtime and map the outcome
//!   to an exit code.
//!
//! Does NOT handle:
//! - Any job lifecycle logic (see `splunk_search_cli::pipeline`).
//!
//! Invariants:
//! - Failures are logged to the log file, not printed. stderr is used only
//!   when the config or the log file cannot be set up.

use clap::Parser;
use splunk_search_cli::args::Cli;
use splunk_search_cli::{ExitCode, logging, pipeline};
use splunk_search_config::ConfigLoader;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let config = match ConfigLoader::new().with_config_path(cli.config).load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::GeneralError.into();
        }
    };

    // Must live until the end of main so buffered log lines are flushed.
    let _logging = match logging::init_file_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {:#}", e);
            return ExitCode::GeneralError.into();
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start async runtime: {}", e);
            return ExitCode::GeneralError.into();
        }
    };

    let result = runtime.block_on(pipeline::run(&config.splunk));
    if let Err(ref e) = result {
        tracing::error!("Search job run failed: {:#}", e);
    }

    ExitCode::from_result(&result).into()
}
