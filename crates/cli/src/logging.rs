//! Logging setup for both binaries.
//!
//! Responsibilities:
//! - Map the configured `log_level` onto a tracing filter.
//! - Build a daily-rolling file subscriber for `splunk-search` and a stderr
//!   subscriber for `splunk-test-connection`.
//! - Install the subscriber as the default for the current scope only.
//!
//! Does NOT handle:
//! - Removing old log files.
//!
//! Invariants:
//! - `RUST_LOG`, when set and valid, overrides the configured level.
//! - The returned guard must outlive every log call of the run; dropping it
//!   flushes the file writer and uninstalls the subscriber.

use std::fs;

use anyhow::{Context, Result};
use splunk_search_config::LoggingConfig;
use splunk_search_config::constants::{LOG_FILE_PREFIX, LOG_FILE_SUFFIX};
use tracing::level_filters::LevelFilter;
use tracing::subscriber::DefaultGuard;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Keeps the run's subscriber installed and its file writer alive.
#[must_use = "logging stops when the guard is dropped"]
pub struct LoggingGuard {
    _default: DefaultGuard,
    _worker: Option<WorkerGuard>,
}

/// Translate a configured level name into a filter.
///
/// Accepts `DEBUG`, `INFO`, `WARNING`/`WARN`, `ERROR` and `CRITICAL` in any
/// case. Anything else falls back to INFO.
pub fn level_filter(level: &str) -> LevelFilter {
    match level.trim().to_ascii_uppercase().as_str() {
        "TRACE" => LevelFilter::TRACE,
        "DEBUG" => LevelFilter::DEBUG,
        "INFO" => LevelFilter::INFO,
        "WARNING" | "WARN" => LevelFilter::WARN,
        "ERROR" | "CRITICAL" => LevelFilter::ERROR,
        _ => LevelFilter::INFO,
    }
}

fn env_filter(default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy()
}

/// Route this run's logs to `<log_dir>/splunk_search.<date>.log`.
///
/// Creates `log_dir` if needed.
pub fn init_file_logging(config: &LoggingConfig) -> Result<LoggingGuard> {
    fs::create_dir_all(&config.log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            config.log_dir.display()
        )
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .build(&config.log_dir)
        .with_context(|| {
            format!(
                "Failed to open log file in {}",
                config.log_dir.display()
            )
        })?;
    let (writer, worker) = tracing_appender::non_blocking(appender);

    let subscriber = tracing_subscriber::registry()
        .with(env_filter(level_filter(&config.log_level)))
        .with(fmt::layer().with_writer(writer).with_ansi(false));

    Ok(LoggingGuard {
        _default: tracing::subscriber::set_default(subscriber),
        _worker: Some(worker),
    })
}

/// Route logs to stderr at WARN unless `RUST_LOG` says otherwise.
pub fn init_stderr_logging() -> LoggingGuard {
    let subscriber = tracing_subscriber::registry()
        .with(env_filter(LevelFilter::WARN))
        .with(fmt::layer().with_writer(std::io::stderr));

    LoggingGuard {
        _default: tracing::subscriber::set_default(subscriber),
        _worker: None,
    }
}
