//! Runner for a single Splunk search job.
//!
//! Responsibilities:
//! - Wire the config, client and writer into one sequential run.
//! - Own logging setup and process exit codes for both binaries.
//!
//! Does NOT handle:
//! - HTTP or job lifecycle details (see `splunk-search-client`).
//! - Config parsing (see `splunk-search-config`).

pub mod args;
pub mod connectivity;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod writer;

pub use error::ExitCode;
pub use pipeline::run;
pub use writer::{FsSink, OutputSink, WriteError, write_results};
