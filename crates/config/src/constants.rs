//! Centralized constants for the Splunk search workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Configuration File Defaults
// =============================================================================

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Name of the required connection/search section.
pub const SPLUNK_SECTION: &str = "splunk";

/// Name of the required logging section.
pub const LOGGING_SECTION: &str = "logging";

// =============================================================================
// Search & Polling Defaults
// =============================================================================

/// Default interval between job status polls, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 2;

/// Default maximum time to wait for search job completion, in seconds.
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 300;

/// SPL command keyword every submitted search must start with.
pub const SEARCH_COMMAND_PREFIX: &str = "search ";

// =============================================================================
// Request Timeouts
// =============================================================================

/// Timeout for the job creation request, in seconds.
pub const SUBMIT_TIMEOUT_SECS: u64 = 30;

/// Timeout for a single job status request, in seconds.
///
/// Bounds each poll so one hung request cannot stall the overall
/// job timeout check.
pub const STATUS_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Timeout for the connectivity probe request, in seconds.
pub const PROBE_TIMEOUT_SECS: u64 = 15;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Output Defaults
// =============================================================================

/// Maximum number of renamed retries after the first write fails with
/// permission denied. Retry `N` writes to `<stem>-N<.ext>`.
pub const MAX_PERMISSION_RETRIES: usize = 100;

/// `chrono` format used for the optional output file date stamp.
pub const OUTPUT_DATE_FORMAT: &str = "%Y%m%d";

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default directory for log files.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Default log level name.
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Prefix of the daily log file name.
pub const LOG_FILE_PREFIX: &str = "splunk_search";

/// Suffix of the daily log file name.
pub const LOG_FILE_SUFFIX: &str = "log";
