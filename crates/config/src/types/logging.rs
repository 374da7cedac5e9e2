//! Logging settings from the `[logging]` section.

use std::path::PathBuf;

/// Where and how verbosely the runner logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Directory that receives the daily log files. Created on demand.
    pub log_dir: PathBuf,
    /// Level name as written in the config (`DEBUG`, `INFO`, `WARNING`, ...).
    pub log_level: String,
}
