//! Persisting search results to the output file.
//!
//! Responsibilities:
//! - Compute the target path: `~` expansion, optional `_YYYYMMDD` date stamp.
//! - Serialize JSON rows as pretty-printed text; pass CSV text through as-is.
//! - Retry permission-denied writes under `<stem>-1`, `<stem>-2`, ...
//!
//! Does NOT handle:
//! - Fetching results (see `splunk_search_client`).
//!
//! Invariants:
//! - At most one file is written per call.
//! - Only `PermissionDenied` is retried; every other I/O error is returned
//!   immediately.
//! - Renamed retries are capped at `MAX_PERMISSION_RETRIES` rather than
//!   continuing without limit. A target that is always denied ends in
//!   `WriteError::PermissionRetriesExhausted`.
//! - The permission suffix goes after the date stamp and before the extension.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use directories::BaseDirs;
use splunk_search_client::SearchResults;
use splunk_search_config::constants::{MAX_PERMISSION_RETRIES, OUTPUT_DATE_FORMAT};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors from writing the output file.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Permission denied for {} and {retries} renamed alternatives", path.display())]
    PermissionRetriesExhausted { path: PathBuf, retries: usize },
}

/// Destination for the rendered output bytes.
pub trait OutputSink {
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Writes straight to the file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSink;

impl OutputSink for FsSink {
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}

/// Replace a leading `~` with the current user's home directory.
pub fn expand_home(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => "",
        Some(rest) if rest.starts_with('/') || rest.starts_with(std::path::MAIN_SEPARATOR) => {
            &rest[1..]
        }
        _ => return PathBuf::from(path),
    };

    match BaseDirs::new() {
        Some(dirs) if rest.is_empty() => dirs.home_dir().to_path_buf(),
        Some(dirs) => dirs.home_dir().join(rest),
        None => PathBuf::from(path),
    }
}

/// `dir/stem.ext` becomes `dir/stem<suffix>.ext`.
fn with_stem_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_stem().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    if let Some(ext) = path.extension() {
        name.push(".");
        name.push(ext);
    }
    path.with_file_name(name)
}

/// The path the first write attempt goes to.
pub fn target_path(output_file: &str, append_date: bool, today: NaiveDate) -> PathBuf {
    let path = expand_home(output_file);
    if append_date {
        with_stem_suffix(&path, &format!("_{}", today.format(OUTPUT_DATE_FORMAT)))
    } else {
        path
    }
}

/// The path of permission retry `attempt` (1-based).
pub fn retry_path(base: &Path, attempt: usize) -> PathBuf {
    with_stem_suffix(base, &format!("-{attempt}"))
}

fn render(results: &SearchResults) -> Result<Vec<u8>, WriteError> {
    match results {
        SearchResults::Json(rows) => Ok(serde_json::to_string_pretty(rows)?.into_bytes()),
        SearchResults::Csv(text) => {
            if text.is_empty() {
                warn!("No results returned. Creating empty output file.");
            }
            Ok(text.clone().into_bytes())
        }
    }
}

fn ensure_parent(path: &Path) -> Result<(), WriteError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Write `results` to `base`, renaming on permission errors.
///
/// Returns the path that was actually written.
pub fn write_results_to<S: OutputSink>(
    sink: &S,
    results: &SearchResults,
    base: &Path,
) -> Result<PathBuf, WriteError> {
    let contents = render(results)?;
    ensure_parent(base)?;

    let mut candidate = base.to_path_buf();
    let mut attempt = 0;
    loop {
        debug!("Writing {} bytes to {}", contents.len(), candidate.display());
        match sink.write(&candidate, &contents) {
            Ok(()) => {
                info!("Results written to {}", candidate.display());
                return Ok(candidate);
            }
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                if attempt == MAX_PERMISSION_RETRIES {
                    return Err(WriteError::PermissionRetriesExhausted {
                        path: base.to_path_buf(),
                        retries: MAX_PERMISSION_RETRIES,
                    });
                }
                attempt += 1;
                let next = retry_path(base, attempt);
                warn!(
                    "Permission denied writing {}. Retrying with {}",
                    candidate.display(),
                    next.display()
                );
                candidate = next;
            }
            Err(source) => {
                return Err(WriteError::Io {
                    path: candidate,
                    source,
                });
            }
        }
    }
}

/// Write `results` to the configured output file on disk.
pub fn write_results(
    results: &SearchResults,
    output_file: &str,
    append_date: bool,
) -> Result<PathBuf, WriteError> {
    let base = target_path(output_file, append_date, Local::now().date_naive());
    write_results_to(&FsSink, results, &base)
}
