//! Shared test utilities for splunk-search-cli integration tests.
//!
//! Responsibilities:
//! - Provide hermetic command factories for both binaries.
//! - Write config files pointing at a mock server.
//!
//! Invariants / Assumptions:
//! - Proxy variables from the host never leak into the spawned binaries.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

const PROXY_VARS: [&str; 8] = [
    "http_proxy",
    "HTTP_PROXY",
    "https_proxy",
    "HTTPS_PROXY",
    "all_proxy",
    "ALL_PROXY",
    "no_proxy",
    "NO_PROXY",
];

fn hermetic(mut cmd: Command) -> Command {
    for var in PROXY_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Returns a hermetic `splunk-search` command.
#[allow(dead_code)]
pub fn search_cmd() -> Command {
    hermetic(assert_cmd::cargo::cargo_bin_cmd!("splunk-search"))
}

/// Returns a hermetic `splunk-test-connection` command.
#[allow(dead_code)]
pub fn test_connection_cmd() -> Command {
    hermetic(assert_cmd::cargo::cargo_bin_cmd!("splunk-test-connection"))
}

/// Settings that vary between tests; everything else uses fixed values.
#[allow(dead_code)]
pub struct TestConfig<'a> {
    pub url: String,
    pub output_mode: &'a str,
    pub output_file: PathBuf,
    pub log_dir: PathBuf,
    pub append_date: bool,
    pub proxy: &'a str,
}

impl<'a> TestConfig<'a> {
    #[allow(dead_code)]
    pub fn new(url: String, dir: &Path) -> Self {
        Self {
            url,
            output_mode: "json",
            output_file: dir.join("out.json"),
            log_dir: dir.join("logs"),
            append_date: false,
            proxy: "",
        }
    }

    /// Write the config into `dir/config.toml` and return its path.
    #[allow(dead_code)]
    pub fn write(&self, dir: &Path) -> PathBuf {
        let contents = format!(
            r#"[splunk]
url = "{url}"
token = "T"
search = "index=main"
output_mode = "{mode}"
output_file = "{output}"
proxy = "{proxy}"
append_date_to_output_file = {append}
poll_interval_seconds = 1
poll_timeout_seconds = 30

[logging]
log_dir = "{logs}"
log_level = "DEBUG"
"#,
            url = self.url,
            mode = self.output_mode,
            output = toml_path(&self.output_file),
            proxy = self.proxy,
            append = self.append_date,
            logs = toml_path(&self.log_dir),
        );
        let path = dir.join("config.toml");
        fs::write(&path, contents).expect("write config");
        path
    }
}

/// A path rendered for a TOML basic string.
#[allow(dead_code)]
fn toml_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "\\\\")
}

/// Concatenated contents of every log file in `log_dir`.
#[allow(dead_code)]
pub fn read_logs(log_dir: &Path) -> String {
    let mut out = String::new();
    if let Ok(entries) = fs::read_dir(log_dir) {
        for entry in entries.flatten() {
            out.push_str(&fs::read_to_string(entry.path()).unwrap_or_default());
        }
    }
    out
}
