//! Tests for config loading and validation.

use std::io::Write;

use secrecy::ExposeSecret;

use super::{ConfigError, ConfigLoader};
use crate::types::OutputMode;

const MINIMAL: &str = r#"
[splunk]
url = "https://splunk.example.com:8089/services/search/jobs/"
token = "abc123"
search = "index=main"
output_file = "out.json"

[logging]
"#;

#[test]
fn test_minimal_config_applies_defaults() {
    let config = ConfigLoader::load_from_str(MINIMAL).unwrap();

    assert_eq!(
        config.splunk.url,
        "https://splunk.example.com:8089/services/search/jobs"
    );
    assert_eq!(config.splunk.token.expose_secret(), "abc123");
    assert_eq!(config.splunk.output_mode, OutputMode::Json);
    assert!(config.splunk.verify_ssl);
    assert_eq!(config.splunk.proxy, "");
    assert!(!config.splunk.append_date_to_output_file);
    assert_eq!(config.splunk.poll_interval_seconds, 2);
    assert_eq!(config.splunk.poll_timeout_seconds, 300);
    assert_eq!(config.logging.log_dir.to_str(), Some("logs"));
    assert_eq!(config.logging.log_level, "INFO");
}

#[test]
fn test_full_config_overrides_defaults() {
    let toml = r#"
[splunk]
url = "http://localhost:8089/services/search/jobs"
token = "t"
search = "search index=_internal | head 5"
output_mode = "CSV"
output_file = "~/exports/out.csv"
verify_ssl = false
proxy = "  http://proxy:3128  "
append_date_to_output_file = true
poll_interval_seconds = 5
poll_timeout_seconds = 60

[logging]
log_dir = "/var/log/splunk-search"
log_level = "DEBUG"
"#;
    let config = ConfigLoader::load_from_str(toml).unwrap();

    assert_eq!(config.splunk.output_mode, OutputMode::Csv);
    assert!(!config.splunk.verify_ssl);
    assert_eq!(config.splunk.proxy, "http://proxy:3128");
    assert!(config.splunk.append_date_to_output_file);
    assert_eq!(config.splunk.poll_interval().as_secs(), 5);
    assert_eq!(config.splunk.poll_timeout().as_secs(), 60);
    assert_eq!(config.logging.log_level, "DEBUG");
}

#[test]
fn test_missing_splunk_section() {
    let err = ConfigLoader::load_from_str("[logging]\n").unwrap_err();
    assert!(matches!(err, ConfigError::MissingSection("splunk")));
}

#[test]
fn test_missing_logging_section() {
    let toml = MINIMAL.replace("[logging]", "");
    let err = ConfigLoader::load_from_str(&toml).unwrap_err();
    assert!(matches!(err, ConfigError::MissingSection("logging")));
}

#[test]
fn test_missing_required_fields() {
    for field in ["url", "token", "search", "output_file"] {
        let toml: String = MINIMAL
            .lines()
            .filter(|line| !line.starts_with(&format!("{field} =")))
            .collect::<Vec<_>>()
            .join("\n");

        match ConfigLoader::load_from_str(&toml) {
            Err(ConfigError::MissingField { section, field: f }) => {
                assert_eq!(section, "splunk");
                assert_eq!(f, field);
            }
            other => panic!("expected MissingField for {field}, got {other:?}"),
        }
    }
}

#[test]
fn test_blank_token_is_missing() {
    let toml = MINIMAL.replace("token = \"abc123\"", "token = \"   \"");
    let err = ConfigLoader::load_from_str(&toml).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::MissingField { field: "token", .. }
    ));
}

#[test]
fn test_invalid_output_mode() {
    let toml = MINIMAL.replace("[logging]", "output_mode = \"xml\"\n[logging]");
    // output_mode lands in [splunk] because it precedes the [logging] header.
    let err = ConfigLoader::load_from_str(&toml).unwrap_err();
    match err {
        ConfigError::InvalidValue { var, message } => {
            assert_eq!(var, "output_mode");
            assert!(message.contains("xml"));
        }
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn test_url_must_be_http_or_https() {
    let toml = MINIMAL.replace(
        "https://splunk.example.com:8089/services/search/jobs/",
        "ftp://splunk.example.com/jobs",
    );
    let err = ConfigLoader::load_from_str(&toml).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "url"));
}

#[test]
fn test_relative_url_rejected() {
    let toml = MINIMAL.replace(
        "https://splunk.example.com:8089/services/search/jobs/",
        "services/search/jobs",
    );
    let err = ConfigLoader::load_from_str(&toml).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "url"));
}

#[test]
fn test_zero_poll_interval_rejected() {
    let toml = MINIMAL.replace("[logging]", "poll_interval_seconds = 0\n[logging]");
    let err = ConfigLoader::load_from_str(&toml).unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "poll_interval_seconds")
    );
}

#[test]
fn test_negative_timeout_rejected() {
    let toml = MINIMAL.replace("[logging]", "poll_timeout_seconds = -1\n[logging]");
    let err = ConfigLoader::load_from_str(&toml).unwrap_err();
    assert!(
        matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "poll_timeout_seconds")
    );
}

#[test]
fn test_parse_error_does_not_echo_token() {
    let toml = "[splunk]\ntoken = \"super-secret-value\nurl = 1\n";
    let err = ConfigLoader::load_from_str(toml).unwrap_err();
    assert!(matches!(err, ConfigError::ConfigFileParse { .. }));
    assert!(!err.to_string().contains("super-secret-value"));
}

#[test]
fn test_debug_output_redacts_token() {
    let config = ConfigLoader::load_from_str(MINIMAL).unwrap();
    let debug = format!("{:?}", config);
    assert!(!debug.contains("abc123"));
}

#[test]
fn test_load_missing_file() {
    let loader = ConfigLoader::new().with_config_path("/definitely/not/here.toml".into());
    let err = loader.load().unwrap_err();
    assert!(matches!(err, ConfigError::ConfigFileNotFound(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MINIMAL.as_bytes()).unwrap();

    let config = ConfigLoader::new()
        .with_config_path(file.path().to_path_buf())
        .load()
        .unwrap();
    assert_eq!(config.splunk.search, "index=main");
}

#[test]
fn test_blank_config_path_keeps_default() {
    let err = ConfigLoader::new()
        .with_config_path("  ".into())
        .load()
        .unwrap_err();
    let ConfigError::ConfigFileNotFound(path) = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(path.to_str(), Some("config.toml"));
}
