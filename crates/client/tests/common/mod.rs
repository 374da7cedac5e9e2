//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::path::{Path, PathBuf};

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use secrecy::SecretString;
#[allow(unused_imports)]
pub use splunk_search_client::{SearchJobClient, endpoints};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path under which the mock server exposes the jobs collection.
#[allow(dead_code)]
pub const JOBS_PATH: &str = "/services/search/jobs";

#[allow(dead_code)]
fn fixture_path(fixture_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read or is not valid JSON
#[allow(dead_code)]
pub fn load_fixture(fixture_path_rel: &str) -> serde_json::Value {
    let full_path = fixture_path(fixture_path_rel);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Load a fixture verbatim, for non-JSON bodies.
#[allow(dead_code)]
pub fn load_text_fixture(fixture_path_rel: &str) -> String {
    let full_path = fixture_path(fixture_path_rel);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}

/// Jobs endpoint URL on the given mock server.
#[allow(dead_code)]
pub fn jobs_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), JOBS_PATH)
}

/// A client for the mock server's jobs endpoint, authenticated with `token`.
#[allow(dead_code)]
pub fn client_for(server: &MockServer, token: &str) -> SearchJobClient {
    SearchJobClient::builder()
        .base_url(jobs_url(server))
        .token(SecretString::new(token.to_string().into()))
        .build()
        .expect("client should build")
}
