//! Read-only connectivity check used by `splunk-test-connection`.
//!
//! Responsibilities:
//! - Probe the jobs endpoint with the configured token, TLS and proxy settings.
//! - Produce the human-readable report, masking any proxy credentials.
//!
//! Does NOT handle:
//! - Creating or polling jobs.

use splunk_search_client::{ClientError, ProxySettings, SearchJobClient, resolve_proxies};
use splunk_search_config::SplunkConfig;
use tracing::debug;
use url::Url;

/// Outcome of one probe.
#[derive(Debug)]
pub struct ConnectionReport {
    /// `host[:port]` of the probed endpoint.
    pub host: String,
    /// Number of jobs returned, or the error text.
    pub outcome: Result<usize, String>,
    /// Suggested next step for a failed probe.
    pub hint: Option<&'static str>,
    /// Proxies that were in effect, if any.
    pub proxies: Option<ProxySettings>,
}

impl ConnectionReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Report lines in print order.
    pub fn lines(&self) -> Vec<String> {
        match &self.outcome {
            Ok(count) => vec![format!(
                "Connection to {} successful. Retrieved {} job(s) from the API.",
                self.host, count
            )],
            Err(message) => {
                let mut lines = vec![format!("Connection to {} failed: {}", self.host, message)];
                if let Some(hint) = self.hint {
                    lines.push(format!("Hint: {hint}"));
                }
                if let Some(proxies) = &self.proxies {
                    lines.push("Proxy configuration detected during failure:".to_string());
                    lines.extend(
                        proxies
                            .masked_entries()
                            .into_iter()
                            .map(|(scheme, url)| format!("  {scheme}: {url}")),
                    );
                }
                lines
            }
        }
    }
}

fn display_host(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match (parsed.host_str(), parsed.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => url.to_string(),
        },
        Err(_) => url.to_string(),
    }
}

const UNEXPECTED_RESPONSE_HINT: &str =
    "The endpoint answered, but not with a search jobs listing. Check the configured url.";
const AUTH_HINT: &str = "Check that the configured token is valid and may list search jobs.";
const UNREACHABLE_HINT: &str =
    "The endpoint could not be reached. Check the url and proxy settings.";

/// Next step to suggest for a failed probe, by error kind.
fn failure_hint(err: &ClientError) -> Option<&'static str> {
    if err.is_protocol() {
        return Some(UNEXPECTED_RESPONSE_HINT);
    }
    if !err.is_transport() {
        return None;
    }
    match err.status() {
        Some(401 | 403) => Some(AUTH_HINT),
        Some(_) => None,
        None => Some(UNREACHABLE_HINT),
    }
}

/// Probe the configured endpoint once.
pub async fn test_connection(config: &SplunkConfig) -> ConnectionReport {
    let host = display_host(&config.url);
    let proxies = resolve_proxies(&config.proxy, &config.url);

    let client = SearchJobClient::builder()
        .base_url(config.url.clone())
        .token(config.token.clone())
        .verify_ssl(config.verify_ssl)
        .proxies(proxies.clone())
        .build();

    let result = match client {
        Ok(client) => client.check_connection().await,
        Err(e) => Err(e),
    };
    debug!(success = result.is_ok(), "Connectivity probe finished");

    let hint = result.as_ref().err().and_then(failure_hint);
    ConnectionReport {
        host,
        outcome: result.map_err(|e| e.to_string()),
        hint,
        proxies,
    }
}
