//! Authorization headers for Splunk API tokens.
//!
//! Splunk accepts API tokens as `Authorization: Splunk <token>`. Every request
//! in a run carries the same header set, so it is built in one place.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::{ClientError, Result};

/// Scheme word that precedes the token in the `Authorization` header.
pub const AUTH_SCHEME: &str = "Splunk";

/// Build the request headers for `token`.
///
/// The `Authorization` value is marked sensitive so it is masked in the
/// HTTP client's debug output.
pub fn make_headers(token: &str) -> Result<HeaderMap> {
    let mut auth = HeaderValue::from_str(&format!("{AUTH_SCHEME} {token}"))
        .map_err(|_| {
            ClientError::InvalidToken("contains characters not valid in an HTTP header".to_string())
        })?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );
    Ok(headers)
}
