//! Path-segment encoding for job ids.
//!
//! Splunk sids are usually plain (`1718031412.123`, `scheduler__admin__search__RMD5...`),
//! but they are opaque server data. Encoding them before appending to the jobs URL
//! keeps a stray `/`, `?` or `#` from changing which resource is requested.
//!
//! ```
//! use splunk_search_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("1718031412.123"), "1718031412.123");
//! assert_eq!(encode_path_segment("a/../b"), "a%2F..%2Fb");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Bytes escaped in a path segment: RFC 3986 delimiters plus `%` so an
/// already-encoded sid is not decoded twice.
const SID_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode `segment` for use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), SID_ENCODE_SET).to_string()
}
