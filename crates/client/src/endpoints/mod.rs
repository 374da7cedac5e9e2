//! REST API endpoint implementations.
//!
//! Each function issues exactly one HTTP request against the search jobs
//! endpoint configured for the run. None of them retry.

mod jobs;
mod parsing;
mod request;
pub mod search;
pub mod url_encoding;

pub use jobs::list_jobs;
pub use parsing::{extract_entry_content, parse_json_body};
pub use request::send_request;
pub use search::{create_job, get_job_status, get_results, normalize_search};
pub use url_encoding::encode_path_segment;
