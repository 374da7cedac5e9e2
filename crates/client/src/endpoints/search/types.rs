//! Search types and SPL normalization.
//!
//! # What this module handles:
//! - The result encoding (`OutputMode`, shared with the config crate)
//! - Making sure submitted SPL starts with the `search` command
//!
//! # What this module does NOT handle:
//! - Search execution logic
//! - Result parsing

use splunk_search_config::constants::SEARCH_COMMAND_PREFIX;

pub use splunk_search_config::OutputMode;

/// Ensure the SPL text starts with the `search ` command.
///
/// The check is made on the trimmed, lower-cased text; when the prefix is
/// missing it is prepended to the trimmed text with its original casing.
///
/// ```
/// use splunk_search_client::normalize_search;
///
/// assert_eq!(normalize_search("index=main"), "search index=main");
/// assert_eq!(normalize_search("  SEARCH index=main "), "SEARCH index=main");
/// ```
pub fn normalize_search(search: &str) -> String {
    let trimmed = search.trim();
    if trimmed.to_lowercase().starts_with(SEARCH_COMMAND_PREFIX) {
        trimmed.to_string()
    } else {
        format!("{SEARCH_COMMAND_PREFIX}{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_prefix_added() {
        assert_eq!(normalize_search("index=main"), "search index=main");
        assert_eq!(
            normalize_search("  index=main | stats count  "),
            "search index=main | stats count"
        );
    }

    #[test]
    fn test_existing_prefix_kept() {
        assert_eq!(normalize_search("search index=main"), "search index=main");
        assert_eq!(normalize_search("Search index=main"), "Search index=main");
    }

    #[test]
    fn test_generating_command_still_prefixed() {
        assert_eq!(normalize_search("| tstats count"), "search | tstats count");
    }

    #[test]
    fn test_word_starting_with_search_is_not_a_prefix() {
        assert_eq!(normalize_search("searchfoo"), "search searchfoo");
    }

    fn count_prefix(s: &str) -> usize {
        let lower = s.to_lowercase();
        let mut rest = lower.as_str();
        let mut n = 0;
        while let Some(stripped) = rest.strip_prefix(SEARCH_COMMAND_PREFIX) {
            n += 1;
            rest = stripped;
        }
        n
    }

    proptest! {
        #[test]
        fn prop_starts_with_search_exactly_once(body in "[a-z=_|0-9 ]{0,40}") {
            let plain = body.trim().trim_start_matches("search ").to_string();
            prop_assume!(!plain.to_lowercase().starts_with("search "));

            for input in [
                plain.clone(),
                format!("search {plain}"),
                format!("SEARCH {plain}"),
                format!("  Search {plain}  "),
            ] {
                let normalized = normalize_search(&input);
                prop_assert!(normalized.to_lowercase().starts_with("search "));
                prop_assert_eq!(count_prefix(&normalized), 1, "input: {:?}", input);
            }
        }

        #[test]
        fn prop_normalization_is_idempotent(input in "\\PC{0,40}") {
            prop_assume!(!input.trim().is_empty());
            let once = normalize_search(&input);
            prop_assert_eq!(normalize_search(&once), once);
        }
    }
}
