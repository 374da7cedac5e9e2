//! Result encoding negotiated with the search results endpoint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output format for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Structured rows, written out as a pretty-printed JSON array.
    #[default]
    Json,
    /// Pre-tabulated text, written out verbatim.
    Csv,
}

impl OutputMode {
    /// Value sent in the `output_mode` request parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            OutputMode::Json => "json",
            OutputMode::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    /// Accepts `json` or `csv` in any case, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputMode::Json),
            "csv" => Ok(OutputMode::Csv),
            other => Err(format!("unsupported output_mode '{other}' (expected json or csv)")),
        }
    }
}
