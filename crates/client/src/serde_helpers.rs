//! Serde helpers for Splunk's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Provide deserializers that accept the several encodings Splunk uses for flags and strings.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (which dispatch states are terminal, etc.).
//!
//! Invariants / assumptions:
//! - Splunk may return booleans as `true`, `1` or `"1"`/`"true"` depending on endpoint/version.
//! - These helpers must not log or print secrets; errors should be generic parse errors.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BoolOrNumberOrString {
    Bool(bool),
    U64(u64),
    I64(i64),
    String(String),
}

pub fn bool_from_any<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<BoolOrNumberOrString>::deserialize(deserializer)?;
    match value {
        None => Ok(false),
        Some(BoolOrNumberOrString::Bool(b)) => Ok(b),
        Some(BoolOrNumberOrString::U64(v)) => Ok(v != 0),
        Some(BoolOrNumberOrString::I64(v)) => Ok(v != 0),
        Some(BoolOrNumberOrString::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(D::Error::custom(format!("invalid boolean flag: {other}"))),
        },
    }
}

pub fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
