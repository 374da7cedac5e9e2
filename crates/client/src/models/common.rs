//! Error message bodies returned by the Splunk REST API.
//!
//! Failed requests usually carry `{"messages": [{"type": "ERROR", "text": ...}]}`;
//! these types turn that body into a one-line summary for `ApiError`.

use serde::Deserialize;
use std::fmt;

/// Severity of a Splunk message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageType {
    Fatal,
    Error,
    Warn,
    Info,
    /// Anything Splunk adds later (e.g. `DEBUG`).
    #[serde(other)]
    #[default]
    Unknown,
}

impl MessageType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a `messages` array.
#[derive(Debug, Clone, Deserialize)]
pub struct SplunkMessage {
    #[serde(rename = "type", default)]
    pub message_type: MessageType,
    #[serde(default)]
    pub text: String,
}

/// The `messages` body of an error response.
#[derive(Debug, Clone, Deserialize)]
pub struct SplunkMessages {
    #[serde(default)]
    pub messages: Vec<SplunkMessage>,
}

impl SplunkMessages {
    /// Joins the non-empty messages as `TYPE: text; TYPE: text`.
    pub fn summary(&self) -> String {
        self.messages
            .iter()
            .filter(|msg| !msg.text.trim().is_empty())
            .map(|msg| format!("{}: {}", msg.message_type, msg.text.trim()))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_deserialization() {
        assert_eq!(
            serde_json::from_str::<MessageType>("\"FATAL\"").unwrap(),
            MessageType::Fatal
        );
        assert_eq!(
            serde_json::from_str::<MessageType>("\"WARN\"").unwrap(),
            MessageType::Warn
        );
        assert_eq!(
            serde_json::from_str::<MessageType>("\"DEBUG\"").unwrap(),
            MessageType::Unknown
        );
    }

    #[test]
    fn test_summary_joins_messages() {
        let json = r#"{
            "messages": [
                {"type": "FATAL", "text": "Error in 'search' command"},
                {"type": "WARN", "text": "Search truncated"}
            ]
        }"#;
        let msgs: SplunkMessages = serde_json::from_str(json).unwrap();
        assert_eq!(
            msgs.summary(),
            "FATAL: Error in 'search' command; WARN: Search truncated"
        );
    }

    #[test]
    fn test_summary_skips_blank_text() {
        let json = r#"{"messages": [{"type": "ERROR", "text": "  "}, {"text": "no type"}]}"#;
        let msgs: SplunkMessages = serde_json::from_str(json).unwrap();
        assert_eq!(msgs.summary(), "UNKNOWN: no type");
    }
}
