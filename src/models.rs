use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Fallback display color for speakers without an assignment
pub const DEFAULT_COLOR: &str = "#ffffff";

/// One fully parsed chat record: when it was said, who said it, what was said.
///
/// The timestamp is combined from the log file's date and the line's
/// wall-clock time at ingestion, so range filtering never re-parses strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub timestamp: NaiveDateTime,
    pub speaker: String,
    pub text: String,
}

impl ChatMessage {
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }
}

/// Literal prefix/suffix pair matched against a message body.
///
/// Used by the renderer both for the ignore rule (matching messages are
/// excluded) and the italicize rule (matching messages are styled italic
/// with the delimiters stripped).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleRule {
    pub start: String,
    pub end: String,
}

impl StyleRule {
    pub fn matches(&self, text: &str) -> bool {
        text.starts_with(&self.start) && text.ends_with(&self.end)
    }

    /// Remove the rule's delimiters from a matching message.
    pub fn strip<'a>(&self, text: &'a str) -> &'a str {
        let stripped = text.strip_prefix(self.start.as_str()).unwrap_or(text);
        stripped.strip_suffix(self.end.as_str()).unwrap_or(stripped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_rule_matches_both_ends() {
        let rule = StyleRule {
            start: "*".to_string(),
            end: "*".to_string(),
        };
        assert!(rule.matches("*waves*"));
        assert!(!rule.matches("*waves"));
        assert!(!rule.matches("waves*"));
        assert!(!rule.matches("waves"));
    }

    #[test]
    fn test_style_rule_empty_delimiters_match_everything() {
        let rule = StyleRule::default();
        assert!(rule.matches("anything"));
        assert!(rule.matches(""));
    }

    #[test]
    fn test_style_rule_strip() {
        let rule = StyleRule {
            start: "[".to_string(),
            end: "]".to_string(),
        };
        assert_eq!(rule.strip("[ooc chatter]"), "ooc chatter");
        assert_eq!(rule.strip("no delimiters"), "no delimiters");
    }

    #[test]
    fn test_chat_message_date_time_accessors() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(12, 30, 45)
            .unwrap();
        let msg = ChatMessage {
            timestamp,
            speaker: "Alice".to_string(),
            text: "hello".to_string(),
        };
        assert_eq!(msg.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(msg.time().to_string(), "12:30:45");
    }
}
