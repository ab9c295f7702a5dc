//! Spend history and user/date log entries
//!
//! Both logs on a budget are stored as flat `"key:value"` strings. An
//! untouched log holds the single `"none:none"` placeholder.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder value marking an empty log or list
pub const NONE_SENTINEL: &str = "none";

/// One entry of a budget's `history` or `userDate` log
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LogEntry {
    pub key: String,
    pub value: String,
}

impl LogEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The `none:none` placeholder
    pub fn sentinel() -> Self {
        Self::new(NONE_SENTINEL, NONE_SENTINEL)
    }

    pub fn is_sentinel(&self) -> bool {
        self.key == NONE_SENTINEL && self.value == NONE_SENTINEL
    }

    /// A log in its empty state
    pub fn empty_log() -> Vec<Self> {
        vec![Self::sentinel()]
    }

    /// True when a log holds nothing but placeholders
    pub fn is_empty_log(entries: &[Self]) -> bool {
        entries.iter().all(Self::is_sentinel)
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

impl From<String> for LogEntry {
    fn from(raw: String) -> Self {
        match raw.split_once(':') {
            Some((key, value)) => Self::new(key, value),
            None => Self::new(raw, String::new()),
        }
    }
}

impl From<LogEntry> for String {
    fn from(entry: LogEntry) -> Self {
        entry.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_at_first_colon() {
        let entry = LogEntry::from("12.50:lunch: tacos".to_string());
        assert_eq!(entry.key, "12.50");
        assert_eq!(entry.value, "lunch: tacos");
    }

    #[test]
    fn test_sentinel_wire_form() {
        let json = serde_json::to_string(&LogEntry::empty_log()).unwrap();
        assert_eq!(json, r#"["none:none"]"#);

        let parsed: Vec<LogEntry> = serde_json::from_str(&json).unwrap();
        assert!(LogEntry::is_empty_log(&parsed));
    }

    #[test]
    fn test_real_entries_are_not_empty() {
        let log = vec![LogEntry::sentinel(), LogEntry::new("a@x.com", "2018-07-15")];
        assert!(!LogEntry::is_empty_log(&log));
        assert!(LogEntry::is_empty_log(&[]));
    }
}
