use serde::{Deserialize, Serialize};

/// Category assigned to lines without a parenthesized label.
pub const UNKNOWN_EVENT_TYPE: &str = "unknown";

/// Category of lines that carry damage and repair notifications.
pub const COMBAT_EVENT_TYPE: &str = "combat";

/// Location carried into the first line of a log, before any jump or undock
/// has been seen.
pub const UNKNOWN_LOCATION: &str = "{unknown}";

/// One line of a game log.
///
/// `event_time` keeps the client's zero-padded `YYYY.MM.DD HH:MM:SS` text, so
/// comparing two timestamps as strings compares them chronologically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    pub event_time: String,
    pub event_type: String,
    pub location: String,
    pub text: String,
}

impl LogEvent {
    pub fn is_combat(&self) -> bool {
        self.event_type == COMBAT_EVENT_TYPE
    }

    /// Combat lines that open with a quantity. Chat-like noise on the combat
    /// channel never starts with a digit.
    pub fn is_quantified_combat(&self) -> bool {
        self.is_combat()
            && self
                .text
                .as_bytes()
                .first()
                .is_some_and(|b| b.is_ascii_digit())
    }
}

/// Result of running the document parser over a whole log.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    pub events: Vec<LogEvent>,
    pub skipped_lines: usize,
}
