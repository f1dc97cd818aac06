use super::*;
use memchr::memchr;
use rayon::prelude::*;

#[cfg(test)]
mod tests;

/// Tokenizes game log lines into [`LogEvent`]s.
///
/// Lines look like `[ 2024.01.01 12:00:00 ] (combat) <b>567</b> to ...`.
/// Header lines (`Listener: ...`, `Session Started: ...`) have no timestamp
/// and are kept verbatim under the `unknown` category.
#[derive(Debug, Clone, Default)]
pub struct LogParser;

impl LogParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_line(&self, line_number: u64, line: &str) -> Result<LogEvent, ParseError> {
        let line = line.trim();
        let Some(body) = line.strip_prefix('[') else {
            return Ok(LogEvent {
                event_type: UNKNOWN_EVENT_TYPE.to_string(),
                text: line.to_string(),
                ..Default::default()
            });
        };

        let close = memchr(b']', body.as_bytes())
            .ok_or(ParseError::UnterminatedTimestamp { line_number })?;
        let event_time = body[..close].trim().to_string();
        let (event_type, remainder) = LogParser::split_category(&body[close + 1..]);

        Ok(LogEvent {
            event_time,
            event_type: event_type.to_string(),
            location: String::new(),
            text: strip_html(remainder).trim().to_string(),
        })
    }

    // "(combat) rest" -> ("combat", " rest")
    fn split_category(segment: &str) -> (&str, &str) {
        let bytes = segment.as_bytes();
        let Some(paren) = memchr(b'(', bytes) else {
            return (UNKNOWN_EVENT_TYPE, segment);
        };
        match memchr(b')', &bytes[paren..]) {
            Some(len) => (
                segment[paren + 1..paren + len].trim(),
                &segment[paren + len + 1..],
            ),
            None => (UNKNOWN_EVENT_TYPE, segment),
        }
    }

    /// Parse a whole document, tracking location across lines.
    ///
    /// Lines that fail to parse are logged and counted, never fatal.
    pub fn parse_document(&self, text: &str) -> ParsedDocument {
        let lines: Vec<&str> = text.lines().collect();

        // tokenizing is independent per line, location tracking is not
        let parsed: Vec<Result<LogEvent, ParseError>> = lines
            .par_iter()
            .enumerate()
            .map(|(idx, line)| self.parse_line(idx as u64 + 1, line))
            .collect();

        let mut events = Vec::with_capacity(parsed.len());
        let mut skipped_lines = 0;
        let mut location = UNKNOWN_LOCATION.to_string();

        for result in parsed {
            match result {
                Ok(mut event) => {
                    location = update_location(&mut event, &location);
                    events.push(event);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "skipping unparseable log line");
                    skipped_lines += 1;
                }
            }
        }

        tracing::debug!(events = events.len(), skipped_lines, "parsed log document");

        ParsedDocument {
            events,
            skipped_lines,
        }
    }
}

/// Tokenize a single line with the default parser.
pub fn parse_line(line: &str) -> Result<LogEvent, ParseError> {
    LogParser::default().parse_line(1, line)
}

/// Parse a document into located events, dropping unparseable lines.
pub fn parse(text: &str) -> Vec<LogEvent> {
    LogParser::default().parse_document(text).events
}

/// Name of the character whose client wrote the log, from the
/// `Listener: <name>` header line.
pub fn listener(events: &[LogEvent]) -> Option<String> {
    events
        .iter()
        .filter(|e| e.event_time.is_empty())
        .find_map(|e| e.text.strip_prefix("Listener:"))
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}
