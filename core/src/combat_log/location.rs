use memchr::memmem;

use super::LogEvent;

const JUMP_MARKER: &str = "Jumping from ";
const UNDOCK_MARKER: &str = "Undocking from ";
const TO_MARKER: &str = " to ";
const SOLAR_SYSTEM_SUFFIX: &str = " solar system.";

/// Annotate `event` with the location it happened in and return the location
/// to carry into the next line.
pub fn update_location(event: &mut LogEvent, previous_location: &str) -> String {
    let location = detect_location(&event.text).unwrap_or_else(|| previous_location.to_string());
    event.location.clone_from(&location);
    location
}

fn detect_location(text: &str) -> Option<String> {
    let bytes = text.as_bytes();

    if memmem::find(bytes, JUMP_MARKER.as_bytes()).is_some() {
        return after_to_marker(text).map(str::to_string);
    }

    if memmem::find(bytes, UNDOCK_MARKER.as_bytes()).is_some() {
        return after_to_marker(text).map(|dest| {
            dest.strip_suffix(SOLAR_SYSTEM_SUFFIX)
                .unwrap_or(dest)
                .to_string()
        });
    }

    None
}

fn after_to_marker(text: &str) -> Option<&str> {
    memmem::find(text.as_bytes(), TO_MARKER.as_bytes()).map(|pos| &text[pos + TO_MARKER.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat_log::UNKNOWN_LOCATION;

    fn event(text: &str) -> LogEvent {
        LogEvent {
            text: text.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_jump_sets_destination() {
        let mut e = event("Jumping from Jita to Perimeter");
        let loc = update_location(&mut e, UNKNOWN_LOCATION);
        assert_eq!(loc, "Perimeter");
        assert_eq!(e.location, "Perimeter");
    }

    #[test]
    fn test_undock_strips_solar_system_suffix() {
        let mut e = event(
            "Undocking from Jita IV - Moon 4 - Caldari Navy Assembly Plant to Jita solar system.",
        );
        assert_eq!(update_location(&mut e, UNKNOWN_LOCATION), "Jita");
        assert_eq!(e.location, "Jita");
    }

    #[test]
    fn test_other_lines_carry_previous_location() {
        let mut e = event("567 to Rat - Hits");
        assert_eq!(update_location(&mut e, "Amarr"), "Amarr");
        assert_eq!(e.location, "Amarr");
    }

    #[test]
    fn test_jump_without_destination_keeps_previous() {
        let mut e = event("Jumping from Jita");
        assert_eq!(update_location(&mut e, "Jita"), "Jita");
    }

    #[test]
    fn test_unknown_sentinel_is_not_empty() {
        let mut e = event("Session Started: 2024.01.01 12:00:00");
        let loc = update_location(&mut e, UNKNOWN_LOCATION);
        assert_eq!(loc, UNKNOWN_LOCATION);
        assert!(!e.location.is_empty());
    }
}
