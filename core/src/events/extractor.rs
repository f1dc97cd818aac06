use memchr::memmem;

use super::{DamageEvent, Direction, RepairEvent, RepairType};
use crate::combat_log::LogEvent;

// a single hit or repair cycle never comes near u32::MAX; anything past it is
// corrupt input and parses to zero, which drops the line
macro_rules! parse_quantity {
    ($s:expr) => {
        i64::from($s.parse::<u32>().unwrap_or_default())
    };
}

const SEGMENT_DELIMITER: &str = " - ";

// remote repair lines also read "<n> remote ... to <target>", keep them out of damage
const REPAIR_NOISE: [&str; 2] = ["remote armor repaired", "remote shield boosted"];

const REPAIR_MARKERS: [(&str, RepairType); 2] = [
    (" remote armor repaired", RepairType::Armor),
    (" remote shield boosted", RepairType::Shield),
];

/// Extract every damage event, in log order.
pub fn damage_events(events: &[LogEvent]) -> Vec<DamageEvent> {
    let extracted: Vec<DamageEvent> = events
        .iter()
        .filter(|e| e.is_quantified_combat())
        .filter_map(parse_damage)
        .collect();
    tracing::debug!(count = extracted.len(), "extracted damage events");
    extracted
}

/// Extract every remote repair event, in log order.
pub fn repair_events(events: &[LogEvent]) -> Vec<RepairEvent> {
    let extracted: Vec<RepairEvent> = events
        .iter()
        .filter(|e| e.is_quantified_combat())
        .filter_map(parse_repair)
        .collect();
    tracing::debug!(count = extracted.len(), "extracted repair events");
    extracted
}

// "567 to [P-1]Bad Guy - Inferno Rage Compiler Error - Hits"
fn parse_damage(event: &LogEvent) -> Option<DamageEvent> {
    let text = event.text.as_str();
    let bytes = text.as_bytes();

    if REPAIR_NOISE
        .iter()
        .any(|noise| memmem::find(bytes, noise.as_bytes()).is_some())
    {
        return None;
    }

    let digits_end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let after_digits = &text[digits_end..];

    let (direction, rest) = if let Some(rest) = after_digits.strip_prefix(" to ") {
        (Direction::To, rest)
    } else if let Some(rest) = after_digits.strip_prefix(" from ") {
        (Direction::From, rest)
    } else {
        return None;
    };

    let damage = parse_quantity!(&text[..digits_end]);
    if damage <= 0 {
        return None;
    }

    let segments: Vec<&str> = rest.split(SEGMENT_DELIMITER).map(str::trim).collect();
    let (entity, weapon, outcome) = match segments.as_slice() {
        [entity, weapon, outcome, ..] => (*entity, *weapon, *outcome),
        [entity, outcome] => (*entity, "", *outcome),
        [entity] => (*entity, "", ""),
        [] => return None,
    };

    Some(DamageEvent {
        event_time: event.event_time.clone(),
        damage,
        direction,
        entity: entity.to_string(),
        weapon: weapon.to_string(),
        outcome: outcome.to_string(),
        location: event.location.clone(),
        text: event.text.clone(),
    })
}

// "350 remote armor repaired to Guardian Pilot - Guardian - Large Remote Armor Repairer II"
fn parse_repair(event: &LogEvent) -> Option<RepairEvent> {
    let text = event.text.as_str();
    let bytes = text.as_bytes();

    let (pos, marker, rep_type) = REPAIR_MARKERS.iter().find_map(|(marker, rep_type)| {
        memmem::find(bytes, marker.as_bytes()).map(|pos| (pos, *marker, *rep_type))
    })?;

    let repaired = parse_quantity!(text[..pos].trim());
    if repaired <= 0 {
        return None;
    }

    let rest = &text[pos + marker.len()..];
    let rest = rest.strip_prefix(" to ").unwrap_or(rest).trim();
    let mut segments = rest.split(SEGMENT_DELIMITER).map(str::trim);
    let mut next_segment = || segments.next().unwrap_or_default().to_string();

    Some(RepairEvent {
        event_time: event.event_time.clone(),
        repaired,
        direction: Direction::To,
        rep_type,
        entity: next_segment(),
        ship: next_segment(),
        module: next_segment(),
        location: event.location.clone(),
    })
}
