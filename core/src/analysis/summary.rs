use chrono::NaiveDateTime;

use super::aggregator::*;
use super::records::LogAnalysis;
use crate::combat_log::{LogParser, ParsedDocument};
use crate::events::{Direction, RepairType, damage_events, repair_events};

const EVENT_TIME_FORMAT: &str = "%Y.%m.%d %H:%M:%S";

/// Runs the whole pipeline: parse, extract, aggregate, assemble.
///
/// Holds no state between calls, so one analyzer can serve concurrent
/// requests.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    parser: LogParser,
}

impl Analyzer {
    pub fn new(parser: LogParser) -> Self {
        Self { parser }
    }

    pub fn analyze(&self, text: &str) -> LogAnalysis {
        let document = self.parser.parse_document(text);
        self.analyze_document(&document)
    }

    pub fn analyze_document(&self, document: &ParsedDocument) -> LogAnalysis {
        let damage = damage_events(&document.events);
        let repairs = repair_events(&document.events);
        let (damage_done, damage_taken) = total_damage(&damage);

        let mut analysis = LogAnalysis {
            logged_events: document.events.len(),
            skipped_lines: document.skipped_lines,
            damage_done,
            damage_taken,
            enemies: enemy_analysis(&damage),
            weapons: weapon_analysis(&damage),
            times: time_analysis(&damage),
            max_to: max_damage(&damage, Direction::To).cloned(),
            max_from: max_damage(&damage, Direction::From).cloned(),
            last_system: last_combat_system(&damage, &repairs),
            armor_repaired: total_repaired(&repairs, RepairType::Armor),
            shield_repaired: total_repaired(&repairs, RepairType::Shield),
            repairs: repair_analysis(&repairs),
            ..Default::default()
        };
        update_combat_time(&damage, &repairs, &mut analysis);
        analysis.duration_seconds = combat_duration(&analysis);

        tracing::debug!(
            logged_events = analysis.logged_events,
            damage_events = damage.len(),
            repair_events = repairs.len(),
            "log analysis complete"
        );

        analysis
    }
}

/// Analyze a log with the default parser settings.
pub fn analyze(text: &str) -> LogAnalysis {
    Analyzer::default().analyze(text)
}

fn combat_duration(analysis: &LogAnalysis) -> Option<i64> {
    let start = NaiveDateTime::parse_from_str(analysis.start.as_deref()?, EVENT_TIME_FORMAT).ok()?;
    let end = NaiveDateTime::parse_from_str(analysis.end.as_deref()?, EVENT_TIME_FORMAT).ok()?;
    Some((end - start).num_seconds())
}
