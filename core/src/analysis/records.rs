use serde::{Deserialize, Serialize};

use crate::events::{DamageEvent, Direction, RepairEvent};

/// Grouping dimension of an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnalysisCategory {
    Enemy,
    Weapon,
    TimeBucket,
    RepairTarget,
}

/// Running damage statistics for one enemy, weapon or time bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageAnalysis {
    pub name: String,
    pub category: AnalysisCategory,

    // Damage received
    pub volleys_from: u32,
    pub damage_from: i64,
    pub max_from: i64,
    pub avg_from: i64,

    // Damage dealt
    pub volleys_to: u32,
    pub damage_to: i64,
    pub max_to: i64,
    pub avg_to: i64,

    pub first: String,
    pub last: String,
    /// Only tracked for time buckets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl DamageAnalysis {
    pub fn new(name: &str, category: AnalysisCategory, event_time: &str) -> Self {
        Self {
            name: name.to_string(),
            category,
            volleys_from: 0,
            damage_from: 0,
            max_from: 0,
            avg_from: 0,
            volleys_to: 0,
            damage_to: 0,
            max_to: 0,
            avg_to: 0,
            first: event_time.to_string(),
            last: event_time.to_string(),
            location: None,
        }
    }

    /// Fold one hit into the aggregate. Returns false, leaving the aggregate
    /// untouched, for a non-positive damage value.
    pub fn update(&mut self, event: &DamageEvent) -> bool {
        if event.damage <= 0 {
            tracing::warn!(
                name = %self.name,
                damage = event.damage,
                "rejected damage event with non-positive value"
            );
            return false;
        }

        match event.direction {
            Direction::To => {
                self.volleys_to = self.volleys_to.saturating_add(1);
                self.damage_to = self.damage_to.saturating_add(event.damage);
                self.max_to = self.max_to.max(event.damage);
                self.avg_to = rounded_average(self.damage_to, self.volleys_to);
            }
            Direction::From => {
                self.volleys_from = self.volleys_from.saturating_add(1);
                self.damage_from = self.damage_from.saturating_add(event.damage);
                self.max_from = self.max_from.max(event.damage);
                self.avg_from = rounded_average(self.damage_from, self.volleys_from);
            }
        }
        widen_bounds(&mut self.first, &mut self.last, &event.event_time);
        true
    }
}

/// Running repair statistics for one repair target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairAnalysis {
    pub name: String,
    pub category: AnalysisCategory,
    pub ship: String,
    pub cycles_to: u32,
    pub repairs_to: i64,
    pub max_to: i64,
    pub avg_to: i64,
    pub first: String,
    pub last: String,
}

impl RepairAnalysis {
    pub fn new(name: &str, ship: &str, event_time: &str) -> Self {
        Self {
            name: name.to_string(),
            category: AnalysisCategory::RepairTarget,
            ship: ship.to_string(),
            cycles_to: 0,
            repairs_to: 0,
            max_to: 0,
            avg_to: 0,
            first: event_time.to_string(),
            last: event_time.to_string(),
        }
    }

    /// Fold one repair cycle into the aggregate. Returns false, leaving the
    /// aggregate untouched, for a non-positive repair amount.
    pub fn update(&mut self, event: &RepairEvent) -> bool {
        if event.repaired <= 0 {
            tracing::warn!(
                name = %self.name,
                repaired = event.repaired,
                "rejected repair event with non-positive value"
            );
            return false;
        }

        self.cycles_to = self.cycles_to.saturating_add(1);
        self.repairs_to = self.repairs_to.saturating_add(event.repaired);
        self.max_to = self.max_to.max(event.repaired);
        self.avg_to = rounded_average(self.repairs_to, self.cycles_to);
        widen_bounds(&mut self.first, &mut self.last, &event.event_time);
        true
    }
}

/// Everything the engine knows about one log.
///
/// The identity fields at the top are owned by the caller: the engine leaves
/// them empty and never reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogAnalysis {
    pub db_id: Option<i64>,
    pub user_id: Option<i64>,
    pub fitting_id: Option<i64>,
    pub fleet_id: Option<i64>,
    pub character_name: Option<String>,

    pub logged_events: usize,
    pub skipped_lines: usize,
    pub damage_done: i64,
    pub damage_taken: i64,

    pub enemies: Vec<DamageAnalysis>,
    pub weapons: Vec<DamageAnalysis>,
    pub times: Vec<DamageAnalysis>,

    pub start: Option<String>,
    pub end: Option<String>,
    pub duration_seconds: Option<i64>,

    /// Heaviest hit dealt
    pub max_to: Option<DamageEvent>,
    /// Heaviest hit received
    pub max_from: Option<DamageEvent>,
    pub last_system: String,

    pub armor_repaired: Option<i64>,
    pub shield_repaired: Option<i64>,
    pub repairs: Vec<RepairAnalysis>,
}

// rounds half away from zero
fn rounded_average(sum: i64, count: u32) -> i64 {
    (sum as f64 / f64::from(count)).round() as i64
}

fn widen_bounds(first: &mut String, last: &mut String, event_time: &str) {
    if event_time < first.as_str() {
        *first = event_time.to_string();
    }
    if event_time > last.as_str() {
        *last = event_time.to_string();
    }
}
