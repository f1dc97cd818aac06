//! Damage and repair events extracted from combat lines

mod extractor;


use std::fmt;

use serde::{Deserialize, Serialize};

pub use extractor::{damage_events, repair_events};

/// Which way a quantity flowed, relative to the log owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    To,
    From,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::To => "to",
            Direction::From => "from",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepairType {
    Armor,
    Shield,
}

impl RepairType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RepairType::Armor => "armor",
            RepairType::Shield => "shield",
        }
    }
}

impl fmt::Display for RepairType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single hit dealt or received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageEvent {
    pub event_time: String,
    pub damage: i64,
    pub direction: Direction,
    /// The opposing party
    pub entity: String,
    /// Empty when the line names no weapon (e.g. drones, NPC hits)
    pub weapon: String,
    /// Hit quality, e.g. "Hits", "Smashes", "Wrecks"
    pub outcome: String,
    pub location: String,
    pub text: String,
}

/// A single remote repair cycle applied by the log owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairEvent {
    pub event_time: String,
    pub repaired: i64,
    pub direction: Direction,
    pub rep_type: RepairType,
    pub entity: String,
    pub ship: String,
    pub module: String,
    pub location: String,
}

/// Fields every extracted event carries, regardless of kind.
pub trait CombatRecord {
    fn event_time(&self) -> &str;
    fn location(&self) -> &str;
}

impl CombatRecord for DamageEvent {
    fn event_time(&self) -> &str {
        &self.event_time
    }
    fn location(&self) -> &str {
        &self.location
    }
}

impl CombatRecord for RepairEvent {
    fn event_time(&self) -> &str {
        &self.event_time
    }
    fn location(&self) -> &str {
        &self.location
    }
}
