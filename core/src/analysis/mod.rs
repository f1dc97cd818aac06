//! Aggregated statistics over extracted combat events
//!
//! Every record here is mutated incrementally as events are folded in, and
//! serializes as-is for the calling layer.

mod aggregator;
mod records;
mod summary;


pub use aggregator::{
    enemy_analysis, last_combat_system, max_damage, repair_analysis, time_analysis, time_bucket,
    total_damage, total_repaired, update_combat_time, weapon_analysis,
};
pub use records::{AnalysisCategory, DamageAnalysis, LogAnalysis, RepairAnalysis};
pub use summary::{Analyzer, analyze};
