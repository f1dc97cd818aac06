use hashbrown::HashMap;

use super::records::{AnalysisCategory, DamageAnalysis, LogAnalysis, RepairAnalysis};
use crate::events::{CombatRecord, DamageEvent, Direction, RepairEvent, RepairType};

/// Insertion-ordered map from grouping key to aggregate.
struct Grouped<A> {
    index: HashMap<String, usize>,
    entries: Vec<A>,
}

impl<A> Grouped<A> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    fn get_or_insert_with(&mut self, key: &str, init: impl FnOnce() -> A) -> &mut A {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                self.entries.push(init());
                let idx = self.entries.len() - 1;
                self.index.insert(key.to_string(), idx);
                idx
            }
        };
        &mut self.entries[idx]
    }

    fn into_vec(self) -> Vec<A> {
        self.entries
    }
}

fn group_damage<F>(
    events: &[DamageEvent],
    category: AnalysisCategory,
    key_of: F,
) -> Grouped<DamageAnalysis>
where
    F: Fn(&DamageEvent) -> Option<String>,
{
    let mut grouped = Grouped::new();
    for event in events.iter().filter(|e| e.damage > 0) {
        let Some(key) = key_of(event) else {
            continue;
        };
        let analysis = grouped.get_or_insert_with(&key, || {
            DamageAnalysis::new(&key, category, &event.event_time)
        });
        analysis.update(event);

        if category == AnalysisCategory::TimeBucket && !event.location.is_empty() {
            analysis.location = Some(event.location.clone());
        }
    }
    grouped
}

/// Sum of damage dealt and damage taken.
pub fn total_damage(events: &[DamageEvent]) -> (i64, i64) {
    events
        .iter()
        .fold((0, 0), |(done, taken), e| match e.direction {
            Direction::To => (done.saturating_add(e.damage), taken),
            Direction::From => (done, taken.saturating_add(e.damage)),
        })
}

pub fn enemy_analysis(events: &[DamageEvent]) -> Vec<DamageAnalysis> {
    group_damage(events, AnalysisCategory::Enemy, |e| Some(e.entity.clone())).into_vec()
}

/// Per-weapon statistics; hits without a named weapon are left out.
pub fn weapon_analysis(events: &[DamageEvent]) -> Vec<DamageAnalysis> {
    group_damage(events, AnalysisCategory::Weapon, |e| {
        (!e.weapon.is_empty()).then(|| e.weapon.clone())
    })
    .into_vec()
}

/// Per-10-second statistics, each bucket remembering where it happened.
pub fn time_analysis(events: &[DamageEvent]) -> Vec<DamageAnalysis> {
    group_damage(events, AnalysisCategory::TimeBucket, |e| {
        Some(time_bucket(&e.event_time))
    })
    .into_vec()
}

/// `2024.03.14 19:22:05` -> `2024.03.14 19:22:00`.
///
/// Relies on the fixed-width client timestamp; a different format would
/// produce different buckets.
pub fn time_bucket(event_time: &str) -> String {
    let mut bucket = event_time.to_string();
    if bucket.pop().is_some() {
        bucket.push('0');
    }
    bucket
}

pub fn repair_analysis(events: &[RepairEvent]) -> Vec<RepairAnalysis> {
    let mut grouped = Grouped::new();
    for event in events.iter().filter(|e| e.repaired > 0) {
        grouped
            .get_or_insert_with(&event.entity, || {
                RepairAnalysis::new(&event.entity, &event.ship, &event.event_time)
            })
            .update(event);
    }
    grouped.into_vec()
}

/// Heaviest single hit in `direction`; the earliest wins a tie.
pub fn max_damage(events: &[DamageEvent], direction: Direction) -> Option<&DamageEvent> {
    let mut best: Option<&DamageEvent> = None;
    for event in events.iter().filter(|e| e.direction == direction) {
        if best.is_none_or(|b| event.damage > b.damage) {
            best = Some(event);
        }
    }
    best
}

/// Location of the latest located combat record, damage or repair, or an
/// empty string. On equal timestamps the repair wins.
pub fn last_combat_system(damage: &[DamageEvent], repairs: &[RepairEvent]) -> String {
    [last_located(damage), last_located(repairs)]
        .into_iter()
        .flatten()
        .max_by(|a, b| a.0.cmp(b.0))
        .map(|(_, location)| location.to_string())
        .unwrap_or_default()
}

// (event_time, location) of the last record that has a location
fn last_located<E: CombatRecord>(events: &[E]) -> Option<(&str, &str)> {
    events
        .iter()
        .rev()
        .find(|e| !e.location().is_empty())
        .map(|e| (e.event_time(), e.location()))
}

/// Total repaired of one type, or `None` when no such repair happened.
pub fn total_repaired(events: &[RepairEvent], rep_type: RepairType) -> Option<i64> {
    events
        .iter()
        .filter(|e| e.rep_type == rep_type)
        .map(|e| e.repaired)
        .reduce(i64::saturating_add)
}

/// Set `start`/`end` to the earliest and latest event over both lists.
/// Leaves them untouched when there are no events at all.
pub fn update_combat_time(
    damage_events: &[DamageEvent],
    repair_events: &[RepairEvent],
    analysis: &mut LogAnalysis,
) {
    let times = damage_events
        .iter()
        .map(|e| e.event_time())
        .chain(repair_events.iter().map(|e| e.event_time()));

    let mut bounds: Option<(&str, &str)> = None;
    for time in times {
        bounds = Some(match bounds {
            None => (time, time),
            Some((start, end)) => (start.min(time), end.max(time)),
        });
    }

    if let Some((start, end)) = bounds {
        analysis.start = Some(start.to_string());
        analysis.end = Some(end.to_string());
    }
}
