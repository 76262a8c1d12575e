//! The two search objectives. Pure functions over [`TraitDetails`];
//! higher is better, ties are broken by the caller (first found wins,
//! since the climber accepts on strict `>` only).

use crate::constants::*;
use crate::types::{EmblemCounts, TraitDetails};

/// Generic objective: origins first, then overall synergy breadth, then
/// total cost as a tiebreak.
pub fn generic_score(details: &TraitDetails) -> f64 {
    details.active_origins as f64 * ORIGIN_WEIGHT
        + details.active_count as f64 * SYNERGY_WEIGHT
        + details.total_cost as f64 * COST_WEIGHT
}

/// Emblem-focused objective: a dominant bounty per owned emblem trait that
/// is actually active, plus the trait's raw count, then origins and breadth
/// at much lower weight. Activating every owned emblem beats any amount of
/// general breadth.
pub fn emblem_score(details: &TraitDetails, emblems: &EmblemCounts) -> f64 {
    let mut score = 0.0;
    for (name, &count) in emblems {
        if count <= 0 {
            continue;
        }
        if let Some(active) = details.activated.iter().find(|a| &a.name == name) {
            score += EMBLEM_HIT_WEIGHT + active.count as f64 * EMBLEM_COUNT_WEIGHT;
        }
    }
    score
        + details.active_origins as f64 * EMBLEM_ORIGIN_WEIGHT
        + details.active_count as f64 * EMBLEM_SYNERGY_WEIGHT
}
