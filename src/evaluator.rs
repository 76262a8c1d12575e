//! Synergy evaluation: which synergies a team activates, and at what counts.
//!
//! This is the inner loop of the search — called once per scored candidate
//! team, thousands of times per run batch. It is a pure function of
//! (team, catalog, emblems); no hidden state, which is what makes the
//! hill-climber's strict-improvement rule testable.

use std::collections::HashMap;

use crate::types::{ActivatedSynergy, CompContext, EmblemCounts, TraitDetails};

/// First-seen-ordered counter. Iteration order must be deterministic for
/// identical inputs, so a bare HashMap won't do for the tally itself.
#[derive(Default)]
struct Tally {
    counts: Vec<(String, i32)>,
    slot: HashMap<String, usize>,
}

impl Tally {
    fn add(&mut self, key: &str, by: i32) {
        if let Some(&i) = self.slot.get(key) {
            self.counts[i].1 += by;
        } else {
            self.slot.insert(key.to_string(), self.counts.len());
            self.counts.push((key.to_string(), by));
        }
    }
}

/// Evaluate a team against the synergy catalog.
///
/// Steps:
/// 1. Deduplicate units by identity, preserving first occurrence; sum cost.
/// 2. Tally a per-synergy counter over the surviving units' trait keys.
/// 3. Add owned emblem counts on top — emblems are not unit-gated.
/// 4. A synergy is activated when its counter meets any threshold. Synergies
///    missing from the catalog, or defining no thresholds, are skipped.
/// 5. Activated non-origin singletons are reported but excluded from
///    `active_count` / `active_origins`.
///
/// A team with no matching synergies yields all-zero counts and an empty
/// activated list; that is a valid result, not a failure.
pub fn evaluate_team(ctx: &CompContext, team: &[u32], emblems: &EmblemCounts) -> TraitDetails {
    let mut total_cost = 0;
    let mut seen: Vec<u32> = Vec::with_capacity(team.len());
    for &idx in team {
        if !seen.contains(&idx) {
            seen.push(idx);
            total_cost += ctx.unit(idx).cost;
        }
    }

    let mut tally = Tally::default();
    for &idx in &seen {
        for key in &ctx.unit(idx).traits {
            tally.add(key, 1);
        }
    }
    for (name, &n) in emblems {
        if n > 0 {
            tally.add(name, n);
        }
    }

    let mut details = TraitDetails {
        total_cost,
        ..TraitDetails::default()
    };

    for (key, count) in tally.counts {
        let Some(syn) = ctx.synergy(&key) else {
            continue;
        };
        if syn.thresholds.is_empty() {
            continue;
        }
        if !syn.thresholds.iter().any(|&min| count >= min) {
            continue;
        }

        let is_origin = ctx.is_origin(&syn.name);
        if !(syn.is_singleton() && !is_origin) {
            details.active_count += 1;
            if is_origin {
                details.active_origins += 1;
            }
        }

        details.activated.push(ActivatedSynergy {
            name: syn.name.clone(),
            count,
            is_origin,
            icon: syn.icon.clone(),
        });
    }

    details
}
