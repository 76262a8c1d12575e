//! Randomized local search: random-restart hill-climbing over rosters.
//!
//! Each run is independent: start from a uniformly random team around the
//! anchor, then repeatedly propose a single-slot swap and accept it only if
//! it strictly improves the objective. Runs share nothing mutable, so the
//! batch driver fans them out across the rayon pool with one seeded RNG per
//! run (`seed + run_index`), which makes any run reproducible in isolation.
//!
//! Split into three pieces so each is testable on its own:
//! - [`random_team`] — restart initialization
//! - [`propose_swap`] — the neighbor generator
//! - [`hill_climb`] — the greedy acceptance driver

use rand::rngs::SmallRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::constants::{DEFAULT_RESTARTS, DEFAULT_STEPS, DEFAULT_TEAM_SIZE};
use crate::evaluator::evaluate_team;
use crate::scoring::{emblem_score, generic_score};
use crate::types::{CompContext, EmblemCounts};

/// Which objective a search run maximizes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Objective {
    /// Origins, then synergy breadth, then cost.
    Generic,
    /// Activating owned emblem traits above all else.
    EmblemFocus,
}

/// Search configuration. `seed` makes the whole batch reproducible.
/// `team_size` counts the anchor, so it must be at least 2 for the mutation
/// loop to have a slot to work on; the binaries enforce the 9-20 bounds.
#[derive(Clone, Copy, Debug)]
pub struct SearchParams {
    pub restarts: usize,
    pub steps: usize,
    pub team_size: usize,
    pub seed: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            restarts: DEFAULT_RESTARTS,
            steps: DEFAULT_STEPS,
            team_size: DEFAULT_TEAM_SIZE,
            seed: 42,
        }
    }
}

/// Final team and score of one run.
#[derive(Clone, Debug)]
pub struct RunResult {
    /// Unit indices, anchor at slot 0.
    pub team: Vec<u32>,
    pub score: f64,
}

/// Score a team under the given objective.
pub fn score_team(
    ctx: &CompContext,
    team: &[u32],
    emblems: &EmblemCounts,
    objective: Objective,
) -> f64 {
    let details = evaluate_team(ctx, team, emblems);
    match objective {
        Objective::Generic => generic_score(&details),
        Objective::EmblemFocus => emblem_score(&details, emblems),
    }
}

/// Build a restart team: anchor plus `team_size - 1` distinct units sampled
/// without replacement from the pool.
pub fn random_team(anchor: u32, pool: &[u32], team_size: usize, rng: &mut SmallRng) -> Vec<u32> {
    debug_assert!(
        pool.len() >= team_size - 1,
        "pool {} cannot fill {} slots",
        pool.len(),
        team_size - 1
    );
    let mut team = Vec::with_capacity(team_size);
    team.push(anchor);
    for i in sample(rng, pool.len(), team_size - 1) {
        team.push(pool[i]);
    }
    team
}

/// Propose a single-slot mutation: a random non-anchor slot and a random
/// pool unit. Returns `None` if the drawn unit is already anywhere in the
/// team — the step is discarded, not retried.
pub fn propose_swap(team: &[u32], pool: &[u32], rng: &mut SmallRng) -> Option<(usize, u32)> {
    let slot = rng.random_range(1..team.len());
    let unit = pool[rng.random_range(0..pool.len())];
    if team.contains(&unit) {
        None
    } else {
        Some((slot, unit))
    }
}

/// One complete run: random restart, then `steps` greedy mutation attempts.
///
/// A proposed swap is accepted iff its score strictly exceeds the current
/// score, so the sequence of accepted scores within a run is strictly
/// increasing. No downhill moves, no plateau walks — escaping local optima
/// is the next restart's job.
pub fn hill_climb(
    ctx: &CompContext,
    anchor: u32,
    pool: &[u32],
    emblems: &EmblemCounts,
    objective: Objective,
    params: &SearchParams,
    rng: &mut SmallRng,
) -> RunResult {
    debug_assert!(params.team_size >= 2, "team_size must include a pool slot");
    let mut team = random_team(anchor, pool, params.team_size, rng);
    let mut score = score_team(ctx, &team, emblems, objective);

    for _ in 0..params.steps {
        let Some((slot, unit)) = propose_swap(&team, pool, rng) else {
            continue;
        };
        let previous = team[slot];
        team[slot] = unit;
        let candidate = score_team(ctx, &team, emblems, objective);
        if candidate > score {
            score = candidate;
        } else {
            team[slot] = previous;
        }
    }

    RunResult { team, score }
}

/// Run the full restart batch in parallel, one seeded RNG per run.
///
/// Results come back in run order, so a fixed seed gives a fixed output
/// regardless of how rayon schedules the runs.
pub fn run_searches(
    ctx: &CompContext,
    anchor: u32,
    pool: &[u32],
    emblems: &EmblemCounts,
    objective: Objective,
    params: &SearchParams,
) -> Vec<RunResult> {
    (0..params.restarts)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(params.seed.wrapping_add(i as u64));
            hill_climb(ctx, anchor, pool, emblems, objective, params, &mut rng)
        })
        .collect()
}
