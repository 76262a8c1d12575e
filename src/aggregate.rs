//! Ranking and deduplication of run results.
//!
//! Thousands of restarts converge on a handful of distinct comps; this
//! module collapses them to the top few by canonical unit-set signature and
//! appends the emblem-focused winner (when one was searched) as a flagged
//! extra that is deliberately NOT deduplicated against the generic list.

use std::collections::HashSet;

use crate::constants::RESULT_COUNT;
use crate::evaluator::evaluate_team;
use crate::search::RunResult;
use crate::types::{CompContext, CompResult, EmblemCounts};

/// Canonical order-independent, duplicate-insensitive team signature:
/// the sorted set of unit identities.
pub fn team_signature(team: &[u32]) -> Vec<u32> {
    let mut sig = team.to_vec();
    sig.sort_unstable();
    sig.dedup();
    sig
}

/// Rank run results, deduplicate by signature, truncate to
/// [`RESULT_COUNT`], and append the emblem-focused best as a flagged extra.
///
/// Sorting is descending by score; the first occurrence of each signature
/// (the highest-scoring one) is kept. The returned list has at most
/// `RESULT_COUNT + 1` entries.
pub fn aggregate(
    ctx: &CompContext,
    emblems: &EmblemCounts,
    mut runs: Vec<RunResult>,
    emblem_best: Option<RunResult>,
) -> Vec<CompResult> {
    runs.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut seen: HashSet<Vec<u32>> = HashSet::new();
    let mut results: Vec<CompResult> = Vec::with_capacity(RESULT_COUNT + 1);

    for run in runs {
        if results.len() == RESULT_COUNT {
            break;
        }
        if seen.insert(team_signature(&run.team)) {
            let details = evaluate_team(ctx, &run.team, emblems);
            results.push(CompResult {
                team: run.team,
                score: run.score,
                details,
                emblem_comp: false,
            });
        }
    }

    if let Some(run) = emblem_best {
        let details = evaluate_team(ctx, &run.team, emblems);
        results.push(CompResult {
            team: run.team,
            score: run.score,
            details,
            emblem_comp: true,
        });
    }

    results
}
