//! Top-level orchestration: anchor lookup, pool construction, both search
//! passes, and aggregation.

use crate::aggregate::aggregate;
use crate::search::{run_searches, Objective, SearchParams};
use crate::types::{CompContext, CompResult, EmblemCounts, RecommendError};

/// Recommend the top comps around the unit matching `anchor_query`.
///
/// - No unit matches the query → `Ok` with an empty list ("nothing found",
///   distinct from an error).
/// - Candidate pool smaller than `team_size - 1` →
///   [`RecommendError::PoolTooSmall`], before any search runs.
///
/// The generic pass always runs. The emblem-focused pass runs only when the
/// allocation has at least one positive count; its single best run is
/// appended to the ranked list as a flagged extra.
pub fn recommend(
    ctx: &CompContext,
    anchor_query: &str,
    emblems: &EmblemCounts,
    params: &SearchParams,
) -> Result<Vec<CompResult>, RecommendError> {
    let Some(anchor) = ctx.find_unit(anchor_query) else {
        return Ok(Vec::new());
    };

    let pool = ctx.candidate_pool(anchor);
    let needed = params.team_size.saturating_sub(1);
    if pool.len() < needed {
        return Err(RecommendError::PoolTooSmall {
            needed,
            available: pool.len(),
        });
    }

    let runs = run_searches(ctx, anchor, &pool, emblems, Objective::Generic, params);

    let emblem_best = if emblems.values().any(|&n| n > 0) {
        run_searches(ctx, anchor, &pool, emblems, Objective::EmblemFocus, params)
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    } else {
        None
    };

    Ok(aggregate(ctx, emblems, runs, emblem_best))
}
