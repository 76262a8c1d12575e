//! Search parameters, scoring weights, and roster bounds.
//!
//! The scoring weights form a lexicographic hierarchy: a single extra active
//! origin always outweighs any number of extra active synergies, which in
//! turn always outweigh any total-cost difference. Cost is a low-weight
//! tiebreak that nudges the search toward higher-cost units without ever
//! overriding a synergy-count difference (max roster cost is well below
//! `SYNERGY_WEIGHT / COST_WEIGHT`).

/// Independent random restarts per search invocation.
pub const DEFAULT_RESTARTS: usize = 2500;

/// Single-slot mutation attempts per restart.
pub const DEFAULT_STEPS: usize = 200;

/// Ranked comps kept after deduplication (the emblem comp is appended on top).
pub const RESULT_COUNT: usize = 5;

/// Roster-size bounds enforced at the CLI/API boundary.
pub const MIN_TEAM_SIZE: usize = 9;
pub const MAX_TEAM_SIZE: usize = 20;
pub const DEFAULT_TEAM_SIZE: usize = 9;

// ── Generic objective weights ───────────────────────────────────────

/// Per active origin.
pub const ORIGIN_WEIGHT: f64 = 10_000.0;
/// Per counted active synergy.
pub const SYNERGY_WEIGHT: f64 = 100.0;
/// Per point of total roster cost (tiebreak only).
pub const COST_WEIGHT: f64 = 0.1;

// ── Emblem-focused objective weights ────────────────────────────────

/// Per owned emblem trait that is active in the comp. Dominates everything
/// else so the search activates every owned emblem before chasing breadth.
pub const EMBLEM_HIT_WEIGHT: f64 = 100_000.0;
/// Per unit of the activated emblem trait's raw count.
pub const EMBLEM_COUNT_WEIGHT: f64 = 100.0;
/// Per active origin (secondary to emblem hits).
pub const EMBLEM_ORIGIN_WEIGHT: f64 = 1_000.0;
/// Per counted active synergy (tertiary).
pub const EMBLEM_SYNERGY_WEIGHT: f64 = 10.0;

/// Default origin allow-list.
///
/// The catalog data does not label origin vs. class, so the distinction is
/// configuration. This list covers the current set; pass a different list to
/// [`crate::types::CompContext::new`] for other rule-sets.
pub const DEFAULT_ORIGINS: [&str; 13] = [
    "Bilgewater",
    "Demacia",
    "Freljord",
    "Ionia",
    "Ixtal",
    "Noxus",
    "Piltover",
    "Shadow Isles",
    "Shurima",
    "Targon",
    "Void",
    "Yordle",
    "Zaun",
];
