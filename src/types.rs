//! Core data structures: catalog records, the shared recommendation context,
//! and result types.
//!
//! The central type is [`CompContext`], which holds the normalized catalog,
//! the origin allow-list, and the synergy lookup table. It is built once by
//! [`crate::catalog`] and then shared immutably (`Arc<CompContext>`) across:
//! - Rayon workers during the parallel restart search
//! - Axum HTTP handlers during API serving
//!
//! Teams are represented as `Vec<u32>` of indices into `catalog.units`, with
//! slot 0 always holding the anchor. Index equality is unit identity.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

/// One playable unit from the catalog. Immutable reference data; the search
/// never mutates units, only index vectors pointing at them.
#[derive(Clone, Debug)]
pub struct Unit {
    /// Stable unique key, e.g. `TFT13_Ryze`.
    pub api_name: String,
    /// Display name.
    pub name: String,
    /// Cost tier. Zero-cost units never enter a candidate pool.
    pub cost: i32,
    /// Keys of the synergies this unit grants.
    pub traits: Vec<String>,
    /// Icon path, passed through untouched for display.
    pub icon: Option<String>,
}

/// One synergy (trait) definition.
#[derive(Clone, Debug)]
pub struct Synergy {
    pub api_name: String,
    pub name: String,
    /// Minimum-unit counts of the activation thresholds, in catalog order.
    /// Only "any threshold met" matters downstream; tier magnitude is not
    /// consumed by any scorer.
    pub thresholds: Vec<i32>,
    pub icon: Option<String>,
}

impl Synergy {
    /// A synergy with exactly one threshold of minimum count 1. Such traits
    /// activate for any single unit carrying them and are excluded from the
    /// active counts unless they are origins.
    pub fn is_singleton(&self) -> bool {
        self.thresholds.len() == 1 && self.thresholds[0] == 1
    }
}

/// Normalized catalog for one dataset "set".
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub set_key: u32,
    pub units: Vec<Unit>,
    pub synergies: Vec<Synergy>,
}

/// Owned emblem counts keyed by synergy display name. Non-positive entries
/// are treated as absent everywhere. BTreeMap keeps iteration deterministic,
/// which keeps the evaluator a pure function of its inputs.
pub type EmblemCounts = BTreeMap<String, i32>;

/// Shared recommendation context: catalog + origin allow-list + lookups.
pub struct CompContext {
    pub catalog: Catalog,
    /// Display names of synergies that count as origins.
    pub origins: HashSet<String>,
    /// Synergy lookup by api_name or display name (first catalog entry wins).
    synergy_index: HashMap<String, usize>,
}

impl CompContext {
    /// Build the context from a catalog and an origin allow-list.
    pub fn new(catalog: Catalog, origins: HashSet<String>) -> Self {
        let mut synergy_index = HashMap::with_capacity(catalog.synergies.len() * 2);
        for (i, syn) in catalog.synergies.iter().enumerate() {
            synergy_index.entry(syn.api_name.clone()).or_insert(i);
            synergy_index.entry(syn.name.clone()).or_insert(i);
        }
        Self {
            catalog,
            origins,
            synergy_index,
        }
    }

    /// Build with the compiled-in default origin list.
    pub fn with_default_origins(catalog: Catalog) -> Self {
        let origins = crate::constants::DEFAULT_ORIGINS
            .iter()
            .map(|s| s.to_string())
            .collect();
        Self::new(catalog, origins)
    }

    /// Look up a synergy by api_name or display name.
    pub fn synergy(&self, key: &str) -> Option<&Synergy> {
        self.synergy_index
            .get(key)
            .map(|&i| &self.catalog.synergies[i])
    }

    /// Whether the named synergy is an origin.
    pub fn is_origin(&self, name: &str) -> bool {
        self.origins.contains(name)
    }

    #[inline(always)]
    pub fn unit(&self, idx: u32) -> &Unit {
        &self.catalog.units[idx as usize]
    }

    /// First unit whose api_name contains `query` (case-insensitive).
    pub fn find_unit(&self, query: &str) -> Option<u32> {
        let q = query.to_lowercase();
        self.catalog
            .units
            .iter()
            .position(|u| u.api_name.to_lowercase().contains(&q))
            .map(|i| i as u32)
    }

    /// Candidate pool for a given anchor: every unit except the anchor
    /// itself, zero-cost units, and units granting no synergies.
    pub fn candidate_pool(&self, anchor: u32) -> Vec<u32> {
        self.catalog
            .units
            .iter()
            .enumerate()
            .filter(|&(i, u)| i as u32 != anchor && u.cost > 0 && !u.traits.is_empty())
            .map(|(i, _)| i as u32)
            .collect()
    }
}

/// One synergy that met a threshold, with its raw count.
///
/// This list includes non-origin singletons even though they are excluded
/// from the active counts; display still wants them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActivatedSynergy {
    pub name: String,
    pub count: i32,
    pub is_origin: bool,
    pub icon: Option<String>,
}

/// Evaluator output for one team + emblem allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TraitDetails {
    /// Activated synergies minus non-origin singletons.
    pub active_count: i32,
    /// Subset of `active_count` that are origins. Always <= active_count.
    pub active_origins: i32,
    /// Summed cost of the deduplicated units.
    pub total_cost: i32,
    pub activated: Vec<ActivatedSynergy>,
}

/// One ranked recommendation.
#[derive(Clone, Debug)]
pub struct CompResult {
    /// Unit indices, anchor first.
    pub team: Vec<u32>,
    pub score: f64,
    pub details: TraitDetails,
    /// True for the appended emblem-focused extra result.
    pub emblem_comp: bool,
}

/// Wire/display view of a unit.
#[derive(Clone, Debug, Serialize)]
pub struct UnitView {
    pub api_name: String,
    pub name: String,
    pub cost: i32,
    pub icon: Option<String>,
}

/// Wire/display view of a recommendation.
#[derive(Clone, Debug, Serialize)]
pub struct CompView {
    pub units: Vec<UnitView>,
    pub score: f64,
    pub active_origins: i32,
    pub active_count: i32,
    pub total_cost: i32,
    pub activated: Vec<ActivatedSynergy>,
    pub emblem_comp: bool,
}

impl CompResult {
    /// Resolve unit indices into a serializable view.
    pub fn view(&self, ctx: &CompContext) -> CompView {
        CompView {
            units: self
                .team
                .iter()
                .map(|&i| {
                    let u = ctx.unit(i);
                    UnitView {
                        api_name: u.api_name.clone(),
                        name: u.name.clone(),
                        cost: u.cost,
                        icon: u.icon.clone(),
                    }
                })
                .collect(),
            score: self.score,
            active_origins: self.details.active_origins,
            active_count: self.details.active_count,
            total_cost: self.details.total_cost,
            activated: self.details.activated.clone(),
            emblem_comp: self.emblem_comp,
        }
    }
}

/// Degenerate-input failures surfaced before any search runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecommendError {
    /// Candidate pool cannot fill `team_size - 1` non-anchor slots.
    PoolTooSmall { needed: usize, available: usize },
}

impl std::fmt::Display for RecommendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommendError::PoolTooSmall { needed, available } => write!(
                f,
                "candidate pool too small: need {} eligible units, have {}",
                needed, available
            ),
        }
    }
}

impl std::error::Error for RecommendError {}
