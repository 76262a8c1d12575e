//! Catalog loading and normalization.
//!
//! Parses a CommunityDragon-shaped game-data dump (`sets.<N>.champions` /
//! `sets.<N>.traits`), selects the highest-numbered set, and normalizes the
//! records into [`Catalog`]. The dump is read from a local file; fetching it
//! is someone else's job.
//!
//! Records missing an api_name are dropped during normalization. Units keep
//! their icon path untouched; the optimizer never looks at it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::types::{Catalog, Synergy, Unit};

// ── Raw dump shapes (serde only, never leaves this module) ──────────

#[derive(Deserialize)]
struct RawData {
    #[serde(default)]
    sets: HashMap<String, RawSet>,
}

#[derive(Deserialize)]
struct RawSet {
    #[serde(default)]
    champions: Vec<RawChampion>,
    #[serde(default)]
    traits: Vec<RawTrait>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChampion {
    api_name: Option<String>,
    name: Option<String>,
    #[serde(default)]
    cost: i32,
    #[serde(default)]
    traits: Vec<String>,
    square_icon: Option<String>,
    icon: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTrait {
    api_name: Option<String>,
    name: Option<String>,
    #[serde(default)]
    effects: Vec<RawEffect>,
    icon: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEffect {
    #[serde(default)]
    min_units: i32,
}

// ── Loading ─────────────────────────────────────────────────────────

/// Load and normalize a catalog dump. Returns `None` (with a printed
/// reason) if the file is unreadable, unparseable, or contains no set.
pub fn load_catalog(path: &Path) -> Option<Catalog> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read catalog {}: {}", path.display(), e);
            return None;
        }
    };
    let raw: RawData = match serde_json::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to parse catalog {}: {}", path.display(), e);
            return None;
        }
    };
    let catalog = normalize(raw);
    if catalog.is_none() {
        eprintln!("Catalog {} contains no usable set", path.display());
    }
    catalog
}

/// Pick the highest-numbered set and normalize its records.
fn normalize(raw: RawData) -> Option<Catalog> {
    let (set_key, set) = raw
        .sets
        .into_iter()
        .filter_map(|(k, v)| k.parse::<u32>().ok().map(|n| (n, v)))
        .max_by_key(|&(n, _)| n)?;

    let units = set
        .champions
        .into_iter()
        .filter_map(|c| {
            let api_name = c.api_name?;
            Some(Unit {
                name: c.name.unwrap_or_else(|| api_name.clone()),
                api_name,
                cost: c.cost,
                traits: c.traits,
                icon: c.square_icon.or(c.icon),
            })
        })
        .collect();

    let synergies = set
        .traits
        .into_iter()
        .filter_map(|t| {
            let api_name = t.api_name?;
            Some(Synergy {
                name: t.name.unwrap_or_else(|| api_name.clone()),
                api_name,
                thresholds: t.effects.iter().map(|e| e.min_units).collect(),
                icon: t.icon,
            })
        })
        .collect();

    Some(Catalog {
        set_key,
        units,
        synergies,
    })
}

/// Load an origin allow-list override: a JSON array of display names.
pub fn load_origins(path: &Path) -> Option<Vec<String>> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read origins {}: {}", path.display(), e);
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(names) => Some(names),
        Err(e) => {
            eprintln!("Failed to parse origins {}: {}", path.display(), e);
            None
        }
    }
}
