//! Property-based tests for the evaluator, scoring, and team signatures.

use proptest::prelude::*;

use comprec::aggregate::team_signature;
use comprec::evaluator::evaluate_team;
use comprec::scoring::{emblem_score, generic_score};
use comprec::types::{Catalog, CompContext, EmblemCounts, Synergy, Unit};

const UNIT_COUNT: u32 = 12;

/// Fixed catalog: 12 units across four synergies plus a singleton, two of
/// the synergies on the origin list, and one synergy ("Targon") that no
/// unit grants — only emblems can activate it.
fn make_ctx() -> CompContext {
    let traits_per_unit: [&[&str]; 12] = [
        &["Demacia"],
        &["Demacia"],
        &["Demacia", "Sniper"],
        &["Demacia", "Dragon"],
        &["Noxus"],
        &["Noxus"],
        &["Noxus", "Sniper"],
        &["Sniper"],
        &["Sniper"],
        &["Dragon"],
        &[],
        &["Ghost"], // not in the synergy catalog
    ];
    let units = traits_per_unit
        .iter()
        .enumerate()
        .map(|(i, traits)| Unit {
            api_name: format!("u{i}"),
            name: format!("u{i}"),
            cost: (i as i32 % 5) + 1,
            traits: traits.iter().map(|s| s.to_string()).collect(),
            icon: None,
        })
        .collect();
    let synergies = vec![
        Synergy {
            api_name: "TFT_Demacia".to_string(),
            name: "Demacia".to_string(),
            thresholds: vec![2, 4],
            icon: None,
        },
        Synergy {
            api_name: "TFT_Noxus".to_string(),
            name: "Noxus".to_string(),
            thresholds: vec![2],
            icon: None,
        },
        Synergy {
            api_name: "TFT_Sniper".to_string(),
            name: "Sniper".to_string(),
            thresholds: vec![2, 4],
            icon: None,
        },
        Synergy {
            api_name: "TFT_Dragon".to_string(),
            name: "Dragon".to_string(),
            thresholds: vec![1],
            icon: None,
        },
        Synergy {
            api_name: "TFT_Targon".to_string(),
            name: "Targon".to_string(),
            thresholds: vec![2],
            icon: None,
        },
    ];
    CompContext::new(
        Catalog {
            set_key: 13,
            units,
            synergies,
        },
        ["Demacia", "Noxus", "Targon"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    )
}

/// Teams of 1-10 slots, duplicates allowed (the evaluator must handle them).
fn team_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(0..UNIT_COUNT, 1..=10)
}

/// Emblem maps over known and unknown names, including non-positive counts.
fn emblem_strategy() -> impl Strategy<Value = EmblemCounts> {
    prop::collection::btree_map(
        prop::sample::select(vec!["Demacia", "Noxus", "Sniper", "Dragon", "Nope"])
            .prop_map(String::from),
        -2..=3i32,
        0..=4,
    )
}

proptest! {
    // Origins are a subset of counted active synergies.
    #[test]
    fn origins_never_exceed_active_count(team in team_strategy(), emblems in emblem_strategy()) {
        let ctx = make_ctx();
        let d = evaluate_team(&ctx, &team, &emblems);
        prop_assert!(d.active_origins >= 0);
        prop_assert!(d.active_origins <= d.active_count);
    }

    // Scoring a team with duplicate units equals scoring the deduplicated team.
    #[test]
    fn dedup_is_idempotent(team in team_strategy(), emblems in emblem_strategy()) {
        let ctx = make_ctx();
        let mut deduped = Vec::new();
        for &u in &team {
            if !deduped.contains(&u) {
                deduped.push(u);
            }
        }
        let a = evaluate_team(&ctx, &team, &emblems);
        let b = evaluate_team(&ctx, &deduped, &emblems);
        prop_assert_eq!(a, b);
    }

    // The evaluator and both scorers are pure.
    #[test]
    fn evaluation_and_scoring_deterministic(team in team_strategy(), emblems in emblem_strategy()) {
        let ctx = make_ctx();
        let d1 = evaluate_team(&ctx, &team, &emblems);
        let d2 = evaluate_team(&ctx, &team, &emblems);
        prop_assert_eq!(&d1, &d2);
        prop_assert_eq!(generic_score(&d1), generic_score(&d2));
        prop_assert_eq!(emblem_score(&d1, &emblems), emblem_score(&d2, &emblems));
    }

    // Permuting a team never changes its dedup signature.
    #[test]
    fn signature_stable_under_permutation(
        (team, shuffled) in team_strategy().prop_flat_map(|t| {
            let len = t.len();
            (Just(t), prop::collection::vec(0..len, len * 2))
        }).prop_map(|(mut t, swaps)| {
            let orig = t.clone();
            let len = t.len();
            for (i, &j) in swaps.iter().enumerate() {
                t.swap(i % len, j);
            }
            (orig, t)
        })
    ) {
        prop_assert_eq!(team_signature(&team), team_signature(&shuffled));
    }

    // An emblem-boosted synergy activates with no unit granting it, at the
    // emblem count, for any team whatsoever.
    #[test]
    fn emblems_activate_without_carriers(team in team_strategy()) {
        let ctx = make_ctx();
        let mut emblems = EmblemCounts::new();
        emblems.insert("Targon".to_string(), 2);
        let d = evaluate_team(&ctx, &team, &emblems);
        let targon = d.activated.iter().find(|a| a.name == "Targon");
        prop_assert!(targon.is_some());
        prop_assert_eq!(targon.unwrap().count, 2);
        prop_assert!(targon.unwrap().is_origin);
    }

    // Generic score is lexicographic: origins dominate counts dominate cost,
    // for any values reachable from a 20-slot roster.
    #[test]
    fn generic_score_lexicographic(
        origins_a in 0..10i32, count_a in 0..40i32, cost_a in 0..100i32,
        origins_b in 0..10i32, count_b in 0..40i32, cost_b in 0..100i32,
    ) {
        use comprec::types::TraitDetails;
        let a = TraitDetails { active_origins: origins_a, active_count: count_a, total_cost: cost_a, activated: vec![] };
        let b = TraitDetails { active_origins: origins_b, active_count: count_b, total_cost: cost_b, activated: vec![] };
        let (sa, sb) = (generic_score(&a), generic_score(&b));
        if origins_a != origins_b {
            prop_assert_eq!(sa > sb, origins_a > origins_b);
        } else if count_a != count_b {
            prop_assert_eq!(sa > sb, count_a > count_b);
        } else if cost_a != cost_b {
            prop_assert_eq!(sa > sb, cost_a > cost_b);
        }
    }
}
