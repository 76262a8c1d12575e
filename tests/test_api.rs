//! Integration tests for the HTTP API endpoints.
//!
//! Uses axum's oneshot pattern (via tower::ServiceExt) — no TCP binding
//! needed. The shared context is a small hand-built catalog, so the searches
//! stay fast even with the full pipeline running.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use comprec::server::create_router;
use comprec::types::{Catalog, CompContext, Synergy, Unit};

fn unit(api: &str, cost: i32, traits: &[&str]) -> Unit {
    Unit {
        api_name: api.to_string(),
        name: api.to_string(),
        cost,
        traits: traits.iter().map(|s| s.to_string()).collect(),
        icon: None,
    }
}

fn setup_ctx() -> Arc<CompContext> {
    // Anchor plus 12 pool units across four origins of three units each.
    let mut units = vec![unit("TFT13_Ryze", 5, &["Wanderer"])];
    for origin in ["Demacia", "Noxus", "Ionia", "Zaun"] {
        for j in 0..3i32 {
            units.push(unit(&format!("TFT13_{origin}{j}"), 1 + j, &[origin]));
        }
    }
    let mut synergies: Vec<Synergy> = ["Demacia", "Noxus", "Ionia", "Zaun"]
        .iter()
        .map(|name| Synergy {
            api_name: format!("TFT13_{name}"),
            name: name.to_string(),
            thresholds: vec![2, 4],
            icon: None,
        })
        .collect();
    synergies.push(Synergy {
        api_name: "TFT13_Wanderer".to_string(),
        name: "Wanderer".to_string(),
        thresholds: vec![1],
        icon: None,
    });

    let catalog = Catalog {
        set_key: 13,
        units,
        synergies,
    };
    Arc::new(CompContext::with_default_origins(catalog))
}

// Shared context across tests; each test gets its own Router.
static CTX: std::sync::OnceLock<Arc<CompContext>> = std::sync::OnceLock::new();

fn get_ctx() -> Arc<CompContext> {
    CTX.get_or_init(setup_ctx).clone()
}

fn app() -> axum::Router {
    create_router(get_ctx())
}

/// Parse response body as JSON.
async fn body_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn recommend_request(body: serde_json::Value) -> Request<Body> {
    Request::post("/recommend")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// ── GET /health ─────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_200() {
    let resp = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["status"], "OK");
}

// ── GET /catalog ────────────────────────────────────────────────────

#[tokio::test]
async fn catalog_reports_counts() {
    let resp = app()
        .oneshot(Request::get("/catalog").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["set"], 13);
    assert_eq!(json["units"], 13);
    assert_eq!(json["traits"], 5);
}

// ── POST /recommend ─────────────────────────────────────────────────

#[tokio::test]
async fn recommend_returns_ranked_comps() {
    let resp = app()
        .oneshot(recommend_request(serde_json::json!({
            "anchor": "ryze",
            "team_size": 9,
            "restarts": 40,
            "steps": 60,
            "seed": 7,
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    let results = json["results"].as_array().unwrap();
    assert!(!results.is_empty());
    for r in results {
        let units = r["units"].as_array().unwrap();
        assert_eq!(units.len(), 9);
        assert_eq!(units[0]["api_name"], "TFT13_Ryze");
        assert!(r["score"].as_f64().unwrap() > 0.0);
        assert!(r["active_origins"].as_i64().unwrap() <= r["active_count"].as_i64().unwrap());
    }
}

#[tokio::test]
async fn recommend_with_emblems_appends_flagged_extra() {
    let resp = app()
        .oneshot(recommend_request(serde_json::json!({
            "anchor": "ryze",
            "team_size": 9,
            "emblems": { "Demacia": 1 },
            "restarts": 40,
            "steps": 60,
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    let results = json["results"].as_array().unwrap();
    assert!(results.len() >= 2);
    assert_eq!(results.last().unwrap()["emblem_comp"], true);
}

#[tokio::test]
async fn recommend_rejects_out_of_range_team_size() {
    let resp = app()
        .oneshot(recommend_request(serde_json::json!({
            "anchor": "ryze",
            "team_size": 5,
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("team_size"));
}

#[tokio::test]
async fn recommend_unknown_anchor_yields_empty_list() {
    let resp = app()
        .oneshot(recommend_request(serde_json::json!({
            "anchor": "nosuchunit",
            "team_size": 9,
            "restarts": 5,
            "steps": 5,
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["results"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn recommend_oversized_team_for_pool_is_a_client_error() {
    // team_size 14 needs 13 pool units; only 12 exist.
    let resp = app()
        .oneshot(recommend_request(serde_json::json!({
            "anchor": "ryze",
            "team_size": 14,
            "restarts": 5,
            "steps": 5,
        })))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("pool"));
}
