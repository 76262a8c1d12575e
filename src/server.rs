//! Axum HTTP server: stateless endpoints for a comp-builder frontend.
//!
//! The normalized catalog is shared as `Arc<CompContext>` across async
//! handlers. The search itself is CPU-bound, so `/recommend` hands it to a
//! blocking task and lets rayon fan the restarts out.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/catalog` | Set key + unit/trait/origin counts |
//! | POST | `/recommend` | Ranked comps for an anchor unit |

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};

use crate::constants::{MAX_TEAM_SIZE, MIN_TEAM_SIZE};
use crate::recommend::recommend;
use crate::search::SearchParams;
use crate::types::{CompContext, EmblemCounts};

pub type AppState = Arc<CompContext>;

pub fn create_router(ctx: Arc<CompContext>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/catalog", get(handle_get_catalog))
        .route("/recommend", post(handle_recommend))
        .layer(cors)
        .with_state(ctx)
}

// ── Request types ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct RecommendRequest {
    anchor: String,
    #[serde(default = "default_team_size")]
    team_size: usize,
    #[serde(default)]
    emblems: EmblemCounts,
    restarts: Option<usize>,
    steps: Option<usize>,
    seed: Option<u64>,
}

fn default_team_size() -> usize {
    crate::constants::DEFAULT_TEAM_SIZE
}

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": msg })))
}

// ── Handlers ────────────────────────────────────────────────────────

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_get_catalog(State(ctx): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "set": ctx.catalog.set_key,
        "units": ctx.catalog.units.len(),
        "traits": ctx.catalog.synergies.len(),
        "origins": ctx.origins.len(),
    }))
}

async fn handle_recommend(
    State(ctx): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> impl IntoResponse {
    if req.team_size < MIN_TEAM_SIZE || req.team_size > MAX_TEAM_SIZE {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            &format!(
                "team_size must be between {} and {}",
                MIN_TEAM_SIZE, MAX_TEAM_SIZE
            ),
        ));
    }

    let defaults = SearchParams::default();
    let params = SearchParams {
        restarts: req.restarts.unwrap_or(defaults.restarts),
        steps: req.steps.unwrap_or(defaults.steps),
        team_size: req.team_size,
        seed: req.seed.unwrap_or(defaults.seed),
    };

    let search_ctx = ctx.clone();
    let anchor = req.anchor.clone();
    let emblems = req.emblems.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        recommend(&search_ctx, &anchor, &emblems, &params)
    })
    .await
    .map_err(|_| error_response(StatusCode::INTERNAL_SERVER_ERROR, "search task failed"))?;

    match outcome {
        Ok(results) => {
            let views: Vec<_> = results.iter().map(|r| r.view(&ctx)).collect();
            Ok(Json(serde_json::json!({
                "anchor": req.anchor,
                "results": views,
            })))
        }
        Err(e) => Err(error_response(StatusCode::BAD_REQUEST, &e.to_string())),
    }
}
