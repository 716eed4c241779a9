//! Response cache management endpoints.

use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use tracing::info;

use crate::services::CacheStats;
use crate::AppState;

#[derive(Serialize)]
struct StatsResponse {
    success: bool,
    cache: CacheStats,
}

#[derive(Serialize)]
struct FlushResponse {
    success: bool,
    message: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats))
        .route("/flush", delete(flush))
}

async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        success: true,
        cache: state.analysis.cache_stats(),
    })
}

async fn flush(State(state): State<AppState>) -> Json<FlushResponse> {
    state.analysis.flush_cache();
    info!("Response cache flushed");
    Json(FlushResponse {
        success: true,
        message: "Cache cleared",
    })
}
