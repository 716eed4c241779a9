//! Technical analysis endpoint.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::AppState;

/// Query parameters for `/api/ta`.
#[derive(Debug, Deserialize)]
pub struct TaQuery {
    pub ticker: Option<String>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_ta))
}

/// Full analysis for one ticker. `X-Cache` reports whether it was cached.
async fn get_ta(State(state): State<AppState>, Query(query): Query<TaQuery>) -> Result<Response> {
    let raw = query
        .ticker
        .ok_or_else(|| AppError::BadRequest("Ticker parameter required".to_string()))?;

    let (report, status) = state.analysis.report(&raw).await?;

    Ok(([("X-Cache", status.as_str())], Json(&*report)).into_response())
}
