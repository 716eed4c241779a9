pub mod cache;
pub mod health;
pub mod ta;

use crate::AppState;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/api/ta", ta::router())
        .nest("/api/cache", cache::router())
}

/// The API router with CORS and request tracing, bound to `state`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers(Any);

    router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
