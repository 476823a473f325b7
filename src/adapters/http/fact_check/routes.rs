//! Axum routes for fact-check and extraction endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{extract_text, fact_check, FactCheckAppState};

/// Routes relative to `/api`.
///
/// - POST /api/fact-check - Run a fact-check against the upstream model
/// - POST /api/extract - Extract relationships from supplied text
pub fn fact_check_routes() -> Router<FactCheckAppState> {
    Router::new()
        .route("/fact-check", post(fact_check))
        .route("/extract", post(extract_text))
}

/// Fact-check routes under /api with state attached.
pub fn fact_check_router(state: FactCheckAppState) -> Router {
    Router::new().nest("/api", fact_check_routes()).with_state(state)
}
