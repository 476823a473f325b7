//! Axum routes for the passthrough endpoint.

use axum::routing::post;
use axum::Router;

use super::handlers::{forward_completion, ForwardAppState};

/// Routes relative to `/api`.
///
/// - POST /api/sonar - Relay a chat-completions request
pub fn forward_routes() -> Router<ForwardAppState> {
    Router::new().route("/sonar", post(forward_completion))
}

/// Passthrough routes under /api with state attached.
pub fn forward_router(state: ForwardAppState) -> Router {
    Router::new().nest("/api", forward_routes()).with_state(state)
}
