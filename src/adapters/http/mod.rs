//! HTTP adapters - REST API implementations.
//!
//! Each area has its own HTTP adapter for endpoint exposure; [`app_router`]
//! merges them and adds the shared middleware stack.

pub mod chat;
pub mod error;
pub mod fact_check;
pub mod forward;

pub use chat::{chat_router, ChatAppState};
pub use error::ErrorResponse;
pub use fact_check::{fact_check_router, FactCheckAppState};
pub use forward::{forward_router, ForwardAppState};

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// State for every HTTP area.
#[derive(Clone)]
pub struct AppState {
    pub forward: ForwardAppState,
    pub fact_check: FactCheckAppState,
    pub chat: ChatAppState,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health - Liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// All routes without middleware.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(forward_router(state.forward))
        .merge(fact_check_router(state.fact_check))
        .merge(chat_router(state.chat))
}

/// All routes with tracing, CORS and the request timeout applied.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    api_router(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

/// Permissive when no origins are configured.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
