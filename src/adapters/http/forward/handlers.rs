//! HTTP handlers for the passthrough endpoint.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::application::handlers::forward::{ForwardError, ForwardRequestHandler};
use crate::ports::UpstreamGateway;

use super::dto::ProxyErrorResponse;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ForwardAppState {
    pub gateway: Arc<dyn UpstreamGateway>,
}

impl ForwardAppState {
    pub fn new(gateway: Arc<dyn UpstreamGateway>) -> Self {
        Self { gateway }
    }

    pub fn forward_handler(&self) -> ForwardRequestHandler {
        ForwardRequestHandler::new(self.gateway.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/sonar
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/sonar - Relay a chat-completions body to the upstream API.
///
/// The upstream status and body are returned unchanged on success.
///
/// # Errors
/// - 500 Internal Server Error: upstream unreachable
/// - 502 Bad Gateway: upstream answered with a non-success status
pub async fn forward_completion(
    State(state): State<ForwardAppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Response, ForwardApiError> {
    let response = state.forward_handler().handle(body).await?;

    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::OK);
    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
        .into_response())
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub enum ForwardApiError {
    Transport(String),
    Upstream { status: u16, body: String },
}

impl From<ForwardError> for ForwardApiError {
    fn from(err: ForwardError) -> Self {
        match err {
            ForwardError::Transport(details) => ForwardApiError::Transport(details),
            ForwardError::UpstreamStatus { status, body } => {
                ForwardApiError::Upstream { status, body }
            }
        }
    }
}

impl IntoResponse for ForwardApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ForwardApiError::Transport(details) => {
                tracing::error!("Proxy error: {}", details);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ProxyErrorResponse::transport(details),
                )
            }
            ForwardApiError::Upstream { status, body } => (
                StatusCode::BAD_GATEWAY,
                ProxyErrorResponse::upstream(status, &body),
            ),
        };

        (status, Json(error)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::upstream::MockUpstreamGateway;
    use serde_json::json;

    fn state(gateway: MockUpstreamGateway) -> ForwardAppState {
        ForwardAppState::new(Arc::new(gateway))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn success_passes_status_and_body_through() {
        let gateway = MockUpstreamGateway::new().with_response(201, r#"{"ok":true}"#);

        let response = forward_completion(State(state(gateway)), Json(json!({"model": "sonar"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await, json!({"ok": true}));
    }

    #[tokio::test]
    async fn transport_failure_maps_to_500() {
        let gateway = MockUpstreamGateway::new().with_network_error("connection refused");

        let response = forward_completion(State(state(gateway)), Json(json!({})))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Proxy server error");
        assert!(body["details"].as_str().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn upstream_error_maps_to_502_with_body() {
        let gateway = MockUpstreamGateway::new().with_response(429, r#"{"error":"rate limited"}"#);

        let response = forward_completion(State(state(gateway)), Json(json!({})))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_json(response).await,
            json!({
                "error": "Upstream request failed (status 429)",
                "details": r#"{"error":"rate limited"}"#
            })
        );
    }
}
