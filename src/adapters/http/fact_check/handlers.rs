//! HTTP handlers for fact-check and extraction endpoints.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::adapters::http::ErrorResponse;
use crate::application::handlers::fact_check::{
    FactCheckCommand, FactCheckError, FactCheckHandler, FactCheckSettings,
};
use crate::domain::extraction::{extract, GraphData};
use crate::domain::foundation::ErrorCode;
use crate::ports::UpstreamGateway;

use super::dto::{ExtractRequest, ExtractResponse, FactCheckRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct FactCheckAppState {
    pub gateway: Arc<dyn UpstreamGateway>,
    pub settings: FactCheckSettings,
}

impl FactCheckAppState {
    pub fn new(gateway: Arc<dyn UpstreamGateway>, settings: FactCheckSettings) -> Self {
        Self { gateway, settings }
    }

    pub fn fact_check_handler(&self) -> FactCheckHandler {
        FactCheckHandler::new(self.gateway.clone(), self.settings.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/fact-check
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/fact-check - Check a claim and extract relationships.
///
/// # Errors
/// - 400 Bad Request: empty query
/// - 503 Service Unavailable: upstream unreachable
/// - 502 Bad Gateway: upstream answered with a non-success status
pub async fn fact_check(
    State(state): State<FactCheckAppState>,
    Json(req): Json<FactCheckRequest>,
) -> Result<impl IntoResponse, FactCheckApiError> {
    let cmd = FactCheckCommand { query: req.query };
    let report = state.fact_check_handler().handle(cmd).await?;
    Ok((StatusCode::OK, Json(report)))
}

// ════════════════════════════════════════════════════════════════════════════════
// POST /api/extract
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/extract - Extract relationships from an existing response text.
///
/// Never fails on malformed text; missing sections yield empty results.
pub async fn extract_text(Json(req): Json<ExtractRequest>) -> impl IntoResponse {
    let result = extract(&req.text);
    let graph = match req.step {
        Some(index) => GraphData::for_step(&result, index),
        None => GraphData::from_triples(&result.relationships),
    };

    Json(ExtractResponse {
        relationships: result.relationships,
        steps: result.steps,
        summary: result.summary,
        graph,
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub enum FactCheckApiError {
    BadRequest(String),
    Unavailable(String),
    BadGateway { message: String, upstream_status: u16 },
}

impl From<FactCheckError> for FactCheckApiError {
    fn from(err: FactCheckError) -> Self {
        match err {
            FactCheckError::Validation(msg) => FactCheckApiError::BadRequest(msg),
            FactCheckError::Unreachable => FactCheckApiError::Unavailable(err.to_string()),
            FactCheckError::UpstreamStatus { status } => FactCheckApiError::BadGateway {
                message: err.to_string(),
                upstream_status: status,
            },
        }
    }
}

impl IntoResponse for FactCheckApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            FactCheckApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            FactCheckApiError::Unavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::new(ErrorCode::UpstreamUnavailable.to_string(), msg),
            ),
            FactCheckApiError::BadGateway {
                message,
                upstream_status,
            } => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::new(ErrorCode::UpstreamFailed.to_string(), message)
                    .with_details(json!({ "upstreamStatus": upstream_status })),
            ),
        };

        (status, Json(error)).into_response()
    }
}
