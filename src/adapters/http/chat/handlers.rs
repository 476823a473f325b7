//! HTTP handlers for chat endpoints.
//!
//! Every endpoint answers with the full chat snapshot after the operation.
//! Unknown conversation ids are ignored rather than rejected.

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::ErrorResponse;
use crate::application::handlers::chat::ChatService;
use crate::domain::chat::Role;
use crate::domain::foundation::{ConversationId, DomainError, ErrorCode};

use super::dto::{ChatSnapshotResponse, SendMessageRequest, SetSidebarRequest, SetThemeRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatAppState {
    pub service: ChatService,
}

impl ChatAppState {
    pub fn new(service: ChatService) -> Self {
        Self { service }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/chat - Current chat snapshot.
pub async fn get_chat(State(state): State<ChatAppState>) -> impl IntoResponse {
    Json(ChatSnapshotResponse::from(state.service.snapshot().await))
}

/// POST /api/chat/conversations - Create and activate a new conversation.
pub async fn create_conversation(
    State(state): State<ChatAppState>,
) -> Result<impl IntoResponse, ChatApiError> {
    let snapshot = state.service.create_conversation().await?;
    Ok((StatusCode::CREATED, Json(ChatSnapshotResponse::from(snapshot))))
}

/// POST /api/chat/conversations/:id/select - Make a conversation active.
pub async fn select_conversation(
    State(state): State<ChatAppState>,
    Path(conversation_id): Path<String>,
) -> Result<impl IntoResponse, ChatApiError> {
    let id = parse_conversation_id(&conversation_id)?;
    let snapshot = state.service.select_conversation(id).await?;
    Ok(Json(ChatSnapshotResponse::from(snapshot)))
}

/// DELETE /api/chat/conversations/:id - Delete a conversation.
pub async fn delete_conversation(
    State(state): State<ChatAppState>,
    Path(conversation_id): Path<String>,
) -> Result<impl IntoResponse, ChatApiError> {
    let id = parse_conversation_id(&conversation_id)?;
    let snapshot = state.service.delete_conversation(id).await?;
    Ok(Json(ChatSnapshotResponse::from(snapshot)))
}

/// POST /api/chat/messages - Append to the active conversation.
///
/// User messages trigger a simulated assistant reply.
///
/// # Errors
/// - 400 Bad Request: empty content
pub async fn send_message(
    State(state): State<ChatAppState>,
    Json(req): Json<SendMessageRequest>,
) -> Result<impl IntoResponse, ChatApiError> {
    let role = req.role.unwrap_or(Role::User);
    let snapshot = state.service.send_message(role, req.content).await?;
    Ok(Json(ChatSnapshotResponse::from(snapshot)))
}

/// PUT /api/chat/theme - Set the theme.
pub async fn set_theme(
    State(state): State<ChatAppState>,
    Json(req): Json<SetThemeRequest>,
) -> Result<impl IntoResponse, ChatApiError> {
    let snapshot = state.service.set_theme(req.theme).await?;
    Ok(Json(ChatSnapshotResponse::from(snapshot)))
}

/// POST /api/chat/sidebar/toggle - Flip the sidebar.
pub async fn toggle_sidebar(
    State(state): State<ChatAppState>,
) -> Result<impl IntoResponse, ChatApiError> {
    let snapshot = state.service.toggle_sidebar().await?;
    Ok(Json(ChatSnapshotResponse::from(snapshot)))
}

/// PUT /api/chat/sidebar - Open or close the sidebar.
pub async fn set_sidebar(
    State(state): State<ChatAppState>,
    Json(req): Json<SetSidebarRequest>,
) -> Result<impl IntoResponse, ChatApiError> {
    let snapshot = state.service.set_sidebar_open(req.open).await?;
    Ok(Json(ChatSnapshotResponse::from(snapshot)))
}

fn parse_conversation_id(raw: &str) -> Result<ConversationId, ChatApiError> {
    raw.parse()
        .map_err(|_| ChatApiError::BadRequest("Invalid conversation ID format".to_string()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub enum ChatApiError {
    BadRequest(String),
    Internal(String),
}

impl From<DomainError> for ChatApiError {
    fn from(err: DomainError) -> Self {
        match err.code() {
            ErrorCode::ValidationFailed => ChatApiError::BadRequest(err.message),
            _ => ChatApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ChatApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ChatApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ChatApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("An internal error occurred"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}
