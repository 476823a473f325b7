//! Axum routes for chat endpoints.

use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers::{
    create_conversation, delete_conversation, get_chat, select_conversation, send_message,
    set_sidebar, set_theme, toggle_sidebar, ChatAppState,
};

/// Routes relative to `/api/chat`.
///
/// - GET / - Chat snapshot
/// - POST /conversations - Create a conversation
/// - POST /conversations/:id/select - Activate a conversation
/// - DELETE /conversations/:id - Delete a conversation
/// - POST /messages - Append to the active conversation
/// - PUT /theme - Set the theme
/// - POST /sidebar/toggle - Flip the sidebar
/// - PUT /sidebar - Open or close the sidebar
pub fn chat_routes() -> Router<ChatAppState> {
    Router::new()
        .route("/", get(get_chat))
        .route("/conversations", post(create_conversation))
        .route("/conversations/:id/select", post(select_conversation))
        .route("/conversations/:id", delete(delete_conversation))
        .route("/messages", post(send_message))
        .route("/theme", put(set_theme))
        .route("/sidebar/toggle", post(toggle_sidebar))
        .route("/sidebar", put(set_sidebar))
}

/// Chat routes under /api/chat with state attached.
pub fn chat_router(state: ChatAppState) -> Router {
    Router::new().nest("/api/chat", chat_routes()).with_state(state)
}
