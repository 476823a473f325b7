//! HTTP adapter for the chat view.
//!
//! - `GET /api/chat` - Snapshot of conversations, theme and sidebar
//! - `POST /api/chat/conversations` - Create a conversation
//! - `POST /api/chat/conversations/:id/select` - Activate a conversation
//! - `DELETE /api/chat/conversations/:id` - Delete a conversation
//! - `POST /api/chat/messages` - Send a message
//! - `PUT /api/chat/theme` - Set the theme
//! - `POST /api/chat/sidebar/toggle`, `PUT /api/chat/sidebar` - Sidebar state

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatSnapshotResponse, SendMessageRequest, SetSidebarRequest, SetThemeRequest};
pub use handlers::{ChatApiError, ChatAppState};
pub use routes::{chat_router, chat_routes};
