//! DTOs for chat endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::chat::{ChatState, Role, Theme, SUGGESTED_PROMPTS};

/// Request body for POST /api/chat/messages
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
    /// Defaults to `user`.
    #[serde(default)]
    pub role: Option<Role>,
}

/// Request body for PUT /api/chat/theme
#[derive(Debug, Clone, Deserialize)]
pub struct SetThemeRequest {
    pub theme: Theme,
}

/// Request body for PUT /api/chat/sidebar
#[derive(Debug, Clone, Deserialize)]
pub struct SetSidebarRequest {
    pub open: bool,
}

/// Full chat state as returned by every chat endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSnapshotResponse {
    #[serde(flatten)]
    pub state: ChatState,
    pub suggested_prompts: Vec<&'static str>,
}

impl From<ChatState> for ChatSnapshotResponse {
    fn from(state: ChatState) -> Self {
        Self {
            state,
            suggested_prompts: SUGGESTED_PROMPTS.to_vec(),
        }
    }
}
