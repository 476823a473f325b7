//! Chat domain module.
//!
//! Conversations, messages, presentation settings and the command-driven
//! state container behind the simulated chat view.

mod canned;
mod conversation;
mod message;
mod state;
mod theme;

pub use canned::{example_conversations, ASSISTANT_REPLIES, SUGGESTED_PROMPTS};
pub use conversation::{derive_title, Conversation, NEW_CHAT_TITLE, TITLE_MAX_CHARS};
pub use message::{Message, Role};
pub use state::{ChatCommand, ChatEvent, ChatState};
pub use theme::Theme;
