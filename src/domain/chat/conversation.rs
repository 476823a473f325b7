//! Conversation entity: a titled, append-only list of messages.

use serde::{Deserialize, Serialize};

use super::message::{Message, Role};
use crate::domain::foundation::{ConversationId, Timestamp};

/// Title given to conversations with no user message yet.
pub const NEW_CHAT_TITLE: &str = "New Chat";

/// Maximum title length (in characters) before truncation.
pub const TITLE_MAX_CHARS: usize = 30;

/// A chat conversation.
///
/// # Invariants
///
/// - messages are only appended, never edited or reordered
/// - the title changes at most once, on the first user message of an empty
///   conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    id: ConversationId,
    title: String,
    messages: Vec<Message>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Conversation {
    /// Creates an empty "New Chat" conversation.
    pub fn new() -> Self {
        let now = Timestamp::now();
        Self {
            id: ConversationId::new(),
            title: NEW_CHAT_TITLE.to_string(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a conversation from seed data.
    pub(crate) fn seeded(
        title: &str,
        messages: Vec<Message>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id: ConversationId::new(),
            title: title.to_string(),
            messages,
            created_at,
            updated_at,
        }
    }

    /// Appends a message, deriving the title from the first user message.
    pub fn append(&mut self, message: Message) {
        if self.messages.is_empty() && message.role() == Role::User {
            self.title = derive_title(message.content());
        }
        self.updated_at = *message.timestamp();
        self.messages.push(message);
    }

    pub fn id(&self) -> ConversationId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns true for the untouched "New Chat" state.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

/// Title from message text: first 30 characters plus `...` when longer.
pub fn derive_title(content: &str) -> String {
    if content.chars().count() > TITLE_MAX_CHARS {
        let head: String = content.chars().take(TITLE_MAX_CHARS).collect();
        format!("{}...", head)
    } else {
        content.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod title {
        use super::*;

        #[test]
        fn short_text_is_kept() {
            assert_eq!(derive_title("Hello"), "Hello");
        }

        #[test]
        fn exactly_thirty_chars_is_kept() {
            let text = "a".repeat(30);
            assert_eq!(derive_title(&text), text);
        }

        #[test]
        fn long_text_is_truncated_with_ellipsis() {
            let text = "Explain how AI image generation works";
            assert_eq!(derive_title(text), "Explain how AI image generatio...");
        }

        #[test]
        fn truncation_counts_characters_not_bytes() {
            let text = "é".repeat(40);
            let title = derive_title(&text);
            assert_eq!(title.chars().count(), 33);
        }
    }

    mod append {
        use super::*;

        #[test]
        fn new_conversation_is_new_chat() {
            let conv = Conversation::new();
            assert_eq!(conv.title(), NEW_CHAT_TITLE);
            assert!(conv.is_empty());
        }

        #[test]
        fn first_user_message_sets_title() {
            let mut conv = Conversation::new();
            conv.append(Message::user("What is entropy?").unwrap());
            assert_eq!(conv.title(), "What is entropy?");
        }

        #[test]
        fn later_user_messages_keep_title() {
            let mut conv = Conversation::new();
            conv.append(Message::user("First").unwrap());
            conv.append(Message::user("Second").unwrap());
            assert_eq!(conv.title(), "First");
        }

        #[test]
        fn assistant_first_message_keeps_new_chat_title() {
            let mut conv = Conversation::new();
            conv.append(Message::assistant("Hello!").unwrap());
            conv.append(Message::user("Hi").unwrap());
            assert_eq!(conv.title(), NEW_CHAT_TITLE);
        }

        #[test]
        fn append_bumps_updated_at() {
            let mut conv = Conversation::new();
            let before = *conv.updated_at();
            let message = Message::user("Hi").unwrap();
            let stamp = *message.timestamp();
            conv.append(message);

            assert_eq!(conv.updated_at(), &stamp);
            assert!(!conv.updated_at().is_before(&before));
            assert_eq!(conv.messages().len(), 1);
        }
    }
}
