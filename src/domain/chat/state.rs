//! Chat state container and the commands that mutate it.
//!
//! Every mutation goes through [`ChatState::apply`], which returns the
//! events it produced. Callers (the application service) react to those
//! events, e.g. by scheduling or cancelling simulated replies.

use serde::Serialize;

use super::canned::example_conversations;
use super::conversation::Conversation;
use super::message::{Message, Role};
use super::theme::Theme;
use crate::domain::foundation::{ConversationId, DomainError, MessageId};

/// A discrete mutation of the chat state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Prepend an empty conversation and make it active.
    CreateConversation,
    /// Make a conversation active. Unknown ids are ignored.
    SelectConversation(ConversationId),
    /// Append to the active conversation.
    AppendMessage { role: Role, content: String },
    /// Append an assistant reply to a specific conversation and clear typing.
    DeliverReply {
        conversation_id: ConversationId,
        content: String,
    },
    /// Remove a conversation. Unknown ids are ignored.
    DeleteConversation(ConversationId),
    SetTyping(bool),
    SetTheme(Theme),
    ToggleSidebar,
    SetSidebarOpen(bool),
}

/// What a command changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEvent {
    ConversationCreated(ConversationId),
    ActiveChanged {
        previous: Option<ConversationId>,
        current: Option<ConversationId>,
    },
    MessageAppended {
        conversation_id: ConversationId,
        message_id: MessageId,
        role: Role,
    },
    ConversationDeleted(ConversationId),
    TypingChanged(bool),
    ThemeChanged { theme: Theme, dark: bool },
    SidebarChanged(bool),
}

/// In-memory chat session state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatState {
    conversations: Vec<Conversation>,
    active_conversation_id: Option<ConversationId>,
    is_typing: bool,
    theme: Theme,
    dark_mode: bool,
    sidebar_open: bool,
    #[serde(skip)]
    prefers_dark: bool,
}

impl ChatState {
    /// Creates an empty state with no conversations.
    pub fn new(prefers_dark: bool) -> Self {
        let theme = Theme::default();
        Self {
            conversations: Vec::new(),
            active_conversation_id: None,
            is_typing: false,
            theme,
            dark_mode: theme.is_dark(prefers_dark),
            sidebar_open: true,
            prefers_dark,
        }
    }

    /// Creates a state holding the example conversations, the first active.
    pub fn with_examples(prefers_dark: bool) -> Self {
        let mut state = Self::new(prefers_dark);
        state.conversations = example_conversations();
        state.active_conversation_id = state.conversations.first().map(Conversation::id);
        state
    }

    /// Applies a command and reports what changed.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` when appending empty content
    pub fn apply(&mut self, command: ChatCommand) -> Result<Vec<ChatEvent>, DomainError> {
        let events = match command {
            ChatCommand::CreateConversation => self.create_conversation(),
            ChatCommand::SelectConversation(id) => self.select_conversation(id),
            ChatCommand::AppendMessage { role, content } => {
                let message = Message::new(role, content)?;
                match self.active_conversation_id {
                    Some(id) => self.append_to(id, message),
                    None => Vec::new(),
                }
            }
            ChatCommand::DeliverReply {
                conversation_id,
                content,
            } => {
                let message = Message::assistant(content)?;
                let mut events = self.append_to(conversation_id, message);
                events.extend(self.set_typing(false));
                events
            }
            ChatCommand::DeleteConversation(id) => self.delete_conversation(id),
            ChatCommand::SetTyping(value) => self.set_typing(value),
            ChatCommand::SetTheme(theme) => self.set_theme(theme),
            ChatCommand::ToggleSidebar => self.set_sidebar_open(!self.sidebar_open),
            ChatCommand::SetSidebarOpen(open) => self.set_sidebar_open(open),
        };
        Ok(events)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn conversation(&self, id: ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id() == id)
    }

    pub fn active_conversation_id(&self) -> Option<ConversationId> {
        self.active_conversation_id
    }

    pub fn active_conversation(&self) -> Option<&Conversation> {
        self.active_conversation_id.and_then(|id| self.conversation(id))
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Command implementations
    // ─────────────────────────────────────────────────────────────────────────

    fn create_conversation(&mut self) -> Vec<ChatEvent> {
        let conversation = Conversation::new();
        let id = conversation.id();
        self.conversations.insert(0, conversation);

        let mut events = vec![ChatEvent::ConversationCreated(id)];
        events.extend(self.set_active(Some(id)));
        events
    }

    fn select_conversation(&mut self, id: ConversationId) -> Vec<ChatEvent> {
        if self.conversation(id).is_none() {
            return Vec::new();
        }
        self.set_active(Some(id))
    }

    fn append_to(&mut self, id: ConversationId, message: Message) -> Vec<ChatEvent> {
        let Some(conversation) = self.conversations.iter_mut().find(|c| c.id() == id) else {
            return Vec::new();
        };

        let event = ChatEvent::MessageAppended {
            conversation_id: id,
            message_id: *message.id(),
            role: message.role(),
        };
        conversation.append(message);
        vec![event]
    }

    fn delete_conversation(&mut self, id: ConversationId) -> Vec<ChatEvent> {
        let Some(position) = self.conversations.iter().position(|c| c.id() == id) else {
            return Vec::new();
        };
        self.conversations.remove(position);

        let mut events = vec![ChatEvent::ConversationDeleted(id)];
        if self.active_conversation_id == Some(id) {
            let next = self.most_recently_updated();
            events.extend(self.set_active(next));
        }
        events
    }

    /// First conversation with the latest `updated_at` (ties keep list order).
    fn most_recently_updated(&self) -> Option<ConversationId> {
        self.conversations
            .iter()
            .reduce(|best, candidate| {
                if candidate.updated_at().is_after(best.updated_at()) {
                    candidate
                } else {
                    best
                }
            })
            .map(Conversation::id)
    }

    fn set_active(&mut self, next: Option<ConversationId>) -> Vec<ChatEvent> {
        let previous = self.active_conversation_id;
        if previous == next {
            return Vec::new();
        }
        self.active_conversation_id = next;
        vec![ChatEvent::ActiveChanged {
            previous,
            current: next,
        }]
    }

    fn set_typing(&mut self, value: bool) -> Vec<ChatEvent> {
        if self.is_typing == value {
            return Vec::new();
        }
        self.is_typing = value;
        vec![ChatEvent::TypingChanged(value)]
    }

    fn set_theme(&mut self, theme: Theme) -> Vec<ChatEvent> {
        let dark = theme.is_dark(self.prefers_dark);
        if self.theme == theme && self.dark_mode == dark {
            return Vec::new();
        }
        self.theme = theme;
        self.dark_mode = dark;
        vec![ChatEvent::ThemeChanged { theme, dark }]
    }

    fn set_sidebar_open(&mut self, open: bool) -> Vec<ChatEvent> {
        if self.sidebar_open == open {
            return Vec::new();
        }
        self.sidebar_open = open;
        vec![ChatEvent::SidebarChanged(open)]
    }
}
