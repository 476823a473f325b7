//! ChatService - Serialized access to the chat state plus reply simulation.
//!
//! Every operation applies one [`ChatCommand`] under the state lock and then
//! reacts to the emitted events:
//!
//! - a user message schedules a simulated assistant reply and sets typing
//! - leaving or deleting a conversation cancels its pending reply and clears
//!   typing
//!
//! Operations return a snapshot of the state after the command.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::reply_scheduler::ReplyScheduler;
use crate::domain::chat::{ChatCommand, ChatEvent, ChatState, Role, Theme};
use crate::domain::foundation::{ConversationId, DomainError};
use crate::ports::ReplyGenerator;

#[derive(Clone)]
pub struct ChatService {
    state: Arc<Mutex<ChatState>>,
    scheduler: ReplyScheduler,
    replies: Arc<dyn ReplyGenerator>,
}

impl ChatService {
    pub fn new(state: ChatState, replies: Arc<dyn ReplyGenerator>) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            scheduler: ReplyScheduler::new(),
            replies,
        }
    }

    pub async fn snapshot(&self) -> ChatState {
        self.state.lock().await.clone()
    }

    pub async fn create_conversation(&self) -> Result<ChatState, DomainError> {
        self.execute(ChatCommand::CreateConversation).await
    }

    pub async fn select_conversation(&self, id: ConversationId) -> Result<ChatState, DomainError> {
        self.execute(ChatCommand::SelectConversation(id)).await
    }

    pub async fn delete_conversation(&self, id: ConversationId) -> Result<ChatState, DomainError> {
        self.execute(ChatCommand::DeleteConversation(id)).await
    }

    /// Appends to the active conversation. User messages get a simulated reply.
    pub async fn send_message(
        &self,
        role: Role,
        content: impl Into<String>,
    ) -> Result<ChatState, DomainError> {
        self.execute(ChatCommand::AppendMessage {
            role,
            content: content.into(),
        })
        .await
    }

    pub async fn set_theme(&self, theme: Theme) -> Result<ChatState, DomainError> {
        self.execute(ChatCommand::SetTheme(theme)).await
    }

    pub async fn toggle_sidebar(&self) -> Result<ChatState, DomainError> {
        self.execute(ChatCommand::ToggleSidebar).await
    }

    pub async fn set_sidebar_open(&self, open: bool) -> Result<ChatState, DomainError> {
        self.execute(ChatCommand::SetSidebarOpen(open)).await
    }

    /// Replies scheduled but not yet delivered.
    pub async fn pending_replies(&self) -> usize {
        self.scheduler.pending_count().await
    }

    async fn execute(&self, command: ChatCommand) -> Result<ChatState, DomainError> {
        let mut state = self.state.lock().await;
        let events = state.apply(command)?;

        for event in events {
            match event {
                ChatEvent::MessageAppended {
                    conversation_id,
                    role: Role::User,
                    ..
                } => {
                    state.apply(ChatCommand::SetTyping(true))?;
                    self.schedule_reply(conversation_id).await;
                }
                ChatEvent::ActiveChanged {
                    previous: Some(left),
                    ..
                }
                | ChatEvent::ConversationDeleted(left) => {
                    if self.scheduler.cancel(left).await {
                        state.apply(ChatCommand::SetTyping(false))?;
                    }
                }
                _ => {}
            }
        }

        Ok(state.clone())
    }

    async fn schedule_reply(&self, conversation_id: ConversationId) {
        let reply = self.replies.next_reply();
        let state = Arc::clone(&self.state);

        let deliver = async move {
            let mut state = state.lock().await;
            let command = ChatCommand::DeliverReply {
                conversation_id,
                content: reply.content,
            };
            if let Err(error) = state.apply(command) {
                tracing::warn!(%conversation_id, %error, "Failed to deliver simulated reply");
            }
        };

        self.scheduler
            .schedule(conversation_id, reply.delay, deliver)
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::simulation::FixedReplyGenerator;
    use std::time::Duration;

    const REPLY: &str = "Canned answer";

    fn service(state: ChatState) -> ChatService {
        let replies = Arc::new(FixedReplyGenerator::new(REPLY, Duration::from_millis(1500)));
        ChatService::new(state, replies)
    }

    async fn wait(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    mod replies {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn user_message_gets_reply_after_delay() {
            let chat = service(ChatState::new(false));
            let created = chat.create_conversation().await.unwrap();
            let id = created.active_conversation_id().unwrap();

            let sent = chat.send_message(Role::User, "Hello").await.unwrap();
            assert!(sent.is_typing());
            assert_eq!(sent.conversation(id).unwrap().messages().len(), 1);

            wait(2000).await;

            let after = chat.snapshot().await;
            let messages = after.conversation(id).unwrap().messages();
            assert_eq!(messages.len(), 2);
            assert_eq!(messages[1].role(), Role::Assistant);
            assert_eq!(messages[1].content(), REPLY);
            assert!(!after.is_typing());
            assert_eq!(chat.pending_replies().await, 0);
        }

        #[tokio::test(start_paused = true)]
        async fn assistant_message_gets_no_reply() {
            let chat = service(ChatState::new(false));
            chat.create_conversation().await.unwrap();

            let sent = chat.send_message(Role::Assistant, "Hi there").await.unwrap();
            assert!(!sent.is_typing());

            wait(5000).await;
            let messages = chat.snapshot().await.active_conversation().unwrap().messages().len();
            assert_eq!(messages, 1);
        }

        #[tokio::test(start_paused = true)]
        async fn reply_lands_in_originating_conversation() {
            let chat = service(ChatState::new(false));
            let first = chat
                .create_conversation()
                .await
                .unwrap()
                .active_conversation_id()
                .unwrap();
            chat.send_message(Role::User, "Question").await.unwrap();

            wait(2000).await;
            chat.create_conversation().await.unwrap();

            let state = chat.snapshot().await;
            assert_eq!(state.conversation(first).unwrap().messages().len(), 2);
            assert!(state.active_conversation().unwrap().is_empty());
        }

        #[tokio::test(start_paused = true)]
        async fn empty_message_is_rejected_without_scheduling() {
            let chat = service(ChatState::new(false));
            chat.create_conversation().await.unwrap();

            let result = chat.send_message(Role::User, "   ").await;
            assert!(result.is_err());
            assert_eq!(chat.pending_replies().await, 0);
            assert!(!chat.snapshot().await.is_typing());
        }

        #[tokio::test(start_paused = true)]
        async fn message_without_active_conversation_is_noop() {
            let chat = service(ChatState::new(false));

            let state = chat.send_message(Role::User, "Hello").await.unwrap();
            assert!(state.conversations().is_empty());
            assert!(!state.is_typing());
            assert_eq!(chat.pending_replies().await, 0);
        }
    }

    mod cancellation {
        use super::*;

        #[tokio::test(start_paused = true)]
        async fn deleting_conversation_cancels_reply() {
            let chat = service(ChatState::new(false));
            let id = chat
                .create_conversation()
                .await
                .unwrap()
                .active_conversation_id()
                .unwrap();
            chat.send_message(Role::User, "Hello").await.unwrap();

            let state = chat.delete_conversation(id).await.unwrap();
            assert!(!state.is_typing());
            assert!(state.conversations().is_empty());

            wait(5000).await;
            assert!(chat.snapshot().await.conversations().is_empty());
            assert_eq!(chat.pending_replies().await, 0);
        }

        #[tokio::test(start_paused = true)]
        async fn switching_conversation_cancels_reply() {
            let chat = service(ChatState::new(false));
            let first = chat
                .create_conversation()
                .await
                .unwrap()
                .active_conversation_id()
                .unwrap();
            let second = chat
                .create_conversation()
                .await
                .unwrap()
                .active_conversation_id()
                .unwrap();

            chat.send_message(Role::User, "Hello").await.unwrap();
            let state = chat.select_conversation(first).await.unwrap();
            assert!(!state.is_typing());

            wait(5000).await;
            let state = chat.snapshot().await;
            assert_eq!(state.conversation(second).unwrap().messages().len(), 1);
            assert!(state.conversation(first).unwrap().is_empty());
        }

        #[tokio::test(start_paused = true)]
        async fn creating_conversation_cancels_reply() {
            let chat = service(ChatState::new(false));
            let first = chat
                .create_conversation()
                .await
                .unwrap()
                .active_conversation_id()
                .unwrap();
            chat.send_message(Role::User, "Hello").await.unwrap();

            chat.create_conversation().await.unwrap();
            wait(5000).await;

            let state = chat.snapshot().await;
            assert_eq!(state.conversation(first).unwrap().messages().len(), 1);
            assert!(!state.is_typing());
        }

        #[tokio::test(start_paused = true)]
        async fn deleting_other_conversation_keeps_reply() {
            let chat = service(ChatState::new(false));
            let other = chat
                .create_conversation()
                .await
                .unwrap()
                .active_conversation_id()
                .unwrap();
            let active = chat
                .create_conversation()
                .await
                .unwrap()
                .active_conversation_id()
                .unwrap();
            chat.send_message(Role::User, "Hello").await.unwrap();

            let state = chat.delete_conversation(other).await.unwrap();
            assert!(state.is_typing());

            wait(2000).await;
            let state = chat.snapshot().await;
            assert_eq!(state.conversation(active).unwrap().messages().len(), 2);
        }

        #[tokio::test(start_paused = true)]
        async fn selecting_unknown_conversation_keeps_reply() {
            let chat = service(ChatState::new(false));
            chat.create_conversation().await.unwrap();
            chat.send_message(Role::User, "Hello").await.unwrap();

            let state = chat.select_conversation(ConversationId::new()).await.unwrap();
            assert!(state.is_typing());
            assert_eq!(chat.pending_replies().await, 1);
        }
    }

    mod preferences {
        use super::*;

        #[tokio::test]
        async fn theme_and_sidebar_round_trip() {
            let chat = service(ChatState::new(true));

            let state = chat.set_theme(Theme::System).await.unwrap();
            assert!(state.dark_mode());

            let state = chat.set_theme(Theme::Light).await.unwrap();
            assert_eq!(state.theme(), Theme::Light);
            assert!(!state.dark_mode());

            let open = chat.snapshot().await.sidebar_open();
            let state = chat.toggle_sidebar().await.unwrap();
            assert_eq!(state.sidebar_open(), !open);

            let state = chat.set_sidebar_open(true).await.unwrap();
            assert!(state.sidebar_open());
        }

        #[tokio::test]
        async fn seeded_state_starts_with_examples() {
            let chat = service(ChatState::with_examples(false));
            let state = chat.snapshot().await;

            assert_eq!(state.conversations().len(), 2);
            assert_eq!(state.active_conversation_id(), Some(state.conversations()[0].id()));
        }
    }
}
