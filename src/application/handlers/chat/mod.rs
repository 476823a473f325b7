//! Chat handlers - conversation store operations and simulated replies.

mod chat_service;
mod reply_scheduler;

pub use chat_service::ChatService;
pub use reply_scheduler::ReplyScheduler;
