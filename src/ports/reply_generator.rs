//! Reply Generator Port - Source of simulated assistant replies.
//!
//! Separates the choice of reply text and delay from the scheduling
//! machinery so tests can substitute deterministic replies.

use std::time::Duration;

/// A reply to deliver after `delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedReply {
    pub content: String,
    pub delay: Duration,
}

/// Port for picking simulated assistant replies.
pub trait ReplyGenerator: Send + Sync {
    /// Picks the next reply and how long to wait before delivering it.
    fn next_reply(&self) -> PlannedReply;
}
