//! Reply generators for the simulated assistant.

use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

use crate::domain::chat::ASSISTANT_REPLIES;
use crate::ports::{PlannedReply, ReplyGenerator};

/// Picks a canned reply uniformly at random after a delay drawn uniformly
/// from `[min_delay, max_delay)`.
#[derive(Debug, Clone)]
pub struct RandomReplyGenerator {
    min_delay: Duration,
    max_delay: Duration,
}

impl RandomReplyGenerator {
    /// Creates a generator. A range with `max_delay <= min_delay` always
    /// waits exactly `min_delay`.
    pub fn new(min_delay: Duration, max_delay: Duration) -> Self {
        Self {
            min_delay,
            max_delay,
        }
    }
}

impl Default for RandomReplyGenerator {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500), Duration::from_millis(3000))
    }
}

impl ReplyGenerator for RandomReplyGenerator {
    fn next_reply(&self) -> PlannedReply {
        let mut rng = rand::thread_rng();

        let delay = if self.max_delay > self.min_delay {
            rng.gen_range(self.min_delay..self.max_delay)
        } else {
            self.min_delay
        };
        let content = ASSISTANT_REPLIES
            .choose(&mut rng)
            .copied()
            .unwrap_or(ASSISTANT_REPLIES[0])
            .to_string();

        PlannedReply { content, delay }
    }
}

/// Always returns the same reply after the same delay.
#[derive(Debug, Clone)]
pub struct FixedReplyGenerator {
    reply: PlannedReply,
}

impl FixedReplyGenerator {
    pub fn new(content: impl Into<String>, delay: Duration) -> Self {
        Self {
            reply: PlannedReply {
                content: content.into(),
                delay,
            },
        }
    }
}

impl ReplyGenerator for FixedReplyGenerator {
    fn next_reply(&self) -> PlannedReply {
        self.reply.clone()
    }
}
