//! Simulation adapters - implementations of the ReplyGenerator port.

mod random_replies;

pub use random_replies::{FixedReplyGenerator, RandomReplyGenerator};
