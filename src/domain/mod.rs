//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `extraction` - Relationship/summary scraping of fact-check responses
//! - `chat` - Conversation store with simulated assistant replies

pub mod chat;
pub mod extraction;
pub mod foundation;
