//! Fact-check chat backend
//!
//! Forwards chat-completions requests to a third-party API, runs fact-check
//! queries and scrapes relationships and trust estimates from the replies,
//! and keeps an in-memory chat store with simulated assistant replies.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
