//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes for the passthrough, fact-check and chat endpoints
//! - `simulation` - Simulated assistant replies
//! - `upstream` - Chat-completions API client

pub mod http;
pub mod simulation;
pub mod upstream;

pub use simulation::{FixedReplyGenerator, RandomReplyGenerator};
pub use upstream::{MockUpstreamGateway, PerplexityConfig, PerplexityGateway};
