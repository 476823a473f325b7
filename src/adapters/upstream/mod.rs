//! Upstream adapters - implementations of the UpstreamGateway port.

mod mock_gateway;
mod perplexity_gateway;

pub use mock_gateway::MockUpstreamGateway;
pub use perplexity_gateway::{PerplexityConfig, PerplexityGateway, DEFAULT_BASE_URL};
