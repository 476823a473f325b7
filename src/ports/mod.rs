//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `UpstreamGateway` - The third-party chat-completions API
//! - `ReplyGenerator` - Simulated assistant replies for the chat view

mod reply_generator;
mod upstream_gateway;

pub use reply_generator::{PlannedReply, ReplyGenerator};
pub use upstream_gateway::{
    CompletionChoice, CompletionChoiceMessage, CompletionMessage, CompletionRequest,
    CompletionResponse, GatewayError, MessageRole, UpstreamGateway, UpstreamResponse,
};
