//! Forwarding handlers.

mod forward_request;

pub use forward_request::{ForwardError, ForwardRequestHandler};
