//! HTTP adapter for the passthrough endpoint.
//!
//! - `POST /api/sonar` - Relay a JSON body to the upstream completions API

mod dto;
mod handlers;
mod routes;

pub use dto::ProxyErrorResponse;
pub use handlers::{forward_completion, ForwardApiError, ForwardAppState};
pub use routes::{forward_router, forward_routes};
