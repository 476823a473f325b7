//! HTTP adapter for fact-check endpoints.
//!
//! - `POST /api/fact-check` - Query the upstream model and extract the reply
//! - `POST /api/extract` - Extract relationships from text already in hand

mod dto;
mod handlers;
mod routes;

pub use dto::{ExtractRequest, ExtractResponse, FactCheckRequest};
pub use handlers::{extract_text, fact_check, FactCheckApiError, FactCheckAppState};
pub use routes::{fact_check_router, fact_check_routes};
