//! Application handlers.
//!
//! Command handlers that orchestrate domain operations over the ports.

pub mod chat;
pub mod fact_check;
pub mod forward;

pub use chat::{ChatService, ReplyScheduler};
pub use fact_check::{
    FactCheckCommand, FactCheckError, FactCheckHandler, FactCheckReport, FactCheckSettings,
};
pub use forward::{ForwardError, ForwardRequestHandler};
