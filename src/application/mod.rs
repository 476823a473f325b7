//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    ChatService, FactCheckCommand, FactCheckError, FactCheckHandler, FactCheckReport,
    FactCheckSettings, ForwardError, ForwardRequestHandler, ReplyScheduler,
};
