//! Fact-check handlers.

mod run_fact_check;

pub use run_fact_check::{
    FactCheckCommand, FactCheckError, FactCheckHandler, FactCheckReport, FactCheckSettings,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_SYSTEM_PROMPT, DEFAULT_TEMPERATURE,
};
