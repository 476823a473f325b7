//! Chat view configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Chat store and simulated reply configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Lower bound of the simulated reply delay
    #[serde(default = "default_reply_delay_min")]
    pub reply_delay_min_ms: u64,

    /// Upper bound (exclusive) of the simulated reply delay
    #[serde(default = "default_reply_delay_max")]
    pub reply_delay_max_ms: u64,

    /// Start with the example conversations
    #[serde(default = "default_seed_examples")]
    pub seed_examples: bool,

    /// Resolves the `system` theme
    #[serde(default)]
    pub prefers_dark: bool,
}

impl ChatConfig {
    pub fn reply_delay_min(&self) -> Duration {
        Duration::from_millis(self.reply_delay_min_ms)
    }

    pub fn reply_delay_max(&self) -> Duration {
        Duration::from_millis(self.reply_delay_max_ms)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.reply_delay_min_ms > self.reply_delay_max_ms {
            return Err(ValidationError::InvalidReplyDelay);
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_min_ms: default_reply_delay_min(),
            reply_delay_max_ms: default_reply_delay_max(),
            seed_examples: default_seed_examples(),
            prefers_dark: false,
        }
    }
}

fn default_reply_delay_min() -> u64 {
    1500
}

fn default_reply_delay_max() -> u64 {
    3000
}

fn default_seed_examples() -> bool {
    true
}
