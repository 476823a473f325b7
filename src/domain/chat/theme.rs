//! Presentation theme.

use serde::{Deserialize, Serialize};

/// User-selected colour theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the platform preference.
    #[default]
    System,
}

impl Theme {
    /// Resolves the dark-mode flag, consulting the platform preference
    /// only for [`Theme::System`].
    pub fn is_dark(&self, prefers_dark: bool) -> bool {
        match self {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => prefers_dark,
        }
    }
}
