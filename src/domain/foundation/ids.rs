//! UUID-backed identifiers for chat entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Declares a random-v4 identifier that serializes as a bare UUID string.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

uuid_id!(
    /// Identifies a conversation; also the key for its pending reply.
    ConversationId
);

uuid_id!(
    /// Identifies a single message.
    MessageId
);

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn fresh_ids_differ() {
        assert_ne!(ConversationId::new(), ConversationId::new());
        assert_ne!(MessageId::new(), MessageId::new());
    }

    #[test]
    fn path_segment_parses_and_displays_back() {
        let id: ConversationId = SAMPLE.parse().unwrap();
        assert_eq!(id.to_string(), SAMPLE);
    }

    #[test]
    fn malformed_path_segment_is_rejected() {
        assert!("not-a-uuid".parse::<ConversationId>().is_err());
        assert!("".parse::<MessageId>().is_err());
    }

    #[test]
    fn json_form_is_the_bare_uuid() {
        let id: ConversationId = SAMPLE.parse().unwrap();
        assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(SAMPLE));

        let back: ConversationId = serde_json::from_value(serde_json::json!(SAMPLE)).unwrap();
        assert_eq!(back, id);
    }
}
