//! UTC timestamps for messages and conversations.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A point in time, always UTC. Serializes as RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now())
    }

    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Used to back-date the seeded example conversation.
    pub fn minus_minutes(&self, minutes: i64) -> Self {
        Self(self.0 - Duration::minutes(minutes))
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn at(rfc3339: &str) -> Timestamp {
        serde_json::from_value(json!(rfc3339)).unwrap()
    }

    #[test]
    fn now_is_monotonic_enough() {
        let first = Timestamp::now();
        let second = Timestamp::now();
        assert!(!second.is_before(&first));
    }

    #[test]
    fn minus_minutes_moves_backwards() {
        let ts = at("2024-01-15T10:30:00Z");
        let earlier = ts.minus_minutes(5);

        assert_eq!(earlier, at("2024-01-15T10:25:00Z"));
        assert!(earlier.is_before(&ts));
        assert!(ts.is_after(&earlier));
    }

    #[test]
    fn serializes_as_rfc3339() {
        let ts = at("2024-01-15T10:30:00Z");
        assert_eq!(serde_json::to_value(ts).unwrap(), json!("2024-01-15T10:30:00Z"));
    }
}
