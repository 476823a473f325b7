//! Final-estimation summary parsing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SUMMARY_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)## Final Estimation").unwrap());
static ROOT_CAUSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Root cause:([^\n]*)").unwrap());
static TIMELINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Timeline:([^\n]*)").unwrap());
static BIAS_TRUST: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Bias/Trust:([^\n]*)").unwrap());
static TRUST_SCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Trust score:([^\n]*)").unwrap());

/// The optional closing verdict of a fact-check response.
///
/// Every field is independent; a header with no recognised labels still
/// produces a record with all fields absent. Values are trimmed of
/// whitespace and `*`, so `**Trust score:** 7/10**` reads as `7/10`, and a
/// value that is empty after trimming is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalSummary {
    pub root_cause: Option<String>,
    pub timeline: Option<String>,
    pub bias_trust: Option<String>,
    pub trust_score: Option<String>,
}

impl FinalSummary {
    /// Returns true if no field was found.
    pub fn is_empty(&self) -> bool {
        self.root_cause.is_none()
            && self.timeline.is_none()
            && self.bias_trust.is_none()
            && self.trust_score.is_none()
    }
}

/// Parses the `## Final Estimation` section, if the response has one.
///
/// Labels are only searched after the header.
pub fn parse_summary(text: &str) -> Option<FinalSummary> {
    let header = SUMMARY_HEADER.find(text)?;
    let section = &text[header.end()..];

    Some(FinalSummary {
        root_cause: capture_field(&ROOT_CAUSE, section),
        timeline: capture_field(&TIMELINE, section),
        bias_trust: capture_field(&BIAS_TRUST, section),
        trust_score: capture_field(&TRUST_SCORE, section),
    })
}

fn capture_field(pattern: &Regex, section: &str) -> Option<String> {
    pattern
        .captures(section)
        .and_then(|caps| caps.get(1))
        // Bold residue from "**Label:** value" renderings.
        .map(|m| m.as_str().trim_matches(|c: char| c.is_whitespace() || c == '*'))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
