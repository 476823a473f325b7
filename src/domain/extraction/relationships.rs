//! Triple and badge parsing for candidate relationship lines.

use once_cell::sync::Lazy;
use regex::Regex;

use super::triple::{Badges, RelationshipTriple};

const BOLD: &str = "**";

static SENTIMENT_BADGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[Sentiment:\s*([^\]]+)\]").unwrap());
static EMOTION_BADGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[Emotion:\s*([^\]]+)\]").unwrap());
static INTENT_BADGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\[Intent:\s*([^\]]+)\]").unwrap());

/// Which parser accepted a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsePath {
    /// `**S** R **O**` split cleanly on the bold delimiter.
    Primary,
    /// Subject from the first bold pair, object from the last.
    Fallback,
}

/// Parses the text after a bullet marker into a triple.
///
/// Returns `None` for lines that fit neither shape.
pub fn parse_triple(body: &str) -> Option<(RelationshipTriple, ParsePath)> {
    let parts: Vec<&str> = body.split(BOLD).collect();
    if parts.len() >= 4 && parts[0].is_empty() {
        let triple = RelationshipTriple::new(parts[1].trim(), parts[2].trim(), parts[3].trim())?;
        return Some((triple, ParsePath::Primary));
    }

    parse_fallback(body).map(|triple| (triple, ParsePath::Fallback))
}

fn parse_fallback(body: &str) -> Option<RelationshipTriple> {
    let subject_start = body.find(BOLD)? + BOLD.len();
    let subject_end = subject_start + body[subject_start..].find(BOLD)?;
    let rest_start = subject_end + BOLD.len();

    // Pair the remaining delimiters in order; a trailing unmatched one is ignored.
    let delimiters: Vec<usize> = body[rest_start..]
        .match_indices(BOLD)
        .map(|(index, _)| rest_start + index)
        .collect();
    let last_pair = delimiters.chunks_exact(2).last()?;
    let (object_open, object_close) = (last_pair[0], last_pair[1]);

    let subject = body[subject_start..subject_end].trim();
    let object = body[object_open + BOLD.len()..object_close].trim();
    let relation = clean_relation(&body[rest_start..object_open]);

    RelationshipTriple::new(subject, relation, object)
}

/// Strips surrounding quotes, colons, commas and whitespace, then collapses
/// internal whitespace runs.
fn clean_relation(raw: &str) -> String {
    raw.trim_matches(|c: char| matches!(c, '\'' | '"' | ':' | ',') || c.is_whitespace())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Finds the sentiment, emotion and intent tags on a line.
pub fn extract_badges(line: &str) -> Badges {
    Badges {
        sentiment: capture_badge(&SENTIMENT_BADGE, line),
        emotion: capture_badge(&EMOTION_BADGE, line),
        intent: capture_badge(&INTENT_BADGE, line),
    }
}

fn capture_badge(pattern: &Regex, line: &str) -> Option<String> {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}
