//! Fact-check response extraction.
//!
//! Best-effort scraping of the semi-structured markdown returned by the
//! fact-checking model:
//!
//! ```text
//! ## Relationships Between Entities
//! - **Company X** acquired **Company Y** [Sentiment: negative]
//!
//! ## Final Estimation
//! Root cause: ...
//! Trust score: ...
//! ```
//!
//! Nothing here fails. Missing or malformed sections produce empty or
//! absent results, and lines that fit no known shape are skipped.

mod graph;
mod relationships;
mod section;
mod summary;
mod triple;

pub use graph::{GraphData, GraphLink, GraphNode};
pub use relationships::{extract_badges, parse_triple, ParsePath};
pub use section::{candidate_lines, classify_line, isolate_section, LineKind};
pub use summary::{parse_summary, FinalSummary};
pub use triple::{AnalysisStep, Badges, RelationshipTriple, FALLBACK_RELATION};

use serde::{Deserialize, Serialize};

/// Heading that opens the relationships section.
pub const RELATIONSHIPS_HEADER: &str = "## Relationships Between Entities";

/// Everything scraped from one response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub relationships: Vec<RelationshipTriple>,
    pub steps: Vec<AnalysisStep>,
    pub summary: Option<FinalSummary>,
}

/// Extracts triples, steps and the summary from a response.
///
/// Each primary-path line becomes a step carrying its badges and source
/// line. Fallback-path lines only contribute triples. When no line yields a
/// step, one badge-less step is synthesized per triple.
pub fn extract(response: &str) -> ExtractionResult {
    let mut result = ExtractionResult {
        summary: parse_summary(response),
        ..Default::default()
    };

    let Some(section) = isolate_section(response, RELATIONSHIPS_HEADER) else {
        return result;
    };

    for (line, body) in candidate_lines(section) {
        let Some((triple, path)) = parse_triple(body) else {
            continue;
        };

        if path == ParsePath::Primary {
            result
                .steps
                .push(AnalysisStep::from_line(triple.clone(), extract_badges(line), line));
        }
        result.relationships.push(triple);
    }

    if result.steps.is_empty() {
        result.steps = result
            .relationships
            .iter()
            .cloned()
            .map(AnalysisStep::synthesized)
            .collect();
    }

    tracing::debug!(
        relationships = result.relationships.len(),
        has_summary = result.summary.is_some(),
        "Extracted fact-check response"
    );

    result
}
