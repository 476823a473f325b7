//! Relationship triples and the analysis steps built from them.

use serde::{Deserialize, Serialize};

/// Relation label used when a line names two entities but no relation.
pub const FALLBACK_RELATION: &str = "is related to";

/// A subject-relation-object record scraped from one relationship line.
///
/// # Invariants
///
/// - `subject` and `object` are non-empty
/// - `relation` is non-empty (defaults to [`FALLBACK_RELATION`])
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RelationshipTriple {
    pub subject: String,
    pub relation: String,
    pub object: String,
}

impl RelationshipTriple {
    /// Builds a triple, substituting the fallback relation for an empty one.
    ///
    /// Returns `None` when either entity is empty.
    pub fn new(
        subject: impl Into<String>,
        relation: impl Into<String>,
        object: impl Into<String>,
    ) -> Option<Self> {
        let subject = subject.into();
        let object = object.into();
        if subject.is_empty() || object.is_empty() {
            return None;
        }

        let relation = relation.into();
        let relation = if relation.is_empty() {
            FALLBACK_RELATION.to_string()
        } else {
            relation
        };

        Some(Self {
            subject,
            relation,
            object,
        })
    }

    /// Display form used for synthesized steps: `**subject** relation **object**`.
    pub fn display_text(&self) -> String {
        format!("**{}** {} **{}**", self.subject, self.relation, self.object)
    }
}

/// A triple annotated with the optional bracket tags found on its line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStep {
    pub triple: RelationshipTriple,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    /// The source line, or the display form for synthesized steps.
    pub text: String,
}

impl AnalysisStep {
    /// Creates a step for a line that carried its own source text.
    pub fn from_line(triple: RelationshipTriple, badges: Badges, text: impl Into<String>) -> Self {
        Self {
            triple,
            sentiment: badges.sentiment,
            emotion: badges.emotion,
            intent: badges.intent,
            text: text.into(),
        }
    }

    /// Creates a badge-less step whose text is rebuilt from the triple.
    pub fn synthesized(triple: RelationshipTriple) -> Self {
        let text = triple.display_text();
        Self {
            triple,
            sentiment: None,
            emotion: None,
            intent: None,
            text,
        }
    }

    /// Returns true if any bracket tag was found.
    pub fn has_badges(&self) -> bool {
        self.sentiment.is_some() || self.emotion.is_some() || self.intent.is_some()
    }
}

/// Bracket tags found on a relationship line. Each one is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Badges {
    pub sentiment: Option<String>,
    pub emotion: Option<String>,
    pub intent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_explicit_relation() {
        let triple = RelationshipTriple::new("A", "acquired", "B").unwrap();
        assert_eq!(triple.relation, "acquired");
    }

    #[test]
    fn new_substitutes_fallback_relation() {
        let triple = RelationshipTriple::new("A", "", "B").unwrap();
        assert_eq!(triple.relation, FALLBACK_RELATION);
    }

    #[test]
    fn new_rejects_missing_entities() {
        assert!(RelationshipTriple::new("", "rel", "B").is_none());
        assert!(RelationshipTriple::new("A", "rel", "").is_none());
    }

    #[test]
    fn synthesized_step_has_display_text_and_no_badges() {
        let triple = RelationshipTriple::new("Company X", "acquired", "Company Y").unwrap();
        let step = AnalysisStep::synthesized(triple);

        assert_eq!(step.text, "**Company X** acquired **Company Y**");
        assert!(!step.has_badges());
    }

    #[test]
    fn step_serializes_without_absent_badges() {
        let triple = RelationshipTriple::new("A", "rel", "B").unwrap();
        let badges = Badges {
            sentiment: Some("negative".to_string()),
            ..Default::default()
        };
        let step = AnalysisStep::from_line(triple, badges, "- **A** rel **B**");

        let json = serde_json::to_value(&step).unwrap();
        assert_eq!(json["sentiment"], "negative");
        assert!(json.get("emotion").is_none());
        assert!(json.get("intent").is_none());
    }
}
