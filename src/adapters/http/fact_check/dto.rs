//! DTOs for fact-check and extraction endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::extraction::{AnalysisStep, FinalSummary, GraphData, RelationshipTriple};

/// Request body for POST /api/fact-check
#[derive(Debug, Clone, Deserialize)]
pub struct FactCheckRequest {
    pub query: String,
}

/// Request body for POST /api/extract
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
    /// Focus the graph on one analysis step.
    #[serde(default)]
    pub step: Option<usize>,
}

/// Response for POST /api/extract
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractResponse {
    pub relationships: Vec<RelationshipTriple>,
    pub steps: Vec<AnalysisStep>,
    pub summary: Option<FinalSummary>,
    pub graph: GraphData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_request_step_is_optional() {
        let req: ExtractRequest = serde_json::from_str(r#"{"text": "abc"}"#).unwrap();
        assert_eq!(req.text, "abc");
        assert_eq!(req.step, None);

        let req: ExtractRequest = serde_json::from_str(r#"{"text": "abc", "step": 2}"#).unwrap();
        assert_eq!(req.step, Some(2));
    }
}
