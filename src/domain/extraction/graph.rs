//! Graph data for the force-directed relationship view.

use serde::{Deserialize, Serialize};

use super::triple::RelationshipTriple;
use super::ExtractionResult;

/// A graph vertex: one distinct entity name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
}

/// A directed edge from subject to object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    pub label: String,
}

/// Nodes and links in the shape the graph renderer consumes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl GraphData {
    /// Builds one link per triple; nodes are unique, in first-seen order.
    pub fn from_triples<'a>(triples: impl IntoIterator<Item = &'a RelationshipTriple>) -> Self {
        let mut graph = Self::default();

        for triple in triples {
            graph.add_node(&triple.subject);
            graph.add_node(&triple.object);
            graph.links.push(GraphLink {
                source: triple.subject.clone(),
                target: triple.object.clone(),
                label: triple.relation.clone(),
            });
        }

        graph
    }

    /// Graph for a single analysis step, or every relationship when the
    /// index is out of range.
    pub fn for_step(result: &ExtractionResult, index: usize) -> Self {
        match result.steps.get(index) {
            Some(step) => Self::from_triples([&step.triple]),
            None => Self::from_triples(&result.relationships),
        }
    }

    /// Returns true if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn add_node(&mut self, id: &str) {
        if !self.nodes.iter().any(|node| node.id == id) {
            self.nodes.push(GraphNode { id: id.to_string() });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::extraction::extract;

    fn triple(s: &str, r: &str, o: &str) -> RelationshipTriple {
        RelationshipTriple::new(s, r, o).unwrap()
    }

    #[test]
    fn nodes_are_unique_in_first_seen_order() {
        let triples = vec![triple("A", "x", "B"), triple("B", "y", "C"), triple("A", "z", "C")];
        let graph = GraphData::from_triples(&triples);

        let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
        assert_eq!(graph.links.len(), 3);
        assert_eq!(graph.links[2].label, "z");
    }

    #[test]
    fn empty_input_gives_empty_graph() {
        let graph = GraphData::from_triples(&Vec::<RelationshipTriple>::new());
        assert!(graph.is_empty());
        assert!(graph.links.is_empty());
    }

    #[test]
    fn for_step_focuses_one_triple() {
        let result = extract(
            "## Relationships Between Entities\n- **A** x **B**\n- **C** y **D**\n",
        );

        let graph = GraphData::for_step(&result, 1);
        assert_eq!(graph.links.len(), 1);
        assert_eq!(graph.links[0].source, "C");

        let all = GraphData::for_step(&result, 9);
        assert_eq!(all.links.len(), 2);
    }
}
