//! Flow graph validation.
//!
//! [`validate_flow`] is a pure pass over the store collections: it never
//! mutates, never fails, and reports every problem it can find in one
//! call instead of short-circuiting. Diagnostics are advisory -- the
//! store accepts structurally broken graphs and keeps accepting edits;
//! the caller decides what to surface and where.
//!
//! Ordering is part of the contract. Checks run in a fixed sequence
//! (global start-node check, per-node checks in store order, global
//! duplicate-id scan) so identical inputs always produce an identical
//! diagnostic list.

use std::collections::HashSet;

use convoflow_core::condition::is_allowed_condition;
use convoflow_core::{FlowEdge, FlowNode};
use serde::Serialize;

/// A single validation finding, attached to the graph, a node, or an edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_id: Option<String>,
    pub message: String,
}

impl Diagnostic {
    /// A graph-level finding not tied to any node or edge.
    fn graph(message: impl Into<String>) -> Self {
        Diagnostic {
            node_id: None,
            edge_id: None,
            message: message.into(),
        }
    }

    /// A finding attached to one node.
    fn node(id: &str, message: impl Into<String>) -> Self {
        Diagnostic {
            node_id: Some(id.to_string()),
            edge_id: None,
            message: message.into(),
        }
    }
}

/// Validates the flow graph and returns every finding, in check order.
///
/// An empty graph yields exactly the missing-start-node diagnostic: no
/// nodes means no start node, and no node-level checks run.
pub fn validate_flow(nodes: &[FlowNode], edges: &[FlowEdge]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    // 1. The flow needs at least one entry point.
    if !nodes.iter().any(|n| n.data.is_start_node) {
        diagnostics.push(Diagnostic::graph(
            "The flow must have at least one Start Node.",
        ));
    }

    // 2. Per-node checks, in store order.
    for node in nodes {
        if node
            .data
            .description
            .as_deref()
            .map_or(true, |d| d.trim().is_empty())
        {
            diagnostics.push(Diagnostic::node(&node.id, "Description is required."));
        }

        let has_incoming = edges.iter().any(|e| e.target == node.id);
        let has_outgoing = edges.iter().any(|e| e.source == node.id);

        // A non-start node needs at least one incident edge. Start nodes
        // need an outgoing edge; incoming edges to them are not checked.
        if !node.data.is_start_node && !has_incoming && !has_outgoing {
            diagnostics.push(Diagnostic::node(
                &node.id,
                "Node is completely disconnected from the flow.",
            ));
        }
        if node.data.is_start_node && !has_outgoing {
            diagnostics.push(Diagnostic::node(
                &node.id,
                "Start node has no outgoing connections.",
            ));
        }

        // Outgoing edges must map conditions 1-1. The second and later
        // edges repeating a (trimmed) condition are the ones flagged.
        let mut seen = HashSet::new();
        for edge in edges.iter().filter(|e| e.source == node.id) {
            let condition = edge.data.condition.trim();

            if !condition.is_empty() && !is_allowed_condition(condition) {
                diagnostics.push(Diagnostic::node(
                    &node.id,
                    format!("Invalid condition \"{condition}\" on outgoing edge."),
                ));
            }

            if !seen.insert(condition.to_string()) {
                let message = if condition.is_empty() {
                    "Multiple edges have an empty condition.".to_string()
                } else {
                    format!("Multiple edges share the same condition: \"{condition}\"")
                };
                diagnostics.push(Diagnostic::node(&node.id, message));
            }
        }
    }

    // 3. Node id uniqueness: one diagnostic per repeat occurrence.
    let mut ids = HashSet::new();
    for node in nodes {
        if !ids.insert(node.id.as_str()) {
            diagnostics.push(Diagnostic::node(
                &node.id,
                format!("Duplicate Node ID detected: {}", node.id),
            ));
        }
    }

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use convoflow_core::{EdgeData, NodeData, Position};

    fn node(id: &str, description: Option<&str>, is_start: bool) -> FlowNode {
        FlowNode {
            id: id.to_string(),
            position: Position::new(0.0, 0.0),
            data: NodeData {
                description: description.map(str::to_string),
                prompt: String::new(),
                is_start_node: is_start,
            },
        }
    }

    fn edge(source: &str, target: &str, condition: &str) -> FlowEdge {
        FlowEdge {
            id: FlowEdge::synth_id(source, target),
            source: source.to_string(),
            target: target.to_string(),
            data: EdgeData {
                condition: condition.to_string(),
                parameters: None,
            },
        }
    }

    #[test]
    fn empty_graph_yields_exactly_the_start_node_diagnostic() {
        let diagnostics = validate_flow(&[], &[]);
        assert_eq!(
            diagnostics,
            vec![Diagnostic {
                node_id: None,
                edge_id: None,
                message: "The flow must have at least one Start Node.".into(),
            }]
        );
    }

    #[test]
    fn lone_start_node_has_no_outgoing_connections() {
        let nodes = vec![node("s", Some("entry"), true)];
        let diagnostics = validate_flow(&nodes, &[]);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].node_id.as_deref(), Some("s"));
        assert_eq!(
            diagnostics[0].message,
            "Start node has no outgoing connections."
        );
    }

    #[test]
    fn blank_description_is_flagged() {
        let nodes = vec![node("s", Some("   "), true)];
        let diagnostics = validate_flow(&nodes, &[]);

        assert_eq!(diagnostics[0].message, "Description is required.");
        assert_eq!(
            diagnostics[1].message,
            "Start node has no outgoing connections."
        );
    }

    #[test]
    fn disconnected_non_start_node_is_flagged() {
        let nodes = vec![
            node("s", Some("entry"), true),
            node("orphan", Some("never reached"), false),
        ];
        let edges = vec![edge("s", "s", "always")];
        let diagnostics = validate_flow(&nodes, &edges);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].node_id.as_deref(), Some("orphan"));
        assert_eq!(
            diagnostics[0].message,
            "Node is completely disconnected from the flow."
        );
    }

    #[test]
    fn duplicate_named_condition_yields_exactly_one_diagnostic() {
        let nodes = vec![
            node("n", Some("branch"), true),
            node("a", Some("left"), false),
            node("b", Some("right"), false),
        ];
        let edges = vec![edge("n", "a", "always"), edge("n", "b", "always")];
        let diagnostics = validate_flow(&nodes, &edges);

        let duplicates: Vec<_> = diagnostics
            .iter()
            .filter(|d| d.message.contains("share the same condition"))
            .collect();
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].node_id.as_deref(), Some("n"));
        assert_eq!(
            duplicates[0].message,
            "Multiple edges share the same condition: \"always\""
        );
    }

    #[test]
    fn duplicate_empty_condition_uses_the_empty_wording() {
        let nodes = vec![
            node("n", Some("branch"), true),
            node("a", Some("left"), false),
            node("b", Some("right"), false),
        ];
        let edges = vec![edge("n", "a", ""), edge("n", "b", "  ")];
        let diagnostics = validate_flow(&nodes, &edges);

        assert!(diagnostics
            .iter()
            .any(|d| d.message == "Multiple edges have an empty condition."));
    }

    #[test]
    fn unknown_condition_is_invalid_but_empty_is_not() {
        let nodes = vec![
            node("n", Some("branch"), true),
            node("a", Some("left"), false),
        ];
        let edges = vec![edge("n", "a", "sometimes"), edge("a", "n", "")];
        let diagnostics = validate_flow(&nodes, &edges);

        assert!(diagnostics
            .iter()
            .any(|d| d.message == "Invalid condition \"sometimes\" on outgoing edge."));
        assert!(!diagnostics
            .iter()
            .any(|d| d.message.starts_with("Invalid condition \"\"")));
    }

    #[test]
    fn condition_matching_trims_before_comparison() {
        let nodes = vec![
            node("n", Some("branch"), true),
            node("a", Some("left"), false),
            node("b", Some("right"), false),
        ];
        // " always " trims to a legal label and then collides with "always".
        let edges = vec![edge("n", "a", " always "), edge("n", "b", "always")];
        let diagnostics = validate_flow(&nodes, &edges);

        assert!(!diagnostics
            .iter()
            .any(|d| d.message.starts_with("Invalid condition")));
        assert!(diagnostics
            .iter()
            .any(|d| d.message == "Multiple edges share the same condition: \"always\""));
    }

    #[test]
    fn duplicate_ids_flagged_once_per_repeat_occurrence() {
        let nodes = vec![
            node("n", Some("first"), true),
            node("n", Some("second"), false),
            node("n", Some("third"), false),
        ];
        let edges = vec![edge("n", "n", "always")];
        let diagnostics = validate_flow(&nodes, &edges);

        let repeats: Vec<_> = diagnostics
            .iter()
            .filter(|d| d.message == "Duplicate Node ID detected: n")
            .collect();
        // Three occurrences, two repeats.
        assert_eq!(repeats.len(), 2);
    }

    #[test]
    fn dangling_edges_keep_their_endpoints_connected() {
        // "gone" was deleted but its edge survived; "s" still counts as
        // having an outgoing connection.
        let nodes = vec![node("s", Some("entry"), true)];
        let edges = vec![edge("s", "gone", "always")];
        let diagnostics = validate_flow(&nodes, &edges);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn diagnostics_order_is_deterministic() {
        let nodes = vec![node("b", None, false), node("a", None, false)];
        let first = validate_flow(&nodes, &[]);
        let second = validate_flow(&nodes, &[]);

        assert_eq!(first, second);
        // Global check first, then node checks in store order.
        assert_eq!(first[0].node_id, None);
        assert_eq!(first[1].node_id.as_deref(), Some("b"));
    }

    #[test]
    fn diagnostics_serialize_without_absent_ids() {
        let json = serde_json::to_value(validate_flow(&[], &[])).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "message": "The flow must have at least one Start Node." }
            ])
        );
    }
}
