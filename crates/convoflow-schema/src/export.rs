//! Projection of the store collections into the external document shape.

use convoflow_core::{FlowEdge, FlowNode};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One transition in the schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaEdge {
    pub to_node_id: String,
    /// Always present on export (possibly empty); optional on import.
    #[serde(default)]
    pub condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, String>>,
}

/// One state in the schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub edges: Vec<SchemaEdge>,
}

/// Projects nodes and edges into the schema document.
///
/// Purely positional: nodes in store order, each with its outgoing edges
/// in store order. No validation happens here -- a graph with dangling
/// edges or no start node exports exactly as it is; export and validation
/// are orthogonal concerns.
pub fn export_flow(nodes: &[FlowNode], edges: &[FlowEdge]) -> Vec<SchemaNode> {
    nodes
        .iter()
        .map(|node| SchemaNode {
            id: node.id.clone(),
            description: node.data.description.clone(),
            prompt: node.data.prompt.clone(),
            edges: edges
                .iter()
                .filter(|e| e.source == node.id)
                .map(|e| SchemaEdge {
                    to_node_id: e.target.clone(),
                    condition: e.data.condition.clone(),
                    parameters: e.data.parameters.clone(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use convoflow_core::{EdgePatch, FlowStore};

    #[test]
    fn exports_nodes_and_outgoing_edges_in_store_order() {
        let mut store = FlowStore::new();
        let a = store.add_node();
        let b = store.add_node();
        store.connect(FlowStore::SEED_NODE_ID, &a);
        store.connect(FlowStore::SEED_NODE_ID, &b);

        let document = export_flow(store.nodes(), store.edges());

        assert_eq!(document.len(), 3);
        assert_eq!(document[0].id, FlowStore::SEED_NODE_ID);
        assert_eq!(document[0].edges.len(), 2);
        assert_eq!(document[0].edges[0].to_node_id, a);
        assert_eq!(document[0].edges[1].to_node_id, b);
        assert!(document[1].edges.is_empty());
    }

    #[test]
    fn condition_is_always_present_parameters_only_when_set() {
        let mut store = FlowStore::new();
        let a = store.add_node();
        let b = store.add_node();
        let with_params = store.connect(FlowStore::SEED_NODE_ID, &a);
        store.connect(FlowStore::SEED_NODE_ID, &b);

        let mut parameters = indexmap::IndexMap::new();
        parameters.insert("retries".to_string(), "3".to_string());
        store.update_edge_data(
            &with_params,
            &EdgePatch {
                condition: Some(String::new()),
                parameters: Some(parameters),
            },
        );

        let json =
            serde_json::to_value(export_flow(store.nodes(), store.edges())).unwrap();
        let edges = &json[0]["edges"];

        // Unlabelled condition still serializes, as an empty string.
        assert_eq!(edges[0]["condition"], "");
        assert_eq!(edges[0]["parameters"]["retries"], "3");

        // An edge without parameters omits the key entirely.
        assert_eq!(edges[1]["condition"], "always");
        assert!(edges[1].get("parameters").is_none());
    }

    #[test]
    fn dangling_edges_export_as_is() {
        let mut store = FlowStore::new();
        let a = store.add_node();
        store.connect(FlowStore::SEED_NODE_ID, &a);
        store.delete_node(&a);

        let document = export_flow(store.nodes(), store.edges());
        assert_eq!(document[0].edges[0].to_node_id, a);
    }
}
