//! Import and normalization of external flow documents.
//!
//! The importer walks the raw JSON value by hand rather than deriving a
//! deserializer, so schema failures can name the offending array index.
//! It fails fast: the first bad element aborts the whole import, which is
//! what lets [`import_into`] replace the store atomically.

use convoflow_core::{EdgeData, FlowEdge, FlowNode, FlowStore, NodeData, Position};
use convoflow_layout::{assign_positions, LayoutConfig};
use serde_json::Value;

use crate::error::ImportError;

/// Parses an external document into laid-out, store-ready collections.
///
/// The first element in input order becomes the sole start node and all
/// others are non-start, regardless of any start-like field in the input.
/// This is a deliberate simplifying heuristic, not an attempt to infer
/// entry points from the payload.
///
/// Defaults on success: `prompt` falls back to the empty string, an edge
/// `condition` to the empty string, and an empty-string `description` is
/// treated as absent. Edge ids are synthesized as `{id}-{to_node_id}`.
pub fn import_flow(text: &str) -> Result<(Vec<FlowNode>, Vec<FlowEdge>), ImportError> {
    let document: Value = serde_json::from_str(text)?;
    let Value::Array(items) = document else {
        return Err(ImportError::NotAnArray);
    };

    let mut nodes = Vec::with_capacity(items.len());
    let mut edges = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let id = match item.get("id").and_then(Value::as_str) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => return Err(ImportError::MissingNodeId { index }),
        };

        let description = item
            .get("description")
            .and_then(Value::as_str)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        let prompt = item
            .get("prompt")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        nodes.push(FlowNode {
            id: id.clone(),
            // Placeholder; the layout pass below overwrites every position.
            position: Position::new(0.0, 0.0),
            data: NodeData {
                description,
                prompt,
                is_start_node: index == 0,
            },
        });

        if let Some(Value::Array(raw_edges)) = item.get("edges") {
            for (edge_index, raw) in raw_edges.iter().enumerate() {
                let target = match raw.get("to_node_id").and_then(Value::as_str) {
                    Some(target) if !target.is_empty() => target.to_string(),
                    _ => {
                        return Err(ImportError::MissingEdgeTarget {
                            node_id: id.clone(),
                            index: edge_index,
                        })
                    }
                };
                let condition = raw
                    .get("condition")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                let parameters = raw
                    .get("parameters")
                    .and_then(|p| serde_json::from_value(p.clone()).ok());

                edges.push(FlowEdge {
                    id: FlowEdge::synth_id(&id, &target),
                    source: id.clone(),
                    target,
                    data: EdgeData {
                        condition,
                        parameters,
                    },
                });
            }
        }
    }

    assign_positions(&mut nodes, &edges, &LayoutConfig::default());
    Ok((nodes, edges))
}

/// Imports `text` and replaces the store contents atomically on success.
///
/// On any error the store is left exactly as it was.
pub fn import_into(store: &mut FlowStore, text: &str) -> Result<(), ImportError> {
    let (nodes, edges) = import_flow(text)?;
    store.replace_all(nodes, edges);
    Ok(())
}
