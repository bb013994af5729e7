//! Node types for the flow graph.
//!
//! A [`FlowNode`] is one conversational state: an id, a display position,
//! and the editable [`NodeData`] payload. Validation findings are never
//! stored on the node -- collaborators join diagnostics to nodes by id at
//! presentation time, so the store stays the single source of truth for
//! authored data only.

use serde::{Deserialize, Serialize};

/// Display position of a node, in logical pixels.
///
/// Positions carry no semantic meaning: validation and export ignore them
/// entirely. The layout engine overwrites them wholesale on import.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }
}

/// Editable payload of a flow node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    /// Human-readable summary of the state. Required by validation but
    /// not by the store -- nodes are created blank and filled in later.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The utterance spoken when the flow enters this state. May be empty.
    #[serde(default)]
    pub prompt: String,
    /// Whether this node is an entry point of the flow. Only set at
    /// creation or import time; the validator expects at least one.
    #[serde(default)]
    pub is_start_node: bool,
}

impl NodeData {
    /// Applies a patch field-by-field: present fields overwrite, absent
    /// fields leave the current value unchanged.
    pub fn apply(&mut self, patch: &NodePatch) {
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(prompt) = &patch.prompt {
            self.prompt = prompt.clone();
        }
        if let Some(is_start_node) = patch.is_start_node {
            self.is_start_node = is_start_node;
        }
    }
}

/// A state in the conversational flow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    /// Non-empty identifier. Unique by convention; the store can hold
    /// duplicates (e.g. from a hand-written import) so the validator can
    /// flag them instead of silently dropping data.
    pub id: String,
    pub position: Position,
    pub data: NodeData,
}

/// Field-by-field patch for [`NodeData`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodePatch {
    pub description: Option<String>,
    pub prompt: Option<String>,
    pub is_start_node: Option<bool>,
}
