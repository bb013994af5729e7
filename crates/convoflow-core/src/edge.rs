//! Edge types for the flow graph.
//!
//! A [`FlowEdge`] is one directed transition between states, guarded by a
//! condition label from the registry (or unlabelled). Self-loops are
//! structurally permitted; the layout engine skips them when computing
//! graph depth.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Editable payload of a flow edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    /// Guard label; empty means unlabelled, which is distinct from an
    /// explicit `always`.
    #[serde(default)]
    pub condition: String,
    /// Opaque key/value payload forwarded with the transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, String>>,
}

/// A directed transition in the conversational flow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    /// Conventional id `{source}-{target}`. Not guaranteed unique: two
    /// connects of the same pair collide, and the store keeps both.
    pub id: String,
    pub source: String,
    pub target: String,
    pub data: EdgeData,
}

impl FlowEdge {
    /// Synthesizes the conventional edge id for a source/target pair.
    pub fn synth_id(source: &str, target: &str) -> String {
        format!("{source}-{target}")
    }

    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Field-by-field patch for [`EdgeData`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EdgePatch {
    pub condition: Option<String>,
    pub parameters: Option<IndexMap<String, String>>,
}

impl EdgeData {
    /// Applies a patch field-by-field: present fields overwrite, absent
    /// fields leave the current value unchanged.
    pub fn apply(&mut self, patch: &EdgePatch) {
        if let Some(condition) = &patch.condition {
            self.condition = condition.clone();
        }
        if let Some(parameters) = &patch.parameters {
            self.parameters = Some(parameters.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synth_id_joins_endpoints() {
        assert_eq!(FlowEdge::synth_id("greet", "verify"), "greet-verify");
    }

    #[test]
    fn self_loop_detection() {
        let edge = FlowEdge {
            id: FlowEdge::synth_id("a", "a"),
            source: "a".into(),
            target: "a".into(),
            data: EdgeData {
                condition: "on_error".into(),
                parameters: None,
            },
        };
        assert!(edge.is_self_loop());
    }
}
