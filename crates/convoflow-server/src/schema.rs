//! Request and response bodies for the HTTP API.

use convoflow_check::Diagnostic;
use convoflow_core::{FlowEdge, FlowNode};
use serde::{Deserialize, Serialize};

/// The full graph as the canvas renders it: nodes with positions, edges.
#[derive(Debug, Clone, Serialize)]
pub struct FlowResponse {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddNodeResponse {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenameNodeRequest {
    pub new_id: String,
}

/// `renamed: false` means the rename was rejected silently (blank or
/// colliding target) and the graph is unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct RenameNodeResponse {
    pub renamed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectRequest {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConnectResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub deleted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdatedResponse {
    pub updated: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsResponse {
    pub diagnostics: Vec<Diagnostic>,
}

/// Node and edge counts of the freshly replaced graph.
#[derive(Debug, Clone, Serialize)]
pub struct ImportResponse {
    pub nodes: usize,
    pub edges: usize,
}
