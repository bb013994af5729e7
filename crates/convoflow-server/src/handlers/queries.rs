//! Read-only handlers: graph snapshot, diagnostics, export document.

use axum::extract::State;
use axum::Json;
use convoflow_schema::SchemaNode;

use crate::schema::{DiagnosticsResponse, FlowResponse};
use crate::state::AppState;

/// Returns the full graph with positions, for rendering.
///
/// `GET /flow`
pub async fn get_flow(State(state): State<AppState>) -> Json<FlowResponse> {
    let service = state.service.lock().await;
    Json(FlowResponse {
        nodes: service.nodes().to_vec(),
        edges: service.edges().to_vec(),
    })
}

/// Runs the validator and returns every finding in check order.
///
/// `GET /flow/diagnostics`
///
/// Diagnostics are advisory: this endpoint never fails, and a non-empty
/// list does not block any other operation.
pub async fn get_diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let service = state.service.lock().await;
    Json(DiagnosticsResponse {
        diagnostics: service.diagnostics(),
    })
}

/// Projects the graph into the export schema document.
///
/// `GET /flow/export`
///
/// Export never validates; a structurally broken graph exports as-is.
pub async fn get_export(State(state): State<AppState>) -> Json<Vec<SchemaNode>> {
    let service = state.service.lock().await;
    Json(service.export())
}
