//! Mutation handlers: node/edge edits and whole-document import.
//!
//! Handlers are deliberately thin -- each one takes the service lock,
//! delegates to [`FlowService`], and maps the result onto the wire.
//! Deletion and patching of unknown ids are no-ops reported in the
//! response body, not errors, matching the store's silent-rejection
//! contract.

use axum::extract::{Path, State};
use axum::Json;
use convoflow_core::{EdgePatch, NodePatch};

use crate::error::ApiError;
use crate::schema::{
    AddNodeResponse, ConnectRequest, ConnectResponse, DeletedResponse, ImportResponse,
    RenameNodeRequest, RenameNodeResponse, UpdatedResponse,
};
use crate::state::AppState;

/// Appends a fresh default-populated node.
///
/// `POST /flow/nodes`
pub async fn add_node(State(state): State<AppState>) -> Json<AddNodeResponse> {
    let mut service = state.service.lock().await;
    Json(AddNodeResponse {
        id: service.add_node(),
    })
}

/// Removes a node. Edges referencing it survive as dangling edges.
///
/// `DELETE /flow/nodes/{id}`
pub async fn delete_node(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<DeletedResponse> {
    let mut service = state.service.lock().await;
    Json(DeletedResponse {
        deleted: service.delete_node(&id),
    })
}

/// Renames a node, cascading into every edge endpoint that references it.
///
/// `POST /flow/nodes/{id}/rename`
///
/// A rejected rename (blank or colliding target) answers 200 with
/// `renamed: false` rather than an error; the caller checks and retries.
pub async fn rename_node(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RenameNodeRequest>,
) -> Json<RenameNodeResponse> {
    let mut service = state.service.lock().await;
    Json(RenameNodeResponse {
        renamed: service.rename_node(&id, &req.new_id),
    })
}

/// Merges a patch into a node's data.
///
/// `PATCH /flow/nodes/{id}`
pub async fn update_node(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<NodePatch>,
) -> Json<UpdatedResponse> {
    let mut service = state.service.lock().await;
    Json(UpdatedResponse {
        updated: service.update_node(&id, &patch),
    })
}

/// Creates an edge with the default `always` condition.
///
/// `POST /flow/edges`
///
/// Duplicate source/target pairs are permitted; the validator reports
/// the resulting duplicate conditions, the store does not.
pub async fn connect(
    State(state): State<AppState>,
    Json(req): Json<ConnectRequest>,
) -> Json<ConnectResponse> {
    let mut service = state.service.lock().await;
    Json(ConnectResponse {
        id: service.connect(&req.source, &req.target),
    })
}

/// Removes every edge carrying the id (synthesized ids can collide).
///
/// `DELETE /flow/edges/{id}`
pub async fn delete_edge(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<DeletedResponse> {
    let mut service = state.service.lock().await;
    Json(DeletedResponse {
        deleted: service.delete_edge(&id),
    })
}

/// Merges a patch into an edge's data.
///
/// `PATCH /flow/edges/{id}`
pub async fn update_edge(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EdgePatch>,
) -> Json<UpdatedResponse> {
    let mut service = state.service.lock().await;
    Json(UpdatedResponse {
        updated: service.update_edge(&id, &patch),
    })
}

/// Imports a raw JSON document, replacing the graph atomically.
///
/// `POST /flow/import` (body: the document text)
///
/// Parse and schema failures answer 400 with the importer's message and
/// leave the current graph untouched.
pub async fn import(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<ImportResponse>, ApiError> {
    let mut service = state.service.lock().await;
    service
        .import(&body)
        .map_err(|err| ApiError::BadRequest(err.to_string()))?;
    Ok(Json(ImportResponse {
        nodes: service.nodes().len(),
        edges: service.edges().len(),
    }))
}
