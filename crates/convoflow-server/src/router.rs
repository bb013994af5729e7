//! Router assembly for the convoflow HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. CORS is permissive (the
/// canvas may be served from a different origin); TraceLayer provides
/// request-level logging via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/flow", get(handlers::queries::get_flow))
        .route("/flow/diagnostics", get(handlers::queries::get_diagnostics))
        .route("/flow/export", get(handlers::queries::get_export))
        .route("/flow/import", post(handlers::mutations::import))
        .route("/flow/nodes", post(handlers::mutations::add_node))
        .route(
            "/flow/nodes/{id}",
            delete(handlers::mutations::delete_node)
                .patch(handlers::mutations::update_node),
        )
        .route(
            "/flow/nodes/{id}/rename",
            post(handlers::mutations::rename_node),
        )
        .route("/flow/edges", post(handlers::mutations::connect))
        .route(
            "/flow/edges/{id}",
            delete(handlers::mutations::delete_edge)
                .patch(handlers::mutations::update_edge),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
