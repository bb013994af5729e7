//! Application state with a shared `FlowService` for concurrent access.
//!
//! The engine is single-writer by design, so the whole service sits
//! behind one `Arc<tokio::sync::Mutex<_>>`: handlers await the lock
//! without blocking the runtime, and every mutation observes the fully
//! applied result of the one before it.

use std::sync::Arc;

use crate::service::FlowService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared flow service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<FlowService>>,
}

impl AppState {
    /// Creates a state holding a freshly seeded flow.
    pub fn new() -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(FlowService::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
