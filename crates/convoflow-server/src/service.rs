//! FlowService: the store plus its derived views, behind one API.
//!
//! Handlers stay thin; everything the HTTP surface can do goes through
//! [`FlowService`], which owns the [`FlowStore`] and derives diagnostics
//! and the export document on demand. Derivations are recomputed per
//! call -- they are cheap at editing scale and never stored.

use convoflow_check::{validate_flow, Diagnostic};
use convoflow_core::{EdgePatch, FlowEdge, FlowNode, FlowStore, NodePatch};
use convoflow_schema::{export_flow, import_into, ImportError, SchemaNode};

/// Owns the canonical graph and exposes every engine operation.
pub struct FlowService {
    store: FlowStore,
}

impl FlowService {
    /// Creates a service around a freshly seeded store.
    pub fn new() -> Self {
        FlowService {
            store: FlowStore::new(),
        }
    }

    pub fn nodes(&self) -> &[FlowNode] {
        self.store.nodes()
    }

    pub fn edges(&self) -> &[FlowEdge] {
        self.store.edges()
    }

    pub fn add_node(&mut self) -> String {
        self.store.add_node()
    }

    pub fn delete_node(&mut self, id: &str) -> bool {
        self.store.delete_node(id)
    }

    /// Renames a node. `false` means the rename was rejected (blank or
    /// colliding target) and nothing changed; the caller decides whether
    /// to retry with a different id.
    pub fn rename_node(&mut self, old_id: &str, new_id: &str) -> bool {
        self.store.update_node_id(old_id, new_id)
    }

    pub fn update_node(&mut self, id: &str, patch: &NodePatch) -> bool {
        self.store.update_node_data(id, patch)
    }

    pub fn connect(&mut self, source: &str, target: &str) -> String {
        self.store.connect(source, target)
    }

    pub fn delete_edge(&mut self, id: &str) -> bool {
        self.store.delete_edge(id)
    }

    pub fn update_edge(&mut self, id: &str, patch: &EdgePatch) -> bool {
        self.store.update_edge_data(id, patch)
    }

    /// Runs the validator over the current collections.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        validate_flow(self.store.nodes(), self.store.edges())
    }

    /// Projects the current collections into the export document.
    pub fn export(&self) -> Vec<SchemaNode> {
        export_flow(self.store.nodes(), self.store.edges())
    }

    /// Imports an external document, replacing the store atomically on
    /// success. On failure the store is untouched and the error carries a
    /// human-readable, index-localized message.
    pub fn import(&mut self, text: &str) -> Result<(), ImportError> {
        import_into(&mut self.store, text)?;
        tracing::info!(
            nodes = self.store.node_count(),
            edges = self.store.edge_count(),
            "imported flow document"
        );
        Ok(())
    }
}

impl Default for FlowService {
    fn default() -> Self {
        Self::new()
    }
}
