//! FlowStore: the canonical owner of the node and edge collections.
//!
//! [`FlowStore`] is the single source of truth for the authored graph. All
//! mutations are synchronous, atomic, and single-writer; validation and
//! export read the collections without ever mutating them. The store is an
//! explicitly owned value (injectable, resettable between tests), not a
//! process-wide singleton.
//!
//! Two behaviors are deliberate and must not be "fixed" here:
//! - `delete_node` does not cascade-delete edges. Dangling edges are a
//!   validator concern, not a store concern.
//! - `connect` permits duplicate source/target pairs, so synthesized edge
//!   ids can collide. The store never dedupes; id-addressed edge
//!   operations act on every match.

use rand::Rng;

use crate::condition::DEFAULT_CONDITION;
use crate::edge::{EdgeData, EdgePatch, FlowEdge};
use crate::node::{FlowNode, NodeData, NodePatch, Position};

/// The canonical node/edge collections, in insertion order.
///
/// Insertion order is a contract: the exporter walks nodes and edges in
/// store order, so two stores built by the same mutation sequence produce
/// byte-identical documents.
#[derive(Debug, Clone)]
pub struct FlowStore {
    nodes: Vec<FlowNode>,
    edges: Vec<FlowEdge>,
}

impl FlowStore {
    /// Id of the start node seeded into every fresh store.
    pub const SEED_NODE_ID: &'static str = "start-node";

    /// Creates a store holding the seeded start node and no edges.
    pub fn new() -> Self {
        FlowStore {
            nodes: vec![FlowNode {
                id: Self::SEED_NODE_ID.to_string(),
                position: Position::new(250.0, 100.0),
                data: NodeData {
                    description: Some("The beginning of the flow".to_string()),
                    prompt: "Welcome! How can I help you?".to_string(),
                    is_start_node: true,
                },
            }],
            edges: Vec::new(),
        }
    }

    pub fn nodes(&self) -> &[FlowNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    /// Returns the first node with the given id, if any.
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Appends a default-populated non-start node and returns its id.
    ///
    /// The id is a fresh `node_<7 base36 chars>` value, collision-checked
    /// against current ids. The position is pseudo-random but on-screen;
    /// it has no semantic meaning.
    pub fn add_node(&mut self) -> String {
        let mut rng = rand::thread_rng();
        let id = loop {
            let candidate = random_node_id(&mut rng);
            if self.node(&candidate).is_none() {
                break candidate;
            }
        };

        self.nodes.push(FlowNode {
            id: id.clone(),
            position: Position::new(
                rng.gen_range(100.0..300.0),
                rng.gen_range(100.0..300.0),
            ),
            data: NodeData {
                description: None,
                prompt: String::new(),
                is_start_node: false,
            },
        });
        id
    }

    /// Removes every node carrying `id`. Edges referencing the node are
    /// left in place (dangling, validator-visible).
    ///
    /// Returns `true` if anything was removed.
    pub fn delete_node(&mut self, id: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.id != id);
        self.nodes.len() != before
    }

    /// Renames a node and rewrites every edge endpoint referencing it,
    /// resynthesizing the affected edge ids so connectivity survives.
    ///
    /// Rejected silently (`false`, no mutation) when `new_id` is blank or
    /// collides with a different existing node. Renaming a node to its own
    /// id is a successful no-op.
    pub fn update_node_id(&mut self, old_id: &str, new_id: &str) -> bool {
        if new_id.trim().is_empty() {
            return false;
        }
        if new_id == old_id {
            return true;
        }
        if self.nodes.iter().any(|n| n.id == new_id) {
            return false;
        }
        if self.node(old_id).is_none() {
            return false;
        }

        for node in &mut self.nodes {
            if node.id == old_id {
                node.id = new_id.to_string();
            }
        }
        for edge in &mut self.edges {
            let mut touched = false;
            if edge.source == old_id {
                edge.source = new_id.to_string();
                touched = true;
            }
            if edge.target == old_id {
                edge.target = new_id.to_string();
                touched = true;
            }
            if touched {
                edge.id = FlowEdge::synth_id(&edge.source, &edge.target);
            }
        }
        true
    }

    /// Merges a patch into the data of every node carrying `id`.
    /// Unknown ids are ignored.
    pub fn update_node_data(&mut self, id: &str, patch: &NodePatch) -> bool {
        let mut updated = false;
        for node in self.nodes.iter_mut().filter(|n| n.id == id) {
            node.data.apply(patch);
            updated = true;
        }
        updated
    }

    /// Creates a new edge from `source` to `target` with the default
    /// `always` condition and returns its id.
    ///
    /// Permitted even if an edge with the same pair already exists; the
    /// duplicate-condition fallout is the validator's to report.
    pub fn connect(&mut self, source: &str, target: &str) -> String {
        let id = FlowEdge::synth_id(source, target);
        self.edges.push(FlowEdge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
            data: EdgeData {
                condition: DEFAULT_CONDITION.to_string(),
                parameters: None,
            },
        });
        id
    }

    /// Removes every edge carrying `id` (ids can collide, see `connect`).
    ///
    /// Returns `true` if anything was removed.
    pub fn delete_edge(&mut self, id: &str) -> bool {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != id);
        self.edges.len() != before
    }

    /// Merges a patch into the data of every edge carrying `id`.
    /// Unknown ids are ignored.
    pub fn update_edge_data(&mut self, id: &str, patch: &EdgePatch) -> bool {
        let mut updated = false;
        for edge in self.edges.iter_mut().filter(|e| e.id == id) {
            edge.data.apply(patch);
            updated = true;
        }
        updated
    }

    /// Atomic bulk replace used by the importer: both collections are
    /// swapped together. The importer guarantees it only calls this after
    /// the whole document has been accepted.
    pub fn replace_all(&mut self, nodes: Vec<FlowNode>, edges: Vec<FlowEdge>) {
        self.nodes = nodes;
        self.edges = edges;
    }
}

impl Default for FlowStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a `node_<7 base36 chars>` candidate id.
fn random_node_id(rng: &mut impl Rng) -> String {
    let suffix: String = (0..7)
        .map(|_| {
            let digit = rng.gen_range(0..36u32);
            char::from_digit(digit, 36).unwrap()
        })
        .collect();
    format!("node_{suffix}")
}
