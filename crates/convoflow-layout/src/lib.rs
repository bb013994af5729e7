//! Layered left-to-right placement for flow graphs.
//!
//! Nodes are ranked by graph depth (self-loops ignored) and placed in
//! columns: increasing x follows edge direction, rows within a column
//! follow store order. Cycles are collapsed into a single rank via
//! strongly-connected-component condensation, so ranking is best-effort
//! under cycles rather than a hard guarantee.
//!
//! The contract, independent of algorithm:
//! - a node is never placed strictly left of a node with a directed path
//!   into it, whenever a consistent rank is determinable;
//! - bounding boxes of any two nodes are separated by at least the
//!   configured minimum on the axis that separates them;
//! - every node ends up with finite coordinates -- a node the ranking
//!   cannot see falls back to a pseudo-random in-bounds spot;
//! - the computed coordinate is the box center, re-centered to the
//!   stored top-left corner before writing.

use std::collections::HashMap;

use convoflow_core::{FlowEdge, FlowNode, Position};
use petgraph::algo::{condensation, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use rand::Rng;

/// Spacing and sizing knobs for the layered layout.
///
/// Nodes are not measured; a nominal bounding box is used for spacing.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    /// Minimum horizontal gap between consecutive rank columns.
    pub rank_sep: f64,
    /// Minimum vertical gap between boxes within a column.
    pub node_sep: f64,
    /// Top-left corner of the layout area.
    pub origin: Position,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            node_width: 350.0,
            node_height: 250.0,
            rank_sep: 500.0,
            node_sep: 250.0,
            origin: Position::new(100.0, 100.0),
        }
    }
}

/// Assigns a finite position to every node in place.
///
/// Duplicate node ids share the position computed for the first
/// occurrence.
pub fn assign_positions(nodes: &mut [FlowNode], edges: &[FlowEdge], config: &LayoutConfig) {
    let ranks = compute_ranks(nodes, edges);

    let mut rng = rand::thread_rng();
    let mut rows: HashMap<usize, usize> = HashMap::new();
    let mut positions: HashMap<String, Position> = HashMap::new();

    for node in nodes.iter() {
        if positions.contains_key(&node.id) {
            continue;
        }
        let position = match ranks.get(&node.id) {
            Some(&rank) => {
                let row = rows.entry(rank).or_insert(0);
                let center_x = config.origin.x
                    + rank as f64 * (config.node_width + config.rank_sep)
                    + config.node_width / 2.0;
                let center_y = config.origin.y
                    + *row as f64 * (config.node_height + config.node_sep)
                    + config.node_height / 2.0;
                *row += 1;
                // Box center back to the stored top-left corner.
                Position::new(
                    center_x - config.node_width / 2.0,
                    center_y - config.node_height / 2.0,
                )
            }
            // Unrankable nodes still need a finite, on-screen spot.
            None => Position::new(rng.gen_range(0.0..200.0), rng.gen_range(0.0..200.0)),
        };
        positions.insert(node.id.clone(), position);
    }

    for node in nodes.iter_mut() {
        if let Some(position) = positions.get(&node.id) {
            node.position = *position;
        }
    }
}

/// Computes a depth rank per unique node id.
///
/// Self-loops and edges referencing unknown ids are skipped. Cycles are
/// collapsed: every member of a strongly connected component shares the
/// component's rank.
fn compute_ranks(nodes: &[FlowNode], edges: &[FlowEdge]) -> HashMap<String, usize> {
    let mut graph: DiGraph<String, ()> = DiGraph::new();
    let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

    for node in nodes {
        indices
            .entry(node.id.as_str())
            .or_insert_with(|| graph.add_node(node.id.clone()));
    }
    for edge in edges {
        if edge.is_self_loop() {
            continue;
        }
        let (Some(&source), Some(&target)) = (
            indices.get(edge.source.as_str()),
            indices.get(edge.target.as_str()),
        ) else {
            continue;
        };
        graph.add_edge(source, target, ());
    }

    let dag = condensation(graph, true);
    let order = toposort(&dag, None).expect("condensation output is acyclic");

    // Longest path from any source, walked in topological order.
    let mut component_rank = vec![0usize; dag.node_count()];
    for &idx in &order {
        for pred in dag.neighbors_directed(idx, Direction::Incoming) {
            component_rank[idx.index()] =
                component_rank[idx.index()].max(component_rank[pred.index()] + 1);
        }
    }

    let mut ranks = HashMap::new();
    for idx in dag.node_indices() {
        for id in &dag[idx] {
            ranks.insert(id.clone(), component_rank[idx.index()]);
        }
    }
    ranks
}
