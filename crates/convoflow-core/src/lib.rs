pub mod condition;
pub mod edge;
pub mod node;
pub mod store;

// Re-export commonly used types
pub use condition::{is_allowed_condition, ALLOWED_CONDITIONS, DEFAULT_CONDITION};
pub use edge::{EdgeData, EdgePatch, FlowEdge};
pub use node::{FlowNode, NodeData, NodePatch, Position};
pub use store::FlowStore;
