//! Import error types.

use thiserror::Error;

/// Errors produced while importing an external flow document.
///
/// All variants are fully recoverable: the importer never touches the
/// store before the whole document has been accepted. Messages carry the
/// offending array index whenever the failure is localizable to one
/// element.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The input text is not valid JSON at all.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The top-level value parsed, but is not an array of node objects.
    #[error("Imported JSON must be an array of Node objects.")]
    NotAnArray,

    /// An array element has no usable node id.
    #[error("Node at index {index} is missing a valid string \"id\".")]
    MissingNodeId { index: usize },

    /// An edge entry has no destination node id.
    #[error("Edge at index {index} in node \"{node_id}\" is missing \"to_node_id\".")]
    MissingEdgeTarget { node_id: String, index: usize },
}
