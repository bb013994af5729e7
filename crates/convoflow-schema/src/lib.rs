//! External document schema: export projection and import/normalization.
//!
//! The exporter and importer are near-inverses over the same document
//! shape. Export is a pure projection of the store collections; import
//! parses arbitrary text, rebuilds the collections, lays out positions,
//! and only then replaces the store, so a failed import never touches
//! existing state.

pub mod error;
pub mod export;
pub mod import;

pub use error::ImportError;
pub use export::{export_flow, SchemaEdge, SchemaNode};
pub use import::{import_flow, import_into};
