//! tinygraph: an in-memory graph model with pluggable text formats.
//!
//! A [`Graph`] owns ordered sequences of [`Node`]s and [`Edge`]s, keeps
//! per-node incoming/outgoing counts, and soft-deletes removed members until
//! [`Graph::clean`] compacts them. Format adapters (JSON, TGF, GML) translate
//! between a graph and text.

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{
    format_by_name, format_for_path, formats, FormatOptions, GmlAttributes, GmlValue, GraphFormat,
};
pub use graph::{
    compare_edges, compare_nodes, EdgeField, EdgeView, Graph, GraphBuilder, NodeField, Signal,
};
pub use types::{
    Edge, EdgeKey, EdgeRecord, GraphData, GraphError, GraphId, GraphResult, Node, NodeKey,
    NodeRecord,
};
