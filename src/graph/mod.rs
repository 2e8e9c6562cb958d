//! In-memory graph: storage, sorting, traversal and building.

pub mod builder;
pub mod sort;
pub mod store;
pub mod traversal;

pub use builder::GraphBuilder;
pub use sort::{compare_edges, compare_nodes, EdgeView};
pub use store::{EdgeField, Graph, NodeField};
pub use traversal::Signal;
