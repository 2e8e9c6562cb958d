//! Opaque identities for graphs and handles for their members.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a single [`Graph`](crate::graph::Graph) instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphId(u64);

impl GraphId {
    pub(crate) fn next() -> Self {
        Self(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for GraphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// Handle to a node slot inside one graph.
///
/// A node owned by a graph carries its key as the back-reference; comparing
/// keys is how membership is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    pub(crate) graph: GraphId,
    pub(crate) slot: u64,
}

impl NodeKey {
    /// The graph this key was issued by.
    pub fn graph(&self) -> GraphId {
        self.graph
    }
}

/// Handle to an edge slot inside one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub(crate) graph: GraphId,
    pub(crate) slot: u64,
}

impl EdgeKey {
    /// The graph this key was issued by.
    pub fn graph(&self) -> GraphId {
        self.graph
    }
}
