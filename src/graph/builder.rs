//! Fluent API for building Graph instances.

use crate::types::{EdgeRecord, GraphData, GraphResult, NodeRecord};

use super::Graph;

/// Fluent builder collecting node and edge descriptors for a [`Graph`].
///
/// Edges refer to nodes by id and are resolved when [`GraphBuilder::build`]
/// runs, so nodes and edges may be declared in any order.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    data: GraphData,
}

impl GraphBuilder {
    /// Create a builder for a directed, unlabeled graph.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.data.directed = directed;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.data.label = label.into();
        self
    }

    /// Declare a node.
    pub fn node(mut self, id: i64, label: impl Into<String>) -> Self {
        self.data.nodes.push(NodeRecord {
            id,
            label: label.into(),
        });
        self
    }

    /// Declare an edge between two node ids.
    pub fn edge(mut self, source: i64, target: i64, label: impl Into<String>) -> Self {
        self.data.edges.push(EdgeRecord {
            source,
            target,
            label: label.into(),
        });
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph> {
        Graph::from_data(self.data)
    }
}
