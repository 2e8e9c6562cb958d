//! The directed connection between two nodes.

use super::error::{GraphError, GraphResult};
use super::key::{EdgeKey, GraphId, NodeKey};
use super::record::EdgeRecord;
use crate::graph::Graph;

/// A directed connection between two nodes of the same graph.
///
/// Endpoints are node keys; an edge built from keys of one graph can only be
/// added to that graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Edge {
    source: Option<NodeKey>,
    target: Option<NodeKey>,
    /// Free-form label.
    pub label: String,
    owner: Option<EdgeKey>,
}

impl Edge {
    /// Create an unowned edge from `source` to `target`.
    pub fn new(source: NodeKey, target: NodeKey, label: impl Into<String>) -> Self {
        Self {
            source: Some(source),
            target: Some(target),
            label: label.into(),
            owner: None,
        }
    }

    /// Reset the back-reference and both endpoints.
    pub fn clear(&mut self) -> &mut Self {
        self.owner = None;
        self.source = None;
        self.target = None;
        self
    }

    /// True if `node` is the source or the target of this edge.
    pub fn is_connected_to(&self, node: NodeKey) -> bool {
        self.source == Some(node) || self.target == Some(node)
    }

    pub fn source(&self) -> Option<NodeKey> {
        self.source
    }

    pub fn target(&self) -> Option<NodeKey> {
        self.target
    }

    /// The key this edge is owned under, if any.
    pub fn key(&self) -> Option<EdgeKey> {
        self.owner
    }

    /// The owning graph, if any.
    pub fn graph(&self) -> Option<GraphId> {
        self.owner.map(|k| k.graph)
    }

    /// External representation, with endpoints resolved to node ids.
    ///
    /// Fails with [`GraphError::DetachedEdge`] when either endpoint is unset
    /// or no longer a live node of `graph`.
    pub fn to_record(&self, graph: &Graph) -> GraphResult<EdgeRecord> {
        let (source, target) = self
            .source
            .zip(self.target)
            .ok_or(GraphError::DetachedEdge)?;
        let source = graph.node(source).ok_or(GraphError::DetachedEdge)?;
        let target = graph.node(target).ok_or(GraphError::DetachedEdge)?;
        Ok(EdgeRecord {
            source: source.id,
            target: target.id,
            label: self.label.clone(),
        })
    }

    pub(crate) fn attach(&mut self, key: EdgeKey) {
        self.owner = Some(key);
    }

    pub(crate) fn is_live(&self) -> bool {
        self.owner.is_some()
    }
}
