//! The graph vertex.

use super::key::{GraphId, NodeKey};
use super::record::NodeRecord;

/// A vertex with a caller-assigned id and a label.
///
/// `incoming` and `outgoing` are maintained by the owning graph and always
/// equal the number of live edges targeting / leaving this node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Caller-assigned identifier (not generated, not required to be unique).
    pub id: i64,
    /// Free-form label.
    pub label: String,
    incoming: usize,
    outgoing: usize,
    owner: Option<NodeKey>,
}

impl Node {
    /// Create an unowned node.
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            incoming: 0,
            outgoing: 0,
            owner: None,
        }
    }

    /// Reset the back-reference and both counts.
    pub fn clear(&mut self) -> &mut Self {
        self.owner = None;
        self.incoming = 0;
        self.outgoing = 0;
        self
    }

    /// True when no live edge targets this node.
    pub fn is_root(&self) -> bool {
        self.incoming == 0
    }

    /// True when no live edge leaves this node.
    pub fn is_terminal(&self) -> bool {
        self.outgoing == 0
    }

    /// Number of live edges targeting this node.
    pub fn incoming(&self) -> usize {
        self.incoming
    }

    /// Number of live edges leaving this node.
    pub fn outgoing(&self) -> usize {
        self.outgoing
    }

    /// The key this node is owned under, if any.
    pub fn key(&self) -> Option<NodeKey> {
        self.owner
    }

    /// The owning graph, if any.
    pub fn graph(&self) -> Option<GraphId> {
        self.owner.map(|k| k.graph)
    }

    /// External representation: id and label only.
    pub fn to_record(&self) -> NodeRecord {
        NodeRecord {
            id: self.id,
            label: self.label.clone(),
        }
    }

    pub(crate) fn attach(&mut self, key: NodeKey) {
        self.owner = Some(key);
    }

    pub(crate) fn is_live(&self) -> bool {
        self.owner.is_some()
    }

    pub(crate) fn inc_incoming(&mut self) {
        self.incoming += 1;
    }

    pub(crate) fn inc_outgoing(&mut self) {
        self.outgoing += 1;
    }

    pub(crate) fn dec_incoming(&mut self) {
        debug_assert!(self.incoming > 0, "incoming count underflow on node {}", self.id);
        self.incoming = self.incoming.saturating_sub(1);
    }

    pub(crate) fn dec_outgoing(&mut self) {
        debug_assert!(self.outgoing > 0, "outgoing count underflow on node {}", self.id);
        self.outgoing = self.outgoing.saturating_sub(1);
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new(0, "")
    }
}
