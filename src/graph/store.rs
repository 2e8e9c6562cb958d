//! Core graph structure: node and edge sequences with soft-delete bookkeeping.

use std::collections::HashMap;

use log::debug;

use crate::types::{Edge, EdgeKey, GraphData, GraphError, GraphId, GraphResult, Node, NodeKey};

/// Node attribute to match in [`Graph::node_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeField<'a> {
    Id(i64),
    Label(&'a str),
}

impl NodeField<'_> {
    fn matches(&self, node: &Node) -> bool {
        match *self {
            Self::Id(id) => node.id == id,
            Self::Label(label) => node.label == label,
        }
    }
}

/// Edge attribute to match in [`Graph::edge_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeField<'a> {
    Label(&'a str),
    Source(NodeKey),
    Target(NodeKey),
}

impl EdgeField<'_> {
    fn matches(&self, edge: &Edge) -> bool {
        match *self {
            Self::Label(label) => edge.label == label,
            Self::Source(key) => edge.source() == Some(key),
            Self::Target(key) => edge.target() == Some(key),
        }
    }
}

/// An in-memory graph owning an ordered sequence of nodes and of edges.
///
/// Removal is a soft delete: the member is cleared and stays in its sequence
/// as a tombstone until [`Graph::clean`] compacts it away. Every enumeration
/// skips tombstones, so the only observable difference is the dirty flags and
/// the raw slot counts.
///
/// `directed` is metadata only; edges always have a source and a target.
/// The graph is not synchronized; wrap it in a lock to share mutation across
/// threads.
#[derive(Debug)]
pub struct Graph {
    id: GraphId,
    directed: bool,
    label: String,
    pub(super) nodes: Vec<Node>,
    pub(super) edges: Vec<Edge>,
    /// Key -> position in `nodes`, rebuilt after reordering or compaction.
    node_index: HashMap<NodeKey, usize>,
    /// Key -> position in `edges`.
    edge_index: HashMap<EdgeKey, usize>,
    next_slot: u64,
    nodes_removed: usize,
    edges_removed: usize,
}

impl Graph {
    /// Create an empty graph.
    pub fn new(directed: bool, label: impl Into<String>) -> Self {
        Self {
            id: GraphId::next(),
            directed,
            label: label.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
            node_index: HashMap::new(),
            edge_index: HashMap::new(),
            next_slot: 0,
            nodes_removed: 0,
            edges_removed: 0,
        }
    }

    /// Build a graph from its plain representation, adding every node and
    /// then every edge (endpoints resolved by node id).
    pub fn from_data(data: GraphData) -> GraphResult<Self> {
        let mut graph = Self::new(data.directed, data.label);
        for node in data.nodes {
            graph.add_node(Node::new(node.id, node.label))?;
        }
        for edge in data.edges {
            graph.connect(edge.source, edge.target, edge.label)?;
        }
        Ok(graph)
    }

    /// Export live nodes and edges in sequence order.
    pub fn to_data(&self) -> GraphResult<GraphData> {
        let edges = self
            .edges()
            .into_iter()
            .map(|e| e.to_record(self))
            .collect::<GraphResult<Vec<_>>>()?;
        Ok(GraphData {
            directed: self.directed,
            label: self.label.clone(),
            nodes: self.nodes().into_iter().map(Node::to_record).collect(),
            edges,
        })
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn set_directed(&mut self, directed: bool) -> &mut Self {
        self.directed = directed;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = label.into();
        self
    }

    /// Remove every edge and node and reset both sequences.
    pub fn clear(&mut self) -> &mut Self {
        for edge in &mut self.edges {
            edge.clear();
        }
        for node in &mut self.nodes {
            node.clear();
        }
        self.edges.clear();
        self.nodes.clear();
        self.edge_index.clear();
        self.node_index.clear();
        self.edges_removed = 0;
        self.nodes_removed = 0;
        debug!("graph {}: cleared", self.id);
        self
    }

    fn allocate_slot(&mut self) -> u64 {
        let slot = self.next_slot;
        self.next_slot += 1;
        slot
    }

    // ==================== Nodes ====================

    pub(super) fn node_position(&self, key: NodeKey) -> Option<usize> {
        if key.graph != self.id {
            return None;
        }
        self.node_index
            .get(&key)
            .copied()
            .filter(|&i| self.nodes.get(i).is_some_and(|n| n.key() == Some(key)))
    }

    /// Add a node and return its key.
    ///
    /// Adding a node that is already a live member of this graph is a no-op
    /// returning its existing key. A node owned by another graph is rejected.
    pub fn add_node(&mut self, mut node: Node) -> GraphResult<NodeKey> {
        if let Some(key) = node.key() {
            if key.graph != self.id {
                return Err(GraphError::NodeOwnedElsewhere);
            }
            if self.has_node(key) {
                return Ok(key);
            }
        }

        node.clear();
        let key = NodeKey {
            graph: self.id,
            slot: self.allocate_slot(),
        };
        node.attach(key);
        debug!("graph {}: added node {} {:?}", self.id, node.id, node.label);

        self.node_index.insert(key, self.nodes.len());
        self.nodes.push(node);
        Ok(key)
    }

    /// Remove a node after removing every edge connected to it.
    ///
    /// Returns the cleared node, which may be added to any graph again.
    pub fn remove_node(&mut self, key: NodeKey) -> GraphResult<Node> {
        let pos = self.node_position(key).ok_or(GraphError::NodeNotInGraph)?;

        let connected: Vec<EdgeKey> = self
            .filter_edges(|e| e.is_connected_to(key))
            .into_iter()
            .filter_map(Edge::key)
            .collect();
        for edge in connected {
            self.remove_edge(edge)?;
        }

        let node = &mut self.nodes[pos];
        node.clear();
        let removed = node.clone();
        self.nodes_removed += 1;
        debug!("graph {}: removed node {}", self.id, removed.id);

        Ok(removed)
    }

    /// True if `key` names a live node of this graph.
    pub fn has_node(&self, key: NodeKey) -> bool {
        self.node_position(key).is_some()
    }

    /// Resolve a key to its live node.
    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.node_position(key).and_then(|i| self.nodes.get(i))
    }

    /// First live node, in sequence order, matching `field`.
    pub fn node_by(&self, field: NodeField<'_>) -> Option<NodeKey> {
        self.nodes
            .iter()
            .filter(|n| n.is_live())
            .find(|n| field.matches(n))
            .and_then(Node::key)
    }

    pub fn node_by_id(&self, id: i64) -> Option<NodeKey> {
        self.node_by(NodeField::Id(id))
    }

    pub fn node_by_label(&self, label: &str) -> Option<NodeKey> {
        self.node_by(NodeField::Label(label))
    }

    /// All live nodes in sequence order.
    pub fn nodes(&self) -> Vec<&Node> {
        self.filter_nodes(|_| true)
    }

    /// Keys of all live nodes in sequence order.
    pub fn node_keys(&self) -> Vec<NodeKey> {
        self.nodes.iter().filter_map(Node::key).collect()
    }

    /// Live nodes passing `filter`, in sequence order.
    pub fn filter_nodes<F>(&self, mut filter: F) -> Vec<&Node>
    where
        F: FnMut(&Node) -> bool,
    {
        self.nodes
            .iter()
            .filter(|n| n.is_live() && filter(*n))
            .collect()
    }

    /// Invoke `callback` once per live node in sequence order.
    ///
    /// To remove nodes while walking, collect [`Graph::node_keys`] first.
    pub fn for_each_node<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&Node),
    {
        self.nodes
            .iter()
            .filter(|n| n.is_live())
            .for_each(|n| callback(n));
        self
    }

    /// Nodes without incoming edges.
    pub fn root_nodes(&self) -> Vec<&Node> {
        self.filter_nodes(Node::is_root)
    }

    /// Nodes without outgoing edges.
    pub fn terminal_nodes(&self) -> Vec<&Node> {
        self.filter_nodes(Node::is_terminal)
    }

    /// Sources of the edges targeting `key`.
    pub fn source_nodes(&self, key: NodeKey) -> Vec<&Node> {
        self.incoming_edges(key)
            .into_iter()
            .filter_map(Edge::source)
            .filter_map(|k| self.node(k))
            .collect()
    }

    /// Targets of the edges leaving `key`.
    pub fn target_nodes(&self, key: NodeKey) -> Vec<&Node> {
        self.outgoing_edges(key)
            .into_iter()
            .filter_map(Edge::target)
            .filter_map(|k| self.node(k))
            .collect()
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.nodes_removed
    }

    /// Raw length of the node sequence, tombstones included.
    pub fn node_slots(&self) -> usize {
        self.nodes.len()
    }

    /// True while removed nodes still occupy the sequence.
    pub fn nodes_dirty(&self) -> bool {
        self.nodes_removed > 0
    }

    // ==================== Edges ====================

    pub(super) fn edge_position(&self, key: EdgeKey) -> Option<usize> {
        if key.graph != self.id {
            return None;
        }
        self.edge_index
            .get(&key)
            .copied()
            .filter(|&i| self.edges.get(i).is_some_and(|e| e.key() == Some(key)))
    }

    /// Add an edge between two live nodes of this graph.
    ///
    /// All checks run before anything is mutated: ownership by another graph,
    /// endpoint membership, then the self-loop rule.
    pub fn add_edge(&mut self, mut edge: Edge) -> GraphResult<EdgeKey> {
        if let Some(key) = edge.key() {
            if key.graph != self.id {
                return Err(GraphError::EdgeOwnedElsewhere);
            }
            if self.has_edge(key) {
                return Ok(key);
            }
        }

        let source = edge
            .source()
            .and_then(|k| self.node_position(k))
            .ok_or(GraphError::EdgeSourceNotInGraph)?;
        let target = edge
            .target()
            .and_then(|k| self.node_position(k))
            .ok_or(GraphError::EdgeTargetNotInGraph)?;
        if source == target {
            return Err(GraphError::SelfLoop);
        }

        self.nodes[source].inc_outgoing();
        self.nodes[target].inc_incoming();

        let key = EdgeKey {
            graph: self.id,
            slot: self.allocate_slot(),
        };
        edge.attach(key);
        debug!(
            "graph {}: added edge {} -> {} {:?}",
            self.id, self.nodes[source].id, self.nodes[target].id, edge.label
        );

        self.edge_index.insert(key, self.edges.len());
        self.edges.push(edge);
        Ok(key)
    }

    /// Add an edge between the first nodes carrying `source_id` and
    /// `target_id`.
    pub fn connect(
        &mut self,
        source_id: i64,
        target_id: i64,
        label: impl Into<String>,
    ) -> GraphResult<EdgeKey> {
        let source = self
            .node_by_id(source_id)
            .ok_or(GraphError::EdgeSourceNotInGraph)?;
        let target = self
            .node_by_id(target_id)
            .ok_or(GraphError::EdgeTargetNotInGraph)?;
        self.add_edge(Edge::new(source, target, label))
    }

    /// Remove an edge, releasing its endpoints' counts.
    pub fn remove_edge(&mut self, key: EdgeKey) -> GraphResult<()> {
        let pos = self.edge_position(key).ok_or(GraphError::EdgeNotInGraph)?;

        let edge = &mut self.edges[pos];
        let (source, target) = (edge.source(), edge.target());
        edge.clear();

        if let Some(i) = source.and_then(|k| self.node_position(k)) {
            self.nodes[i].dec_outgoing();
        }
        if let Some(i) = target.and_then(|k| self.node_position(k)) {
            self.nodes[i].dec_incoming();
        }

        self.edges_removed += 1;
        debug!("graph {}: removed edge slot {}", self.id, key.slot);
        Ok(())
    }

    /// True if `key` names a live edge of this graph.
    pub fn has_edge(&self, key: EdgeKey) -> bool {
        self.edge_position(key).is_some()
    }

    /// Resolve a key to its live edge.
    pub fn edge(&self, key: EdgeKey) -> Option<&Edge> {
        self.edge_position(key).and_then(|i| self.edges.get(i))
    }

    /// First live edge, in sequence order, matching `field`.
    pub fn edge_by(&self, field: EdgeField<'_>) -> Option<EdgeKey> {
        self.edges
            .iter()
            .filter(|e| e.is_live())
            .find(|e| field.matches(e))
            .and_then(Edge::key)
    }

    pub fn edge_by_label(&self, label: &str) -> Option<EdgeKey> {
        self.edge_by(EdgeField::Label(label))
    }

    /// All live edges in sequence order.
    pub fn edges(&self) -> Vec<&Edge> {
        self.filter_edges(|_| true)
    }

    /// Keys of all live edges in sequence order.
    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.edges.iter().filter_map(Edge::key).collect()
    }

    /// Live edges passing `filter`, in sequence order.
    pub fn filter_edges<F>(&self, mut filter: F) -> Vec<&Edge>
    where
        F: FnMut(&Edge) -> bool,
    {
        self.edges
            .iter()
            .filter(|e| e.is_live() && filter(*e))
            .collect()
    }

    /// Invoke `callback` once per live edge in sequence order.
    pub fn for_each_edge<F>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&Edge),
    {
        self.edges
            .iter()
            .filter(|e| e.is_live())
            .for_each(|e| callback(e));
        self
    }

    /// Live edges targeting `key`; empty without a scan when the node is a root.
    pub fn incoming_edges(&self, key: NodeKey) -> Vec<&Edge> {
        match self.node(key) {
            Some(node) if !node.is_root() => self.filter_edges(|e| e.target() == Some(key)),
            _ => Vec::new(),
        }
    }

    /// Live edges leaving `key`; empty without a scan when the node is terminal.
    pub fn outgoing_edges(&self, key: NodeKey) -> Vec<&Edge> {
        match self.node(key) {
            Some(node) if !node.is_terminal() => self.filter_edges(|e| e.source() == Some(key)),
            _ => Vec::new(),
        }
    }

    /// Cyclic edge detection is not provided; always fails.
    pub fn cyclic_edges(&self) -> GraphResult<Vec<&Edge>> {
        Err(GraphError::NotImplemented("Detecting cyclic edges"))
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len() - self.edges_removed
    }

    /// Raw length of the edge sequence, tombstones included.
    pub fn edge_slots(&self) -> usize {
        self.edges.len()
    }

    /// True while removed edges still occupy the sequence.
    pub fn edges_dirty(&self) -> bool {
        self.edges_removed > 0
    }

    // ==================== Compaction ====================

    /// Drop tombstones from both sequences. Idempotent.
    pub fn clean(&mut self) -> &mut Self {
        if self.nodes_removed > 0 {
            let before = self.nodes.len();
            self.nodes.retain(Node::is_live);
            self.nodes_removed = 0;
            self.rebuild_node_index();
            debug!(
                "graph {}: compacted {} node tombstones",
                self.id,
                before - self.nodes.len()
            );
        }

        if self.edges_removed > 0 {
            let before = self.edges.len();
            self.edges.retain(Edge::is_live);
            self.edges_removed = 0;
            self.rebuild_edge_index();
            debug!(
                "graph {}: compacted {} edge tombstones",
                self.id,
                before - self.edges.len()
            );
        }

        self
    }

    pub(super) fn rebuild_node_index(&mut self) {
        self.node_index = self
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| n.key().map(|k| (k, i)))
            .collect();
    }

    pub(super) fn rebuild_edge_index(&mut self) {
        self.edge_index = self
            .edges
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.key().map(|k| (k, i)))
            .collect();
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(true, "")
    }
}
