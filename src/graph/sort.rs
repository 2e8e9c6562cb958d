//! In-place stable sorting of the node and edge sequences.

use std::cmp::Ordering;

use crate::types::{Edge, Node};

use super::Graph;

/// An edge together with its resolved endpoints, handed to edge comparators.
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a> {
    pub edge: &'a Edge,
    pub source: &'a Node,
    pub target: &'a Node,
}

/// Default node order: ascending by incoming count, then outgoing count.
pub fn compare_nodes(a: &Node, b: &Node) -> Ordering {
    a.incoming()
        .cmp(&b.incoming())
        .then(a.outgoing().cmp(&b.outgoing()))
}

/// Default edge order: [`compare_nodes`] applied to the source nodes.
pub fn compare_edges(a: EdgeView<'_>, b: EdgeView<'_>) -> Ordering {
    compare_nodes(a.source, b.source)
}

/// Tombstones sort ahead of live entries and keep their relative order.
fn live_order(a_live: bool, b_live: bool) -> Option<Ordering> {
    match (a_live, b_live) {
        (true, true) => None,
        (false, false) => Some(Ordering::Equal),
        (false, true) => Some(Ordering::Less),
        (true, false) => Some(Ordering::Greater),
    }
}

impl Graph {
    /// Stable-sort the node sequence with [`compare_nodes`].
    pub fn sort_nodes(&mut self) -> &mut Self {
        self.sort_nodes_by(compare_nodes)
    }

    /// Stable-sort the node sequence with a custom comparator.
    pub fn sort_nodes_by<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(&Node, &Node) -> Ordering,
    {
        self.nodes.sort_by(|a, b| {
            live_order(a.key().is_some(), b.key().is_some()).unwrap_or_else(|| compare(a, b))
        });
        self.rebuild_node_index();
        self
    }

    /// Stable-sort the edge sequence with [`compare_edges`].
    pub fn sort_edges(&mut self) -> &mut Self {
        self.sort_edges_by(compare_edges)
    }

    /// Stable-sort the edge sequence with a custom comparator over
    /// [`EdgeView`]s.
    pub fn sort_edges_by<F>(&mut self, mut compare: F) -> &mut Self
    where
        F: FnMut(EdgeView<'_>, EdgeView<'_>) -> Ordering,
    {
        let mut order: Vec<usize> = (0..self.edges.len()).collect();
        {
            let views: Vec<Option<EdgeView<'_>>> =
                self.edges.iter().map(|e| self.edge_view(e)).collect();
            order.sort_by(|&a, &b| match (views[a], views[b]) {
                (Some(va), Some(vb)) => compare(va, vb),
                (va, vb) => live_order(va.is_some(), vb.is_some()).unwrap_or(Ordering::Equal),
            });
        }

        let mut slots: Vec<Option<Edge>> = std::mem::take(&mut self.edges)
            .into_iter()
            .map(Some)
            .collect();
        self.edges = order
            .into_iter()
            .filter_map(|i| slots.get_mut(i).and_then(Option::take))
            .collect();
        self.rebuild_edge_index();
        self
    }

    /// Sort nodes, then edges, with the default comparators.
    pub fn sort(&mut self) -> &mut Self {
        self.sort_nodes().sort_edges()
    }

    fn edge_view<'a>(&'a self, edge: &'a Edge) -> Option<EdgeView<'a>> {
        if edge.key().is_none() {
            return None;
        }
        Some(EdgeView {
            edge,
            source: self.node(edge.source()?)?,
            target: self.node(edge.target()?)?,
        })
    }
}
