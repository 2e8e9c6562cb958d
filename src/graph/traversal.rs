//! Depth-first traversal along outgoing edges.

use std::ops::ControlFlow;

use log::trace;

use crate::types::{Edge, EdgeKey, GraphError, GraphResult, Node, NodeKey};

use super::Graph;

/// Out-of-band information attached to a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The edge leads back to the start node. The walk does not follow it.
    Cyclic,
}

struct Frame {
    edges: Vec<EdgeKey>,
    next: usize,
}

impl Graph {
    /// Walk depth-first from `start`, following outgoing edges.
    ///
    /// `visitor` is called with `(None, node, via)` for every visited node,
    /// `via` being the edge that led there (`None` for the start node).
    /// Returning `ControlFlow::Break` from a normal visit stops descent below
    /// that node; the walk carries on with its siblings.
    ///
    /// An edge whose target is `start` is reported as
    /// `(Some(Signal::Cyclic), start, edge)` instead of being followed, and
    /// `Break` from that call abandons the remaining edges of the current node.
    ///
    /// Only cycles through `start` are detected. There is no visited set: a
    /// node reachable over several paths is visited once per path, and a cycle
    /// that avoids `start` is walked until the visitor breaks out of it.
    pub fn traverse<F>(&self, start: NodeKey, mut visitor: F) -> GraphResult<()>
    where
        F: FnMut(Option<Signal>, &Node, Option<&Edge>) -> ControlFlow<()>,
    {
        let start_node = self.node(start).ok_or(GraphError::NodeNotInGraph)?;
        if visitor(None, start_node, None).is_break() {
            return Ok(());
        }

        let mut stack = vec![self.frame(start)];
        while let Some(frame) = stack.last_mut() {
            let Some(&edge_key) = frame.edges.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            let Some(edge) = self.edge(edge_key) else {
                continue;
            };
            let Some((target_key, target)) = edge
                .target()
                .and_then(|k| self.node(k).map(|n| (k, n)))
            else {
                continue;
            };

            if target_key == start {
                trace!("traverse: edge back to start node {}", target.id);
                if visitor(Some(Signal::Cyclic), target, Some(edge)).is_break() {
                    stack.pop();
                }
                continue;
            }

            trace!("traverse: visiting node {}", target.id);
            if visitor(None, target, Some(edge)).is_continue() {
                stack.push(self.frame(target_key));
            }
        }

        Ok(())
    }

    fn frame(&self, key: NodeKey) -> Frame {
        Frame {
            edges: self
                .outgoing_edges(key)
                .into_iter()
                .filter_map(Edge::key)
                .collect(),
            next: 0,
        }
    }
}
