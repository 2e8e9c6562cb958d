//! Plain data contract shared by the graph and the format adapters.

use serde::{Deserialize, Serialize};

fn default_directed() -> bool {
    true
}

/// External view of a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub label: String,
}

/// External view of an edge; endpoints are node ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: i64,
    pub target: i64,
    #[serde(default)]
    pub label: String,
}

/// The `{ directed, label, nodes, edges }` representation every adapter
/// reads from or writes into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl Default for GraphData {
    fn default() -> Self {
        Self {
            directed: true,
            label: String::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}
