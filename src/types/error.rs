//! Error types for the tinygraph library.

use thiserror::Error;

/// All errors that can occur in the tinygraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node is already a member of a different graph.
    #[error("Node belongs to another graph")]
    NodeOwnedElsewhere,

    /// Edge is already a member of a different graph.
    #[error("Edge belongs to another graph")]
    EdgeOwnedElsewhere,

    /// Key does not name a live node of this graph.
    #[error("Node not in graph")]
    NodeNotInGraph,

    /// Key does not name a live edge of this graph.
    #[error("Edge not in graph")]
    EdgeNotInGraph,

    /// Edge source is missing or not a live member.
    #[error("Edge source not in graph")]
    EdgeSourceNotInGraph,

    /// Edge target is missing or not a live member.
    #[error("Edge target not in graph")]
    EdgeTargetNotInGraph,

    /// Self-loops are not allowed.
    #[error("Edge has same source and target")]
    SelfLoop,

    /// Edge has no endpoints (cleared or never connected).
    #[error("Edge has no source or target node")]
    DetachedEdge,

    /// No adapter registered under this name.
    #[error("Unknown graph format: {0}")]
    UnknownFormat(String),

    /// Malformed input text.
    #[error("{format} syntax error{}: {message}", at_line(.line))]
    Syntax {
        format: &'static str,
        line: Option<usize>,
        message: String,
    },

    /// A value the target format has no faithful text for.
    #[error("{format} cannot represent {message}")]
    Unrepresentable {
        format: &'static str,
        message: String,
    },

    /// Capability intentionally left out.
    #[error("{0} not implemented")]
    NotImplemented(&'static str),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Build a syntax error for the named format.
    pub fn syntax(format: &'static str, line: Option<usize>, message: impl Into<String>) -> Self {
        Self::Syntax {
            format,
            line,
            message: message.into(),
        }
    }
}

fn at_line(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

/// Convenience result type for tinygraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
