//! Trivial Graph Format adapter.
//!
//! ```text
//! 1 First node
//! 2 Second node
//! #
//! 1 2 Edge label
//! ```
//!
//! Node lines are `<id> [label]`, a line holding only `#` separates them from
//! edge lines `<source id> <target id> [label]`. Blank lines are ignored.
//! TGF carries no graph label or direction; parsed graphs are directed and
//! unlabeled. Labels are line-delimited and trimmed, so stringifying a label
//! with a line break or surrounding whitespace fails.

use log::debug;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult, Node};

use super::{FormatOptions, GraphFormat};

const SEPARATOR: &str = "#";

/// The TGF adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TgfFormat;

fn syntax(line: usize, message: impl Into<String>) -> GraphError {
    GraphError::syntax("tgf", Some(line), message)
}

fn parse_id(token: &str, line: usize, content: &str) -> GraphResult<i64> {
    token
        .parse()
        .map_err(|_| syntax(line, format!("invalid node id {token:?} in {content:?}")))
}

/// Reject labels that would not read back unchanged.
fn check_label(label: &str) -> GraphResult<()> {
    if label.contains(['\n', '\r']) || label.trim() != label {
        return Err(GraphError::Unrepresentable {
            format: "tgf",
            message: format!("label {label:?}"),
        });
    }
    Ok(())
}

/// Split `<token> [rest]` at the first run of whitespace.
fn split_token(s: &str) -> (&str, &str) {
    match s.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (s, ""),
    }
}

impl GraphFormat for TgfFormat {
    fn name(&self) -> &'static str {
        "tgf"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["tgf"]
    }

    fn parse(&self, text: &str, _options: &FormatOptions) -> GraphResult<Graph> {
        let mut graph = Graph::default();
        let mut in_edges = false;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let content = raw.trim();
            if content.is_empty() {
                continue;
            }

            if content == SEPARATOR {
                if in_edges {
                    return Err(syntax(line_no, "duplicate '#' separator"));
                }
                in_edges = true;
                continue;
            }

            if !in_edges {
                let (id, label) = split_token(content);
                let id = parse_id(id, line_no, content)?;
                graph.add_node(Node::new(id, label))?;
                continue;
            }

            let (source, rest) = split_token(content);
            let (target, label) = split_token(rest);
            if target.is_empty() {
                return Err(syntax(
                    line_no,
                    format!("expected '<source> <target> [label]', got {content:?}"),
                ));
            }
            let source = parse_id(source, line_no, content)?;
            let target = parse_id(target, line_no, content)?;
            graph
                .connect(source, target, label)
                .map_err(|e| syntax(line_no, format!("{e} in {content:?}")))?;
        }

        if !in_edges {
            return Err(GraphError::syntax("tgf", None, "missing '#' separator"));
        }

        debug!(
            "tgf: parsed {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    fn stringify(&self, graph: &Graph, _options: &FormatOptions) -> GraphResult<String> {
        let mut lines: Vec<String> =
            Vec::with_capacity(graph.node_count() + graph.edge_count() + 1);

        for node in graph.nodes() {
            check_label(&node.label)?;
            if node.label.is_empty() {
                lines.push(node.id.to_string());
            } else {
                lines.push(format!("{} {}", node.id, node.label));
            }
        }

        lines.push(SEPARATOR.to_string());

        for edge in graph.edges() {
            let record = edge.to_record(graph)?;
            check_label(&record.label)?;
            if record.label.is_empty() {
                lines.push(format!("{} {}", record.source, record.target));
            } else {
                lines.push(format!("{} {} {}", record.source, record.target, record.label));
            }
        }

        Ok(lines.join("\n"))
    }
}
