//! GML adapter (stringify only).
//!
//! Output is a tree of bracketed key/value blocks:
//!
//! ```text
//! graph [
//!   directed 1
//!   label "x"
//!   node [
//!     id 1
//!     label "a"
//!   ]
//!   edge [
//!     source 1
//!     target 2
//!     label "e"
//!   ]
//! ]
//! ```
//!
//! Hooks on [`FormatOptions`] may append extra attributes (for instance yEd
//! `graphics` and `LabelGraphics` groups) to the graph, node and edge blocks.

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

use super::{FormatOptions, GraphFormat};

/// A GML attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum GmlValue {
    Int(i64),
    Real(f64),
    Text(String),
    /// Nested `key [ ... ]` block.
    List(GmlAttributes),
}

/// Ordered key/value attributes.
pub type GmlAttributes = Vec<(String, GmlValue)>;

impl From<i64> for GmlValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for GmlValue {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for GmlValue {
    fn from(v: bool) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<&str> for GmlValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for GmlValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<GmlAttributes> for GmlValue {
    fn from(v: GmlAttributes) -> Self {
        Self::List(v)
    }
}

/// The GML adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct GmlFormat;

struct GmlWriter<'a> {
    unit: &'a str,
    lines: Vec<String>,
}

impl GmlWriter<'_> {
    fn attributes(&mut self, attributes: &[(String, GmlValue)], depth: usize) -> GraphResult<()> {
        let indent = self.unit.repeat(depth);
        for (key, value) in attributes {
            match value {
                GmlValue::List(children) => {
                    self.lines.push(format!("{indent}{key} ["));
                    self.attributes(children, depth + 1)?;
                    self.lines.push(format!("{indent}]"));
                }
                GmlValue::Int(v) => self.lines.push(format!("{indent}{key} {v}")),
                GmlValue::Real(v) if !v.is_finite() => {
                    return Err(GraphError::Unrepresentable {
                        format: "gml",
                        message: format!("non-finite real {v} for key {key:?}"),
                    });
                }
                GmlValue::Real(v) => {
                    self.lines
                        .push(format!("{indent}{key} {}", serde_json::to_string(v)?))
                }
                GmlValue::Text(v) => {
                    self.lines
                        .push(format!("{indent}{key} {}", serde_json::to_string(v)?))
                }
            }
        }
        Ok(())
    }

    fn block(&mut self, name: &str, attributes: &[(String, GmlValue)]) -> GraphResult<()> {
        self.lines.push(format!("{}{name} [", self.unit));
        self.attributes(attributes, 2)?;
        self.lines.push(format!("{}]", self.unit));
        Ok(())
    }
}

impl GraphFormat for GmlFormat {
    fn name(&self) -> &'static str {
        "gml"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["gml"]
    }

    fn parse(&self, _text: &str, _options: &FormatOptions) -> GraphResult<Graph> {
        Err(GraphError::NotImplemented("GML parsing"))
    }

    fn stringify(&self, graph: &Graph, options: &FormatOptions) -> GraphResult<String> {
        let mut out = GmlWriter {
            unit: &options.indent,
            lines: vec!["graph [".to_string()],
        };

        let mut header: GmlAttributes = vec![
            ("directed".into(), graph.is_directed().into()),
            ("label".into(), graph.label().into()),
        ];
        if let Some(hook) = &options.graph_attributes {
            header.extend(hook(graph));
        }
        out.attributes(&header, 1)?;

        for node in graph.nodes() {
            let mut attrs: GmlAttributes = vec![
                ("id".into(), node.id.into()),
                ("label".into(), node.label.as_str().into()),
            ];
            if let Some(hook) = &options.node_attributes {
                attrs.extend(hook(node));
            }
            out.block("node", &attrs)?;
        }

        for edge in graph.edges() {
            let record = edge.to_record(graph)?;
            let mut attrs: GmlAttributes = vec![
                ("source".into(), record.source.into()),
                ("target".into(), record.target.into()),
                ("label".into(), record.label.into()),
            ];
            if let Some(hook) = &options.edge_attributes {
                attrs.extend(hook(edge));
            }
            out.block("edge", &attrs)?;
        }

        out.lines.push("]".to_string());
        Ok(out.lines.join("\n"))
    }
}
