//! Text format adapters (JSON, TGF, GML) and their registry.
//!
//! Every adapter exposes the same two operations: `parse` builds a fresh
//! [`Graph`] from text, `stringify` renders a graph's live members.

pub mod gml;
pub mod json;
pub mod tgf;

use std::path::Path;

use crate::graph::Graph;
use crate::types::{Edge, GraphError, GraphResult, Node};

pub use gml::{GmlAttributes, GmlFormat, GmlValue};
pub use json::JsonFormat;
pub use tgf::TgfFormat;

/// Default indentation unit.
pub const DEFAULT_INDENT: &str = "  ";

/// Extra GML attributes for the graph block.
pub type GraphAttributesHook = Box<dyn Fn(&Graph) -> GmlAttributes>;
/// Extra GML attributes for each node block.
pub type NodeAttributesHook = Box<dyn Fn(&Node) -> GmlAttributes>;
/// Extra GML attributes for each edge block.
pub type EdgeAttributesHook = Box<dyn Fn(&Edge) -> GmlAttributes>;

/// Options passed through to an adapter.
pub struct FormatOptions {
    /// Indentation unit (JSON and GML).
    pub indent: String,
    pub graph_attributes: Option<GraphAttributesHook>,
    pub node_attributes: Option<NodeAttributesHook>,
    pub edge_attributes: Option<EdgeAttributesHook>,
}

impl FormatOptions {
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_graph_attributes(
        mut self,
        hook: impl Fn(&Graph) -> GmlAttributes + 'static,
    ) -> Self {
        self.graph_attributes = Some(Box::new(hook));
        self
    }

    pub fn with_node_attributes(
        mut self,
        hook: impl Fn(&Node) -> GmlAttributes + 'static,
    ) -> Self {
        self.node_attributes = Some(Box::new(hook));
        self
    }

    pub fn with_edge_attributes(
        mut self,
        hook: impl Fn(&Edge) -> GmlAttributes + 'static,
    ) -> Self {
        self.edge_attributes = Some(Box::new(hook));
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            graph_attributes: None,
            node_attributes: None,
            edge_attributes: None,
        }
    }
}

impl std::fmt::Debug for FormatOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatOptions")
            .field("indent", &self.indent)
            .field("graph_attributes", &self.graph_attributes.is_some())
            .field("node_attributes", &self.node_attributes.is_some())
            .field("edge_attributes", &self.edge_attributes.is_some())
            .finish()
    }
}

/// A text serialization of [`Graph`].
pub trait GraphFormat: Sync {
    /// Registry name, lowercase.
    fn name(&self) -> &'static str;

    /// File extensions (without the dot) mapped to this format.
    fn extensions(&self) -> &'static [&'static str];

    /// Parse `text` into a newly constructed graph.
    fn parse(&self, text: &str, options: &FormatOptions) -> GraphResult<Graph>;

    /// Render the live members of `graph`.
    fn stringify(&self, graph: &Graph, options: &FormatOptions) -> GraphResult<String>;
}

static FORMATS: [&dyn GraphFormat; 3] = [&JsonFormat, &TgfFormat, &GmlFormat];

/// All registered adapters.
pub fn formats() -> &'static [&'static dyn GraphFormat] {
    &FORMATS
}

/// Resolve an adapter by name (case-insensitive).
pub fn format_by_name(name: &str) -> GraphResult<&'static dyn GraphFormat> {
    FORMATS
        .iter()
        .copied()
        .find(|f| f.name().eq_ignore_ascii_case(name))
        .ok_or_else(|| GraphError::UnknownFormat(name.to_string()))
}

/// Resolve an adapter from a file's extension.
pub fn format_for_path(path: &Path) -> GraphResult<&'static dyn GraphFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| GraphError::UnknownFormat(path.display().to_string()))?;
    FORMATS
        .iter()
        .copied()
        .find(|f| f.extensions().iter().any(|x| x.eq_ignore_ascii_case(ext)))
        .ok_or_else(|| GraphError::UnknownFormat(ext.to_string()))
}

impl Graph {
    /// Render this graph with the adapter registered as `format`.
    pub fn to_string_as(&self, format: &str, options: &FormatOptions) -> GraphResult<String> {
        format_by_name(format)?.stringify(self, options)
    }

    /// Parse `text` with the adapter registered as `format`.
    pub fn parse_as(format: &str, text: &str, options: &FormatOptions) -> GraphResult<Graph> {
        format_by_name(format)?.parse(text, options)
    }
}
