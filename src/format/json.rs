//! JSON adapter: `{ directed, label, nodes: [{id, label}], edges: [{source, target, label}] }`.

use log::debug;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::graph::Graph;
use crate::types::{GraphData, GraphError, GraphResult};

use super::{FormatOptions, GraphFormat};

/// The JSON adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl GraphFormat for JsonFormat {
    fn name(&self) -> &'static str {
        "json"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn parse(&self, text: &str, _options: &FormatOptions) -> GraphResult<Graph> {
        let data: GraphData = serde_json::from_str(text)
            .map_err(|e| GraphError::syntax("json", Some(e.line()), e.to_string()))?;
        debug!(
            "json: parsed {} nodes, {} edges",
            data.nodes.len(),
            data.edges.len()
        );
        Graph::from_data(data)
    }

    fn stringify(&self, graph: &Graph, options: &FormatOptions) -> GraphResult<String> {
        let data = graph.to_data()?;
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(options.indent.as_bytes());
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        data.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_carries_line() {
        let err = JsonFormat
            .parse("{\n  \"nodes\": [\n", &FormatOptions::default())
            .unwrap_err();
        match err {
            GraphError::Syntax { format, line, .. } => {
                assert_eq!(format, "json");
                assert!(line.is_some());
            }
            e => panic!("Expected Syntax error, got {:?}", e),
        }
    }

    #[test]
    fn honours_indent() {
        let graph = Graph::new(true, "g");
        let text = JsonFormat
            .stringify(&graph, &FormatOptions::default().with_indent("\t"))
            .unwrap();
        assert!(text.contains("\n\t\"directed\": true"));
    }
}
