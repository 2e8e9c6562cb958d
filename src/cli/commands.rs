//! CLI command implementations.

use std::ops::ControlFlow;
use std::path::Path;

use log::info;

use crate::format::{format_by_name, format_for_path, FormatOptions, GraphFormat};
use crate::graph::{Graph, Signal};
use crate::types::{Edge, GraphError, GraphResult, Node, NodeKey};

/// Pick the adapter named `explicit`, or the one matching `path`'s extension.
fn resolve_format(path: &Path, explicit: Option<&str>) -> GraphResult<&'static dyn GraphFormat> {
    match explicit {
        Some(name) => format_by_name(name),
        None => format_for_path(path),
    }
}

/// Output adapter: `to`, else the output file's extension, else the input's.
fn output_format(
    input: &'static dyn GraphFormat,
    output: Option<&Path>,
    to: Option<&str>,
) -> GraphResult<&'static dyn GraphFormat> {
    match (to, output) {
        (Some(name), _) => format_by_name(name),
        (None, Some(path)) => format_for_path(path),
        (None, None) => Ok(input),
    }
}

/// Read and parse a graph file.
pub fn load_graph(
    path: &Path,
    from: Option<&str>,
) -> GraphResult<(Graph, &'static dyn GraphFormat)> {
    let format = resolve_format(path, from)?;
    let text = std::fs::read_to_string(path)?;
    let graph = format.parse(&text, &FormatOptions::default())?;
    info!(
        "loaded {} ({}): {} nodes, {} edges",
        path.display(),
        format.name(),
        graph.node_count(),
        graph.edge_count()
    );
    Ok((graph, format))
}

fn emit(text: &str, output: Option<&Path>) -> GraphResult<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            info!("wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn print_nodes(title: &str, nodes: &[&Node], json: bool) {
    if json {
        let list: Vec<serde_json::Value> = nodes
            .iter()
            .map(|n| serde_json::json!({"id": n.id, "label": n.label}))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&list).unwrap_or_default()
        );
    } else {
        println!("{} ({}):", title, nodes.len());
        for node in nodes {
            println!("  {} {}", node.id, node.label);
        }
    }
}

/// Display summary information about a graph file.
pub fn cmd_info(path: &Path, from: Option<&str>, json: bool) -> GraphResult<()> {
    let (graph, format) = load_graph(path, from)?;
    let roots = graph.root_nodes().len();
    let terminals = graph.terminal_nodes().len();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "format": format.name(),
            "directed": graph.is_directed(),
            "label": graph.label(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "roots": roots,
            "terminals": terminals,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Format: {}", format.name());
        println!("Directed: {}", graph.is_directed());
        println!("Label: {:?}", graph.label());
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
        println!("Roots: {}", roots);
        println!("Terminals: {}", terminals);
    }
    Ok(())
}

/// Convert a graph file between formats.
pub fn cmd_convert(
    input: &Path,
    from: Option<&str>,
    output: Option<&Path>,
    to: Option<&str>,
    options: &FormatOptions,
) -> GraphResult<()> {
    let (graph, input_format) = load_graph(input, from)?;
    let target = output_format(input_format, output, to)?;
    let text = target.stringify(&graph, options)?;
    emit(&text, output)
}

/// List nodes without incoming edges.
pub fn cmd_roots(path: &Path, from: Option<&str>, json: bool) -> GraphResult<()> {
    let (graph, _) = load_graph(path, from)?;
    print_nodes("Root nodes", &graph.root_nodes(), json);
    Ok(())
}

/// List nodes without outgoing edges.
pub fn cmd_terminals(path: &Path, from: Option<&str>, json: bool) -> GraphResult<()> {
    let (graph, _) = load_graph(path, from)?;
    print_nodes("Terminal nodes", &graph.terminal_nodes(), json);
    Ok(())
}

/// Nodes on the current root-to-node path of a depth-first walk.
///
/// `Graph::traverse` only stops at edges back to the start node; the CLI also
/// refuses to re-enter any ancestor so inner cycles terminate.
#[derive(Debug, Default)]
struct AncestorPath {
    keys: Vec<NodeKey>,
}

impl AncestorPath {
    /// Record a visit reached over `via` and report whether `node` closes a
    /// cycle on the current path. Nodes that close a cycle are not entered.
    fn enter(&mut self, node: &Node, via: Option<&Edge>) -> bool {
        let Some(key) = node.key() else {
            return false;
        };
        match via.and_then(Edge::source) {
            Some(parent) => {
                while self.keys.last().is_some_and(|&k| k != parent) {
                    self.keys.pop();
                }
            }
            None => self.keys.clear(),
        }
        if self.keys.contains(&key) {
            return true;
        }
        self.keys.push(key);
        false
    }
}

/// Print the depth-first walk from the node with id `start_id`.
///
/// Revisiting a node already on the current path is reported as a cycle and
/// not followed.
pub fn cmd_traverse(
    path: &Path,
    from: Option<&str>,
    start_id: i64,
    json: bool,
) -> GraphResult<()> {
    let (graph, _) = load_graph(path, from)?;
    let start = graph
        .node_by_id(start_id)
        .ok_or(GraphError::NodeNotInGraph)?;

    let mut ancestors = AncestorPath::default();
    let mut visits: Vec<(bool, i64, String, Option<String>)> = Vec::new();
    graph.traverse(start, |signal, node, via| {
        let cyclic = signal == Some(Signal::Cyclic) || ancestors.enter(node, via);
        visits.push((
            cyclic,
            node.id,
            node.label.clone(),
            via.map(|e| e.label.clone()),
        ));
        if cyclic && signal.is_none() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })?;

    if json {
        let list: Vec<serde_json::Value> = visits
            .iter()
            .map(|(cyclic, id, label, via)| {
                serde_json::json!({
                    "id": id,
                    "label": label,
                    "via": via,
                    "cyclic": cyclic,
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&list).unwrap_or_default()
        );
    } else {
        for (cyclic, id, label, via) in &visits {
            let via = via.as_deref().map(|l| format!(" via {l:?}")).unwrap_or_default();
            if *cyclic {
                println!("  cycle back to {id} {label}{via}");
            } else {
                println!("  {id} {label}{via}");
            }
        }
    }
    Ok(())
}

/// Remove the first node with id `node_id` (and its edges) and write the result.
pub fn cmd_remove_node(
    path: &Path,
    from: Option<&str>,
    node_id: i64,
    output: Option<&Path>,
    to: Option<&str>,
    options: &FormatOptions,
) -> GraphResult<()> {
    let (mut graph, input_format) = load_graph(path, from)?;
    let key = graph
        .node_by_id(node_id)
        .ok_or(GraphError::NodeNotInGraph)?;
    let edges_before = graph.edge_count();
    graph.remove_node(key)?;
    graph.clean();
    info!(
        "removed node {} and {} edges",
        node_id,
        edges_before - graph.edge_count()
    );

    let target = output_format(input_format, output, to)?;
    let text = target.stringify(&graph, options)?;
    emit(&text, output)
}

/// Sort nodes and edges by degree and print the result.
pub fn cmd_sort(
    path: &Path,
    from: Option<&str>,
    output: Option<&Path>,
    to: Option<&str>,
    options: &FormatOptions,
) -> GraphResult<()> {
    let (mut graph, input_format) = load_graph(path, from)?;
    graph.sort();
    let target = output_format(input_format, output, to)?;
    let text = target.stringify(&graph, options)?;
    emit(&text, output)
}
