//! Phase 1 tests: Node/Edge/Graph object model and membership rules.

use tinygraph::graph::{Graph, GraphBuilder, NodeField};
use tinygraph::types::{Edge, GraphData, GraphError, Node, NodeKey};

fn fixture() -> GraphData {
    serde_json::from_str(include_str!("fixtures/graph.json")).unwrap()
}

fn tree() -> Graph {
    Graph::from_data(fixture()).unwrap()
}

fn ids(nodes: &[&Node]) -> Vec<i64> {
    let mut ids: Vec<i64> = nodes.iter().map(|n| n.id).collect();
    ids.sort_unstable();
    ids
}

fn key(graph: &Graph, id: i64) -> NodeKey {
    graph.node_by_id(id).unwrap()
}

// ==================== Node / Edge ====================

#[test]
fn test_node_defaults() {
    let node = Node::default();
    assert_eq!(node.id, 0);
    assert_eq!(node.label, "");
    assert_eq!(node.incoming(), 0);
    assert_eq!(node.outgoing(), 0);
    assert!(node.key().is_none());
    assert!(node.is_root());
    assert!(node.is_terminal());
}

#[test]
fn test_node_record_omits_counts() {
    let graph = tree();
    let a = graph.node(key(&graph, 1)).unwrap();
    assert_eq!(a.outgoing(), 2);

    let json = serde_json::to_value(a.to_record()).unwrap();
    assert_eq!(json, serde_json::json!({"id": 1, "label": "A"}));
}

#[test]
fn test_edge_connected_to() {
    let graph = tree();
    let (a, b, c) = (key(&graph, 1), key(&graph, 2), key(&graph, 3));
    let edge = Edge::new(a, b, "x");
    assert!(edge.is_connected_to(a));
    assert!(edge.is_connected_to(b));
    assert!(!edge.is_connected_to(c));
}

#[test]
fn test_edge_clear_detaches() {
    let graph = tree();
    let mut edge = Edge::new(key(&graph, 1), key(&graph, 2), "x");
    edge.clear();
    assert!(edge.source().is_none());
    assert!(edge.target().is_none());
    assert!(edge.key().is_none());
    assert_eq!(edge.label, "x");
}

#[test]
fn test_detached_edge_record_fails() {
    let graph = tree();
    match Edge::default().to_record(&graph) {
        Err(GraphError::DetachedEdge) => {}
        other => panic!("Expected DetachedEdge, got {:?}", other),
    }
}

// ==================== Nodes ====================

#[test]
fn test_add_node_is_idempotent_for_members() {
    let mut graph = Graph::default();
    let k = graph.add_node(Node::new(1, "a")).unwrap();
    let copy = graph.node(k).unwrap().clone();

    let again = graph.add_node(copy).unwrap();
    assert_eq!(again, k);
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.node_slots(), 1);
}

#[test]
fn test_add_node_owned_by_other_graph_fails() {
    let mut g1 = Graph::default();
    let mut g2 = Graph::default();
    let k = g1.add_node(Node::new(1, "a")).unwrap();
    let owned = g1.node(k).unwrap().clone();

    match g2.add_node(owned) {
        Err(GraphError::NodeOwnedElsewhere) => {}
        other => panic!("Expected NodeOwnedElsewhere, got {:?}", other),
    }
    assert_eq!(g2.node_count(), 0);
}

#[test]
fn test_removed_node_can_join_another_graph() {
    let mut g1 = tree();
    let mut g2 = Graph::default();
    let removed = g1.remove_node(key(&g1, 4)).unwrap();
    assert!(removed.key().is_none());
    assert_eq!(removed.incoming(), 0);

    let k = g2.add_node(removed).unwrap();
    assert_eq!(g2.node(k).unwrap().label, "D");
}

#[test]
fn test_lookup_by_field() {
    let mut graph = tree();
    graph.add_node(Node::new(8, "B")).unwrap();

    // First match in sequence order wins.
    let b = graph.node_by_label("B").unwrap();
    assert_eq!(graph.node(b).unwrap().id, 2);
    assert_eq!(graph.node_by(NodeField::Id(8)), graph.node_by_id(8));
    assert!(graph.node_by_id(42).is_none());
    assert!(graph.node_by_label("nope").is_none());
}

#[test]
fn test_root_and_terminal_nodes() {
    let graph = tree();
    assert_eq!(ids(&graph.root_nodes()), vec![1]);
    assert_eq!(ids(&graph.terminal_nodes()), vec![4, 5, 6, 7]);
}

#[test]
fn test_source_and_target_nodes() {
    let graph = tree();
    let b = key(&graph, 2);
    assert_eq!(ids(&graph.source_nodes(b)), vec![1]);
    assert_eq!(ids(&graph.target_nodes(b)), vec![4, 5]);
    assert!(graph.source_nodes(key(&graph, 1)).is_empty());
    assert!(graph.target_nodes(key(&graph, 7)).is_empty());
}

#[test]
fn test_remove_node_cascades_edges() {
    let mut graph = tree();
    graph.remove_node(key(&graph, 2)).unwrap();

    assert_eq!(ids(&graph.nodes()), vec![1, 3, 4, 5, 6, 7]);
    let mut labels: Vec<&str> = graph.edges().iter().map(|e| e.label.as_str()).collect();
    labels.sort_unstable();
    assert_eq!(labels, vec!["A->C", "C->F", "C->G"]);

    // Former children of B became roots; A lost one outgoing edge.
    assert_eq!(ids(&graph.root_nodes()), vec![1, 4, 5]);
    assert_eq!(graph.node(key(&graph, 1)).unwrap().outgoing(), 1);
}

#[test]
fn test_remove_node_not_member_fails() {
    let mut graph = tree();
    let k = key(&graph, 2);
    graph.remove_node(k).unwrap();
    match graph.remove_node(k) {
        Err(GraphError::NodeNotInGraph) => {}
        other => panic!("Expected NodeNotInGraph, got {:?}", other),
    }

    let other = tree();
    assert!(graph.remove_node(key(&other, 1)).is_err());
    assert_eq!(graph.node_count(), 6);
}

#[test]
fn test_for_each_node_visits_live_nodes_in_order() {
    let mut graph = tree();
    graph.remove_node(key(&graph, 3)).unwrap();
    let mut seen = Vec::new();
    graph.for_each_node(|n| seen.push(n.id));
    assert_eq!(seen, vec![1, 2, 4, 5, 6, 7]);
}

// ==================== Edges ====================

#[test]
fn test_add_edge_updates_counts_and_remove_restores() {
    let mut graph = tree();
    let (d, e) = (key(&graph, 4), key(&graph, 5));

    let k = graph.add_edge(Edge::new(d, e, "D->E")).unwrap();
    assert_eq!(graph.node(d).unwrap().outgoing(), 1);
    assert_eq!(graph.node(e).unwrap().incoming(), 2);
    assert!(graph.has_edge(k));

    graph.remove_edge(k).unwrap();
    assert_eq!(graph.node(d).unwrap().outgoing(), 0);
    assert_eq!(graph.node(e).unwrap().incoming(), 1);
    assert!(!graph.has_edge(k));
}

#[test]
fn test_self_loop_rejected() {
    let mut graph = tree();
    let a = key(&graph, 1);
    match graph.add_edge(Edge::new(a, a, "loop")) {
        Err(GraphError::SelfLoop) => {}
        other => panic!("Expected SelfLoop, got {:?}", other),
    }
    assert_eq!(graph.node(a).unwrap().outgoing(), 2);
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn test_edge_endpoints_must_be_members() {
    let mut graph = tree();
    let other = tree();
    let a = key(&graph, 1);
    let foreign = key(&other, 2);

    match graph.add_edge(Edge::new(a, foreign, "x")) {
        Err(GraphError::EdgeTargetNotInGraph) => {}
        other => panic!("Expected EdgeTargetNotInGraph, got {:?}", other),
    }
    match graph.add_edge(Edge::new(foreign, a, "x")) {
        Err(GraphError::EdgeSourceNotInGraph) => {}
        other => panic!("Expected EdgeSourceNotInGraph, got {:?}", other),
    }

    let d = key(&graph, 4);
    graph.remove_node(d).unwrap();
    assert!(graph.add_edge(Edge::new(a, d, "x")).is_err());
    match graph.connect(1, 99, "x") {
        Err(GraphError::EdgeTargetNotInGraph) => {}
        other => panic!("Expected EdgeTargetNotInGraph, got {:?}", other),
    }
    assert_eq!(graph.node(a).unwrap().outgoing(), 2);
}

#[test]
fn test_add_edge_owned_by_other_graph_fails() {
    let mut g1 = tree();
    let g2 = tree();
    let edge = g2.edge(g2.edge_by_label("A->B").unwrap()).unwrap().clone();
    match g1.add_edge(edge) {
        Err(GraphError::EdgeOwnedElsewhere) => {}
        other => panic!("Expected EdgeOwnedElsewhere, got {:?}", other),
    }
}

#[test]
fn test_add_edge_member_is_noop() {
    let mut graph = tree();
    let k = graph.edge_by_label("A->B").unwrap();
    let copy = graph.edge(k).unwrap().clone();
    assert_eq!(graph.add_edge(copy).unwrap(), k);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.node(key(&graph, 2)).unwrap().incoming(), 1);
}

#[test]
fn test_incoming_and_outgoing_edges() {
    let graph = tree();
    let c = key(&graph, 3);
    let out: Vec<&str> = graph.outgoing_edges(c).iter().map(|e| e.label.as_str()).collect();
    let inc: Vec<&str> = graph.incoming_edges(c).iter().map(|e| e.label.as_str()).collect();
    assert_eq!(out, vec!["C->F", "C->G"]);
    assert_eq!(inc, vec!["A->C"]);
    assert!(graph.incoming_edges(key(&graph, 1)).is_empty());
    assert!(graph.outgoing_edges(key(&graph, 6)).is_empty());
}

#[test]
fn test_cyclic_edges_not_implemented() {
    let graph = tree();
    match graph.cyclic_edges() {
        Err(GraphError::NotImplemented(what)) => assert!(what.contains("cyclic")),
        other => panic!("Expected NotImplemented, got {:?}", other),
    }
}

// ==================== Soft delete / clean ====================

#[test]
fn test_soft_delete_and_clean() {
    let mut graph = tree();
    graph.remove_node(key(&graph, 2)).unwrap();

    assert!(graph.nodes_dirty());
    assert!(graph.edges_dirty());
    assert_eq!(graph.node_slots(), 7);
    assert_eq!(graph.edge_slots(), 6);
    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_count(), 3);

    graph.clean();
    assert!(!graph.nodes_dirty());
    assert!(!graph.edges_dirty());
    assert_eq!(graph.node_slots(), 6);
    assert_eq!(graph.edge_slots(), 3);

    let before = graph.to_data().unwrap();
    graph.clean();
    assert_eq!(graph.to_data().unwrap(), before);
    assert_eq!(graph.node_slots(), 6);
}

#[test]
fn test_keys_remain_valid_after_clean() {
    let mut graph = tree();
    let g = key(&graph, 7);
    graph.remove_node(key(&graph, 1)).unwrap();
    graph.clean();
    assert_eq!(graph.node(g).unwrap().label, "G");
    assert!(graph.remove_node(g).is_ok());
}

#[test]
fn test_clear_empties_graph() {
    let mut graph = tree();
    graph.clear();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.node_slots(), 0);
    assert!(!graph.nodes_dirty());
}

// ==================== Construction ====================

#[test]
fn test_builder_matches_fixture() {
    let graph = GraphBuilder::new()
        .label("Tree")
        .node(1, "A")
        .node(2, "B")
        .node(3, "C")
        .node(4, "D")
        .node(5, "E")
        .node(6, "F")
        .node(7, "G")
        .edge(1, 2, "A->B")
        .edge(1, 3, "A->C")
        .edge(2, 4, "B->D")
        .edge(2, 5, "B->E")
        .edge(3, 6, "C->F")
        .edge(3, 7, "C->G")
        .build()
        .unwrap();
    assert_eq!(graph.to_data().unwrap(), fixture());
}

#[test]
fn test_from_data_rejects_unknown_endpoint() {
    let mut data = fixture();
    data.edges[0].target = 99;
    assert!(Graph::from_data(data).is_err());
}

#[test]
fn test_graph_defaults() {
    let graph = Graph::default();
    assert!(graph.is_directed());
    assert_eq!(graph.label(), "");
    assert_ne!(graph.id(), Graph::default().id());
}
