mod common;

use gspec_core::{Edge, Graph, Vertex};
use gspec_graph::{
    is_directed_binary, is_undirected_binary, undirected_adjacency, DirectedView, SimpleGraph,
};

use common::graph;

#[test]
fn adjacency_ignores_missing_vertices_and_directed_edges() {
    let mut g = graph(&["a", "b", "c"], &[("a", "b"), ("b", "ghost")], false);
    g.edges.push(Edge::directed("d", "a", "c"));
    let adjacency = undirected_adjacency(&g);
    assert_eq!(adjacency["a"], vec!["b".to_string()]);
    assert_eq!(adjacency["b"], vec!["a".to_string()]);
    assert!(adjacency["c"].is_empty());
    assert!(!adjacency.contains_key("ghost"));
}

#[test]
fn adjacency_keeps_loops_and_parallel_edges() {
    let g = graph(&["a", "b"], &[("a", "a"), ("a", "b"), ("b", "a")], false);
    let adjacency = undirected_adjacency(&g);
    assert_eq!(adjacency["a"].len(), 3);
    assert_eq!(adjacency["b"].len(), 2);

    let simple = SimpleGraph::from_graph(&g);
    assert_eq!(simple.edge_count(), 1);
    assert_eq!(simple.degrees(), vec![1, 1]);
}

#[test]
fn duplicate_vertex_ids_share_one_slot() {
    let g = Graph::new(
        vec![Vertex::new("a"), Vertex::new("a"), Vertex::new("b")],
        vec![Edge::undirected("e", "a", "b")],
    );
    let simple = SimpleGraph::from_graph(&g);
    assert_eq!(simple.len(), 2);
    assert_eq!(simple.index().get("b"), Some(1));
}

#[test]
fn complement_of_cycle_four_is_two_disjoint_edges() {
    let c4 = common::cycle(4);
    let complement = c4.complement();
    assert_eq!(complement.edges(), vec![(0, 2), (1, 3)]);
    assert_eq!(complement.complement(), c4);
}

#[test]
fn shape_predicates() {
    let undirected = graph(&["a", "b"], &[("a", "b")], false);
    let directed = graph(&["a", "b"], &[("a", "b")], true);
    assert!(is_undirected_binary(&undirected));
    assert!(!is_undirected_binary(&directed));
    assert!(is_directed_binary(&directed));

    let mut hyper = undirected.clone();
    hyper.edges.push(Edge::hyper("h", ["a", "b", "a"], false));
    assert!(!is_undirected_binary(&hyper));
    assert!(is_undirected_binary(&Graph::default()));
}

#[test]
fn directed_view_degrees() {
    let g = graph(&["a", "b", "c"], &[("a", "b"), ("a", "c"), ("c", "c")], true);
    let view = DirectedView::from_graph(&g);
    assert_eq!(view.out_degrees(), vec![2, 0, 1]);
    assert_eq!(view.in_degrees(), vec![0, 1, 2]);
    assert_eq!(view.underlying().edge_count(), 2);
}
