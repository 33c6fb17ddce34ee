mod common;

use gspec_core::{Edge, Graph, PartialPolicy};
use gspec_query::*;
use serde_json::json;

fn two_triangles() -> Graph {
    common::undirected(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)])
}

fn skewed_tree() -> Graph {
    common::undirected(
        25,
        &[
            (0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (1, 7), (1, 8), (1, 9), (2, 10),
            (2, 11), (2, 12), (3, 13), (3, 14), (4, 15), (4, 16), (5, 17), (5, 18), (6, 19),
            (7, 20), (8, 21), (9, 22), (10, 23), (11, 24),
        ],
    )
}

#[test]
fn triangle() {
    let triangle = common::complete(3);
    assert!(is_complete(&triangle));
    assert!(!is_bipartite(&triangle));
    assert!(!is_tree(&triangle));
    assert!(is_chordal(&triangle));
    assert!(is_dense(&triangle));
    assert!(is_regular(&triangle));
    assert!(is_k_regular(&triangle, 2));
    assert!(is_eulerian(&triangle));
    assert!(!is_star(&triangle));
}

#[test]
fn path_on_four_vertices() {
    let p4 = common::path(4);
    assert!(is_tree(&p4));
    assert!(is_forest(&p4));
    assert!(is_bipartite(&p4));
    assert!(is_chordal(&p4));
    assert!(is_interval(&p4));
    assert!(is_permutation(&p4));
    assert!(!is_cograph(&p4));
    assert!(is_traceable(&p4));
    assert!(!is_hamiltonian(&p4));
    assert!(!is_eulerian(&p4));
    assert!(!is_star(&p4));
    assert!(!is_regular(&p4));
}

#[test]
fn star_with_four_leaves() {
    let star = common::star(4);
    assert!(is_star(&star));
    assert!(is_tree(&star));
    assert!(is_complete_bipartite(&star));
    assert!(is_split(&star));
    assert!(is_threshold(&star));
    assert!(!is_claw_free(&star));
    assert!(axis_equals(
        Axis::DegreeConstraint,
        gspec_axes::DegreeConstraint::DegreeSequence {
            sequence: vec![4, 1, 1, 1, 1]
        },
        None
    )
    .test(&star));
}

#[test]
fn star_edge_cases() {
    assert!(is_star(&common::path(2)));
    assert!(!is_star(&common::path(1)));
    assert!(!is_star(&Graph::default()));
    assert!(!is_star(&common::undirected(3, &[(0, 1), (0, 2), (0, 2)])));
    assert!(!is_star(&common::undirected(3, &[(0, 1), (0, 2), (0, 0)])));
    assert!(!is_star(&common::directed(3, &[(0, 1), (0, 2)])));
}

#[test]
fn complete_bipartite_two_three() {
    let k23 = common::complete_bipartite(2, 3);
    assert!(is_complete_bipartite(&k23));
    assert!(is_bipartite(&k23));
    assert!(!is_complete(&k23));
    assert!(!is_complete_bipartite(&common::complete(3)));
}

#[test]
fn four_cycle() {
    let c4 = common::cycle(4);
    assert!(!is_chordal(&c4));
    assert!(is_perfect(&c4));
    assert!(!is_interval(&c4));
    assert!(is_comparability(&c4));
    assert!(is_cograph(&c4));
    assert!(!is_split(&c4));
    assert!(!is_threshold(&c4));
    assert!(is_hamiltonian(&c4));
    assert!(is_eulerian(&c4));
    assert!(is_complete_bipartite(&c4));
}

#[test]
fn five_cycle() {
    let c5 = common::cycle(5);
    assert!(!is_perfect(&c5));
    assert!(!is_comparability(&c5));
    assert!(is_claw_free(&c5));
    assert!(is_self_complementary(&c5));
    assert!(is_vertex_transitive(&c5));
    assert!(is_strongly_regular(&c5));
    assert!(is_k_regular(&c5, 2));
    assert!(!is_k_regular(&c5, 3));
    assert!(!is_cubic(&c5));
}

#[test]
fn symmetry_refutations() {
    assert!(!is_self_complementary(&common::complete(4)));
    assert!(!is_vertex_transitive(&common::star(3)));
    assert!(!is_strongly_regular(&common::path(4)));
    assert!(is_cubic(&common::complete(4)));
}

#[test]
fn dag_and_reversed_edge() {
    let dag = common::directed(4, &[(0, 1), (1, 2), (0, 2), (2, 3)]);
    assert!(is_dag(&dag));
    assert!(!is_forest(&dag));

    let cyclic = common::directed(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
    assert!(!is_dag(&cyclic));

    let fan = common::directed(3, &[(0, 1), (0, 2)]);
    assert!(is_dag(&fan));
    assert!(!is_dag(&common::path(3)));
}

#[test]
fn forests_and_connectivity() {
    let forest = common::undirected(4, &[(0, 1), (2, 3)]);
    assert!(is_forest(&forest));
    assert!(!is_tree(&forest));
    assert!(!is_connected(&forest));
    assert!(is_connected(&common::path(6)));
    assert!(!is_connected(&two_triangles()));
}

#[test]
fn density_bands() {
    let long_path = common::path(30);
    assert!(is_sparse(&long_path));
    assert!(!is_dense(&long_path));
    assert!(!is_sparse(&common::complete(5)));
}

#[test]
fn eulerian_undirected() {
    assert!(is_eulerian(&common::cycle(4)));
    assert!(!is_eulerian(&common::complete(4)));
    assert!(is_eulerian(&common::complete(5)));
    assert!(!is_eulerian(&two_triangles()));
    assert!(!is_eulerian(&common::undirected(3, &[])));

    let with_isolated = common::undirected(4, &[(0, 1), (1, 2), (2, 0)]);
    assert!(is_eulerian(&with_isolated));

    let looped = common::undirected(2, &[(0, 1), (0, 1), (1, 1)]);
    assert!(is_eulerian(&looped));
}

#[test]
fn eulerian_directed() {
    assert!(is_eulerian(&common::directed(3, &[(0, 1), (1, 2), (2, 0)])));
    assert!(!is_eulerian(&common::directed(3, &[(0, 1), (1, 2)])));
    assert!(!is_eulerian(&common::directed(
        4,
        &[(0, 1), (1, 0), (2, 3), (3, 2)]
    )));
}

#[test]
fn eulerian_rejects_mixed_orientation() {
    let mut graph = common::cycle(3);
    graph.edges.push(Edge::directed("extra", "v0", "v1"));
    assert!(!is_eulerian(&graph));
}

#[test]
fn planarity_and_searches() {
    assert!(is_planar(&common::cycle(8)));
    assert!(!is_planar(&common::complete(5)));
    assert!(is_hamiltonian(&common::cycle(5)));
    assert!(is_traceable(&common::path(5)));
    assert!(!is_hamiltonian(&common::path(5)));
}

#[test]
fn network_classes() {
    assert!(is_scale_free(&skewed_tree()));
    assert!(!is_scale_free(&common::cycle(12)));
    assert!(is_small_world(&common::ring_lattice(20, 4)));
    assert!(!is_small_world(&common::complete(10)));
    assert!(is_modular(&two_triangles()));
    assert!(!is_modular(&common::cycle(5)));
}

#[test]
fn modularity_through_policy() {
    let mut graph = common::path(4);
    for (idx, vertex) in graph.vertices.iter_mut().enumerate() {
        vertex
            .attributes
            .insert("tier".into(), json!(if idx < 2 { "a" } else { "b" }));
    }
    let policy = PartialPolicy {
        layer_key: Some("tier".into()),
        ..PartialPolicy::default()
    };
    assert!(!is_modular(&graph));
    assert!(is_modular_with(&graph, Some(&policy)));
}

#[test]
fn unit_disk_through_policy() {
    let mut graph = common::path(3);
    for (idx, vertex) in graph.vertices.iter_mut().enumerate() {
        vertex.attributes.insert("pos".into(), json!([idx, 0]));
    }
    let policy = PartialPolicy {
        position_key: Some("pos".into()),
        ..PartialPolicy::default()
    };
    assert!(!is_unit_disk(&graph));
    assert!(is_unit_disk_with(&graph, Some(&policy)));
    assert!(!is_unit_disk(&common::star(6)));
}

#[test]
fn mixed_arity_fails_every_class() {
    let graph = common::mixed_arity();
    let classes: [fn(&Graph) -> bool; 6] = [
        is_tree,
        is_forest,
        is_bipartite,
        is_chordal,
        is_eulerian,
        is_star,
    ];
    assert!(classes.iter().all(|class| !class(&graph)));
}
