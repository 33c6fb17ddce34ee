//! One pure function per structural axis, grouped by family.
//!
//! Only [`compute_edge_arity`] can fail. Every other function degrades to the
//! conservative value of its axis when a precondition is unmet or a search
//! cutoff is exceeded.

mod classes;
mod data;
mod epistemic;
mod global;
mod identity;
mod metadata;
mod network;
mod orientation;
mod shape;
mod symmetry;

pub use classes::{
    compute_chordality, compute_claw_free, compute_cograph, compute_comparability,
    compute_hamiltonian, compute_interval, compute_line_graph, compute_perfect,
    compute_permutation, compute_planarity, compute_split, compute_threshold,
    compute_traceable, compute_unit_disk, threshold_from,
};
pub use data::{compute_edge_data, compute_schema_homogeneity, compute_vertex_data};
pub use epistemic::{
    compute_measure_semantics, compute_observability, compute_operational_semantics,
};
pub use global::{
    compute_completeness, compute_connectivity, compute_cycles, compute_degree_constraint,
    compute_density, compute_partiteness, DENSE_MIN_DENSITY, SPARSE_MAX_DENSITY,
};
pub use identity::{compute_vertex_cardinality, compute_vertex_identity, compute_vertex_ordering};
pub use metadata::{
    compute_edge_ordering, compute_embedding, compute_layering, compute_ports, compute_rooting,
    compute_temporal,
};
pub use network::{compute_community_structure, compute_scale_free, compute_small_world};
pub use orientation::{
    compute_directionality, compute_signedness, compute_uncertainty, compute_weighting,
};
pub use shape::{compute_edge_arity, compute_edge_multiplicity, compute_self_loops};
pub use symmetry::{
    compute_complete_bipartite, compute_cubic, compute_k_regular, compute_regularity,
    compute_self_complementary, compute_strongly_regular, compute_vertex_transitive,
};

use std::collections::BTreeSet;

use gspec_core::Graph;
use gspec_graph::{is_undirected_binary, SimpleGraph};

/// Simple view of an undirected binary graph; `None` for any other shape.
fn undirected_view(graph: &Graph) -> Option<SimpleGraph> {
    is_undirected_binary(graph).then(|| SimpleGraph::from_graph(graph))
}

/// Whether a binary edge between existing vertices repeats its endpoint.
fn has_existing_loop(graph: &Graph) -> bool {
    let ids: BTreeSet<&str> = graph.vertex_ids().collect();
    graph.edges.iter().any(|edge| {
        edge.is_binary() && edge.is_loop() && ids.contains(edge.endpoints[0].as_str())
    })
}
