use std::collections::BTreeSet;

use gspec_core::Graph;
use gspec_graph::{
    is_connected, is_directed_acyclic, is_directed_binary, is_undirected_acyclic,
    is_undirected_binary, two_coloring, DirectedView, SimpleGraph, VertexIndex,
};

use super::{has_existing_loop, undirected_view};
use crate::values::{Completeness, Connectivity, Cycles, DegreeConstraint, Density, Partiteness};

/// Density at or below which a graph is sparse.
pub const SPARSE_MAX_DENSITY: f64 = 0.1;

/// Density at or above which a graph is dense.
pub const DENSE_MIN_DENSITY: f64 = 0.9;

/// Connected iff undirected binary and every vertex is reachable.
pub fn compute_connectivity(graph: &Graph) -> Connectivity {
    match undirected_view(graph) {
        Some(view) if is_connected(&view) => Connectivity::Connected,
        _ => Connectivity::Unconstrained,
    }
}

/// Union-find over undirected binary graphs, Kahn's algorithm over directed
/// binary graphs; any other shape keeps `cycles_allowed`.
pub fn compute_cycles(graph: &Graph) -> Cycles {
    let acyclic = if is_undirected_binary(graph) {
        is_undirected_acyclic(graph)
    } else if is_directed_binary(graph) {
        is_directed_acyclic(&DirectedView::from_graph(graph))
    } else {
        false
    };
    if acyclic {
        Cycles::Acyclic
    } else {
        Cycles::CyclesAllowed
    }
}

/// Regular degree or the non-increasing degree sequence of the simple view.
pub fn compute_degree_constraint(graph: &Graph) -> DegreeConstraint {
    let Some(view) = undirected_view(graph).filter(|view| !view.is_empty()) else {
        return DegreeConstraint::Unconstrained;
    };
    if let Some(degree) = view.regular_degree() {
        return DegreeConstraint::Regular { degree };
    }
    let mut sequence = view.degrees();
    sequence.sort_unstable_by(|a, b| b.cmp(a));
    DegreeConstraint::DegreeSequence { sequence }
}

/// Every pair joined: unordered pairs when undirected, ordered pairs when
/// directed. No vertex is incomplete, one vertex is complete.
pub fn compute_completeness(graph: &Graph) -> Completeness {
    let complete = match VertexIndex::from_graph(graph).len() {
        0 => false,
        1 => true,
        n if is_undirected_binary(graph) => {
            SimpleGraph::from_graph(graph).edge_count() == n * (n - 1) / 2
        }
        n if is_directed_binary(graph) => distinct_arcs(graph) == n * (n - 1),
        _ => false,
    };
    if complete {
        Completeness::Complete
    } else {
        Completeness::Incomplete
    }
}

/// Bipartite iff undirected binary, loop-free and two-colourable.
pub fn compute_partiteness(graph: &Graph) -> Partiteness {
    match undirected_view(graph) {
        Some(view) if !has_existing_loop(graph) && two_coloring(&view).is_some() => {
            Partiteness::Bipartite
        }
        _ => Partiteness::Unrestricted,
    }
}

/// Density band of an undirected binary graph with at least two vertices.
pub fn compute_density(graph: &Graph) -> Density {
    let Some(view) = undirected_view(graph).filter(|view| view.len() >= 2) else {
        return Density::Unconstrained;
    };
    let density = view.density();
    if density <= SPARSE_MAX_DENSITY {
        Density::Sparse
    } else if density >= DENSE_MIN_DENSITY {
        Density::Dense
    } else {
        Density::Unconstrained
    }
}

/// Distinct non-loop arcs between existing vertices.
fn distinct_arcs(graph: &Graph) -> usize {
    let view = DirectedView::from_graph(graph);
    let arcs: BTreeSet<(usize, usize)> = (0..view.len())
        .flat_map(|source| {
            view.successors(source)
                .iter()
                .filter(move |&&target| target != source)
                .map(move |&target| (source, target))
        })
        .collect();
    arcs.len()
}
