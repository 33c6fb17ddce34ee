use std::collections::BTreeSet;

use gspec_core::{ComputePolicy, Graph, Stamp};

use crate::values::{VertexCardinality, VertexIdentity, VertexOrdering};

/// Counts the vertex sequence.
pub fn compute_vertex_cardinality(graph: &Graph) -> VertexCardinality {
    VertexCardinality::Finite {
        count: graph.vertex_count(),
    }
}

/// Distinguishable iff vertex identifiers are pairwise distinct.
pub fn compute_vertex_identity(graph: &Graph) -> VertexIdentity {
    let distinct: BTreeSet<&str> = graph.vertex_ids().collect();
    if distinct.len() == graph.vertex_count() {
        VertexIdentity::Distinguishable
    } else {
        VertexIdentity::Indistinguishable
    }
}

/// Reads the vertex order convention.
///
/// A total order needs every vertex to carry a numeric order with no ties.
/// Any other non-empty set of orders is partial.
pub fn compute_vertex_ordering(graph: &Graph, policy: &ComputePolicy) -> VertexOrdering {
    let stamps: Vec<Option<Stamp>> = graph
        .vertices
        .iter()
        .map(|vertex| policy.vertex_order(vertex))
        .collect();
    if stamps.iter().all(Option::is_none) {
        return VertexOrdering::Unordered;
    }
    let numeric: Option<Vec<f64>> = stamps
        .iter()
        .map(|stamp| stamp.and_then(Stamp::as_f64))
        .collect();
    let Some(mut numeric) = numeric else {
        return VertexOrdering::PartialOrder;
    };
    numeric.sort_by(f64::total_cmp);
    if numeric.windows(2).all(|pair| pair[0] < pair[1]) {
        VertexOrdering::TotalOrder
    } else {
        VertexOrdering::PartialOrder
    }
}
