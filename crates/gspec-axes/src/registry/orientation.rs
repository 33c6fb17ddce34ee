use std::collections::BTreeSet;

use gspec_core::{ComputePolicy, Graph};

use crate::values::{Directionality, Signedness, Uncertainty, Weighting};

/// Classifies the orientation of the edge set.
///
/// Bidirected and antidirected require every edge to be a directed binary
/// arc. Bidirected: each arc's reverse is present. Antidirected: no arc's
/// reverse is present, so a loop arc rules it out. Anything in between is
/// directed.
pub fn compute_directionality(graph: &Graph) -> Directionality {
    let directed = graph.edges.iter().filter(|edge| edge.directed).count();
    if directed == 0 {
        return Directionality::Undirected;
    }
    if directed < graph.edge_count() {
        return Directionality::Mixed;
    }
    if !graph.edges.iter().all(|edge| edge.is_binary()) {
        return Directionality::Directed;
    }
    let arcs: BTreeSet<(&str, &str)> = graph
        .edges
        .iter()
        .map(|edge| (edge.endpoints[0].as_str(), edge.endpoints[1].as_str()))
        .collect();
    if arcs.iter().all(|(a, b)| arcs.contains(&(*b, *a))) {
        return Directionality::Bidirected;
    }
    if arcs.iter().all(|(a, b)| !arcs.contains(&(*b, *a))) {
        return Directionality::Antidirected;
    }
    Directionality::Directed
}

/// Weight carried by every edge.
///
/// A shared weight-vector dimension wins over scalar weights; an edgeless
/// graph is unweighted.
pub fn compute_weighting(graph: &Graph, policy: &ComputePolicy) -> Weighting {
    if graph.edges.is_empty() {
        return Weighting::Unweighted;
    }
    let dimensions: Option<BTreeSet<usize>> = graph
        .edges
        .iter()
        .map(|edge| policy.edge_weight_vector(edge).map(|weights| weights.len()))
        .collect();
    if let Some(dimensions) = dimensions {
        if let [dimension] = dimensions.into_iter().collect::<Vec<_>>()[..] {
            if dimension > 0 {
                return Weighting::WeightedVector { dimension };
            }
        }
    }
    let numeric = graph
        .edges
        .iter()
        .all(|edge| edge.weight.is_some_and(f64::is_finite));
    if numeric {
        Weighting::WeightedNumeric
    } else {
        Weighting::Unweighted
    }
}

/// Signed iff some edge carries a sign.
pub fn compute_signedness(graph: &Graph) -> Signedness {
    if graph.edges.iter().any(|edge| edge.sign.is_some()) {
        Signedness::Signed
    } else {
        Signedness::Unsigned
    }
}

/// Probabilistic iff some edge carries a probability.
pub fn compute_uncertainty(graph: &Graph, policy: &ComputePolicy) -> Uncertainty {
    if graph
        .edges
        .iter()
        .any(|edge| policy.edge_probability(edge).is_some())
    {
        Uncertainty::Probabilistic
    } else {
        Uncertainty::Deterministic
    }
}
