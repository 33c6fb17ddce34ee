use std::collections::BTreeSet;

use gspec_core::{Graph, SpecError};

use crate::values::{EdgeArity, EdgeMultiplicity, SelfLoops};

/// Common endpoint count of every edge.
///
/// An edgeless graph is binary. Edges of different arities cannot be
/// described by one value and yield a `mixed-arity` error.
pub fn compute_edge_arity(graph: &Graph) -> Result<EdgeArity, SpecError> {
    let arities: BTreeSet<usize> = graph.edges.iter().map(|edge| edge.arity()).collect();
    let observed: Vec<usize> = arities.into_iter().collect();
    match observed.as_slice() {
        [] | [2] => Ok(EdgeArity::Binary),
        [k] => Ok(EdgeArity::KAry { k: *k }),
        _ => Err(SpecError::mixed_arity(&observed)),
    }
}

/// Multi iff two edges share an endpoint key.
///
/// Directed edges key on their ordered endpoints, undirected edges on the
/// sorted endpoints, so `a -> b` and `b -> a` are distinct.
pub fn compute_edge_multiplicity(graph: &Graph) -> EdgeMultiplicity {
    let mut seen: BTreeSet<(bool, Vec<&str>)> = BTreeSet::new();
    for edge in &graph.edges {
        let mut key: Vec<&str> = edge.endpoints.iter().map(String::as_str).collect();
        if !edge.directed {
            key.sort_unstable();
        }
        if !seen.insert((edge.directed, key)) {
            return EdgeMultiplicity::Multi;
        }
    }
    EdgeMultiplicity::Simple
}

/// Allowed iff some edge repeats an endpoint.
pub fn compute_self_loops(graph: &Graph) -> SelfLoops {
    if graph.edges.iter().any(|edge| edge.is_loop()) {
        SelfLoops::Allowed
    } else {
        SelfLoops::Disallowed
    }
}
