use std::collections::BTreeSet;

use gspec_core::{ComputePolicy, Graph, Stamp};

use crate::values::{EdgeOrdering, Embedding, Layering, Ports, Rooting, Temporal};

/// Spatial iff every vertex has a 2-D or 3-D position of one dimension.
pub fn compute_embedding(graph: &Graph, policy: &ComputePolicy) -> Embedding {
    if graph.vertices.is_empty() {
        return Embedding::Abstract;
    }
    let dimensions: Option<BTreeSet<usize>> = graph
        .vertices
        .iter()
        .map(|vertex| policy.vertex_position(vertex).map(|p| p.len()))
        .collect();
    match dimensions.map(|set| set.into_iter().collect::<Vec<_>>()) {
        Some(found) if found == [2] || found == [3] => Embedding::Spatial {
            dimension: found[0],
        },
        _ => Embedding::Abstract,
    }
}

/// Counts root-marked vertices.
pub fn compute_rooting(graph: &Graph, policy: &ComputePolicy) -> Rooting {
    let roots = graph
        .vertices
        .iter()
        .filter(|vertex| policy.vertex_is_root(vertex))
        .count();
    match roots {
        0 => Rooting::Unrooted,
        1 => Rooting::Rooted,
        _ => Rooting::MultiRooted,
    }
}

/// Classifies timestamps on vertices and edges.
///
/// Timestamps on both sides give `time_ordered` when every one of them is
/// numeric and `edge_temporal` otherwise.
pub fn compute_temporal(graph: &Graph, policy: &ComputePolicy) -> Temporal {
    let vertex_stamps: Vec<Stamp> = graph
        .vertices
        .iter()
        .filter_map(|vertex| policy.vertex_time(vertex))
        .collect();
    let edge_stamps: Vec<Stamp> = graph
        .edges
        .iter()
        .filter_map(|edge| policy.edge_time(edge))
        .collect();
    match (vertex_stamps.is_empty(), edge_stamps.is_empty()) {
        (true, true) => Temporal::Static,
        (false, true) => Temporal::VertexTemporal,
        (true, false) => Temporal::EdgeTemporal,
        (false, false) => {
            let numeric = vertex_stamps
                .iter()
                .chain(&edge_stamps)
                .all(|stamp| stamp.as_f64().is_some());
            if numeric {
                Temporal::TimeOrdered
            } else {
                Temporal::EdgeTemporal
            }
        }
    }
}

/// Multi-layer iff vertices name two or more distinct layers.
pub fn compute_layering(graph: &Graph, policy: &ComputePolicy) -> Layering {
    let layers: BTreeSet<String> = graph
        .vertices
        .iter()
        .filter_map(|vertex| policy.vertex_layer(vertex))
        .collect();
    if layers.len() >= 2 {
        Layering::MultiLayer {
            layers: layers.len(),
        }
    } else {
        Layering::SingleLayer
    }
}

/// Ordered iff the graph has edges and every edge carries an order.
pub fn compute_edge_ordering(graph: &Graph, policy: &ComputePolicy) -> EdgeOrdering {
    let ordered = !graph.edges.is_empty()
        && graph
            .edges
            .iter()
            .all(|edge| policy.edge_order(edge).is_some());
    if ordered {
        EdgeOrdering::Ordered
    } else {
        EdgeOrdering::Unordered
    }
}

/// Ported iff some vertex or edge names a port.
pub fn compute_ports(graph: &Graph, policy: &ComputePolicy) -> Ports {
    let ported = graph
        .vertices
        .iter()
        .any(|vertex| policy.vertex_port(vertex).is_some())
        || graph
            .edges
            .iter()
            .any(|edge| policy.edge_port(edge).is_some());
    if ported {
        Ports::Ported
    } else {
        Ports::NoPorts
    }
}
