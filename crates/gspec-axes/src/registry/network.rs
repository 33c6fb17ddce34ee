use std::collections::BTreeSet;

use gspec_core::{ComputePolicy, Graph, Vertex};
use gspec_graph::{component_count, estimate_power_law, estimate_small_world};

use super::undirected_view;
use crate::values::{CommunityStructure, ScaleFree, SmallWorld};

/// Power-law fit over the simple degree sequence.
pub fn compute_scale_free(graph: &Graph) -> ScaleFree {
    undirected_view(graph)
        .and_then(|view| estimate_power_law(&view.degrees()))
        .map(|exponent| ScaleFree::ScaleFree { exponent })
        .unwrap_or(ScaleFree::Unconstrained)
}

/// Clustering and path length against a same-density random baseline.
pub fn compute_small_world(graph: &Graph) -> SmallWorld {
    undirected_view(graph)
        .and_then(|view| estimate_small_world(&view))
        .filter(|estimate| estimate.is_small_world())
        .map(|estimate| SmallWorld::SmallWorld {
            clustering: estimate.clustering,
            path_length: estimate.path_length,
        })
        .unwrap_or(SmallWorld::Unconstrained)
}

/// Community count from explicit assignments, then layers, then components.
///
/// An explicit partition is used only when every vertex carries one; the
/// component fallback applies to undirected binary graphs.
pub fn compute_community_structure(graph: &Graph, policy: &ComputePolicy) -> CommunityStructure {
    let explicit = partition(graph, |v| policy.vertex_community(v))
        .or_else(|| partition(graph, |v| policy.vertex_layer(v)));
    let communities = match explicit {
        Some(count) => count,
        None => undirected_view(graph)
            .map(|view| component_count(&view))
            .unwrap_or(0),
    };
    if communities >= 2 {
        CommunityStructure::Modular { communities }
    } else {
        CommunityStructure::Unconstrained
    }
}

fn partition(
    graph: &Graph,
    assignment: impl Fn(&Vertex) -> Option<String>,
) -> Option<usize> {
    if graph.vertices.is_empty() {
        return None;
    }
    let groups: Option<BTreeSet<String>> = graph.vertices.iter().map(assignment).collect();
    groups.map(|groups| groups.len())
}
