use gspec_core::Graph;
use gspec_graph::{
    partition_sizes, self_complementary, strongly_regular, two_coloring, vertex_transitive,
    SrgParameters, Verdict,
};

use super::{has_existing_loop, undirected_view};
use crate::values::{
    CompleteBipartite, Cubic, KRegular, Regularity, SelfComplementary, StronglyRegular,
    VertexTransitive,
};

/// Cubic iff undirected binary, non-empty and 3-regular.
pub fn compute_cubic(graph: &Graph) -> Cubic {
    match compute_k_regular(graph, 3) {
        KRegular::KRegular { .. } => Cubic::Cubic,
        KRegular::NotKRegular => Cubic::NotCubic,
    }
}

/// Auto-detected common degree of the simple view.
pub fn compute_regularity(graph: &Graph) -> Regularity {
    match undirected_view(graph).filter(|view| !view.is_empty()) {
        Some(view) => match view.regular_degree() {
            Some(degree) => Regularity::Regular { degree },
            None => Regularity::Irregular,
        },
        None => Regularity::Unconstrained,
    }
}

/// Whether every vertex of the simple view has degree `k`.
pub fn compute_k_regular(graph: &Graph, k: usize) -> KRegular {
    match compute_regularity(graph) {
        Regularity::Regular { degree } if degree == k => KRegular::KRegular { k },
        _ => KRegular::NotKRegular,
    }
}

/// Strong regularity confirmed over every pair.
pub fn compute_strongly_regular(graph: &Graph) -> StronglyRegular {
    let Some(view) = undirected_view(graph) else {
        return StronglyRegular::Unconstrained;
    };
    match strongly_regular(&view) {
        Verdict::Holds(SrgParameters { k, lambda, mu }) => {
            StronglyRegular::StronglyRegular { k, lambda, mu }
        }
        Verdict::Fails => StronglyRegular::NotStronglyRegular,
        Verdict::Undetermined => StronglyRegular::Unconstrained,
    }
}

/// Isomorphism onto the complement.
pub fn compute_self_complementary(graph: &Graph) -> SelfComplementary {
    match undirected_view(graph).map(|view| self_complementary(&view)) {
        Some(Verdict::Holds(())) => SelfComplementary::SelfComplementary,
        Some(Verdict::Fails) => SelfComplementary::NotSelfComplementary,
        _ => SelfComplementary::Unconstrained,
    }
}

/// Automorphism orbits cover every vertex.
pub fn compute_vertex_transitive(graph: &Graph) -> VertexTransitive {
    match undirected_view(graph).map(|view| vertex_transitive(&view)) {
        Some(Verdict::Holds(())) => VertexTransitive::VertexTransitive,
        Some(Verdict::Fails) => VertexTransitive::NotVertexTransitive,
        _ => VertexTransitive::Unconstrained,
    }
}

/// `K_{m,n}` with `m <= n`: a loop-free two-colouring with non-empty sides
/// and every cross pair joined.
pub fn compute_complete_bipartite(graph: &Graph) -> CompleteBipartite {
    let Some(view) = undirected_view(graph) else {
        return CompleteBipartite::NotCompleteBipartite;
    };
    if has_existing_loop(graph) {
        return CompleteBipartite::NotCompleteBipartite;
    }
    let Some(colors) = two_coloring(&view) else {
        return CompleteBipartite::NotCompleteBipartite;
    };
    let (a, b) = partition_sizes(&colors);
    let (m, n) = (a.min(b), a.max(b));
    if m == 0 || view.edge_count() != m * n {
        return CompleteBipartite::NotCompleteBipartite;
    }
    CompleteBipartite::CompleteBipartite { m, n }
}
