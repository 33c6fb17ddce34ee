//! Named graph classes.
//!
//! Most classes are partial-spec matches over the assembled spec. Eulerian
//! and star graphs are checked directly on adjacency. Every function is a
//! plain `fn(&Graph) -> bool`, so `Predicate::new(is_tree)` lifts it into a
//! composable [`Predicate`](crate::Predicate).

use gspec_axes::{
    compute_k_regular, Chordality, ClawFree, Cograph, CommunityStructure, Comparability,
    CompleteBipartite, Completeness, Connectivity, Cubic, Cycles, DegreeConstraint, Density,
    Directionality, Hamiltonian, InferredSpec, Interval, KRegular, LineGraph, Partiteness,
    Perfect, Permutation, Planarity, ScaleFree, SelfComplementary, SmallWorld, Split,
    StronglyRegular, Threshold, Traceable, UnitDisk, VertexTransitive,
};
use gspec_core::{ComputePolicy, Graph, PartialPolicy};
use gspec_graph::{
    connected_components, is_directed_binary, is_undirected_binary, SimpleGraph, VertexIndex,
};

use crate::partial::PartialSpec;
use crate::predicate::evaluate;

fn satisfies(graph: &Graph, expected: PartialSpec) -> bool {
    evaluate(graph, &ComputePolicy::default(), |spec| expected.matches(spec))
}

fn satisfies_with(
    graph: &Graph,
    policy: Option<&PartialPolicy>,
    check: impl FnOnce(&InferredSpec) -> bool,
) -> bool {
    evaluate(graph, &ComputePolicy::merged(policy), check)
}

/// Connected and acyclic.
pub fn is_tree(graph: &Graph) -> bool {
    satisfies(
        graph,
        PartialSpec::new()
            .with(Connectivity::Connected)
            .with(Cycles::Acyclic),
    )
}

/// Undirected and acyclic.
pub fn is_forest(graph: &Graph) -> bool {
    satisfies(
        graph,
        PartialSpec::new()
            .with(Directionality::Undirected)
            .with(Cycles::Acyclic),
    )
}

/// Directed (including antidirected) and acyclic.
pub fn is_dag(graph: &Graph) -> bool {
    satisfies_with(graph, None, |spec| {
        matches!(
            spec.directionality,
            Directionality::Directed | Directionality::Antidirected
        ) && spec.cycles == Cycles::Acyclic
    })
}

/// Two-colourable.
pub fn is_bipartite(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Partiteness::Bipartite))
}

/// Every pair joined.
pub fn is_complete(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Completeness::Complete))
}

/// Density at most 0.1.
pub fn is_sparse(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Density::Sparse))
}

/// Density at least 0.9.
pub fn is_dense(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Density::Dense))
}

/// All degrees equal.
pub fn is_regular(graph: &Graph) -> bool {
    satisfies_with(graph, None, |spec| {
        matches!(spec.degree_constraint, DegreeConstraint::Regular { .. })
    })
}

/// Undirected binary and connected.
pub fn is_connected(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Connectivity::Connected))
}

/// Has an Euler circuit.
///
/// Undirected binary graphs need every degree even; directed binary graphs
/// need in-degree equal to out-degree everywhere. In both cases the graph
/// needs an edge, and all non-isolated vertices must share one component
/// of the underlying graph. Loops add two to a vertex's degree and parallel
/// edges count separately.
pub fn is_eulerian(graph: &Graph) -> bool {
    let undirected = is_undirected_binary(graph);
    if !undirected && !is_directed_binary(graph) {
        return false;
    }
    let index = VertexIndex::from_graph(graph);
    let pairs: Vec<(usize, usize)> = graph
        .edges
        .iter()
        .filter_map(|edge| index.pair(edge))
        .collect();
    if pairs.is_empty() {
        return false;
    }
    let mut out_degree = vec![0usize; index.len()];
    let mut in_degree = vec![0usize; index.len()];
    for &(a, b) in &pairs {
        out_degree[a] += 1;
        in_degree[b] += 1;
    }
    let balanced = if undirected {
        (0..index.len()).all(|v| (out_degree[v] + in_degree[v]) % 2 == 0)
    } else {
        out_degree == in_degree
    };
    if !balanced {
        return false;
    }
    let underlying = SimpleGraph::from_edges(index.len(), &pairs);
    let labels = connected_components(&underlying);
    let mut touched = pairs.iter().flat_map(|&(a, b)| [labels[a], labels[b]]);
    let first = touched.next();
    touched.all(|label| Some(label) == first)
}

/// One centre joined to every other vertex, and no other edges.
///
/// Needs at least two vertices, no loops and no parallel edges.
pub fn is_star(graph: &Graph) -> bool {
    if !is_undirected_binary(graph) {
        return false;
    }
    let view = SimpleGraph::from_graph(graph);
    let n = view.len();
    if n < 2 {
        return false;
    }
    let index = view.index();
    let raw_edges = graph
        .edges
        .iter()
        .filter(|edge| index.pair(edge).is_some())
        .count();
    if raw_edges != n - 1 || view.edge_count() != n - 1 {
        return false;
    }
    let degrees = view.degrees();
    let centres = degrees.iter().filter(|&&d| d == n - 1).count();
    let leaves = degrees.iter().filter(|&&d| d == 1).count();
    if n == 2 {
        return leaves == 2;
    }
    centres == 1 && leaves == n - 1
}

/// Certified planar.
pub fn is_planar(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Planarity::Planar))
}

/// Chordal.
pub fn is_chordal(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Chordality::Chordal))
}

/// Interval graph.
pub fn is_interval(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Interval::Interval))
}

/// Permutation graph.
pub fn is_permutation(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Permutation::Permutation))
}

/// Unit-disk graph under the default policy.
pub fn is_unit_disk(graph: &Graph) -> bool {
    is_unit_disk_with(graph, None)
}

/// Unit-disk graph, reading positions through `policy`.
pub fn is_unit_disk_with(graph: &Graph, policy: Option<&PartialPolicy>) -> bool {
    satisfies_with(graph, policy, |spec| spec.unit_disk == UnitDisk::UnitDisk)
}

/// Comparability graph.
pub fn is_comparability(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Comparability::Comparability))
}

/// Power-law degree distribution, whatever the exponent.
pub fn is_scale_free(graph: &Graph) -> bool {
    satisfies_with(graph, None, |spec| {
        matches!(spec.scale_free, ScaleFree::ScaleFree { .. })
    })
}

/// Small-world structure.
pub fn is_small_world(graph: &Graph) -> bool {
    satisfies_with(graph, None, |spec| {
        matches!(spec.small_world, SmallWorld::SmallWorld { .. })
    })
}

/// Two or more communities under the default policy.
pub fn is_modular(graph: &Graph) -> bool {
    is_modular_with(graph, None)
}

/// Two or more communities, reading layers through `policy`.
pub fn is_modular_with(graph: &Graph, policy: Option<&PartialPolicy>) -> bool {
    satisfies_with(graph, policy, |spec| {
        matches!(
            spec.community_structure,
            CommunityStructure::Modular { .. }
        )
    })
}

/// Hamiltonian cycle confirmed.
pub fn is_hamiltonian(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Hamiltonian::Hamiltonian))
}

/// Hamiltonian path confirmed.
pub fn is_traceable(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Traceable::Traceable))
}

/// Perfectness certified.
pub fn is_perfect(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Perfect::Perfect))
}

/// Split graph.
pub fn is_split(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Split::Split))
}

/// Cograph.
pub fn is_cograph(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Cograph::Cograph))
}

/// Threshold graph.
pub fn is_threshold(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Threshold::Threshold))
}

/// Passes the line-graph conditions.
pub fn is_line_graph(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(LineGraph::LineGraph))
}

/// Claw-free.
pub fn is_claw_free(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(ClawFree::ClawFree))
}

/// 3-regular.
pub fn is_cubic(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(Cubic::Cubic))
}

/// Every degree equals `k`.
pub fn is_k_regular(graph: &Graph, k: usize) -> bool {
    matches!(compute_k_regular(graph, k), KRegular::KRegular { .. })
}

/// Strong regularity confirmed, whatever the parameters.
pub fn is_strongly_regular(graph: &Graph) -> bool {
    satisfies_with(graph, None, |spec| {
        matches!(
            spec.strongly_regular,
            StronglyRegular::StronglyRegular { .. }
        )
    })
}

/// Self-complementarity confirmed.
pub fn is_self_complementary(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(SelfComplementary::SelfComplementary))
}

/// Vertex-transitivity confirmed.
pub fn is_vertex_transitive(graph: &Graph) -> bool {
    satisfies(graph, PartialSpec::new().with(VertexTransitive::VertexTransitive))
}

/// `K_{m,n}` for some sides.
pub fn is_complete_bipartite(graph: &Graph) -> bool {
    satisfies_with(graph, None, |spec| {
        matches!(
            spec.complete_bipartite,
            CompleteBipartite::CompleteBipartite { .. }
        )
    })
}
