use crate::adjacency::SimpleGraph;
use crate::bipartite::two_coloring;
use crate::connectivity::component_count;
use crate::Verdict;

/// Conservative planarity check.
///
/// Euler's bounds (`E <= 3V - 6`, or `E <= 2V - 4` for bipartite graphs)
/// certify non-planarity when violated. Planarity itself is only certified
/// when `V <= 4` or the cyclomatic number `E - V + C` is at most three,
/// since every subdivision of K5 or K3,3 needs at least four independent
/// cycles. Everything else is undetermined.
pub fn planarity(graph: &SimpleGraph) -> Verdict {
    let v = graph.len();
    let e = graph.edge_count();
    if v <= 4 {
        return Verdict::Holds(());
    }
    let bound = if two_coloring(graph).is_some() {
        2 * v - 4
    } else {
        3 * v - 6
    };
    if e > bound {
        return Verdict::Fails;
    }
    let cyclomatic = (e + component_count(graph)).saturating_sub(v);
    if cyclomatic <= 3 {
        return Verdict::Holds(());
    }
    Verdict::Undetermined
}
