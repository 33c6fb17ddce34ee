use std::collections::BTreeMap;

use itertools::Itertools;
use tracing::debug;

use crate::acyclic::{find, union};
use crate::adjacency::SimpleGraph;
use crate::limits::COMPARABILITY_MAX_VERTICES;
use crate::Verdict;

/// Transitive orientability test by implication classes.
///
/// Arcs `(x, y)` and `(x, z)` force each other whenever `y` and `z` are not
/// adjacent, and likewise `(y, x)` and `(z, x)`. The graph is a comparability
/// graph iff no implication class contains an arc together with its reverse.
pub fn comparability(graph: &SimpleGraph) -> Verdict {
    let n = graph.len();
    if n > COMPARABILITY_MAX_VERTICES {
        debug!(
            vertices = n,
            limit = COMPARABILITY_MAX_VERTICES,
            "transitive orientation search skipped"
        );
        return Verdict::Undetermined;
    }
    let mut arcs: BTreeMap<(usize, usize), usize> = BTreeMap::new();
    for (a, b) in graph.edges() {
        let next = arcs.len();
        arcs.insert((a, b), next);
        arcs.insert((b, a), next + 1);
    }
    let mut parent: Vec<usize> = (0..arcs.len()).collect();
    for x in 0..n {
        for (y, z) in graph.neighbours(x).iter().copied().tuple_combinations() {
            if graph.adjacent(y, z) {
                continue;
            }
            union(&mut parent, arcs[&(x, y)], arcs[&(x, z)]);
            union(&mut parent, arcs[&(y, x)], arcs[&(z, x)]);
        }
    }
    let consistent = graph
        .edges()
        .into_iter()
        .all(|(a, b)| find(&mut parent, arcs[&(a, b)]) != find(&mut parent, arcs[&(b, a)]));
    Verdict::from(consistent)
}

/// Permutation graph test: the graph and its complement are both
/// comparability graphs.
pub fn permutation(graph: &SimpleGraph) -> Verdict {
    match comparability(graph) {
        Verdict::Holds(()) => comparability(&graph.complement()),
        other => other,
    }
}
