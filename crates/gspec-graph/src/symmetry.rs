use itertools::Itertools;
use tracing::debug;

use crate::acyclic::{find, union};
use crate::adjacency::SimpleGraph;
use crate::limits::SYMMETRY_MAX_VERTICES;
use crate::Verdict;

/// Strongly-regular parameters `(k, lambda, mu)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SrgParameters {
    /// Common degree.
    pub k: usize,
    /// Common neighbours of every adjacent pair.
    pub lambda: usize,
    /// Common neighbours of every non-adjacent pair.
    pub mu: usize,
}

/// Strongly-regular test.
///
/// Irregular, edgeless and complete graphs fail outright; the all-pairs
/// confirmation runs only up to [`SYMMETRY_MAX_VERTICES`].
pub fn strongly_regular(graph: &SimpleGraph) -> Verdict<SrgParameters> {
    let n = graph.len();
    let Some(k) = graph.regular_degree() else {
        return if n == 0 {
            Verdict::Undetermined
        } else {
            Verdict::Fails
        };
    };
    if k == 0 || k + 1 == n {
        return Verdict::Fails;
    }
    if n > SYMMETRY_MAX_VERTICES {
        debug!(vertices = n, limit = SYMMETRY_MAX_VERTICES, "strongly-regular check skipped");
        return Verdict::Undetermined;
    }
    let mut lambda: Option<usize> = None;
    let mut mu: Option<usize> = None;
    for (a, b) in (0..n).tuple_combinations() {
        let common = graph
            .neighbours(a)
            .intersection(graph.neighbours(b))
            .count();
        let slot = if graph.adjacent(a, b) {
            &mut lambda
        } else {
            &mut mu
        };
        match *slot {
            Some(expected) if expected != common => return Verdict::Fails,
            Some(_) => {}
            None => *slot = Some(common),
        }
    }
    match (lambda, mu) {
        (Some(lambda), Some(mu)) => Verdict::Holds(SrgParameters { k, lambda, mu }),
        _ => Verdict::Fails,
    }
}

/// Self-complementarity test.
///
/// The edge count must be `n(n-1)/4` and the complemented degree sequence
/// must match the original before an isomorphism onto the complement is
/// searched for, up to [`SYMMETRY_MAX_VERTICES`].
pub fn self_complementary(graph: &SimpleGraph) -> Verdict {
    let n = graph.len();
    if n == 0 {
        return Verdict::Undetermined;
    }
    if 4 * graph.edge_count() != n * (n - 1) {
        return Verdict::Fails;
    }
    let mut degrees = graph.degrees();
    degrees.sort_unstable();
    let mut complemented: Vec<usize> = degrees.iter().map(|d| n - 1 - d).collect();
    complemented.sort_unstable();
    if degrees != complemented {
        return Verdict::Fails;
    }
    if n > SYMMETRY_MAX_VERTICES {
        debug!(vertices = n, limit = SYMMETRY_MAX_VERTICES, "self-complementary check skipped");
        return Verdict::Undetermined;
    }
    let edges = graph.edges();
    let found = (0..n).permutations(n).any(|perm| {
        edges
            .iter()
            .all(|&(a, b)| !graph.adjacent(perm[a], perm[b]))
    });
    Verdict::from(found)
}

/// Vertex-transitivity test.
///
/// Irregular graphs fail; otherwise every automorphism is enumerated (up to
/// [`SYMMETRY_MAX_VERTICES`]) and the orbits merged with union-find.
pub fn vertex_transitive(graph: &SimpleGraph) -> Verdict {
    let n = graph.len();
    if n == 0 {
        return Verdict::Undetermined;
    }
    if graph.regular_degree().is_none() {
        return Verdict::Fails;
    }
    if n > SYMMETRY_MAX_VERTICES {
        debug!(vertices = n, limit = SYMMETRY_MAX_VERTICES, "vertex-transitivity check skipped");
        return Verdict::Undetermined;
    }
    let edges = graph.edges();
    let mut parent: Vec<usize> = (0..n).collect();
    for perm in (0..n).permutations(n) {
        if edges.iter().all(|&(a, b)| graph.adjacent(perm[a], perm[b])) {
            for (idx, &mapped) in perm.iter().enumerate() {
                union(&mut parent, idx, mapped);
            }
        }
    }
    let root = find(&mut parent, 0);
    Verdict::from((1..n).all(|idx| find(&mut parent, idx) == root))
}
