use itertools::Itertools;
use tracing::debug;

use crate::adjacency::SimpleGraph;
use crate::bipartite::two_coloring;
use crate::connectivity::connected_components;
use crate::limits::{CLAW_MAX_VERTICES, COGRAPH_MAX_VERTICES, INTERVAL_MAX_VERTICES};
use crate::Verdict;

/// Cograph test: no induced path on four vertices, over every 4-subset.
pub fn cograph(graph: &SimpleGraph) -> Verdict {
    let n = graph.len();
    if n > COGRAPH_MAX_VERTICES {
        debug!(vertices = n, limit = COGRAPH_MAX_VERTICES, "induced P4 search skipped");
        return Verdict::Undetermined;
    }
    let found = (0..n)
        .combinations(4)
        .any(|subset| is_induced_p4(graph, &subset));
    Verdict::from(!found)
}

fn is_induced_p4(graph: &SimpleGraph, subset: &[usize]) -> bool {
    let mut degrees = [0usize; 4];
    let mut edges = 0;
    for i in 0..4 {
        for j in i + 1..4 {
            if graph.adjacent(subset[i], subset[j]) {
                degrees[i] += 1;
                degrees[j] += 1;
                edges += 1;
            }
        }
    }
    degrees.sort_unstable();
    edges == 3 && degrees == [1, 1, 2, 2]
}

/// Claw-free test: no centre with three mutually non-adjacent neighbours.
pub fn claw_free(graph: &SimpleGraph) -> Verdict {
    induced_star_free(graph, 3, CLAW_MAX_VERTICES)
}

/// Searches for an induced `K1,leaves`: a centre with `leaves` mutually
/// non-adjacent neighbours. Holds when none exists.
///
/// Graphs above `limit` vertices are not searched. Within a neighbourhood
/// only independent sets are extended, so dense neighbourhoods are pruned
/// after the first pick.
pub fn induced_star_free(graph: &SimpleGraph, leaves: usize, limit: usize) -> Verdict {
    let n = graph.len();
    if n > limit {
        debug!(vertices = n, limit, leaves, "induced star search skipped");
        return Verdict::Undetermined;
    }
    let found = (0..n)
        .filter(|&centre| graph.degree(centre) >= leaves)
        .any(|centre| {
            let neighbours: Vec<usize> = graph.neighbours(centre).iter().copied().collect();
            extends_to_independent(graph, &neighbours, leaves)
        });
    Verdict::from(!found)
}

/// Whether `candidates` contains `size` mutually non-adjacent vertices.
fn extends_to_independent(graph: &SimpleGraph, candidates: &[usize], size: usize) -> bool {
    if size == 0 {
        return true;
    }
    if candidates.len() < size {
        return false;
    }
    candidates.iter().enumerate().any(|(idx, &pick)| {
        let rest: Vec<usize> = candidates[idx + 1..]
            .iter()
            .copied()
            .filter(|&other| !graph.adjacent(pick, other))
            .collect();
        extends_to_independent(graph, &rest, size - 1)
    })
}

/// Line-graph heuristic.
///
/// A line graph is claw-free and every neighbourhood splits into at most
/// two cliques (the edges meeting at either endpoint). Both conditions are
/// necessary but not sufficient: a graph passing them is reported as a line
/// graph even when another Beineke obstruction is present.
pub fn line_graph_heuristic(graph: &SimpleGraph) -> Verdict {
    match claw_free(graph) {
        Verdict::Holds(()) => {}
        other => return other,
    }
    let covered = (0..graph.len()).all(|vertex| {
        let members: Vec<usize> = graph.neighbours(vertex).iter().copied().collect();
        let mut pairs = Vec::new();
        for (i, j) in (0..members.len()).tuple_combinations() {
            if !graph.adjacent(members[i], members[j]) {
                pairs.push((i, j));
            }
        }
        two_coloring(&SimpleGraph::from_edges(members.len(), &pairs)).is_some()
    });
    Verdict::from(covered)
}

/// Asteroidal-triple-free test.
///
/// Three pairwise non-adjacent vertices form an asteroidal triple when each
/// pair is joined by a path avoiding the closed neighbourhood of the third.
pub fn asteroidal_triple_free(graph: &SimpleGraph) -> Verdict {
    let n = graph.len();
    if n > INTERVAL_MAX_VERTICES {
        debug!(vertices = n, limit = INTERVAL_MAX_VERTICES, "asteroidal triple search skipped");
        return Verdict::Undetermined;
    }
    let avoiding: Vec<Vec<Option<usize>>> = (0..n).map(|v| components_avoiding(graph, v)).collect();
    let linked = |a: usize, b: usize, blocker: usize| {
        matches!(
            (avoiding[blocker][a], avoiding[blocker][b]),
            (Some(x), Some(y)) if x == y
        )
    };
    let found = (0..n).tuple_combinations().any(|(a, b, c)| {
        !graph.adjacent(a, b)
            && !graph.adjacent(a, c)
            && !graph.adjacent(b, c)
            && linked(a, b, c)
            && linked(a, c, b)
            && linked(b, c, a)
    });
    Verdict::from(!found)
}

/// Component labels of `G - N[blocker]`; vertices in `N[blocker]` map to `None`.
fn components_avoiding(graph: &SimpleGraph, blocker: usize) -> Vec<Option<usize>> {
    let n = graph.len();
    let blocked = |v: usize| v == blocker || graph.adjacent(blocker, v);
    let kept: Vec<usize> = (0..n).filter(|&v| !blocked(v)).collect();
    let mut position = vec![usize::MAX; n];
    for (idx, &v) in kept.iter().enumerate() {
        position[v] = idx;
    }
    let mut pairs = Vec::new();
    for &v in &kept {
        for &w in graph.neighbours(v) {
            if v < w && position[w] != usize::MAX {
                pairs.push((position[v], position[w]));
            }
        }
    }
    let labels = connected_components(&SimpleGraph::from_edges(kept.len(), &pairs));
    let mut result = vec![None; n];
    for (idx, &v) in kept.iter().enumerate() {
        result[v] = Some(labels[idx]);
    }
    result
}
