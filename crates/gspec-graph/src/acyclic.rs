use std::collections::VecDeque;

use gspec_core::Graph;

use crate::adjacency::{DirectedView, VertexIndex};

/// Kahn's algorithm: acyclic iff every vertex is eventually removed.
pub fn is_directed_acyclic(view: &DirectedView) -> bool {
    let mut in_degree = view.in_degrees();
    let mut queue: VecDeque<usize> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, degree)| **degree == 0)
        .map(|(vertex, _)| vertex)
        .collect();
    let mut removed = 0;
    while let Some(vertex) = queue.pop_front() {
        removed += 1;
        for &target in view.successors(vertex) {
            in_degree[target] -= 1;
            if in_degree[target] == 0 {
                queue.push_back(target);
            }
        }
    }
    removed == view.len()
}

/// Forest test over the binary undirected edges between existing vertices.
///
/// `E >= V` certifies a cycle without further work; otherwise a union-find
/// pass confirms that no edge closes a cycle. Self-loops and parallel edges
/// are cycles.
pub fn is_undirected_acyclic(graph: &Graph) -> bool {
    let index = VertexIndex::from_graph(graph);
    let pairs: Vec<(usize, usize)> = graph
        .edges
        .iter()
        .filter(|edge| !edge.directed)
        .filter_map(|edge| index.pair(edge))
        .collect();
    if pairs.len() >= index.len() && !pairs.is_empty() {
        return false;
    }
    let mut parent: Vec<usize> = (0..index.len()).collect();
    for (a, b) in pairs {
        let ra = find(&mut parent, a);
        let rb = find(&mut parent, b);
        if ra == rb {
            return false;
        }
        parent[rb] = ra;
    }
    true
}

pub(crate) fn find(parent: &mut [usize], idx: usize) -> usize {
    let mut root = idx;
    while parent[root] != root {
        root = parent[root];
    }
    let mut current = idx;
    while parent[current] != root {
        let next = parent[current];
        parent[current] = root;
        current = next;
    }
    root
}

pub(crate) fn union(parent: &mut [usize], a: usize, b: usize) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        parent[rb] = ra;
    }
}
