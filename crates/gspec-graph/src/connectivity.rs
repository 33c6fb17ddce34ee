use std::collections::VecDeque;

use crate::adjacency::SimpleGraph;

/// Returns whether every vertex is reachable from the first one.
///
/// The empty graph counts as connected.
pub fn is_connected(graph: &SimpleGraph) -> bool {
    if graph.is_empty() {
        return true;
    }
    let mut visited = vec![false; graph.len()];
    let mut stack = vec![0usize];
    visited[0] = true;
    let mut reached = 1;
    while let Some(vertex) = stack.pop() {
        for &next in graph.neighbours(vertex) {
            if !visited[next] {
                visited[next] = true;
                reached += 1;
                stack.push(next);
            }
        }
    }
    reached == graph.len()
}

/// Labels each vertex with the index of its connected component.
///
/// Components are numbered in order of their lowest vertex.
pub fn connected_components(graph: &SimpleGraph) -> Vec<usize> {
    let mut labels = vec![usize::MAX; graph.len()];
    let mut next_label = 0;
    for start in 0..graph.len() {
        if labels[start] != usize::MAX {
            continue;
        }
        labels[start] = next_label;
        let mut stack = vec![start];
        while let Some(vertex) = stack.pop() {
            for &next in graph.neighbours(vertex) {
                if labels[next] == usize::MAX {
                    labels[next] = next_label;
                    stack.push(next);
                }
            }
        }
        next_label += 1;
    }
    labels
}

/// Number of connected components.
pub fn component_count(graph: &SimpleGraph) -> usize {
    connected_components(graph)
        .into_iter()
        .max()
        .map(|label| label + 1)
        .unwrap_or(0)
}

/// Breadth-first hop distances from `source`; `None` marks unreachable vertices.
pub fn bfs_distances(graph: &SimpleGraph, source: usize) -> Vec<Option<usize>> {
    let mut distances = vec![None; graph.len()];
    distances[source] = Some(0);
    let mut queue = VecDeque::from([source]);
    while let Some(vertex) = queue.pop_front() {
        let next_distance = distances[vertex].map(|d| d + 1);
        for &next in graph.neighbours(vertex) {
            if distances[next].is_none() {
                distances[next] = next_distance;
                queue.push_back(next);
            }
        }
    }
    distances
}
