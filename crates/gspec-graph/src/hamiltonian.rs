use tracing::debug;

use crate::adjacency::SimpleGraph;
use crate::connectivity::is_connected;
use crate::limits::HAMILTONIAN_MAX_VERTICES;
use crate::Verdict;

/// Searches for a Hamiltonian cycle by backtracking.
///
/// Graphs with fewer than three vertices have no Hamiltonian cycle. A
/// minimum degree below two or a disconnected graph fails without search.
pub fn hamiltonian_cycle(graph: &SimpleGraph) -> Verdict {
    let n = graph.len();
    if n < 3 {
        return Verdict::Fails;
    }
    if graph.degrees().into_iter().any(|degree| degree < 2) || !is_connected(graph) {
        return Verdict::Fails;
    }
    if n > HAMILTONIAN_MAX_VERTICES {
        debug!(
            vertices = n,
            limit = HAMILTONIAN_MAX_VERTICES,
            "hamiltonian cycle search skipped"
        );
        return Verdict::Undetermined;
    }
    let mut visited = vec![false; n];
    let mut path = Vec::with_capacity(n);
    visited[0] = true;
    path.push(0);
    Verdict::from(extend(graph, &mut path, &mut visited, true))
}

/// Searches for a Hamiltonian path by backtracking from every start vertex.
pub fn hamiltonian_path(graph: &SimpleGraph) -> Verdict {
    let n = graph.len();
    if n == 0 {
        return Verdict::Undetermined;
    }
    if n == 1 {
        return Verdict::Holds(());
    }
    if !is_connected(graph) {
        return Verdict::Fails;
    }
    let endpoints = graph.degrees().into_iter().filter(|&d| d == 1).count();
    if endpoints > 2 {
        return Verdict::Fails;
    }
    if n > HAMILTONIAN_MAX_VERTICES {
        debug!(
            vertices = n,
            limit = HAMILTONIAN_MAX_VERTICES,
            "hamiltonian path search skipped"
        );
        return Verdict::Undetermined;
    }
    let found = (0..n).any(|start| {
        let mut visited = vec![false; n];
        let mut path = Vec::with_capacity(n);
        visited[start] = true;
        path.push(start);
        extend(graph, &mut path, &mut visited, false)
    });
    Verdict::from(found)
}

fn extend(graph: &SimpleGraph, path: &mut Vec<usize>, visited: &mut [bool], closed: bool) -> bool {
    let Some(&last) = path.last() else {
        return false;
    };
    if path.len() == visited.len() {
        return !closed || graph.adjacent(last, path[0]);
    }
    for &next in graph.neighbours(last) {
        if visited[next] {
            continue;
        }
        visited[next] = true;
        path.push(next);
        if extend(graph, path, visited, closed) {
            return true;
        }
        path.pop();
        visited[next] = false;
    }
    false
}
