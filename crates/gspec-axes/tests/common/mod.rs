#![allow(dead_code)]

use gspec_core::{Edge, Graph, Vertex};

pub fn vertices(n: usize) -> Vec<Vertex> {
    (0..n).map(|idx| Vertex::new(format!("v{idx}"))).collect()
}

pub fn undirected(n: usize, pairs: &[(usize, usize)]) -> Graph {
    let edges = pairs
        .iter()
        .enumerate()
        .map(|(idx, &(a, b))| Edge::undirected(format!("e{idx}"), format!("v{a}"), format!("v{b}")))
        .collect();
    Graph::new(vertices(n), edges)
}

pub fn directed(n: usize, pairs: &[(usize, usize)]) -> Graph {
    let edges = pairs
        .iter()
        .enumerate()
        .map(|(idx, &(a, b))| Edge::directed(format!("e{idx}"), format!("v{a}"), format!("v{b}")))
        .collect();
    Graph::new(vertices(n), edges)
}

pub fn cycle(n: usize) -> Graph {
    let pairs: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    undirected(n, &pairs)
}

pub fn path(n: usize) -> Graph {
    let pairs: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    undirected(n, &pairs)
}

pub fn complete(n: usize) -> Graph {
    let mut pairs = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            pairs.push((a, b));
        }
    }
    undirected(n, &pairs)
}

pub fn star(leaves: usize) -> Graph {
    let pairs: Vec<_> = (1..=leaves).map(|leaf| (0, leaf)).collect();
    undirected(leaves + 1, &pairs)
}

pub fn complete_bipartite(m: usize, n: usize) -> Graph {
    let mut pairs = Vec::new();
    for a in 0..m {
        for b in m..m + n {
            pairs.push((a, b));
        }
    }
    undirected(m + n, &pairs)
}

pub fn petersen() -> Graph {
    let mut pairs = Vec::new();
    for i in 0..5 {
        pairs.push((i, (i + 1) % 5));
        pairs.push((i, i + 5));
        pairs.push((i + 5, (i + 2) % 5 + 5));
    }
    undirected(10, &pairs)
}

/// `side x side` rook graph: cells sharing a row or a column are adjacent.
pub fn rook_graph(side: usize) -> Graph {
    let mut pairs = Vec::new();
    for a in 0..side * side {
        for b in a + 1..side * side {
            if a / side == b / side || a % side == b % side {
                pairs.push((a, b));
            }
        }
    }
    undirected(side * side, &pairs)
}
