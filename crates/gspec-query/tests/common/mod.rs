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

/// Each vertex joined to its `k / 2` nearest neighbours on either side.
pub fn ring_lattice(n: usize, k: usize) -> Graph {
    let mut pairs = Vec::new();
    for i in 0..n {
        for step in 1..=k / 2 {
            pairs.push((i, (i + step) % n));
        }
    }
    undirected(n, &pairs)
}

/// One binary edge and one ternary hyperedge.
pub fn mixed_arity() -> Graph {
    Graph::new(
        vertices(3),
        vec![
            Edge::undirected("e0", "v0", "v1"),
            Edge::hyper("e1", ["v0", "v1", "v2"], false),
        ],
    )
}
