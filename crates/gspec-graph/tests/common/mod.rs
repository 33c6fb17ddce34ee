#![allow(dead_code)]

use gspec_core::{Edge, Graph, Vertex};
use gspec_graph::SimpleGraph;

pub fn cycle(n: usize) -> SimpleGraph {
    let edges: Vec<_> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    SimpleGraph::from_edges(n, &edges)
}

pub fn path(n: usize) -> SimpleGraph {
    let edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    SimpleGraph::from_edges(n, &edges)
}

pub fn complete(n: usize) -> SimpleGraph {
    let mut edges = Vec::new();
    for a in 0..n {
        for b in a + 1..n {
            edges.push((a, b));
        }
    }
    SimpleGraph::from_edges(n, &edges)
}

pub fn star(leaves: usize) -> SimpleGraph {
    let edges: Vec<_> = (1..=leaves).map(|leaf| (0, leaf)).collect();
    SimpleGraph::from_edges(leaves + 1, &edges)
}

pub fn complete_bipartite(m: usize, n: usize) -> SimpleGraph {
    let mut edges = Vec::new();
    for a in 0..m {
        for b in m..m + n {
            edges.push((a, b));
        }
    }
    SimpleGraph::from_edges(m + n, &edges)
}

pub fn petersen() -> SimpleGraph {
    let mut edges = Vec::new();
    for i in 0..5 {
        edges.push((i, (i + 1) % 5));
        edges.push((i, i + 5));
        edges.push((i + 5, (i + 2) % 5 + 5));
    }
    SimpleGraph::from_edges(10, &edges)
}

pub fn ring_lattice(n: usize, k: usize) -> SimpleGraph {
    let mut edges = Vec::new();
    for v in 0..n {
        for j in 1..=k / 2 {
            edges.push((v, (v + j) % n));
        }
    }
    SimpleGraph::from_edges(n, &edges)
}

pub fn graph(vertices: &[&str], edges: &[(&str, &str)], directed: bool) -> Graph {
    Graph::new(
        vertices.iter().map(|id| Vertex::new(*id)).collect(),
        edges
            .iter()
            .enumerate()
            .map(|(idx, (a, b))| {
                let id = format!("e{idx}");
                if directed {
                    Edge::directed(id, *a, *b)
                } else {
                    Edge::undirected(id, *a, *b)
                }
            })
            .collect(),
    )
}

/// `side x side` rook graph: cells sharing a row or a column are adjacent.
pub fn rook_graph(side: usize) -> SimpleGraph {
    let mut edges = Vec::new();
    for a in 0..side * side {
        for b in a + 1..side * side {
            if a / side == b / side || a % side == b % side {
                edges.push((a, b));
            }
        }
    }
    SimpleGraph::from_edges(side * side, &edges)
}
