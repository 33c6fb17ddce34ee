use std::collections::{BTreeMap, BTreeSet};

use gspec_core::{Edge, Graph};

/// Returns whether every edge is undirected with exactly two endpoints.
pub fn is_undirected_binary(graph: &Graph) -> bool {
    graph
        .edges
        .iter()
        .all(|edge| !edge.directed && edge.is_binary())
}

/// Returns whether every edge is directed with exactly two endpoints.
pub fn is_directed_binary(graph: &Graph) -> bool {
    graph.edges.iter().all(|edge| edge.directed && edge.is_binary())
}

/// Builds the undirected adjacency mapping of a graph.
///
/// Only binary undirected edges whose endpoints both exist contribute.
/// Self-loops appear once in their vertex's own list; parallel edges appear
/// once per edge.
pub fn undirected_adjacency(graph: &Graph) -> BTreeMap<String, Vec<String>> {
    let mut adjacency: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for vertex in &graph.vertices {
        adjacency.entry(vertex.id.clone()).or_default();
    }
    for edge in graph.edges.iter().filter(|e| !e.directed && e.is_binary()) {
        let (a, b) = (&edge.endpoints[0], &edge.endpoints[1]);
        if !adjacency.contains_key(a) || !adjacency.contains_key(b) {
            continue;
        }
        if a == b {
            if let Some(list) = adjacency.get_mut(a) {
                list.push(a.clone());
            }
            continue;
        }
        if let Some(list) = adjacency.get_mut(a) {
            list.push(b.clone());
        }
        if let Some(list) = adjacency.get_mut(b) {
            list.push(a.clone());
        }
    }
    adjacency
}

/// Dense index over the distinct vertex identifiers of a graph.
///
/// Duplicate identifiers keep their first position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexIndex {
    ids: Vec<String>,
    lookup: BTreeMap<String, usize>,
}

impl VertexIndex {
    /// Indexes the vertices of a graph in sequence order.
    pub fn from_graph(graph: &Graph) -> Self {
        let mut index = Self::default();
        for vertex in &graph.vertices {
            if !index.lookup.contains_key(&vertex.id) {
                index.lookup.insert(vertex.id.clone(), index.ids.len());
                index.ids.push(vertex.id.clone());
            }
        }
        index
    }

    /// Number of distinct vertices.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no vertex is indexed.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Position of an identifier.
    pub fn get(&self, id: &str) -> Option<usize> {
        self.lookup.get(id).copied()
    }

    /// Identifier at a position.
    pub fn id(&self, index: usize) -> &str {
        &self.ids[index]
    }

    /// Endpoint positions of a binary edge whose endpoints both exist.
    pub fn pair(&self, edge: &Edge) -> Option<(usize, usize)> {
        if !edge.is_binary() {
            return None;
        }
        Some((self.get(&edge.endpoints[0])?, self.get(&edge.endpoints[1])?))
    }
}

/// Loop-free, deduplicated undirected view over existing vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleGraph {
    index: VertexIndex,
    neighbours: Vec<BTreeSet<usize>>,
}

impl SimpleGraph {
    /// Builds the view from the binary undirected edges of a graph.
    pub fn from_graph(graph: &Graph) -> Self {
        let index = VertexIndex::from_graph(graph);
        let mut neighbours = vec![BTreeSet::new(); index.len()];
        for edge in graph.edges.iter().filter(|e| !e.directed) {
            if let Some((a, b)) = index.pair(edge) {
                if a != b {
                    neighbours[a].insert(b);
                    neighbours[b].insert(a);
                }
            }
        }
        Self { index, neighbours }
    }

    /// Builds a view over `0..n` from explicit index pairs.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let mut index = VertexIndex::default();
        for idx in 0..n {
            index.lookup.insert(idx.to_string(), idx);
            index.ids.push(idx.to_string());
        }
        let mut neighbours = vec![BTreeSet::new(); n];
        for &(a, b) in edges {
            if a != b && a < n && b < n {
                neighbours[a].insert(b);
                neighbours[b].insert(a);
            }
        }
        Self { index, neighbours }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.neighbours.len()
    }

    /// Whether the view has no vertices.
    pub fn is_empty(&self) -> bool {
        self.neighbours.is_empty()
    }

    /// Vertex index backing the view.
    pub fn index(&self) -> &VertexIndex {
        &self.index
    }

    /// Neighbours of a vertex.
    pub fn neighbours(&self, vertex: usize) -> &BTreeSet<usize> {
        &self.neighbours[vertex]
    }

    /// Degree of a vertex.
    pub fn degree(&self, vertex: usize) -> usize {
        self.neighbours[vertex].len()
    }

    /// Degrees in vertex order.
    pub fn degrees(&self) -> Vec<usize> {
        self.neighbours.iter().map(BTreeSet::len).collect()
    }

    /// Whether two vertices are adjacent.
    pub fn adjacent(&self, a: usize, b: usize) -> bool {
        self.neighbours[a].contains(&b)
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.neighbours.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Edges as `(low, high)` pairs in lexicographic order.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (a, list) in self.neighbours.iter().enumerate() {
            edges.extend(list.range(a + 1..).map(|&b| (a, b)));
        }
        edges
    }

    /// Common regular degree, if every vertex shares one.
    pub fn regular_degree(&self) -> Option<usize> {
        let first = self.neighbours.first()?.len();
        self.neighbours
            .iter()
            .all(|list| list.len() == first)
            .then_some(first)
    }

    /// Edge density `E / (n (n - 1) / 2)`; zero below two vertices.
    pub fn density(&self) -> f64 {
        let n = self.len();
        if n < 2 {
            return 0.0;
        }
        self.edge_count() as f64 / (n * (n - 1) / 2) as f64
    }

    /// Complement over the same vertex index.
    pub fn complement(&self) -> Self {
        let n = self.len();
        let neighbours = (0..n)
            .map(|a| {
                (0..n)
                    .filter(|&b| b != a && !self.neighbours[a].contains(&b))
                    .collect()
            })
            .collect();
        Self {
            index: self.index.clone(),
            neighbours,
        }
    }
}

/// Directed view over binary directed edges between existing vertices.
///
/// Self-loops and parallel arcs are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedView {
    index: VertexIndex,
    successors: Vec<Vec<usize>>,
}

impl DirectedView {
    /// Builds the view from the binary directed edges of a graph.
    pub fn from_graph(graph: &Graph) -> Self {
        let index = VertexIndex::from_graph(graph);
        let mut successors = vec![Vec::new(); index.len()];
        for edge in graph.edges.iter().filter(|e| e.directed) {
            if let Some((source, target)) = index.pair(edge) {
                successors[source].push(target);
            }
        }
        Self { index, successors }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    /// Whether the view has no vertices.
    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Vertex index backing the view.
    pub fn index(&self) -> &VertexIndex {
        &self.index
    }

    /// Out-neighbours of a vertex, one entry per arc.
    pub fn successors(&self, vertex: usize) -> &[usize] {
        &self.successors[vertex]
    }

    /// In-degrees in vertex order.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.len()];
        for list in &self.successors {
            for &target in list {
                degrees[target] += 1;
            }
        }
        degrees
    }

    /// Out-degrees in vertex order.
    pub fn out_degrees(&self) -> Vec<usize> {
        self.successors.iter().map(Vec::len).collect()
    }

    /// Underlying undirected view, dropping orientation and loops.
    pub fn underlying(&self) -> SimpleGraph {
        let mut neighbours = vec![BTreeSet::new(); self.len()];
        for (source, list) in self.successors.iter().enumerate() {
            for &target in list {
                if source != target {
                    neighbours[source].insert(target);
                    neighbours[target].insert(source);
                }
            }
        }
        SimpleGraph {
            index: self.index.clone(),
            neighbours,
        }
    }
}
