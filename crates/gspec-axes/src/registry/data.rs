use std::collections::BTreeSet;

use gspec_core::{Attributes, Graph};

use crate::values::{EdgeData, SchemaHomogeneity, VertexData};

/// Attributes take priority over labels.
pub fn compute_vertex_data(graph: &Graph) -> VertexData {
    if graph.vertices.iter().any(|v| !v.attributes.is_empty()) {
        VertexData::Attributed
    } else if graph.vertices.iter().any(|v| v.label.is_some()) {
        VertexData::Labelled
    } else {
        VertexData::Unlabelled
    }
}

/// Attributes take priority over labels.
pub fn compute_edge_data(graph: &Graph) -> EdgeData {
    if graph.edges.iter().any(|e| !e.attributes.is_empty()) {
        EdgeData::Attributed
    } else if graph.edges.iter().any(|e| e.label.is_some()) {
        EdgeData::Labelled
    } else {
        EdgeData::Unlabelled
    }
}

/// Homogeneous iff vertices share one attribute key set and edges share one.
pub fn compute_schema_homogeneity(graph: &Graph) -> SchemaHomogeneity {
    let vertices = graph.vertices.iter().map(|v| &v.attributes);
    let edges = graph.edges.iter().map(|e| &e.attributes);
    if single_schema(vertices) && single_schema(edges) {
        SchemaHomogeneity::Homogeneous
    } else {
        SchemaHomogeneity::Heterogeneous
    }
}

fn single_schema<'a>(attributes: impl Iterator<Item = &'a Attributes>) -> bool {
    let schemas: BTreeSet<Vec<&str>> = attributes
        .map(|attrs| attrs.keys().map(String::as_str).collect())
        .collect();
    schemas.len() <= 1
}
