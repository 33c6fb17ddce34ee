//! Immutable graph value types consumed by the inference engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::SpecError;

/// Open attribute mapping attached to vertices and edges.
pub type Attributes = BTreeMap<String, Value>;

/// Typed metadata conventions for a vertex.
///
/// Every field is optional. When a field is unset the policy accessors fall
/// back to the attribute stored under the corresponding policy key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VertexMeta {
    /// Position of the vertex in a total or partial order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    /// Spatial coordinates (2-D or 3-D).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec<f64>>,
    /// Layer identifier for multi-layer graphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer: Option<String>,
    /// Timestamp of the vertex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    /// Whether the vertex is a root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<bool>,
    /// Port label exposed by the vertex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Explicit community assignment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub community: Option<String>,
}

/// Typed metadata conventions for an edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeMeta {
    /// Position of the edge in an edge ordering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    /// Timestamp of the edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    /// Port the edge attaches to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Vector valued weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_vector: Option<Vec<f64>>,
}

/// A graph vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier.
    pub id: String,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Free-form attributes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: Attributes,
    /// Typed metadata conventions.
    #[serde(default)]
    pub meta: VertexMeta,
}

impl Vertex {
    /// Creates a vertex with no label, attributes or metadata.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            attributes: Attributes::new(),
            meta: VertexMeta::default(),
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Inserts an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Replaces the typed metadata.
    pub fn with_meta(mut self, meta: VertexMeta) -> Self {
        self.meta = meta;
        self
    }
}

/// Sign carried by an edge of a signed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sign {
    /// +1
    Positive,
    /// -1
    Negative,
}

impl Sign {
    /// Returns the numeric value of the sign.
    pub fn value(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }
}

/// A binary edge or hyperedge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique identifier.
    pub id: String,
    /// Ordered endpoint vertex identifiers (two for binary edges).
    pub endpoints: Vec<String>,
    /// Whether the endpoint order carries direction.
    #[serde(default)]
    pub directed: bool,
    /// Scalar weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Sign of the edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<Sign>,
    /// Existence probability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Free-form attributes.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: Attributes,
    /// Typed metadata conventions.
    #[serde(default)]
    pub meta: EdgeMeta,
}

impl Edge {
    /// Creates an edge over arbitrary endpoints.
    pub fn hyper<I, S>(id: impl Into<String>, endpoints: I, directed: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            endpoints: endpoints.into_iter().map(Into::into).collect(),
            directed,
            weight: None,
            sign: None,
            probability: None,
            label: None,
            attributes: Attributes::new(),
            meta: EdgeMeta::default(),
        }
    }

    /// Creates an undirected binary edge.
    pub fn undirected(id: impl Into<String>, a: impl Into<String>, b: impl Into<String>) -> Self {
        Self::hyper(id, [a.into(), b.into()], false)
    }

    /// Creates a directed binary edge from `source` to `target`.
    pub fn directed(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::hyper(id, [source.into(), target.into()], true)
    }

    /// Sets the scalar weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets the sign.
    pub fn with_sign(mut self, sign: Sign) -> Self {
        self.sign = Some(sign);
        self
    }

    /// Sets the existence probability.
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = Some(probability);
        self
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Inserts an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Replaces the typed metadata.
    pub fn with_meta(mut self, meta: EdgeMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Number of endpoints.
    pub fn arity(&self) -> usize {
        self.endpoints.len()
    }

    /// Whether the edge has exactly two endpoints.
    pub fn is_binary(&self) -> bool {
        self.endpoints.len() == 2
    }

    /// Whether any endpoint is repeated.
    pub fn is_loop(&self) -> bool {
        self.endpoints
            .iter()
            .enumerate()
            .any(|(idx, a)| self.endpoints[idx + 1..].contains(a))
    }
}

/// A graph: a sequence of vertices plus a sequence of edges.
///
/// Edges may reference identifiers that are missing from `vertices`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Vertex sequence.
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    /// Edge sequence.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph from its vertex and edge sequences.
    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over vertex identifiers in sequence order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices.iter().map(|vertex| vertex.id.as_str())
    }

    /// Parses a graph from its JSON interchange form.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        serde_json::from_str(json).map_err(|err| SpecError::serde("graph-deserialize", err))
    }

    /// Serialises the graph to indented JSON.
    pub fn to_json(&self) -> Result<String, SpecError> {
        serde_json::to_string_pretty(self).map_err(|err| SpecError::serde("graph-serialize", err))
    }
}
