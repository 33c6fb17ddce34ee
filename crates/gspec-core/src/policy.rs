//! Attribute-key conventions used to read optional per-graph metadata.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::SpecError;
use crate::model::{Edge, Vertex};

/// Conventional attribute carrying an explicit community assignment.
pub const COMMUNITY_KEY: &str = "community";

/// Value of an order or time convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stamp {
    /// The value is a finite number.
    Numeric(f64),
    /// The value is present but not numeric.
    Opaque,
}

impl Stamp {
    /// Returns the numeric value when present.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Stamp::Numeric(value) => Some(value),
            Stamp::Opaque => None,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Number(number) => match number.as_f64() {
                Some(v) if v.is_finite() => Some(Stamp::Numeric(v)),
                _ => Some(Stamp::Opaque),
            },
            _ => Some(Stamp::Opaque),
        }
    }
}

/// Names of the attribute keys under which callers store metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputePolicy {
    /// Key holding a vertex's order index.
    #[serde(default = "ComputePolicy::default_vertex_order_key")]
    pub vertex_order_key: String,
    /// Key holding an edge's order index.
    #[serde(default = "ComputePolicy::default_edge_order_key")]
    pub edge_order_key: String,
    /// Key holding a vertex's spatial position.
    #[serde(default = "ComputePolicy::default_position_key")]
    pub position_key: String,
    /// Key holding a vertex's layer identifier.
    #[serde(default = "ComputePolicy::default_layer_key")]
    pub layer_key: String,
    /// Key holding vertex and edge timestamps.
    #[serde(default = "ComputePolicy::default_time_key")]
    pub time_key: String,
    /// Key marking root vertices.
    #[serde(default = "ComputePolicy::default_root_key")]
    pub root_key: String,
    /// Key holding vertex and edge port labels.
    #[serde(default = "ComputePolicy::default_port_key")]
    pub port_key: String,
    /// Key holding an edge's weight vector.
    #[serde(default = "ComputePolicy::default_weight_vector_key")]
    pub weight_vector_key: String,
    /// Key holding an edge's existence probability.
    #[serde(default = "ComputePolicy::default_probability_key")]
    pub probability_key: String,
}

impl ComputePolicy {
    fn default_vertex_order_key() -> String {
        "order".to_string()
    }

    fn default_edge_order_key() -> String {
        "order".to_string()
    }

    fn default_position_key() -> String {
        "position".to_string()
    }

    fn default_layer_key() -> String {
        "layer".to_string()
    }

    fn default_time_key() -> String {
        "time".to_string()
    }

    fn default_root_key() -> String {
        "root".to_string()
    }

    fn default_port_key() -> String {
        "port".to_string()
    }

    fn default_weight_vector_key() -> String {
        "weights".to_string()
    }

    fn default_probability_key() -> String {
        "probability".to_string()
    }

    /// Merges a partial policy over the documented defaults.
    pub fn merged(partial: Option<&PartialPolicy>) -> Self {
        let mut policy = Self::default();
        if let Some(partial) = partial {
            partial.apply(&mut policy);
        }
        policy
    }

    /// Parses a policy document; missing keys take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, SpecError> {
        serde_json::from_str(json).map_err(SpecError::policy_parse)
    }

    /// Order convention of a vertex.
    pub fn vertex_order(&self, vertex: &Vertex) -> Option<Stamp> {
        match vertex.meta.order {
            Some(order) => Some(Stamp::Numeric(order)),
            None => vertex
                .attributes
                .get(&self.vertex_order_key)
                .and_then(Stamp::from_value),
        }
    }

    /// Spatial position of a vertex, as an array or an `{x, y[, z]}` object.
    pub fn vertex_position(&self, vertex: &Vertex) -> Option<Vec<f64>> {
        if let Some(position) = &vertex.meta.position {
            return Some(position.clone());
        }
        match vertex.attributes.get(&self.position_key)? {
            Value::Array(items) => items.iter().map(Value::as_f64).collect(),
            Value::Object(map) => {
                let mut coords = Vec::with_capacity(3);
                for axis in ["x", "y", "z"] {
                    match map.get(axis) {
                        Some(value) => coords.push(value.as_f64()?),
                        None => break,
                    }
                }
                (coords.len() >= 2).then_some(coords)
            }
            _ => None,
        }
    }

    /// Layer identifier of a vertex.
    pub fn vertex_layer(&self, vertex: &Vertex) -> Option<String> {
        match &vertex.meta.layer {
            Some(layer) => Some(layer.clone()),
            None => vertex
                .attributes
                .get(&self.layer_key)
                .and_then(value_to_key),
        }
    }

    /// Time convention of a vertex.
    pub fn vertex_time(&self, vertex: &Vertex) -> Option<Stamp> {
        match vertex.meta.time {
            Some(time) => Some(Stamp::Numeric(time)),
            None => vertex
                .attributes
                .get(&self.time_key)
                .and_then(Stamp::from_value),
        }
    }

    /// Whether the vertex carries a truthy root marker.
    pub fn vertex_is_root(&self, vertex: &Vertex) -> bool {
        match vertex.meta.root {
            Some(root) => root,
            None => vertex
                .attributes
                .get(&self.root_key)
                .map(is_truthy)
                .unwrap_or(false),
        }
    }

    /// Port label of a vertex.
    pub fn vertex_port(&self, vertex: &Vertex) -> Option<String> {
        match &vertex.meta.port {
            Some(port) => Some(port.clone()),
            None => vertex.attributes.get(&self.port_key).and_then(value_to_key),
        }
    }

    /// Explicit community assignment of a vertex.
    pub fn vertex_community(&self, vertex: &Vertex) -> Option<String> {
        match &vertex.meta.community {
            Some(community) => Some(community.clone()),
            None => vertex.attributes.get(COMMUNITY_KEY).and_then(value_to_key),
        }
    }

    /// Order convention of an edge.
    pub fn edge_order(&self, edge: &Edge) -> Option<Stamp> {
        match edge.meta.order {
            Some(order) => Some(Stamp::Numeric(order)),
            None => edge
                .attributes
                .get(&self.edge_order_key)
                .and_then(Stamp::from_value),
        }
    }

    /// Time convention of an edge.
    pub fn edge_time(&self, edge: &Edge) -> Option<Stamp> {
        match edge.meta.time {
            Some(time) => Some(Stamp::Numeric(time)),
            None => edge
                .attributes
                .get(&self.time_key)
                .and_then(Stamp::from_value),
        }
    }

    /// Port label of an edge.
    pub fn edge_port(&self, edge: &Edge) -> Option<String> {
        match &edge.meta.port {
            Some(port) => Some(port.clone()),
            None => edge.attributes.get(&self.port_key).and_then(value_to_key),
        }
    }

    /// Vector weight of an edge; every component must be numeric.
    pub fn edge_weight_vector(&self, edge: &Edge) -> Option<Vec<f64>> {
        if let Some(weights) = &edge.meta.weight_vector {
            return Some(weights.clone());
        }
        match edge.attributes.get(&self.weight_vector_key)? {
            Value::Array(items) => items.iter().map(Value::as_f64).collect(),
            _ => None,
        }
    }

    /// Existence probability of an edge.
    pub fn edge_probability(&self, edge: &Edge) -> Option<f64> {
        edge.probability.or_else(|| {
            edge.attributes
                .get(&self.probability_key)
                .and_then(Value::as_f64)
        })
    }
}

impl Default for ComputePolicy {
    fn default() -> Self {
        Self {
            vertex_order_key: Self::default_vertex_order_key(),
            edge_order_key: Self::default_edge_order_key(),
            position_key: Self::default_position_key(),
            layer_key: Self::default_layer_key(),
            time_key: Self::default_time_key(),
            root_key: Self::default_root_key(),
            port_key: Self::default_port_key(),
            weight_vector_key: Self::default_weight_vector_key(),
            probability_key: Self::default_probability_key(),
        }
    }
}

/// Caller supplied overrides merged over [`ComputePolicy::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialPolicy {
    /// Override for [`ComputePolicy::vertex_order_key`].
    pub vertex_order_key: Option<String>,
    /// Override for [`ComputePolicy::edge_order_key`].
    pub edge_order_key: Option<String>,
    /// Override for [`ComputePolicy::position_key`].
    pub position_key: Option<String>,
    /// Override for [`ComputePolicy::layer_key`].
    pub layer_key: Option<String>,
    /// Override for [`ComputePolicy::time_key`].
    pub time_key: Option<String>,
    /// Override for [`ComputePolicy::root_key`].
    pub root_key: Option<String>,
    /// Override for [`ComputePolicy::port_key`].
    pub port_key: Option<String>,
    /// Override for [`ComputePolicy::weight_vector_key`].
    pub weight_vector_key: Option<String>,
    /// Override for [`ComputePolicy::probability_key`].
    pub probability_key: Option<String>,
}

impl PartialPolicy {
    fn apply(&self, policy: &mut ComputePolicy) {
        let pairs = [
            (&self.vertex_order_key, &mut policy.vertex_order_key),
            (&self.edge_order_key, &mut policy.edge_order_key),
            (&self.position_key, &mut policy.position_key),
            (&self.layer_key, &mut policy.layer_key),
            (&self.time_key, &mut policy.time_key),
            (&self.root_key, &mut policy.root_key),
            (&self.port_key, &mut policy.port_key),
            (&self.weight_vector_key, &mut policy.weight_vector_key),
            (&self.probability_key, &mut policy.probability_key),
        ];
        for (source, target) in pairs {
            if let Some(key) = source {
                *target = key.clone();
            }
        }
    }
}

fn value_to_key(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Loose truthiness of an attribute value: `null`, `false`, zero and the
/// empty string are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|v| v != 0.0).unwrap_or(false),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
