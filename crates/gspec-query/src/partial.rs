//! Partial expectations over an inferred spec.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use gspec_axes::{compare_axis_values, Axis, AxisValue, InferredSpec};
use gspec_core::SpecError;

/// Expected values for a subset of axes.
///
/// Serializes as an object keyed by axis name, for example
/// `{"cycles": {"kind": "acyclic"}}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "BTreeMap<Axis, Value>")]
pub struct PartialSpec {
    values: BTreeMap<Axis, AxisValue>,
}

/// One axis whose computed value differs from the expectation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisMismatch {
    /// Axis compared.
    pub axis: Axis,
    /// Expected value.
    pub expected: AxisValue,
    /// Computed value.
    pub actual: AxisValue,
}

impl PartialSpec {
    /// Empty expectation; matches every spec.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the expectation for the value's axis.
    pub fn with(mut self, value: impl Into<AxisValue>) -> Self {
        self.insert(value);
        self
    }

    /// Adds or replaces an expectation, returning the previous one.
    pub fn insert(&mut self, value: impl Into<AxisValue>) -> Option<AxisValue> {
        let value = value.into();
        self.values.insert(value.axis(), value)
    }

    /// Copies the named axes out of a computed spec.
    pub fn from_spec(spec: &InferredSpec, axes: &[Axis]) -> Self {
        Self {
            values: axes.iter().map(|&axis| (axis, spec.get(axis))).collect(),
        }
    }

    /// Expectation for one axis.
    pub fn get(&self, axis: Axis) -> Option<&AxisValue> {
        self.values.get(&axis)
    }

    /// Number of constrained axes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no axis is constrained.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Expectations in axis order.
    pub fn iter(&self) -> impl Iterator<Item = &AxisValue> + '_ {
        self.values.values()
    }

    /// Whether every expectation matches `spec`.
    pub fn matches(&self, spec: &InferredSpec) -> bool {
        self.values
            .iter()
            .all(|(&axis, expected)| compare_axis_values(&spec.get(axis), expected))
    }

    /// Expectations that `spec` fails, in axis order.
    pub fn mismatches(&self, spec: &InferredSpec) -> Vec<AxisMismatch> {
        self.values
            .iter()
            .filter_map(|(&axis, expected)| {
                let actual = spec.get(axis);
                (!compare_axis_values(&actual, expected)).then(|| AxisMismatch {
                    axis,
                    expected: expected.clone(),
                    actual,
                })
            })
            .collect()
    }

    /// Serialises the expectation to indented JSON.
    pub fn to_json(&self) -> Result<String, SpecError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| SpecError::serde("partial-spec-serialize", err))
    }

    /// Parses an expectation from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        serde_json::from_str(json).map_err(|err| SpecError::serde("partial-spec-deserialize", err))
    }
}

impl Serialize for PartialSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for value in self.values.values() {
            value.serialize_entry(&mut map)?;
        }
        map.end()
    }
}

impl TryFrom<BTreeMap<Axis, Value>> for PartialSpec {
    type Error = SpecError;

    fn try_from(raw: BTreeMap<Axis, Value>) -> Result<Self, SpecError> {
        let values = raw
            .into_iter()
            .map(|(axis, value)| Ok((axis, AxisValue::from_json_value(axis, value)?)))
            .collect::<Result<_, SpecError>>()?;
        Ok(Self { values })
    }
}

impl<V: Into<AxisValue>> FromIterator<V> for PartialSpec {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut spec = Self::new();
        for value in iter {
            spec.insert(value);
        }
        spec
    }
}
