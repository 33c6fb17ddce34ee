//! Kind and payload access shared by every axis value type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::spec::AxisValue;

/// Integer payload field of an axis value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PayloadValue {
    /// A single count, degree, dimension or size.
    Integer(usize),
    /// An ordered sequence such as a degree sequence.
    Sequence(Vec<usize>),
}

/// Integer payload fields keyed by field name.
pub type Payload = BTreeMap<&'static str, PayloadValue>;

/// Discriminator and matchable payload of a tagged axis value.
pub trait AxisKind {
    /// Serialized `kind` tag of the value.
    fn kind(&self) -> &'static str;

    /// Integer payload fields compared by [`compare_axis_values`].
    ///
    /// Float payloads (exponents, clustering, path lengths) are descriptive
    /// and never listed.
    fn payload(&self) -> Payload {
        Payload::new()
    }
}

/// Field-aware equality: same axis, same kind, then equal integer payloads.
pub fn compare_axis_values(a: &AxisValue, b: &AxisValue) -> bool {
    a.axis() == b.axis() && a.kind() == b.kind() && a.payload() == b.payload()
}

pub(crate) fn integer(name: &'static str, value: usize) -> (&'static str, PayloadValue) {
    (name, PayloadValue::Integer(value))
}
