#![deny(missing_docs)]
#![doc = "Composable predicates over inferred graph specs, and a library of \
named graph classes built on them."]

pub mod library;
pub mod partial;
pub mod predicate;

pub use gspec_axes::{compare_axis_values, Axis, AxisValue, InferredSpec};
pub use library::*;
pub use partial::{AxisMismatch, PartialSpec};
pub use predicate::{axis_equals, axis_kind_is, has_graph_spec, spec_predicate, Predicate};
