#![deny(missing_docs)]
#![doc = "Axis value types, the axis computation registry and the spec assembler. \
Each axis is a pure function of a graph and compute policy; the assembler \
collects all of them into one immutable `InferredSpec`."]

/// Kind and payload access shared by every axis value.
pub mod axis;
/// One pure function per structural axis.
pub mod registry;
/// Inferred spec snapshot and assembler.
pub mod spec;
/// Tagged value types, one per axis.
pub mod values;

pub use axis::{compare_axis_values, AxisKind, Payload, PayloadValue};
pub use registry::*;
pub use spec::{
    compute_graph_spec, compute_graph_spec_with, diff_specs, Axis, AxisValue, InferredSpec,
};
pub use values::*;
