#![deny(missing_docs)]
#![doc = "Graph model, compute policy and error types shared by the graph spec inference crates."]

pub mod errors;
pub mod model;
pub mod policy;

pub use errors::{ErrorInfo, SpecError};
pub use model::{Attributes, Edge, EdgeMeta, Graph, Sign, Vertex, VertexMeta};
pub use policy::{is_truthy, ComputePolicy, PartialPolicy, Stamp, COMMUNITY_KEY};
