#![deny(missing_docs)]
#![doc = "Structural graph subroutines: adjacency views, traversal, colouring, \
chordality, bounded exhaustive searches and network statistics."]

mod acyclic;
mod adjacency;
mod bipartite;
mod chordal;
mod connectivity;
mod forbidden;
mod geometry;
mod hamiltonian;
pub mod limits;
mod network;
mod orientation;
mod planarity;
mod symmetry;

pub use acyclic::{is_directed_acyclic, is_undirected_acyclic};
pub use adjacency::{
    is_directed_binary, is_undirected_binary, undirected_adjacency, DirectedView, SimpleGraph,
    VertexIndex,
};
pub use bipartite::{partition_sizes, two_coloring};
pub use chordal::{is_chordal, is_perfect_elimination_ordering, maximum_cardinality_search};
pub use connectivity::{bfs_distances, component_count, connected_components, is_connected};
pub use forbidden::{
    asteroidal_triple_free, claw_free, cograph, induced_star_free, line_graph_heuristic,
};
pub use geometry::realises_unit_disk;
pub use hamiltonian::{hamiltonian_cycle, hamiltonian_path};
pub use network::{
    average_path_length, degree_stats, estimate_power_law, estimate_small_world,
    global_clustering, DegreeStats, SmallWorldEstimate, SCALE_FREE_EXPONENT_RANGE,
    SCALE_FREE_MIN_R_SQUARED, SMALL_WORLD_CLUSTERING_RATIO, SMALL_WORLD_PATH_RATIO,
};
pub use orientation::{comparability, permutation};
pub use planarity::planarity;
pub use symmetry::{self_complementary, strongly_regular, vertex_transitive, SrgParameters};

/// Outcome of a check that may be cut off before reaching an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict<T = ()> {
    /// The property holds, with its witness data.
    Holds(T),
    /// The property was refuted.
    Fails,
    /// The check did not run to completion (size cutoff or unmet precondition).
    Undetermined,
}

impl<T> Verdict<T> {
    /// Whether the property was confirmed.
    pub fn holds(&self) -> bool {
        matches!(self, Verdict::Holds(_))
    }

    /// Whether the property was refuted.
    pub fn fails(&self) -> bool {
        matches!(self, Verdict::Fails)
    }

    /// Maps the witness data.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Verdict<U> {
        match self {
            Verdict::Holds(value) => Verdict::Holds(f(value)),
            Verdict::Fails => Verdict::Fails,
            Verdict::Undetermined => Verdict::Undetermined,
        }
    }
}

impl From<bool> for Verdict {
    fn from(holds: bool) -> Self {
        if holds {
            Verdict::Holds(())
        } else {
            Verdict::Fails
        }
    }
}
