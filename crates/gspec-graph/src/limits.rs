//! Vertex-count cutoffs for the superlinear searches.
//!
//! Above each cutoff the corresponding check reports
//! [`Verdict::Undetermined`](crate::Verdict::Undetermined) instead of running
//! unbounded work.

/// Largest graph searched for Hamiltonian cycles and paths.
pub const HAMILTONIAN_MAX_VERTICES: usize = 10;

/// Largest graph confirmed strongly-regular, self-complementary or
/// vertex-transitive after the cheap necessary conditions pass.
pub const SYMMETRY_MAX_VERTICES: usize = 8;

/// Largest graph scanned for an induced P4 over all 4-subsets.
pub const COGRAPH_MAX_VERTICES: usize = 30;

/// Largest graph scanned for an induced claw.
pub const CLAW_MAX_VERTICES: usize = 64;

/// Largest graph scanned for an induced `K1,6`, the unit-disk obstruction.
pub const UNIT_DISK_MAX_VERTICES: usize = 48;

/// Largest graph scanned for asteroidal triples.
pub const INTERVAL_MAX_VERTICES: usize = 30;

/// Largest graph tested for a transitive orientation.
pub const COMPARABILITY_MAX_VERTICES: usize = 128;

/// Largest graph whose complement is materialised.
pub const COMPLEMENT_MAX_VERTICES: usize = 512;

/// Minimum vertex count before a degree distribution is fitted.
pub const SCALE_FREE_MIN_VERTICES: usize = 10;

/// Minimum number of non-isolated vertices in a degree distribution fit.
pub const SCALE_FREE_MIN_OBSERVATIONS: usize = 5;

/// Minimum vertex count before small-world statistics are compared.
pub const SMALL_WORLD_MIN_VERTICES: usize = 10;
