//! Tagged value types, one per structural axis.
//!
//! Every type serializes as an internally tagged object whose `kind` field is
//! the snake_case variant name, with payload fields alongside.

use serde::{Deserialize, Serialize};

use crate::axis::{integer, AxisKind, Payload, PayloadValue};

macro_rules! unit_axis {
    (
        $(#[$doc:meta])*
        $name:ident {
            $( $(#[$vdoc:meta])* $variant:ident => $kind:tt ),+ $(,)?
        }
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(tag = "kind")]
        pub enum $name {
            $(
                $(#[$vdoc])*
                #[serde(rename = $kind)]
                $variant,
            )+
        }

        impl AxisKind for $name {
            fn kind(&self) -> &'static str {
                match self {
                    $( $name::$variant => $kind, )+
                }
            }
        }
    };
}

/// Number of vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VertexCardinality {
    /// A finite vertex set.
    Finite {
        /// Vertex count.
        count: usize,
    },
}

impl AxisKind for VertexCardinality {
    fn kind(&self) -> &'static str {
        "finite"
    }

    fn payload(&self) -> Payload {
        match self {
            VertexCardinality::Finite { count } => Payload::from([integer("count", *count)]),
        }
    }
}

unit_axis! {
    /// Whether vertex identifiers tell vertices apart.
    VertexIdentity {
        /// Identifiers are pairwise distinct.
        Distinguishable => "distinguishable",
        /// Some identifier is shared by several vertices.
        Indistinguishable => "indistinguishable",
    }
}

unit_axis! {
    /// Ordering carried by the vertex order convention.
    VertexOrdering {
        /// No vertex carries an order.
        Unordered => "unordered",
        /// Every vertex carries a distinct numeric order.
        TotalOrder => "total_order",
        /// Orders are partial, tied or non-numeric.
        PartialOrder => "partial_order",
    }
}

/// Number of endpoints shared by every edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EdgeArity {
    /// Two endpoints per edge.
    Binary,
    /// `k` endpoints per edge, `k != 2`.
    KAry {
        /// Common arity.
        k: usize,
    },
}

impl AxisKind for EdgeArity {
    fn kind(&self) -> &'static str {
        match self {
            EdgeArity::Binary => "binary",
            EdgeArity::KAry { .. } => "k_ary",
        }
    }

    fn payload(&self) -> Payload {
        match self {
            EdgeArity::Binary => Payload::new(),
            EdgeArity::KAry { k } => Payload::from([integer("k", *k)]),
        }
    }
}

unit_axis! {
    /// Whether parallel edges occur.
    EdgeMultiplicity {
        /// At most one edge per endpoint key.
        Simple => "simple",
        /// Some endpoint key repeats.
        Multi => "multi",
    }
}

unit_axis! {
    /// Whether some edge repeats an endpoint.
    SelfLoops {
        /// At least one reflexive edge is present.
        Allowed => "allowed",
        /// No reflexive edge is present.
        Disallowed => "disallowed",
    }
}

unit_axis! {
    /// Orientation of the edge set.
    Directionality {
        /// Every edge is undirected.
        Undirected => "undirected",
        /// Every edge is directed with no stronger pattern.
        Directed => "directed",
        /// Directed and undirected edges are mixed.
        Mixed => "mixed",
        /// Every directed arc is matched by its reverse.
        Bidirected => "bidirected",
        /// No arc has a reverse and every vertex is a pure source or sink.
        Antidirected => "antidirected",
    }
}

/// Weight carried by the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Weighting {
    /// Some edge carries no weight.
    Unweighted,
    /// Every edge carries a scalar weight.
    WeightedNumeric,
    /// Every edge carries a weight vector of one dimension.
    WeightedVector {
        /// Common vector length.
        dimension: usize,
    },
}

impl AxisKind for Weighting {
    fn kind(&self) -> &'static str {
        match self {
            Weighting::Unweighted => "unweighted",
            Weighting::WeightedNumeric => "weighted_numeric",
            Weighting::WeightedVector { .. } => "weighted_vector",
        }
    }

    fn payload(&self) -> Payload {
        match self {
            Weighting::WeightedVector { dimension } => {
                Payload::from([integer("dimension", *dimension)])
            }
            _ => Payload::new(),
        }
    }
}

unit_axis! {
    /// Whether edges carry signs.
    Signedness {
        /// No edge carries a sign.
        Unsigned => "unsigned",
        /// Some edge carries a sign.
        Signed => "signed",
    }
}

unit_axis! {
    /// Whether edge existence is uncertain.
    Uncertainty {
        /// No edge carries a probability.
        Deterministic => "deterministic",
        /// Some edge carries a probability.
        Probabilistic => "probabilistic",
    }
}

unit_axis! {
    /// Data carried by vertices.
    VertexData {
        /// Neither labels nor attributes.
        Unlabelled => "unlabelled",
        /// Labels only.
        Labelled => "labelled",
        /// Attributes, with or without labels.
        Attributed => "attributed",
    }
}

unit_axis! {
    /// Data carried by edges.
    EdgeData {
        /// Neither labels nor attributes.
        Unlabelled => "unlabelled",
        /// Labels only.
        Labelled => "labelled",
        /// Attributes, with or without labels.
        Attributed => "attributed",
    }
}

unit_axis! {
    /// Whether attribute key sets agree.
    SchemaHomogeneity {
        /// All vertices share one key set and all edges share one key set.
        Homogeneous => "homogeneous",
        /// Key sets differ.
        Heterogeneous => "heterogeneous",
    }
}

unit_axis! {
    /// Connectivity of an undirected binary graph.
    Connectivity {
        /// Every vertex is reachable from every other.
        Connected => "connected",
        /// Disconnected or not undirected binary.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// Presence of cycles.
    Cycles {
        /// No cycle exists.
        Acyclic => "acyclic",
        /// A cycle exists or acyclicity was not established.
        CyclesAllowed => "cycles_allowed",
    }
}

/// Degree pattern of an undirected binary graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DegreeConstraint {
    /// Not applicable to this graph.
    Unconstrained,
    /// Every vertex has the same degree.
    Regular {
        /// Common degree.
        degree: usize,
    },
    /// Degrees differ.
    DegreeSequence {
        /// Degrees in non-increasing order.
        sequence: Vec<usize>,
    },
}

impl AxisKind for DegreeConstraint {
    fn kind(&self) -> &'static str {
        match self {
            DegreeConstraint::Unconstrained => "unconstrained",
            DegreeConstraint::Regular { .. } => "regular",
            DegreeConstraint::DegreeSequence { .. } => "degree_sequence",
        }
    }

    fn payload(&self) -> Payload {
        match self {
            DegreeConstraint::Unconstrained => Payload::new(),
            DegreeConstraint::Regular { degree } => Payload::from([integer("degree", *degree)]),
            DegreeConstraint::DegreeSequence { sequence } => {
                Payload::from([("sequence", PayloadValue::Sequence(sequence.clone()))])
            }
        }
    }
}

unit_axis! {
    /// Whether every possible edge is present.
    Completeness {
        /// Every pair is joined (every ordered pair when directed).
        Complete => "complete",
        /// Some pair is missing.
        Incomplete => "incomplete",
    }
}

unit_axis! {
    /// Two-colourability.
    Partiteness {
        /// Properly two-colourable.
        Bipartite => "bipartite",
        /// Not shown to be bipartite.
        Unrestricted => "unrestricted",
    }
}

unit_axis! {
    /// Edge density band of an undirected binary graph.
    Density {
        /// Density at most 0.1.
        Sparse => "sparse",
        /// Density at least 0.9.
        Dense => "dense",
        /// Between the bands or not applicable.
        Unconstrained => "unconstrained",
    }
}

/// Spatial embedding read from vertex positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Embedding {
    /// Some vertex has no usable position.
    Abstract,
    /// Every vertex has a position of one dimension.
    Spatial {
        /// 2 or 3.
        dimension: usize,
    },
}

impl AxisKind for Embedding {
    fn kind(&self) -> &'static str {
        match self {
            Embedding::Abstract => "abstract",
            Embedding::Spatial { .. } => "spatial",
        }
    }

    fn payload(&self) -> Payload {
        match self {
            Embedding::Abstract => Payload::new(),
            Embedding::Spatial { dimension } => Payload::from([integer("dimension", *dimension)]),
        }
    }
}

unit_axis! {
    /// Number of root-marked vertices.
    Rooting {
        /// No root.
        Unrooted => "unrooted",
        /// Exactly one root.
        Rooted => "rooted",
        /// Several roots.
        MultiRooted => "multi_rooted",
    }
}

unit_axis! {
    /// Time conventions on vertices and edges.
    Temporal {
        /// No timestamps.
        Static => "static",
        /// Only vertices are timestamped.
        VertexTemporal => "vertex_temporal",
        /// Edges are timestamped.
        EdgeTemporal => "edge_temporal",
        /// Vertices and edges carry numeric timestamps.
        TimeOrdered => "time_ordered",
    }
}

/// Number of distinct vertex layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layering {
    /// At most one layer.
    SingleLayer,
    /// Two or more layers.
    MultiLayer {
        /// Distinct layer count.
        layers: usize,
    },
}

impl AxisKind for Layering {
    fn kind(&self) -> &'static str {
        match self {
            Layering::SingleLayer => "single_layer",
            Layering::MultiLayer { .. } => "multi_layer",
        }
    }

    fn payload(&self) -> Payload {
        match self {
            Layering::SingleLayer => Payload::new(),
            Layering::MultiLayer { layers } => Payload::from([integer("layers", *layers)]),
        }
    }
}

unit_axis! {
    /// Whether edges carry an order.
    EdgeOrdering {
        /// Some edge has no order.
        Unordered => "unordered",
        /// Every edge has an order.
        Ordered => "ordered",
    }
}

unit_axis! {
    /// Whether ports are declared.
    Ports {
        /// No vertex or edge names a port.
        NoPorts => "no_ports",
        /// Some vertex or edge names a port.
        Ported => "ported",
    }
}

unit_axis! {
    /// Observation status of the graph elements.
    Observability {
        /// Everything is observed.
        FullySpecified => "fully_specified",
        /// Some element is marked unobserved.
        PartiallyObserved => "partially_observed",
        /// Some element is marked latent.
        Latent => "latent",
    }
}

unit_axis! {
    /// Computational meaning attached to the elements.
    OperationalSemantics {
        /// Pure structure.
        StructuralOnly => "structural_only",
        /// Elements name functions.
        Annotated => "annotated",
        /// Elements carry executable code.
        Executable => "executable",
    }
}

unit_axis! {
    /// Interpretation of edge quantities.
    MeasureSemantics {
        /// No measure attached.
        None => "none",
        /// Generic weights.
        Metric => "metric",
        /// Costs to be minimised.
        Cost => "cost",
        /// Utilities to be maximised.
        Utility => "utility",
    }
}

/// Power-law degree distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScaleFree {
    /// Degrees follow a power law.
    ScaleFree {
        /// Estimated exponent.
        exponent: f64,
    },
    /// No power law was established.
    Unconstrained,
}

impl AxisKind for ScaleFree {
    fn kind(&self) -> &'static str {
        match self {
            ScaleFree::ScaleFree { .. } => "scale_free",
            ScaleFree::Unconstrained => "unconstrained",
        }
    }
}

/// Small-world structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SmallWorld {
    /// High clustering with short paths.
    SmallWorld {
        /// Global clustering coefficient.
        clustering: f64,
        /// Mean shortest path length.
        path_length: f64,
    },
    /// Not established.
    Unconstrained,
}

impl AxisKind for SmallWorld {
    fn kind(&self) -> &'static str {
        match self {
            SmallWorld::SmallWorld { .. } => "small_world",
            SmallWorld::Unconstrained => "unconstrained",
        }
    }
}

/// Community partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommunityStructure {
    /// Vertices split into several communities.
    Modular {
        /// Community count.
        communities: usize,
    },
    /// No partition was found.
    Unconstrained,
}

impl AxisKind for CommunityStructure {
    fn kind(&self) -> &'static str {
        match self {
            CommunityStructure::Modular { .. } => "modular",
            CommunityStructure::Unconstrained => "unconstrained",
        }
    }

    fn payload(&self) -> Payload {
        match self {
            CommunityStructure::Modular { communities } => {
                Payload::from([integer("communities", *communities)])
            }
            CommunityStructure::Unconstrained => Payload::new(),
        }
    }
}

unit_axis! {
    /// Every cycle of length four or more has a chord.
    Chordality {
        /// Chordal.
        Chordal => "chordal",
        /// Has a chordless cycle.
        NotChordal => "not_chordal",
        /// Not undirected binary.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// Planar embeddability.
    Planarity {
        /// Certified planar.
        Planar => "planar",
        /// Violates an Euler bound.
        NotPlanar => "not_planar",
        /// Neither certified nor refuted.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// Intersection graph of intervals on a line.
    Interval {
        /// Chordal and asteroidal-triple-free.
        Interval => "interval",
        /// Refuted.
        NotInterval => "not_interval",
        /// Undecided.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// Transitive orientability.
    Comparability {
        /// Admits a transitive orientation.
        Comparability => "comparability",
        /// Admits none.
        NotComparability => "not_comparability",
        /// Undecided.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// Graph and complement both transitively orientable.
    Permutation {
        /// Permutation graph.
        Permutation => "permutation",
        /// Refuted.
        NotPermutation => "not_permutation",
        /// Undecided.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// Intersection graph of equal disks in the plane.
    UnitDisk {
        /// The supplied positions realise the graph.
        UnitDisk => "unit_disk",
        /// Contains an induced `K1,6`.
        NotUnitDisk => "not_unit_disk",
        /// Undecided.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// Spanning cycle.
    Hamiltonian {
        /// A Hamiltonian cycle exists.
        Hamiltonian => "hamiltonian",
        /// None exists.
        NotHamiltonian => "not_hamiltonian",
        /// Undecided.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// Spanning path.
    Traceable {
        /// A Hamiltonian path exists.
        Traceable => "traceable",
        /// None exists.
        NotTraceable => "not_traceable",
        /// Undecided.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// Perfectness, certified through chordality of the graph or its complement.
    Perfect {
        /// Certified perfect.
        Perfect => "perfect",
        /// Not certified.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// Vertex set splits into a clique and an independent set.
    Split {
        /// Split graph.
        Split => "split",
        /// Refuted.
        NotSplit => "not_split",
        /// Undecided.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// No induced path on four vertices.
    Cograph {
        /// Cograph.
        Cograph => "cograph",
        /// Contains an induced P4.
        NotCograph => "not_cograph",
        /// Undecided.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// Split and cograph.
    Threshold {
        /// Threshold graph.
        Threshold => "threshold",
        /// Refuted.
        NotThreshold => "not_threshold",
        /// Undecided.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// Line graph of some graph.
    LineGraph {
        /// Passes the local line-graph conditions.
        LineGraph => "line_graph",
        /// Fails them.
        NotLineGraph => "not_line_graph",
        /// Undecided.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// No induced `K1,3`.
    ClawFree {
        /// Claw-free.
        ClawFree => "claw_free",
        /// Contains a claw.
        NotClawFree => "not_claw_free",
        /// Undecided.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// 3-regularity.
    Cubic {
        /// Every degree is three.
        Cubic => "cubic",
        /// Otherwise.
        NotCubic => "not_cubic",
    }
}

/// Auto-detected regularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Regularity {
    /// Every vertex has the same degree.
    Regular {
        /// Common degree.
        degree: usize,
    },
    /// Degrees differ.
    Irregular,
    /// Not undirected binary, or empty.
    Unconstrained,
}

impl AxisKind for Regularity {
    fn kind(&self) -> &'static str {
        match self {
            Regularity::Regular { .. } => "regular",
            Regularity::Irregular => "irregular",
            Regularity::Unconstrained => "unconstrained",
        }
    }

    fn payload(&self) -> Payload {
        match self {
            Regularity::Regular { degree } => Payload::from([integer("degree", *degree)]),
            _ => Payload::new(),
        }
    }
}

/// Regularity of a caller-chosen degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KRegular {
    /// Every degree equals `k`.
    KRegular {
        /// Requested degree.
        k: usize,
    },
    /// Otherwise.
    NotKRegular,
}

impl AxisKind for KRegular {
    fn kind(&self) -> &'static str {
        match self {
            KRegular::KRegular { .. } => "k_regular",
            KRegular::NotKRegular => "not_k_regular",
        }
    }

    fn payload(&self) -> Payload {
        match self {
            KRegular::KRegular { k } => Payload::from([integer("k", *k)]),
            KRegular::NotKRegular => Payload::new(),
        }
    }
}

/// Strong regularity with parameters `(k, lambda, mu)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StronglyRegular {
    /// Confirmed over every pair.
    StronglyRegular {
        /// Common degree.
        k: usize,
        /// Common neighbours of adjacent pairs.
        lambda: usize,
        /// Common neighbours of non-adjacent pairs.
        mu: usize,
    },
    /// Refuted.
    NotStronglyRegular,
    /// Undecided.
    Unconstrained,
}

impl AxisKind for StronglyRegular {
    fn kind(&self) -> &'static str {
        match self {
            StronglyRegular::StronglyRegular { .. } => "strongly_regular",
            StronglyRegular::NotStronglyRegular => "not_strongly_regular",
            StronglyRegular::Unconstrained => "unconstrained",
        }
    }

    fn payload(&self) -> Payload {
        match self {
            StronglyRegular::StronglyRegular { k, lambda, mu } => Payload::from([
                integer("k", *k),
                integer("lambda", *lambda),
                integer("mu", *mu),
            ]),
            _ => Payload::new(),
        }
    }
}

unit_axis! {
    /// Isomorphic to its complement.
    SelfComplementary {
        /// Confirmed.
        SelfComplementary => "self_complementary",
        /// Refuted.
        NotSelfComplementary => "not_self_complementary",
        /// Undecided.
        Unconstrained => "unconstrained",
    }
}

unit_axis! {
    /// Automorphism group acts transitively on vertices.
    VertexTransitive {
        /// Confirmed.
        VertexTransitive => "vertex_transitive",
        /// Refuted.
        NotVertexTransitive => "not_vertex_transitive",
        /// Undecided.
        Unconstrained => "unconstrained",
    }
}

/// Complete bipartite graph `K_{m,n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompleteBipartite {
    /// Every cross pair is joined.
    CompleteBipartite {
        /// Smaller side.
        m: usize,
        /// Larger side.
        n: usize,
    },
    /// Otherwise.
    NotCompleteBipartite,
}

impl AxisKind for CompleteBipartite {
    fn kind(&self) -> &'static str {
        match self {
            CompleteBipartite::CompleteBipartite { .. } => "complete_bipartite",
            CompleteBipartite::NotCompleteBipartite => "not_complete_bipartite",
        }
    }

    fn payload(&self) -> Payload {
        match self {
            CompleteBipartite::CompleteBipartite { m, n } => {
                Payload::from([integer("m", *m), integer("n", *n)])
            }
            CompleteBipartite::NotCompleteBipartite => Payload::new(),
        }
    }
}
