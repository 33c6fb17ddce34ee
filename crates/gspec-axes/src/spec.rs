//! Inferred spec snapshot and its assembler.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::trace;

use gspec_core::{ComputePolicy, ErrorInfo, Graph, PartialPolicy, SpecError};

use crate::axis::{AxisKind, Payload};
use crate::registry::*;
use crate::values::*;

macro_rules! spec_axes {
    ( $( $(#[$doc:meta])* $field:ident => $variant:ident($ty:ty), )+ ) => {
        /// Names one field of [`InferredSpec`].
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum Axis {
            $( $(#[$doc])* $variant, )+
        }

        impl Axis {
            /// Every axis in field order.
            pub const ALL: &'static [Axis] = &[ $( Axis::$variant, )+ ];

            /// Field name of the axis.
            pub fn name(self) -> &'static str {
                match self {
                    $( Axis::$variant => stringify!($field), )+
                }
            }
        }

        /// Value of one axis, tagged by the axis it belongs to.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "axis", content = "value", rename_all = "snake_case")]
        pub enum AxisValue {
            $( $(#[$doc])* $variant($ty), )+
        }

        impl AxisValue {
            /// Axis the value belongs to.
            pub fn axis(&self) -> Axis {
                match self {
                    $( AxisValue::$variant(_) => Axis::$variant, )+
                }
            }

            /// Serialized `kind` tag of the inner value.
            pub fn kind(&self) -> &'static str {
                match self {
                    $( AxisValue::$variant(value) => value.kind(), )+
                }
            }

            /// Integer payload fields of the inner value.
            pub fn payload(&self) -> Payload {
                match self {
                    $( AxisValue::$variant(value) => value.payload(), )+
                }
            }

            /// Writes `axis name => inner value` into a serializer map.
            pub fn serialize_entry<M: SerializeMap>(&self, map: &mut M) -> Result<(), M::Error> {
                match self {
                    $( AxisValue::$variant(value) => map.serialize_entry(&Axis::$variant, value), )+
                }
            }

            /// Decodes the inner value of `axis` from JSON.
            pub fn from_json_value(axis: Axis, value: serde_json::Value) -> Result<Self, SpecError> {
                let decoded = match axis {
                    $(
                        Axis::$variant => serde_json::from_value::<$ty>(value).map(AxisValue::$variant),
                    )+
                };
                decoded.map_err(|err| {
                    SpecError::Serde(
                        ErrorInfo::new("axis-value-deserialize", err.to_string())
                            .with_context("axis", axis.name()),
                    )
                })
            }
        }

        $(
            impl From<$ty> for AxisValue {
                fn from(value: $ty) -> Self {
                    AxisValue::$variant(value)
                }
            }
        )+

        /// Immutable snapshot of every structural axis of one graph.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct InferredSpec {
            $( $(#[$doc])* pub $field: $ty, )+
        }

        impl InferredSpec {
            /// Value of one axis.
            pub fn get(&self, axis: Axis) -> AxisValue {
                match axis {
                    $( Axis::$variant => AxisValue::$variant(self.$field.clone()), )+
                }
            }
        }
    };
}

spec_axes! {
    /// Vertex count.
    vertex_cardinality => VertexCardinality(VertexCardinality),
    /// Identifier distinctness.
    vertex_identity => VertexIdentity(VertexIdentity),
    /// Vertex order convention.
    vertex_ordering => VertexOrdering(VertexOrdering),
    /// Common edge arity.
    edge_arity => EdgeArity(EdgeArity),
    /// Parallel edges.
    edge_multiplicity => EdgeMultiplicity(EdgeMultiplicity),
    /// Reflexive edges.
    self_loops => SelfLoops(SelfLoops),
    /// Edge orientation.
    directionality => Directionality(Directionality),
    /// Edge weights.
    weighting => Weighting(Weighting),
    /// Edge signs.
    signedness => Signedness(Signedness),
    /// Edge probabilities.
    uncertainty => Uncertainty(Uncertainty),
    /// Vertex labels and attributes.
    vertex_data => VertexData(VertexData),
    /// Edge labels and attributes.
    edge_data => EdgeData(EdgeData),
    /// Attribute key set agreement.
    schema_homogeneity => SchemaHomogeneity(SchemaHomogeneity),
    /// Connectivity.
    connectivity => Connectivity(Connectivity),
    /// Cycles.
    cycles => Cycles(Cycles),
    /// Degree pattern.
    degree_constraint => DegreeConstraint(DegreeConstraint),
    /// Completeness.
    completeness => Completeness(Completeness),
    /// Two-colourability.
    partiteness => Partiteness(Partiteness),
    /// Density band.
    density => Density(Density),
    /// Spatial embedding.
    embedding => Embedding(Embedding),
    /// Root markers.
    rooting => Rooting(Rooting),
    /// Timestamps.
    temporal => Temporal(Temporal),
    /// Vertex layers.
    layering => Layering(Layering),
    /// Edge order convention.
    edge_ordering => EdgeOrdering(EdgeOrdering),
    /// Ports.
    ports => Ports(Ports),
    /// Observation status.
    observability => Observability(Observability),
    /// Attached computation.
    operational_semantics => OperationalSemantics(OperationalSemantics),
    /// Edge measure interpretation.
    measure_semantics => MeasureSemantics(MeasureSemantics),
    /// Power-law degrees.
    scale_free => ScaleFree(ScaleFree),
    /// Small-world structure.
    small_world => SmallWorld(SmallWorld),
    /// Community partition.
    community_structure => CommunityStructure(CommunityStructure),
    /// Chordality.
    chordality => Chordality(Chordality),
    /// Planarity.
    planarity => Planarity(Planarity),
    /// Interval graph.
    interval => Interval(Interval),
    /// Comparability graph.
    comparability => Comparability(Comparability),
    /// Permutation graph.
    permutation => Permutation(Permutation),
    /// Unit-disk graph.
    unit_disk => UnitDisk(UnitDisk),
    /// Hamiltonian cycle.
    hamiltonian => Hamiltonian(Hamiltonian),
    /// Hamiltonian path.
    traceable => Traceable(Traceable),
    /// Perfectness.
    perfect => Perfect(Perfect),
    /// Split graph.
    split => Split(Split),
    /// Cograph.
    cograph => Cograph(Cograph),
    /// Threshold graph.
    threshold => Threshold(Threshold),
    /// Line graph.
    line_graph => LineGraph(LineGraph),
    /// Claw-freeness.
    claw_free => ClawFree(ClawFree),
    /// 3-regularity.
    cubic => Cubic(Cubic),
    /// Auto-detected regularity.
    regularity => Regularity(Regularity),
    /// Strong regularity.
    strongly_regular => StronglyRegular(StronglyRegular),
    /// Self-complementarity.
    self_complementary => SelfComplementary(SelfComplementary),
    /// Vertex-transitivity.
    vertex_transitive => VertexTransitive(VertexTransitive),
    /// Complete bipartite shape.
    complete_bipartite => CompleteBipartite(CompleteBipartite),
}

impl InferredSpec {
    /// Every axis value in field order.
    pub fn axes(&self) -> impl Iterator<Item = AxisValue> + '_ {
        Axis::ALL.iter().map(move |&axis| self.get(axis))
    }

    /// Serialises the spec to indented JSON.
    pub fn to_json(&self) -> Result<String, SpecError> {
        serde_json::to_string_pretty(self).map_err(|err| SpecError::serde("spec-serialize", err))
    }

    /// Parses a spec from JSON text.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        serde_json::from_str(json).map_err(|err| SpecError::serde("spec-deserialize", err))
    }

    /// Hex encoded SHA-256 of the compact JSON encoding.
    pub fn canonical_hash(&self) -> Result<String, SpecError> {
        let bytes = serde_json::to_vec(self).map_err(|err| SpecError::serde("spec-hash", err))?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(hex::encode(hasher.finalize()))
    }
}

/// Axes on which two specs differ, in field order.
pub fn diff_specs(a: &InferredSpec, b: &InferredSpec) -> Vec<Axis> {
    Axis::ALL
        .iter()
        .copied()
        .filter(|&axis| a.get(axis) != b.get(axis))
        .collect()
}

/// Merges `policy` over the defaults and assembles the spec.
pub fn compute_graph_spec(
    graph: &Graph,
    policy: Option<&PartialPolicy>,
) -> Result<InferredSpec, SpecError> {
    compute_graph_spec_with(graph, &ComputePolicy::merged(policy))
}

/// Invokes every axis function once.
///
/// Fails only when edges disagree on their arity.
pub fn compute_graph_spec_with(
    graph: &Graph,
    policy: &ComputePolicy,
) -> Result<InferredSpec, SpecError> {
    trace!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "assembling graph spec"
    );
    let split = compute_split(graph);
    let cograph = compute_cograph(graph);
    Ok(InferredSpec {
        vertex_cardinality: compute_vertex_cardinality(graph),
        vertex_identity: compute_vertex_identity(graph),
        vertex_ordering: compute_vertex_ordering(graph, policy),
        edge_arity: compute_edge_arity(graph)?,
        edge_multiplicity: compute_edge_multiplicity(graph),
        self_loops: compute_self_loops(graph),
        directionality: compute_directionality(graph),
        weighting: compute_weighting(graph, policy),
        signedness: compute_signedness(graph),
        uncertainty: compute_uncertainty(graph, policy),
        vertex_data: compute_vertex_data(graph),
        edge_data: compute_edge_data(graph),
        schema_homogeneity: compute_schema_homogeneity(graph),
        connectivity: compute_connectivity(graph),
        cycles: compute_cycles(graph),
        degree_constraint: compute_degree_constraint(graph),
        completeness: compute_completeness(graph),
        partiteness: compute_partiteness(graph),
        density: compute_density(graph),
        embedding: compute_embedding(graph, policy),
        rooting: compute_rooting(graph, policy),
        temporal: compute_temporal(graph, policy),
        layering: compute_layering(graph, policy),
        edge_ordering: compute_edge_ordering(graph, policy),
        ports: compute_ports(graph, policy),
        observability: compute_observability(graph),
        operational_semantics: compute_operational_semantics(graph),
        measure_semantics: compute_measure_semantics(graph),
        scale_free: compute_scale_free(graph),
        small_world: compute_small_world(graph),
        community_structure: compute_community_structure(graph, policy),
        chordality: compute_chordality(graph),
        planarity: compute_planarity(graph),
        interval: compute_interval(graph),
        comparability: compute_comparability(graph),
        permutation: compute_permutation(graph),
        unit_disk: compute_unit_disk(graph, policy),
        hamiltonian: compute_hamiltonian(graph),
        traceable: compute_traceable(graph),
        perfect: compute_perfect(graph),
        split,
        cograph,
        threshold: threshold_from(split, cograph),
        line_graph: compute_line_graph(graph),
        claw_free: compute_claw_free(graph),
        cubic: compute_cubic(graph),
        regularity: compute_regularity(graph),
        strongly_regular: compute_strongly_regular(graph),
        self_complementary: compute_self_complementary(graph),
        vertex_transitive: compute_vertex_transitive(graph),
        complete_bipartite: compute_complete_bipartite(graph),
    })
}
