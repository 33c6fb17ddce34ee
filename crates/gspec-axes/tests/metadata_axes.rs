mod common;

use gspec_axes::{
    compute_community_structure, compute_directionality, compute_edge_multiplicity,
    compute_edge_ordering, compute_embedding, compute_graph_spec, compute_layering,
    compute_measure_semantics, compute_observability, compute_operational_semantics,
    compute_ports, compute_rooting, compute_schema_homogeneity, compute_self_loops,
    compute_temporal, compute_uncertainty, compute_unit_disk, compute_vertex_data,
    compute_vertex_identity, compute_vertex_ordering, compute_weighting, CommunityStructure,
    Directionality, EdgeMultiplicity, EdgeOrdering, Embedding, Layering, MeasureSemantics,
    Observability, OperationalSemantics, Ports, Rooting, SchemaHomogeneity, SelfLoops, Temporal,
    Uncertainty, UnitDisk, VertexData, VertexIdentity, VertexOrdering, Weighting,
};
use gspec_core::{
    ComputePolicy, Edge, EdgeMeta, Graph, PartialPolicy, Sign, SpecError, Vertex, VertexMeta,
};
use serde_json::json;

#[test]
fn vertex_ordering_follows_the_order_convention() {
    let policy = ComputePolicy::default();
    let mut graph = common::path(3);
    assert_eq!(compute_vertex_ordering(&graph, &policy), VertexOrdering::Unordered);

    for (idx, vertex) in graph.vertices.iter_mut().enumerate() {
        vertex.attributes.insert("order".into(), json!(idx));
    }
    assert_eq!(compute_vertex_ordering(&graph, &policy), VertexOrdering::TotalOrder);

    graph.vertices[2].attributes.insert("order".into(), json!(0));
    assert_eq!(compute_vertex_ordering(&graph, &policy), VertexOrdering::PartialOrder);

    graph.vertices[2].attributes.remove("order");
    assert_eq!(compute_vertex_ordering(&graph, &policy), VertexOrdering::PartialOrder);
}

#[test]
fn duplicate_identifiers_are_indistinguishable() {
    let graph = Graph::new(vec![Vertex::new("a"), Vertex::new("a")], vec![]);
    assert_eq!(compute_vertex_identity(&graph), VertexIdentity::Indistinguishable);
    assert_eq!(
        compute_vertex_identity(&common::path(2)),
        VertexIdentity::Distinguishable
    );
}

#[test]
fn multiplicity_keys_respect_direction() {
    let antiparallel = common::directed(2, &[(0, 1), (1, 0)]);
    assert_eq!(compute_edge_multiplicity(&antiparallel), EdgeMultiplicity::Simple);
    let parallel = common::undirected(2, &[(0, 1), (1, 0)]);
    assert_eq!(compute_edge_multiplicity(&parallel), EdgeMultiplicity::Multi);
    assert_eq!(compute_self_loops(&parallel), SelfLoops::Disallowed);
    let looped = common::undirected(1, &[(0, 0)]);
    assert_eq!(compute_self_loops(&looped), SelfLoops::Allowed);
}

#[test]
fn directionality_patterns() {
    assert_eq!(
        compute_directionality(&common::path(3)),
        Directionality::Undirected
    );
    let bidirected = common::directed(3, &[(0, 1), (1, 0), (1, 2), (2, 1)]);
    assert_eq!(compute_directionality(&bidirected), Directionality::Bidirected);
    let antidirected = common::directed(4, &[(0, 1), (0, 2), (3, 2)]);
    assert_eq!(compute_directionality(&antidirected), Directionality::Antidirected);
    let chain = common::directed(3, &[(0, 1), (1, 2)]);
    assert_eq!(compute_directionality(&chain), Directionality::Antidirected);
    let partly_reversed = common::directed(3, &[(0, 1), (1, 0), (1, 2)]);
    assert_eq!(compute_directionality(&partly_reversed), Directionality::Directed);
    let looped = common::directed(2, &[(0, 1), (1, 1)]);
    assert_eq!(compute_directionality(&looped), Directionality::Directed);

    let mut mixed = common::path(3);
    mixed.edges.push(Edge::directed("d", "v0", "v2"));
    assert_eq!(compute_directionality(&mixed), Directionality::Mixed);
}

#[test]
fn weighting_signs_and_probabilities() {
    let policy = ComputePolicy::default();
    let mut graph = common::path(3);
    assert_eq!(compute_weighting(&graph, &policy), Weighting::Unweighted);

    for edge in &mut graph.edges {
        edge.weight = Some(1.5);
    }
    assert_eq!(compute_weighting(&graph, &policy), Weighting::WeightedNumeric);

    for edge in &mut graph.edges {
        edge.meta = EdgeMeta {
            weight_vector: Some(vec![1.0, 2.0]),
            ..EdgeMeta::default()
        };
    }
    assert_eq!(
        compute_weighting(&graph, &policy),
        Weighting::WeightedVector { dimension: 2 }
    );

    let signed = Graph::new(
        common::vertices(2),
        vec![Edge::undirected("e", "v0", "v1").with_sign(Sign::Negative)],
    );
    assert_eq!(
        compute_graph_spec(&signed, None).map(|spec| spec.signedness).ok(),
        Some(gspec_axes::Signedness::Signed)
    );

    let mut uncertain = common::path(2);
    uncertain.edges[0]
        .attributes
        .insert("p".into(), json!(0.25));
    assert_eq!(compute_uncertainty(&uncertain, &policy), Uncertainty::Deterministic);
    let custom = ComputePolicy::merged(Some(&PartialPolicy {
        probability_key: Some("p".into()),
        ..PartialPolicy::default()
    }));
    assert_eq!(compute_uncertainty(&uncertain, &custom), Uncertainty::Probabilistic);
}

#[test]
fn data_richness_and_schema() {
    let mut graph = common::path(2);
    assert_eq!(compute_vertex_data(&graph), VertexData::Unlabelled);
    graph.vertices[0].label = Some("start".into());
    assert_eq!(compute_vertex_data(&graph), VertexData::Labelled);
    graph.vertices[1].attributes.insert("colour".into(), json!("red"));
    assert_eq!(compute_vertex_data(&graph), VertexData::Attributed);
    assert_eq!(
        compute_schema_homogeneity(&graph),
        SchemaHomogeneity::Heterogeneous
    );
    graph.vertices[0].attributes.insert("colour".into(), json!("blue"));
    assert_eq!(
        compute_schema_homogeneity(&graph),
        SchemaHomogeneity::Homogeneous
    );
}

#[test]
fn embedding_dimensions() {
    let policy = ComputePolicy::default();
    let mut graph = common::path(2);
    assert_eq!(compute_embedding(&graph, &policy), Embedding::Abstract);
    graph.vertices[0]
        .attributes
        .insert("position".into(), json!([0.0, 1.0]));
    graph.vertices[1]
        .attributes
        .insert("position".into(), json!({ "x": 2.0, "y": 3.0 }));
    assert_eq!(
        compute_embedding(&graph, &policy),
        Embedding::Spatial { dimension: 2 }
    );
    graph.vertices[1].meta.position = Some(vec![1.0, 2.0, 3.0]);
    assert_eq!(compute_embedding(&graph, &policy), Embedding::Abstract);
}

#[test]
fn rooting_layers_ports_and_edge_order() {
    let policy = ComputePolicy::default();
    let mut graph = common::star(3);
    assert_eq!(compute_rooting(&graph, &policy), Rooting::Unrooted);
    graph.vertices[0].meta.root = Some(true);
    assert_eq!(compute_rooting(&graph, &policy), Rooting::Rooted);
    graph.vertices[1].attributes.insert("root".into(), json!(1));
    assert_eq!(compute_rooting(&graph, &policy), Rooting::MultiRooted);

    assert_eq!(compute_layering(&graph, &policy), Layering::SingleLayer);
    graph.vertices[0].meta.layer = Some("top".into());
    graph.vertices[1].attributes.insert("layer".into(), json!(2));
    assert_eq!(
        compute_layering(&graph, &policy),
        Layering::MultiLayer { layers: 2 }
    );

    assert_eq!(compute_ports(&graph, &policy), Ports::NoPorts);
    graph.edges[0].meta.port = Some("out".into());
    assert_eq!(compute_ports(&graph, &policy), Ports::Ported);

    assert_eq!(compute_edge_ordering(&graph, &policy), EdgeOrdering::Unordered);
    for (idx, edge) in graph.edges.iter_mut().enumerate() {
        edge.attributes.insert("order".into(), json!(idx));
    }
    assert_eq!(compute_edge_ordering(&graph, &policy), EdgeOrdering::Ordered);
}

#[test]
fn temporal_combinations() {
    let policy = ComputePolicy::default();
    let mut graph = common::path(2);
    assert_eq!(compute_temporal(&graph, &policy), Temporal::Static);
    graph.vertices[0].meta.time = Some(1.0);
    assert_eq!(compute_temporal(&graph, &policy), Temporal::VertexTemporal);
    graph.edges[0].attributes.insert("time".into(), json!(2.0));
    assert_eq!(compute_temporal(&graph, &policy), Temporal::TimeOrdered);
    graph.edges[0].attributes.insert("time".into(), json!("noon"));
    assert_eq!(compute_temporal(&graph, &policy), Temporal::EdgeTemporal);
    graph.vertices[0].meta.time = None;
    assert_eq!(compute_temporal(&graph, &policy), Temporal::EdgeTemporal);
}

#[test]
fn epistemic_conventions() {
    let mut graph = common::path(2);
    assert_eq!(compute_observability(&graph), Observability::FullySpecified);
    graph.vertices[0].attributes.insert("observed".into(), json!(false));
    assert_eq!(compute_observability(&graph), Observability::PartiallyObserved);
    graph.edges[0].attributes.insert("latent".into(), json!(true));
    assert_eq!(compute_observability(&graph), Observability::Latent);

    assert_eq!(
        compute_operational_semantics(&graph),
        OperationalSemantics::StructuralOnly
    );
    graph.vertices[1].attributes.insert("function".into(), json!("relu"));
    assert_eq!(
        compute_operational_semantics(&graph),
        OperationalSemantics::Annotated
    );
    graph.vertices[1].attributes.insert("executable".into(), json!(true));
    assert_eq!(
        compute_operational_semantics(&graph),
        OperationalSemantics::Executable
    );

    assert_eq!(compute_measure_semantics(&graph), MeasureSemantics::None);
    graph.edges[0].weight = Some(2.0);
    assert_eq!(compute_measure_semantics(&graph), MeasureSemantics::Metric);
    graph.edges[0].attributes.insert("utility".into(), json!(3));
    assert_eq!(compute_measure_semantics(&graph), MeasureSemantics::Utility);
    graph.edges[0].attributes.insert("cost".into(), json!(1));
    assert_eq!(compute_measure_semantics(&graph), MeasureSemantics::Cost);
}

#[test]
fn community_sources_in_precedence_order() {
    let policy = ComputePolicy::default();
    let split = common::undirected(4, &[(0, 1), (2, 3)]);
    assert_eq!(
        compute_community_structure(&split, &policy),
        CommunityStructure::Modular { communities: 2 }
    );
    assert_eq!(
        compute_community_structure(&common::path(4), &policy),
        CommunityStructure::Unconstrained
    );

    let mut labelled = common::path(4);
    for (idx, vertex) in labelled.vertices.iter_mut().enumerate() {
        vertex.meta = VertexMeta {
            community: Some(format!("c{}", idx % 3)),
            ..VertexMeta::default()
        };
    }
    assert_eq!(
        compute_community_structure(&labelled, &policy),
        CommunityStructure::Modular { communities: 3 }
    );
}

#[test]
fn unit_disk_needs_a_realising_embedding() -> Result<(), SpecError> {
    let policy = ComputePolicy::default();
    let mut graph = common::path(3);
    assert_eq!(compute_unit_disk(&graph, &policy), UnitDisk::Unconstrained);
    for (idx, vertex) in graph.vertices.iter_mut().enumerate() {
        vertex.meta.position = Some(vec![idx as f64, 0.0]);
    }
    assert_eq!(compute_unit_disk(&graph, &policy), UnitDisk::UnitDisk);

    let spec = compute_graph_spec(&common::star(6), None)?;
    assert_eq!(spec.unit_disk, UnitDisk::NotUnitDisk);
    Ok(())
}
