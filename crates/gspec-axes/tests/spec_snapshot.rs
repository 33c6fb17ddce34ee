mod common;

use gspec_axes::{
    compare_axis_values, compute_graph_spec, diff_specs, Axis, AxisKind, AxisValue, Chordality,
    DegreeConstraint, InferredSpec, PayloadValue,
};
use gspec_core::{PartialPolicy, SpecError};
use proptest::prelude::*;

#[test]
fn every_axis_is_reachable_by_name() -> Result<(), SpecError> {
    let spec = compute_graph_spec(&common::cycle(4), None)?;
    assert_eq!(spec.axes().count(), Axis::ALL.len());
    for (value, axis) in spec.axes().zip(Axis::ALL) {
        assert_eq!(value.axis(), *axis);
    }
    assert_eq!(Axis::CompleteBipartite.name(), "complete_bipartite");
    assert_eq!(
        spec.get(Axis::Chordality),
        AxisValue::Chordality(Chordality::NotChordal)
    );
    Ok(())
}

#[test]
fn json_round_trip_and_kind_tags() -> Result<(), SpecError> {
    let spec = compute_graph_spec(&common::star(3), None)?;
    let json = spec.to_json()?;
    assert!(json.contains("\"kind\": \"degree_sequence\""));
    assert_eq!(InferredSpec::from_json(&json)?, spec);

    let err = InferredSpec::from_json("{}").expect_err("missing axes");
    assert_eq!(err.code(), "spec-deserialize");
    Ok(())
}

#[test]
fn canonical_hash_is_stable_and_discriminating() -> Result<(), SpecError> {
    let a = compute_graph_spec(&common::cycle(5), None)?;
    let b = compute_graph_spec(&common::cycle(5), None)?;
    let c = compute_graph_spec(&common::path(5), None)?;
    assert_eq!(a.canonical_hash()?, b.canonical_hash()?);
    assert_ne!(a.canonical_hash()?, c.canonical_hash()?);
    assert_eq!(a.canonical_hash()?.len(), 64);
    Ok(())
}

#[test]
fn diff_lists_changed_axes() -> Result<(), SpecError> {
    let cycle = compute_graph_spec(&common::cycle(5), None)?;
    let path = compute_graph_spec(&common::path(5), None)?;
    let changed = diff_specs(&cycle, &path);
    assert!(changed.contains(&Axis::Cycles));
    assert!(changed.contains(&Axis::DegreeConstraint));
    assert!(!changed.contains(&Axis::VertexCardinality));
    assert!(diff_specs(&cycle, &cycle).is_empty());
    Ok(())
}

#[test]
fn comparison_checks_kind_then_integer_payload() {
    let regular = AxisValue::from(DegreeConstraint::Regular { degree: 3 });
    let other_degree = AxisValue::from(DegreeConstraint::Regular { degree: 4 });
    assert_eq!(regular.kind(), "regular");
    assert_eq!(
        regular.payload().get("degree"),
        Some(&PayloadValue::Integer(3))
    );
    assert!(compare_axis_values(&regular, &regular.clone()));
    assert!(!compare_axis_values(&regular, &other_degree));

    let sequence = DegreeConstraint::DegreeSequence {
        sequence: vec![3, 1, 1, 1],
    };
    assert_eq!(
        sequence.payload().get("sequence"),
        Some(&PayloadValue::Sequence(vec![3, 1, 1, 1]))
    );

    let scale_a = AxisValue::from(gspec_axes::ScaleFree::ScaleFree { exponent: 2.1 });
    let scale_b = AxisValue::from(gspec_axes::ScaleFree::ScaleFree { exponent: 2.7 });
    assert!(compare_axis_values(&scale_a, &scale_b));
    assert_ne!(scale_a, scale_b);
}

#[test]
fn axis_values_decode_per_axis() -> Result<(), SpecError> {
    let value = AxisValue::from_json_value(
        Axis::DegreeConstraint,
        serde_json::json!({ "kind": "regular", "degree": 2 }),
    )?;
    assert_eq!(value, AxisValue::from(DegreeConstraint::Regular { degree: 2 }));

    let err = AxisValue::from_json_value(Axis::Cycles, serde_json::json!({ "kind": "tree" }))
        .expect_err("unknown kind");
    assert_eq!(err.code(), "axis-value-deserialize");
    assert_eq!(err.info().context.get("axis").map(String::as_str), Some("cycles"));
    Ok(())
}

fn arb_graph() -> impl Strategy<Value = gspec_core::Graph> {
    (1usize..8).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..16)
            .prop_map(move |pairs| common::undirected(n, &pairs))
    })
}

proptest! {
    #[test]
    fn assembly_is_deterministic(graph in arb_graph()) {
        let policy = PartialPolicy::default();
        let first = compute_graph_spec(&graph, Some(&policy));
        let second = compute_graph_spec(&graph, Some(&policy));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn assembly_leaves_the_graph_untouched(graph in arb_graph()) {
        let before = graph.clone();
        let _ = compute_graph_spec(&graph, None);
        prop_assert_eq!(graph, before);
    }

    #[test]
    fn get_agrees_with_fields(graph in arb_graph()) {
        let spec = compute_graph_spec(&graph, None).expect("binary edges");
        prop_assert_eq!(spec.get(Axis::Cycles), AxisValue::from(spec.cycles));
        prop_assert_eq!(spec.get(Axis::Partiteness), AxisValue::from(spec.partiteness));
        prop_assert_eq!(
            spec.get(Axis::DegreeConstraint),
            AxisValue::from(spec.degree_constraint.clone())
        );
    }
}
