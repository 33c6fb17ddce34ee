use gspec_core::{Edge, Graph, Sign, SpecError, Vertex};
use proptest::prelude::*;

#[test]
fn graph_json_roundtrip() -> Result<(), SpecError> {
    let graph = Graph::new(
        vec![Vertex::new("a").with_label("A"), Vertex::new("b")],
        vec![Edge::directed("e0", "a", "b")
            .with_weight(2.5)
            .with_sign(Sign::Negative)],
    );
    let json = graph.to_json()?;
    let restored = Graph::from_json(&json)?;
    assert_eq!(graph, restored);
    Ok(())
}

#[test]
fn minimal_json_uses_defaults() -> Result<(), SpecError> {
    let graph = Graph::from_json(r#"{"vertices":[{"id":"a"}],"edges":[{"id":"e","endpoints":["a","a"]}]}"#)?;
    assert!(!graph.edges[0].directed);
    assert!(graph.edges[0].is_loop());
    assert_eq!(graph.vertex_ids().collect::<Vec<_>>(), vec!["a"]);
    Ok(())
}

#[test]
fn malformed_json_reports_serde_family() {
    let err = Graph::from_json("{").unwrap_err();
    assert_eq!(err.code(), "graph-deserialize");
}

proptest! {
    #[test]
    fn hyperedge_loop_detection(endpoints in proptest::collection::vec(0u8..4, 0..6)) {
        let ids: Vec<String> = endpoints.iter().map(|v| v.to_string()).collect();
        let edge = Edge::hyper("e", ids.clone(), false);
        let mut dedup = ids.clone();
        dedup.sort();
        dedup.dedup();
        prop_assert_eq!(edge.is_loop(), dedup.len() != ids.len());
        prop_assert_eq!(edge.arity(), ids.len());
    }
}
