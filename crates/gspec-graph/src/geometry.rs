use crate::adjacency::SimpleGraph;

/// Checks that a 2-D embedding realises the graph as a unit-disk graph.
///
/// Holds iff some radius separates the edges from the non-edges: every edge
/// is strictly shorter than every non-adjacent pair. `positions` is indexed
/// like the graph's vertices.
pub fn realises_unit_disk(graph: &SimpleGraph, positions: &[[f64; 2]]) -> bool {
    if positions.len() != graph.len() {
        return false;
    }
    let mut longest_edge = 0.0f64;
    let mut shortest_gap = f64::INFINITY;
    for a in 0..graph.len() {
        for b in a + 1..graph.len() {
            let distance = ((positions[a][0] - positions[b][0]).powi(2)
                + (positions[a][1] - positions[b][1]).powi(2))
            .sqrt();
            if graph.adjacent(a, b) {
                longest_edge = longest_edge.max(distance);
            } else {
                shortest_gap = shortest_gap.min(distance);
            }
        }
    }
    longest_edge < shortest_gap
}
