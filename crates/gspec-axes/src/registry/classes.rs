use gspec_core::{ComputePolicy, Graph};
use gspec_graph::limits::{COMPLEMENT_MAX_VERTICES, UNIT_DISK_MAX_VERTICES};
use gspec_graph::{
    asteroidal_triple_free, claw_free, cograph, comparability, hamiltonian_cycle,
    hamiltonian_path, induced_star_free, is_chordal, line_graph_heuristic, permutation,
    planarity, realises_unit_disk, SimpleGraph, Verdict,
};
use tracing::debug;

use super::undirected_view;
use crate::values::{
    Chordality, ClawFree, Cograph, Comparability, Hamiltonian, Interval, LineGraph, Perfect,
    Permutation, Planarity, Split, Threshold, Traceable, UnitDisk,
};

/// Maps a three-way verdict onto an axis value.
fn classify<T>(verdict: Verdict, holds: T, fails: T, unknown: T) -> T {
    match verdict {
        Verdict::Holds(()) => holds,
        Verdict::Fails => fails,
        Verdict::Undetermined => unknown,
    }
}

/// Chordality of the complement, when small enough to materialise.
fn complement_chordal(view: &SimpleGraph) -> Option<bool> {
    if view.len() > COMPLEMENT_MAX_VERTICES {
        debug!(
            vertices = view.len(),
            limit = COMPLEMENT_MAX_VERTICES,
            "complement skipped"
        );
        return None;
    }
    Some(is_chordal(&view.complement()))
}

/// Exact chordality via maximum cardinality search.
pub fn compute_chordality(graph: &Graph) -> Chordality {
    match undirected_view(graph) {
        Some(view) if is_chordal(&view) => Chordality::Chordal,
        Some(_) => Chordality::NotChordal,
        None => Chordality::Unconstrained,
    }
}

/// Euler-bound planarity; see [`gspec_graph::planarity`].
pub fn compute_planarity(graph: &Graph) -> Planarity {
    match undirected_view(graph) {
        Some(view) => classify(
            planarity(&view),
            Planarity::Planar,
            Planarity::NotPlanar,
            Planarity::Unconstrained,
        ),
        None => Planarity::Unconstrained,
    }
}

/// Interval iff chordal and asteroidal-triple-free.
pub fn compute_interval(graph: &Graph) -> Interval {
    match undirected_view(graph) {
        Some(view) if !is_chordal(&view) => Interval::NotInterval,
        Some(view) => classify(
            asteroidal_triple_free(&view),
            Interval::Interval,
            Interval::NotInterval,
            Interval::Unconstrained,
        ),
        None => Interval::Unconstrained,
    }
}

/// Transitive orientability by implication classes.
pub fn compute_comparability(graph: &Graph) -> Comparability {
    match undirected_view(graph) {
        Some(view) => classify(
            comparability(&view),
            Comparability::Comparability,
            Comparability::NotComparability,
            Comparability::Unconstrained,
        ),
        None => Comparability::Unconstrained,
    }
}

/// Comparability of both the graph and its complement.
pub fn compute_permutation(graph: &Graph) -> Permutation {
    match undirected_view(graph) {
        Some(view) => classify(
            permutation(&view),
            Permutation::Permutation,
            Permutation::NotPermutation,
            Permutation::Unconstrained,
        ),
        None => Permutation::Unconstrained,
    }
}

/// An induced `K1,6` refutes; a 2-D position per vertex realising the graph
/// with one radius confirms.
pub fn compute_unit_disk(graph: &Graph, policy: &ComputePolicy) -> UnitDisk {
    let Some(view) = undirected_view(graph) else {
        return UnitDisk::Unconstrained;
    };
    if induced_star_free(&view, 6, UNIT_DISK_MAX_VERTICES).fails() {
        return UnitDisk::NotUnitDisk;
    }
    let index = view.index();
    let mut positions = vec![[0.0f64; 2]; view.len()];
    let mut placed = vec![false; view.len()];
    for vertex in &graph.vertices {
        let Some(slot) = index.get(&vertex.id) else {
            continue;
        };
        if let Some([x, y]) = policy.vertex_position(vertex).as_deref() {
            positions[slot] = [*x, *y];
            placed[slot] = true;
        }
    }
    if placed.iter().all(|&p| p) && realises_unit_disk(&view, &positions) {
        UnitDisk::UnitDisk
    } else {
        UnitDisk::Unconstrained
    }
}

/// Backtracking Hamiltonian cycle search.
pub fn compute_hamiltonian(graph: &Graph) -> Hamiltonian {
    match undirected_view(graph) {
        Some(view) => classify(
            hamiltonian_cycle(&view),
            Hamiltonian::Hamiltonian,
            Hamiltonian::NotHamiltonian,
            Hamiltonian::Unconstrained,
        ),
        None => Hamiltonian::Unconstrained,
    }
}

/// Backtracking Hamiltonian path search.
pub fn compute_traceable(graph: &Graph) -> Traceable {
    match undirected_view(graph) {
        Some(view) => classify(
            hamiltonian_path(&view),
            Traceable::Traceable,
            Traceable::NotTraceable,
            Traceable::Unconstrained,
        ),
        None => Traceable::Unconstrained,
    }
}

/// Perfect when the graph or its complement is chordal.
pub fn compute_perfect(graph: &Graph) -> Perfect {
    match undirected_view(graph) {
        Some(view) if is_chordal(&view) || complement_chordal(&view) == Some(true) => {
            Perfect::Perfect
        }
        _ => Perfect::Unconstrained,
    }
}

/// Split iff both the graph and its complement are chordal.
pub fn compute_split(graph: &Graph) -> Split {
    let Some(view) = undirected_view(graph) else {
        return Split::Unconstrained;
    };
    if !is_chordal(&view) {
        return Split::NotSplit;
    }
    match complement_chordal(&view) {
        Some(true) => Split::Split,
        Some(false) => Split::NotSplit,
        None => Split::Unconstrained,
    }
}

/// Exhaustive induced-P4 search.
pub fn compute_cograph(graph: &Graph) -> Cograph {
    match undirected_view(graph) {
        Some(view) => classify(
            cograph(&view),
            Cograph::Cograph,
            Cograph::NotCograph,
            Cograph::Unconstrained,
        ),
        None => Cograph::Unconstrained,
    }
}

/// Threshold iff split and cograph; refuted as soon as either is.
pub fn compute_threshold(graph: &Graph) -> Threshold {
    threshold_from(compute_split(graph), compute_cograph(graph))
}

/// Combines already computed split and cograph values into a threshold value.
pub fn threshold_from(split: Split, cograph: Cograph) -> Threshold {
    match (split, cograph) {
        (Split::Split, Cograph::Cograph) => Threshold::Threshold,
        (Split::NotSplit, _) | (_, Cograph::NotCograph) => Threshold::NotThreshold,
        _ => Threshold::Unconstrained,
    }
}

/// Claw-freeness plus a two-clique cover of every neighbourhood.
pub fn compute_line_graph(graph: &Graph) -> LineGraph {
    match undirected_view(graph) {
        Some(view) => classify(
            line_graph_heuristic(&view),
            LineGraph::LineGraph,
            LineGraph::NotLineGraph,
            LineGraph::Unconstrained,
        ),
        None => LineGraph::Unconstrained,
    }
}

/// Exhaustive induced-claw search.
pub fn compute_claw_free(graph: &Graph) -> ClawFree {
    match undirected_view(graph) {
        Some(view) => classify(
            claw_free(&view),
            ClawFree::ClawFree,
            ClawFree::NotClawFree,
            ClawFree::Unconstrained,
        ),
        None => ClawFree::Unconstrained,
    }
}
