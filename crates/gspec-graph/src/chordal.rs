use crate::adjacency::SimpleGraph;

/// Maximum Cardinality Search.
///
/// Returns vertices in the order they were numbered; ties go to the lowest
/// index. The reverse of this order is a perfect elimination ordering iff
/// the graph is chordal.
pub fn maximum_cardinality_search(graph: &SimpleGraph) -> Vec<usize> {
    let n = graph.len();
    let mut weight = vec![0usize; n];
    let mut numbered = vec![false; n];
    let mut order = Vec::with_capacity(n);
    for _ in 0..n {
        let mut best: Option<usize> = None;
        for vertex in 0..n {
            if numbered[vertex] {
                continue;
            }
            match best {
                Some(current) if weight[current] >= weight[vertex] => {}
                _ => best = Some(vertex),
            }
        }
        let Some(chosen) = best else { break };
        numbered[chosen] = true;
        order.push(chosen);
        for &next in graph.neighbours(chosen) {
            if !numbered[next] {
                weight[next] += 1;
            }
        }
    }
    order
}

/// Checks that every vertex's later neighbours in `elimination` form a clique.
pub fn is_perfect_elimination_ordering(graph: &SimpleGraph, elimination: &[usize]) -> bool {
    let mut position = vec![usize::MAX; graph.len()];
    for (pos, &vertex) in elimination.iter().enumerate() {
        position[vertex] = pos;
    }
    elimination.iter().all(|&vertex| {
        let later: Vec<usize> = graph
            .neighbours(vertex)
            .iter()
            .copied()
            .filter(|&next| position[next] > position[vertex])
            .collect();
        later.iter().enumerate().all(|(idx, &a)| {
            later[idx + 1..]
                .iter()
                .all(|&b| graph.adjacent(a, b))
        })
    })
}

/// Exact chordality test via Maximum Cardinality Search.
pub fn is_chordal(graph: &SimpleGraph) -> bool {
    let mut elimination = maximum_cardinality_search(graph);
    elimination.reverse();
    is_perfect_elimination_ordering(graph, &elimination)
}
