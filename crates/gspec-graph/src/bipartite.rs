use std::collections::VecDeque;

use crate::adjacency::SimpleGraph;

/// Breadth-first two-colouring, component by component.
///
/// Returns `None` when two adjacent vertices are forced to the same colour.
/// Each component's lowest vertex receives colour `false`.
pub fn two_coloring(graph: &SimpleGraph) -> Option<Vec<bool>> {
    let mut colors: Vec<Option<bool>> = vec![None; graph.len()];
    for start in 0..graph.len() {
        if colors[start].is_some() {
            continue;
        }
        colors[start] = Some(false);
        let mut queue = VecDeque::from([start]);
        while let Some(vertex) = queue.pop_front() {
            let color = colors[vertex]?;
            for &next in graph.neighbours(vertex) {
                match colors[next] {
                    None => {
                        colors[next] = Some(!color);
                        queue.push_back(next);
                    }
                    Some(existing) if existing == color => return None,
                    Some(_) => {}
                }
            }
        }
    }
    colors.into_iter().collect()
}

/// Sizes of the two colour classes `(false, true)`.
pub fn partition_sizes(colors: &[bool]) -> (usize, usize) {
    let ones = colors.iter().filter(|&&color| color).count();
    (colors.len() - ones, ones)
}
