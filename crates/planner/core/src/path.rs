//! Breadth-first shortest paths over the adjacency graph.

use std::collections::{HashMap, VecDeque};

use crate::cell::Cell;
use crate::error::Result;
use crate::graph::AdjacencyGraph;

/// Returns the first shortest path from `start` to `goal`.
///
/// The path excludes `start` and ends with `goal`; `start == goal` yields an
/// empty path. `Ok(None)` means `goal` cannot be reached from `start`.
///
/// Cells are expanded in queue order and remember the first cell that
/// discovered them, so among equal-length paths the one following the
/// graph's neighbour ordering wins. The search stops as soon as `goal` is
/// discovered.
pub fn shortest_path(graph: &AdjacencyGraph, start: Cell, goal: Cell) -> Result<Option<Vec<Cell>>> {
    graph.ensure_contains(start)?;
    if start == goal {
        return Ok(Some(Vec::new()));
    }

    let mut parents: HashMap<Cell, Cell> = HashMap::new();
    let mut queue = VecDeque::from([start]);
    parents.insert(start, start);

    while let Some(cell) = queue.pop_front() {
        for &neighbor in graph.neighbors(cell)? {
            if parents.contains_key(&neighbor) {
                continue;
            }
            parents.insert(neighbor, cell);
            if neighbor == goal {
                return Ok(Some(trace_back(&parents, start, goal)));
            }
            queue.push_back(neighbor);
        }
    }

    Ok(None)
}

fn trace_back(parents: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> Vec<Cell> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&parent) = parents.get(&current) {
        if parent == start {
            break;
        }
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::cell::Direction;
    use crate::error::PlanError;
    use crate::graph::tests::walled;

    fn graph(width: i32, height: i32, extra: &[(i32, i32)]) -> AdjacencyGraph {
        AdjacencyGraph::explore(Cell::new(1, 1), &walled(width, height, extra), 1_000).unwrap()
    }

    /// Length of the shortest path by exhaustive depth-limited enumeration.
    fn brute_force_distance(graph: &AdjacencyGraph, start: Cell, goal: Cell) -> Option<usize> {
        fn search(
            graph: &AdjacencyGraph,
            cell: Cell,
            goal: Cell,
            visited: &mut HashSet<Cell>,
            depth: usize,
            best: &mut Option<usize>,
        ) {
            if cell == goal {
                *best = Some(best.map_or(depth, |b| b.min(depth)));
                return;
            }
            for &next in graph.neighbors(cell).unwrap() {
                if visited.insert(next) {
                    search(graph, next, goal, visited, depth + 1, best);
                    visited.remove(&next);
                }
            }
        }

        let mut best = None;
        let mut visited = HashSet::from([start]);
        search(graph, start, goal, &mut visited, 0, &mut best);
        best
    }

    #[test]
    fn matches_exhaustive_search_on_small_grid() {
        let graph = graph(4, 3, &[(2, 2), (3, 2)]);
        let cells: Vec<Cell> = graph.cells().collect();

        for &start in &cells {
            for &goal in &cells {
                let path = shortest_path(&graph, start, goal).unwrap().unwrap();
                assert_eq!(Some(path.len()), brute_force_distance(&graph, start, goal));

                let mut previous = start;
                for &cell in &path {
                    assert!(Direction::between(previous, cell).is_ok());
                    previous = cell;
                }
                assert_eq!(path.last().copied().unwrap_or(start), goal);
            }
        }
    }

    #[test]
    fn excludes_start_and_includes_goal() {
        let graph = graph(5, 1, &[]);
        let path = shortest_path(&graph, Cell::new(1, 1), Cell::new(4, 1))
            .unwrap()
            .unwrap();
        assert_eq!(path, vec![Cell::new(2, 1), Cell::new(3, 1), Cell::new(4, 1)]);
    }

    #[test]
    fn ties_follow_neighbor_ordering() {
        // From (1,1) to (2,2): West is walled, North is explored before East.
        let graph = graph(2, 2, &[]);
        let path = shortest_path(&graph, Cell::new(1, 1), Cell::new(2, 2))
            .unwrap()
            .unwrap();
        assert_eq!(path, vec![Cell::new(1, 2), Cell::new(2, 2)]);
    }

    #[test]
    fn unreachable_goal_returns_none() {
        let graph = graph(3, 1, &[(2, 1)]);
        assert_eq!(shortest_path(&graph, Cell::new(1, 1), Cell::new(3, 1)), Ok(None));
    }

    #[test]
    fn unknown_start_fails_fast() {
        let graph = graph(2, 2, &[]);
        assert_eq!(
            shortest_path(&graph, Cell::new(7, 7), Cell::new(1, 1)),
            Err(PlanError::CellNotInGraph(Cell::new(7, 7)))
        );
    }
}
