//! Reachable-cell discovery.
//!
//! The adjacency graph is explored once per episode from the agent's start
//! cell and never mutated afterwards. Its key set is the universe of cells the
//! rest of the pipeline may query.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::cell::{Cell, Direction};
use crate::error::{PlanError, Result};

/// Mapping from each reachable cell to its open neighbours, in
/// [`Direction::ALL`] order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighbors: HashMap<Cell, Vec<Cell>>,
}

impl AdjacencyGraph {
    /// Explores every cell reachable from `start` by 4-directional movement.
    ///
    /// Candidate neighbours are computed unconditionally and kept when they are
    /// not obstacles. Kept neighbours are always enqueued; a cell is expanded at
    /// most once, so duplicate queue entries are simply skipped.
    ///
    /// `max_cells` bounds the exploration. An unenclosed layout would otherwise
    /// never terminate.
    pub fn explore(start: Cell, obstacles: &HashSet<Cell>, max_cells: usize) -> Result<Self> {
        if obstacles.contains(&start) {
            return Err(PlanError::StartIsObstacle(start));
        }

        let mut neighbors: HashMap<Cell, Vec<Cell>> = HashMap::new();
        let mut queue = VecDeque::from([start]);

        while let Some(cell) = queue.pop_front() {
            if neighbors.contains_key(&cell) {
                continue;
            }
            if neighbors.len() >= max_cells {
                return Err(PlanError::UnboundedGrid { limit: max_cells });
            }

            let open: Vec<Cell> = Direction::ALL
                .iter()
                .map(|&direction| cell.step(direction))
                .filter(|candidate| !obstacles.contains(candidate))
                .collect();

            queue.extend(open.iter().copied());
            neighbors.insert(cell, open);
        }

        Ok(Self { neighbors })
    }

    /// Open neighbours of `cell`.
    pub fn neighbors(&self, cell: Cell) -> Result<&[Cell]> {
        self.neighbors
            .get(&cell)
            .map(Vec::as_slice)
            .ok_or(PlanError::CellNotInGraph(cell))
    }

    /// Fails with [`PlanError::CellNotInGraph`] unless `cell` was discovered.
    pub fn ensure_contains(&self, cell: Cell) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(PlanError::CellNotInGraph(cell))
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.neighbors.contains_key(&cell)
    }

    /// Cell reached by attempting `direction` from `cell`.
    ///
    /// Moving into an obstacle leaves the agent where it was.
    pub fn next_cell(&self, cell: Cell, direction: Direction) -> Result<Cell> {
        let target = cell.step(direction);
        if self.neighbors(cell)?.contains(&target) {
            Ok(target)
        } else {
            Ok(cell)
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.neighbors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, &[Cell])> + '_ {
        self.neighbors
            .iter()
            .map(|(&cell, neighbors)| (cell, neighbors.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}
