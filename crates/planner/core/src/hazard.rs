//! Hazard-proximity analysis.
//!
//! A cell is hazardous when it lies on the agent's shortest path to an
//! adversary within `threshold` steps of that adversary. Each hazardous cell
//! remembers which adversary it is attributed to so the reward model can tell
//! dangerous proximity from an edible target.

use std::collections::HashMap;

use crate::adversary::Adversaries;
use crate::cell::Cell;
use crate::error::{PlanError, Result};
use crate::graph::AdjacencyGraph;
use crate::path::shortest_path;

/// Proximity threshold used when none is configured, in steps.
pub const DEFAULT_HAZARD_THRESHOLD: usize = 5;

/// Hazardous cells mapped to the adversary cell they are attributed to.
///
/// Never contains an adversary's own cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HazardField {
    cells: HashMap<Cell, Cell>,
}

impl HazardField {
    /// Builds the hazard field for the current adversary positions.
    ///
    /// Adversaries are processed in observation order and the first one to
    /// claim a cell keeps it, even if a later adversary is closer.
    pub fn analyze(
        graph: &AdjacencyGraph,
        agent: Cell,
        adversaries: &Adversaries,
        threshold: usize,
    ) -> Result<Self> {
        let mut cells = HashMap::new();

        for adversary in adversaries.cells() {
            graph.ensure_contains(adversary)?;
            let path = shortest_path(graph, agent, adversary)?.ok_or(PlanError::Unreachable {
                from: agent,
                to: adversary,
            })?;

            let trailing = &path[path.len().saturating_sub(threshold)..];
            for &cell in trailing {
                if !adversaries.occupies(cell) {
                    cells.entry(cell).or_insert(adversary);
                }
            }
        }

        Ok(Self { cells })
    }

    /// Adversary a hazardous cell is attributed to.
    pub fn attributed(&self, cell: Cell) -> Option<Cell> {
        self.cells.get(&cell).copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.cells.iter().map(|(&cell, &adversary)| (cell, adversary))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
