use std::collections::HashMap;

use crate::cell::Cell;
use crate::error::{PlanError, Result};
use crate::reward::{Classification, RewardTable};

/// Utility of every reachable cell.
///
/// The domain always equals the adjacency graph's key set: the table is seeded
/// from a [`Classification`] of that graph and every sweep rewrites each entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UtilityTable {
    values: HashMap<Cell, f64>,
}

impl UtilityTable {
    /// Seeds each cell with its category's initial utility.
    pub fn seed(classification: &Classification, rewards: &RewardTable) -> Self {
        let values = classification
            .iter()
            .map(|(cell, kind)| (cell, kind.initial_utility(rewards)))
            .collect();
        Self { values }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            values: HashMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, cell: Cell) -> Result<f64> {
        self.values
            .get(&cell)
            .copied()
            .ok_or(PlanError::CellNotInGraph(cell))
    }

    /// Overwrites a single entry. Mostly useful for what-if analysis.
    pub fn set(&mut self, cell: Cell, utility: f64) -> Result<()> {
        let slot = self
            .values
            .get_mut(&cell)
            .ok_or(PlanError::CellNotInGraph(cell))?;
        *slot = utility;
        Ok(())
    }

    pub(crate) fn insert(&mut self, cell: Cell, utility: f64) {
        self.values.insert(cell, utility);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        self.values.iter().map(|(&cell, &utility)| (cell, utility))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(Cell, f64)> for UtilityTable {
    fn from_iter<I: IntoIterator<Item = (Cell, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
