//! Stochastic movement model.
//!
//! Attempting a move succeeds with probability `intended`; otherwise the agent
//! slips 90° to either side with probability `lateral` each. Moves into an
//! obstacle leave the agent in place.

use crate::cell::{Cell, Direction};
use crate::error::Result;
use crate::graph::AdjacencyGraph;
use crate::utility::UtilityTable;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransitionModel {
    pub intended: f64,
    pub lateral: f64,
}

impl TransitionModel {
    pub const DEFAULT_INTENDED: f64 = 0.8;
    pub const DEFAULT_LATERAL: f64 = 0.1;

    pub const fn new() -> Self {
        Self {
            intended: Self::DEFAULT_INTENDED,
            lateral: Self::DEFAULT_LATERAL,
        }
    }

    /// True when the three outcomes form a probability distribution.
    pub fn is_normalized(&self) -> bool {
        self.intended >= 0.0
            && self.lateral >= 0.0
            && (self.intended + 2.0 * self.lateral - 1.0).abs() < 1e-9
    }

    /// `EU(C, D) = p·U(next(C, D)) + q·U(next(C, right(D))) + q·U(next(C, left(D)))`
    pub fn expected_utility(
        &self,
        graph: &AdjacencyGraph,
        utilities: &UtilityTable,
        cell: Cell,
        direction: Direction,
    ) -> Result<f64> {
        let intended = utilities.get(graph.next_cell(cell, direction)?)?;
        let right = utilities.get(graph.next_cell(cell, direction.right())?)?;
        let left = utilities.get(graph.next_cell(cell, direction.left())?)?;

        Ok(self.intended * intended + self.lateral * right + self.lateral * left)
    }

    /// Best expected utility over moves toward each of `cell`'s open neighbours.
    ///
    /// A cell without open neighbours can only bounce in place, so its own
    /// utility is returned.
    pub fn max_expected_utility(
        &self,
        graph: &AdjacencyGraph,
        utilities: &UtilityTable,
        cell: Cell,
    ) -> Result<f64> {
        let mut best: Option<f64> = None;
        for &neighbor in graph.neighbors(cell)? {
            let direction = Direction::between(cell, neighbor)?;
            let utility = self.expected_utility(graph, utilities, cell, direction)?;
            if best.is_none_or(|current| utility > current) {
                best = Some(utility);
            }
        }

        match best {
            Some(utility) => Ok(utility),
            None => utilities.get(cell),
        }
    }
}

impl Default for TransitionModel {
    fn default() -> Self {
        Self::new()
    }
}
