//! Greedy policy extraction.

use crate::cell::{Cell, Direction};
use crate::error::{PlanError, Result};
use crate::graph::AdjacencyGraph;
use crate::transition::TransitionModel;
use crate::utility::UtilityTable;

/// Scored candidate move.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredMove {
    pub direction: Direction,
    pub expected_utility: f64,
}

/// Picks the legal move with maximum expected utility.
pub struct PolicyExtractor<'a> {
    graph: &'a AdjacencyGraph,
    utilities: &'a UtilityTable,
    transition: &'a TransitionModel,
}

impl<'a> PolicyExtractor<'a> {
    pub fn new(
        graph: &'a AdjacencyGraph,
        utilities: &'a UtilityTable,
        transition: &'a TransitionModel,
    ) -> Self {
        Self {
            graph,
            utilities,
            transition,
        }
    }

    /// Expected utility of every legal move, in `legal` order.
    pub fn score(&self, cell: Cell, legal: &[Direction]) -> Result<Vec<ScoredMove>> {
        legal
            .iter()
            .map(|&direction| {
                Ok(ScoredMove {
                    direction,
                    expected_utility: self.transition.expected_utility(
                        self.graph,
                        self.utilities,
                        cell,
                        direction,
                    )?,
                })
            })
            .collect()
    }

    /// Best move from `cell`. Ties keep the first maximum in `legal` order.
    pub fn best_move(&self, cell: Cell, legal: &[Direction]) -> Result<ScoredMove> {
        let mut best: Option<ScoredMove> = None;
        for candidate in self.score(cell, legal)? {
            if best.is_none_or(|current| candidate.expected_utility > current.expected_utility) {
                best = Some(candidate);
            }
        }
        best.ok_or(PlanError::NoLegalActions(cell))
    }
}
