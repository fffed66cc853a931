//! Synchronous value iteration.
//!
//! Each sweep computes a fresh table from the previous one:
//!
//! ```text
//! U'(s) = R(s) + γ · max_a Σ P(s'|s,a) U(s')
//! ```
//!
//! Adversary cells are absorbing and copy their utility unchanged. Iteration
//! stops once the largest per-cell change of a sweep drops below
//! `ε · (1 − γ) / γ`, which bounds the distance to the true fixed point by `ε`.

use crate::error::{PlanError, Result};
use crate::graph::AdjacencyGraph;
use crate::reward::{Classification, RewardTable};
use crate::transition::TransitionModel;
use crate::utility::UtilityTable;

/// Parameters of the Bellman iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValueIterationParams {
    /// Discount factor γ.
    pub discount: f64,
    /// Convergence tolerance ε.
    pub tolerance: f64,
    /// Sweeps allowed before the cycle is aborted.
    pub max_iterations: usize,
}

impl ValueIterationParams {
    pub const DEFAULT_DISCOUNT: f64 = 0.78;
    pub const DEFAULT_TOLERANCE: f64 = 0.08;
    pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

    pub const fn new() -> Self {
        Self {
            discount: Self::DEFAULT_DISCOUNT,
            tolerance: Self::DEFAULT_TOLERANCE,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Largest per-sweep change accepted as converged.
    pub fn convergence_bound(&self) -> f64 {
        self.tolerance * (1.0 - self.discount) / self.discount
    }
}

impl Default for ValueIterationParams {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a converged run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Convergence {
    pub sweeps: usize,
    /// Largest per-cell change of the final sweep.
    pub residual: f64,
}

/// Value iteration over a fixed graph and classification.
pub struct ValueIteration<'a> {
    graph: &'a AdjacencyGraph,
    classification: &'a Classification,
    rewards: &'a RewardTable,
    transition: &'a TransitionModel,
    params: ValueIterationParams,
}

impl<'a> ValueIteration<'a> {
    pub fn new(
        graph: &'a AdjacencyGraph,
        classification: &'a Classification,
        rewards: &'a RewardTable,
        transition: &'a TransitionModel,
        params: ValueIterationParams,
    ) -> Self {
        Self {
            graph,
            classification,
            rewards,
            transition,
            params,
        }
    }

    /// Seeds a fresh table from the classification and iterates to convergence.
    pub fn solve(&self) -> Result<(UtilityTable, Convergence)> {
        let mut utilities = UtilityTable::seed(self.classification, self.rewards);
        let bound = self.params.convergence_bound();
        let mut residual = f64::INFINITY;

        for sweep in 1..=self.params.max_iterations {
            let (next, change) = self.sweep(&utilities)?;
            utilities = next;
            residual = change;
            if residual < bound {
                return Ok((
                    utilities,
                    Convergence {
                        sweeps: sweep,
                        residual,
                    },
                ));
            }
        }

        Err(PlanError::NotConverged {
            iterations: self.params.max_iterations,
            residual,
        })
    }

    /// One synchronous Bellman sweep. Returns the new table and the largest
    /// absolute change.
    pub fn sweep(&self, utilities: &UtilityTable) -> Result<(UtilityTable, f64)> {
        let mut next = UtilityTable::with_capacity(utilities.len());
        let mut residual: f64 = 0.0;

        for cell in self.graph.cells() {
            let kind = self.classification.kind(cell)?;
            let previous = utilities.get(cell)?;
            let updated = if kind.is_absorbing() {
                previous
            } else {
                let meu = self
                    .transition
                    .max_expected_utility(self.graph, utilities, cell)?;
                kind.state_reward(self.rewards) + self.params.discount * meu
            };

            residual = residual.max((updated - previous).abs());
            next.insert(cell, updated);
        }

        Ok((next, residual))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::adversary::{Adversaries, Adversary};
    use crate::cell::Cell;
    use crate::graph::tests::walled;
    use crate::hazard::HazardField;
    use crate::reward::Collectibles;

    struct Fixture {
        graph: AdjacencyGraph,
        classification: Classification,
        rewards: RewardTable,
        transition: TransitionModel,
    }

    fn fixture(adversaries: Vec<Adversary>, food: &[(i32, i32)]) -> Fixture {
        let graph =
            AdjacencyGraph::explore(Cell::new(1, 1), &walled(4, 3, &[(2, 2)]), 1_000).unwrap();
        let adversaries = Adversaries::new(adversaries);
        let hazards = HazardField::analyze(&graph, Cell::new(1, 1), &adversaries, 5).unwrap();
        let collectibles = Collectibles {
            food: food.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
            capsules: HashSet::new(),
        };
        let classification =
            Classification::classify(&graph, &adversaries, &hazards, &collectibles, 15).unwrap();
        Fixture {
            graph,
            classification,
            rewards: RewardTable::default(),
            transition: TransitionModel::default(),
        }
    }

    impl Fixture {
        fn engine(&self, params: ValueIterationParams) -> ValueIteration<'_> {
            ValueIteration::new(
                &self.graph,
                &self.classification,
                &self.rewards,
                &self.transition,
                params,
            )
        }
    }

    #[test]
    fn converges_within_bound() {
        let fixture = fixture(
            vec![Adversary::new(Cell::new(4, 3), 0)],
            &[(4, 1), (1, 3)],
        );
        let params = ValueIterationParams::default();

        let (utilities, convergence) = fixture.engine(params).solve().unwrap();

        assert!(convergence.residual < params.convergence_bound());
        assert!(convergence.sweeps >= 1);
        assert_eq!(utilities.len(), fixture.graph.len());
    }

    #[test]
    fn adversary_cells_are_absorbing() {
        let adversary = Cell::new(4, 3);
        let fixture = fixture(vec![Adversary::new(adversary, 0)], &[(4, 1)]);
        let engine = fixture.engine(ValueIterationParams::default());

        let mut utilities = UtilityTable::seed(&fixture.classification, &fixture.rewards);
        let initial = utilities.get(adversary).unwrap();
        assert_eq!(initial, -5.0);

        for _ in 0..25 {
            let (next, _) = engine.sweep(&utilities).unwrap();
            utilities = next;
            assert_eq!(utilities.get(adversary).unwrap(), initial);
        }
    }

    #[test]
    fn edible_adversary_attracts_utility() {
        let fixture = fixture(vec![Adversary::new(Cell::new(4, 3), 30)], &[]);
        let (utilities, _) = fixture
            .engine(ValueIterationParams::default())
            .solve()
            .unwrap();

        assert_eq!(utilities.get(Cell::new(4, 3)).unwrap(), 100.0);
        assert!(utilities.get(Cell::new(3, 3)).unwrap() > utilities.get(Cell::new(1, 1)).unwrap());
    }

    #[test]
    fn safety_cap_reports_non_convergence() {
        let fixture = fixture(vec![], &[(4, 1)]);
        let params = ValueIterationParams {
            max_iterations: 1,
            tolerance: 1e-12,
            ..ValueIterationParams::default()
        };

        let err = fixture.engine(params).solve().unwrap_err();
        assert!(matches!(err, PlanError::NotConverged { iterations: 1, .. }));
    }

    #[test]
    fn sweep_rejects_tables_from_another_graph() {
        let fixture = fixture(vec![], &[]);
        let engine = fixture.engine(ValueIterationParams::default());

        let foreign: UtilityTable = [(Cell::new(40, 40), 0.0)].into_iter().collect();
        assert!(matches!(
            engine.sweep(&foreign),
            Err(PlanError::CellNotInGraph(_))
        ));
    }
}
