use crate::error::{PlanError, Result};
use crate::hazard::DEFAULT_HAZARD_THRESHOLD;
use crate::reward::RewardTable;
use crate::transition::TransitionModel;
use crate::value_iteration::ValueIterationParams;

/// Planner configuration constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    pub rewards: RewardTable,
    pub transition: TransitionModel,
    pub iteration: ValueIterationParams,
    /// Number of path cells before an adversary treated as hazardous.
    pub hazard_threshold: usize,
    /// Adversaries with a timer strictly above this value are edible.
    pub edible_threshold: u32,
    /// Upper bound on cells discovered while building the graph.
    pub max_graph_cells: usize,
}

impl PlannerConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_HAZARD_THRESHOLD: usize = DEFAULT_HAZARD_THRESHOLD;
    pub const DEFAULT_EDIBLE_THRESHOLD: u32 = 15;
    pub const DEFAULT_MAX_GRAPH_CELLS: usize = 100_000;

    pub const fn new() -> Self {
        Self {
            rewards: RewardTable::new(),
            transition: TransitionModel::new(),
            iteration: ValueIterationParams::new(),
            hazard_threshold: Self::DEFAULT_HAZARD_THRESHOLD,
            edible_threshold: Self::DEFAULT_EDIBLE_THRESHOLD,
            max_graph_cells: Self::DEFAULT_MAX_GRAPH_CELLS,
        }
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.iteration.discount = discount;
        self
    }

    /// Rejects parameter combinations the pipeline cannot solve.
    pub fn validate(&self) -> Result<()> {
        let discount = self.iteration.discount;
        if !(discount > 0.0 && discount < 1.0) {
            return Err(PlanError::InvalidConfig("discount must lie in (0, 1)"));
        }
        if !(self.iteration.tolerance > 0.0) {
            return Err(PlanError::InvalidConfig("tolerance must be positive"));
        }
        if self.iteration.max_iterations == 0 {
            return Err(PlanError::InvalidConfig("max_iterations must be positive"));
        }
        if !self.transition.is_normalized() {
            return Err(PlanError::InvalidConfig(
                "transition probabilities must sum to 1",
            ));
        }
        if self.hazard_threshold == 0 {
            return Err(PlanError::InvalidConfig("hazard_threshold must be positive"));
        }
        if self.max_graph_cells == 0 {
            return Err(PlanError::InvalidConfig("max_graph_cells must be positive"));
        }
        Ok(())
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new()
    }
}
