use planner_core::{
    Classification, Convergence, Direction, HazardField, ScoredMove, UtilityTable,
};

/// Everything one planning cycle produced.
///
/// Only `action` is submitted to the environment; the remaining fields are
/// kept for logging, rendering and tests.
#[derive(Clone, Debug)]
pub struct Plan {
    pub action: Direction,
    pub expected_utility: f64,
    /// Expected utility of every legal move, in legal-action order.
    pub scores: Vec<ScoredMove>,
    pub hazards: HazardField,
    pub classification: Classification,
    pub utilities: UtilityTable,
    pub convergence: Convergence,
}
