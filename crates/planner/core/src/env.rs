//! Read-only view of the environment the planner queries once per cycle.
//!
//! The environment owns the simulation: it advances the world, filters legal
//! actions, and applies the stochastic outcome of the chosen move. The planner
//! only needs the narrow set of facts exposed by [`WorldView`].

use std::collections::HashSet;

use crate::adversary::{Adversaries, Adversary};
use crate::cell::{Cell, Direction};
use crate::error::Result;
use crate::reward::Collectibles;

/// Raw adversary report; positions may be fractional while it is moving.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdversaryReport {
    pub x: f64,
    pub y: f64,
    pub timer: u32,
}

impl AdversaryReport {
    pub const fn new(x: f64, y: f64, timer: u32) -> Self {
        Self { x, y, timer }
    }

    pub fn to_adversary(self) -> Result<Adversary> {
        Ok(Adversary::new(
            Cell::from_continuous(self.x, self.y)?,
            self.timer,
        ))
    }
}

/// World facts consumed by the planner.
pub trait WorldView {
    fn agent_position(&self) -> Cell;

    fn obstacles(&self) -> HashSet<Cell>;

    fn food(&self) -> HashSet<Cell>;

    fn capsules(&self) -> HashSet<Cell>;

    /// Adversaries in a stable order; hazard attribution depends on it.
    fn adversaries(&self) -> Vec<AdversaryReport>;

    /// Legal moves from the agent's position, without the no-op.
    fn legal_actions(&self) -> Vec<Direction>;

    /// Snapshot of the per-cycle facts.
    ///
    /// Fails when an adversary report cannot be mapped to a cell.
    fn observe(&self) -> Result<Observation> {
        Ok(Observation {
            agent: self.agent_position(),
            collectibles: Collectibles {
                food: self.food(),
                capsules: self.capsules(),
            },
            adversaries: self
                .adversaries()
                .into_iter()
                .map(AdversaryReport::to_adversary)
                .collect::<Result<Adversaries>>()?,
            legal: self.legal_actions(),
        })
    }
}

/// Facts observed at the start of a planning cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Observation {
    pub agent: Cell,
    pub collectibles: Collectibles,
    pub adversaries: Adversaries,
    pub legal: Vec<Direction>,
}
