//! Reward model.
//!
//! Every reachable cell is classified once per planning cycle into a
//! [`RewardKind`]. The classification drives both the initial utility table
//! and the state reward used inside the Bellman update, and marks adversary
//! cells as absorbing.
//!
//! # Precedence
//!
//! The first matching rule wins:
//!
//! 1. Adversary position (edible when its timer exceeds the threshold)
//! 2. Hazard field cell, judged by the attributed adversary's timer
//! 3. Food
//! 4. Capsule
//! 5. Empty

use std::collections::{HashMap, HashSet};

use crate::adversary::Adversaries;
use crate::cell::Cell;
use crate::error::{PlanError, Result};
use crate::graph::AdjacencyGraph;
use crate::hazard::HazardField;

/// Numeric rewards for each cell category.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardTable {
    /// Per-step cost applied to empty cells during the Bellman update.
    pub move_cost: f64,
    pub dangerous_adversary: f64,
    pub edible_adversary: f64,
    pub capsule: f64,
    pub item: f64,
    /// Initial utility of empty cells.
    pub empty: f64,
}

impl RewardTable {
    pub const DEFAULT_MOVE_COST: f64 = -0.1;
    pub const DEFAULT_DANGEROUS_ADVERSARY: f64 = -5.0;
    pub const DEFAULT_EDIBLE_ADVERSARY: f64 = 100.0;
    pub const DEFAULT_CAPSULE: f64 = 2.0;
    pub const DEFAULT_ITEM: f64 = 1.0;
    pub const DEFAULT_EMPTY: f64 = 0.0;

    pub const fn new() -> Self {
        Self {
            move_cost: Self::DEFAULT_MOVE_COST,
            dangerous_adversary: Self::DEFAULT_DANGEROUS_ADVERSARY,
            edible_adversary: Self::DEFAULT_EDIBLE_ADVERSARY,
            capsule: Self::DEFAULT_CAPSULE,
            item: Self::DEFAULT_ITEM,
            empty: Self::DEFAULT_EMPTY,
        }
    }

    const fn adversary(&self, edible: bool) -> f64 {
        if edible {
            self.edible_adversary
        } else {
            self.dangerous_adversary
        }
    }
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Category of a reachable cell for the current planning cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RewardKind {
    Adversary { edible: bool },
    HazardDangerous,
    HazardEdible,
    Item,
    Capsule,
    Empty,
}

impl RewardKind {
    /// Adversary cells are terminal: their utility never changes.
    pub const fn is_absorbing(self) -> bool {
        matches!(self, RewardKind::Adversary { .. })
    }

    /// Utility assigned before the first Bellman sweep.
    pub const fn initial_utility(self, table: &RewardTable) -> f64 {
        match self {
            RewardKind::Empty => table.empty,
            other => other.state_reward(table),
        }
    }

    /// `R(s)` used by the Bellman update. Empty cells pay the move cost.
    pub const fn state_reward(self, table: &RewardTable) -> f64 {
        match self {
            RewardKind::Adversary { edible } => table.adversary(edible),
            RewardKind::HazardDangerous => table.dangerous_adversary,
            RewardKind::HazardEdible => table.edible_adversary,
            RewardKind::Item => table.item,
            RewardKind::Capsule => table.capsule,
            RewardKind::Empty => table.move_cost,
        }
    }
}

/// Collectibles observed this cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Collectibles {
    pub food: HashSet<Cell>,
    pub capsules: HashSet<Cell>,
}

/// Per-cycle category of every reachable cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    kinds: HashMap<Cell, RewardKind>,
}

impl Classification {
    /// Classifies every cell of `graph` following the fixed precedence.
    pub fn classify(
        graph: &AdjacencyGraph,
        adversaries: &Adversaries,
        hazards: &HazardField,
        collectibles: &Collectibles,
        edible_threshold: u32,
    ) -> Result<Self> {
        for cell in adversaries.cells() {
            graph.ensure_contains(cell)?;
        }

        let mut kinds = HashMap::with_capacity(graph.len());
        for cell in graph.cells() {
            let kind = if let Some(adversary) = adversaries.at(cell) {
                RewardKind::Adversary {
                    edible: adversary.is_edible(edible_threshold),
                }
            } else if let Some(owner) = hazards.attributed(cell) {
                let adversary = adversaries
                    .at(owner)
                    .ok_or(PlanError::CellNotInGraph(owner))?;
                if adversary.is_edible(edible_threshold) {
                    RewardKind::HazardEdible
                } else {
                    RewardKind::HazardDangerous
                }
            } else if collectibles.food.contains(&cell) {
                RewardKind::Item
            } else if collectibles.capsules.contains(&cell) {
                RewardKind::Capsule
            } else {
                RewardKind::Empty
            };
            kinds.insert(cell, kind);
        }

        Ok(Self { kinds })
    }

    pub fn kind(&self, cell: Cell) -> Result<RewardKind> {
        self.kinds
            .get(&cell)
            .copied()
            .ok_or(PlanError::CellNotInGraph(cell))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, RewardKind)> + '_ {
        self.kinds.iter().map(|(&cell, &kind)| (cell, kind))
    }

    /// Number of cells in each category, keyed by the category's snake-case name.
    pub fn histogram(&self) -> HashMap<&'static str, usize> {
        let mut counts = HashMap::new();
        for kind in self.kinds.values() {
            let label: &'static str = kind.into();
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
