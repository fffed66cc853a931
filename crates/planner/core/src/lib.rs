//! Deterministic MDP planning for grid-world agents.
//!
//! `planner-core` turns a static obstacle layout plus the facts observed each
//! turn (food, capsules, adversaries and their timers) into a single move:
//!
//! 1. [`graph::AdjacencyGraph`] discovers the reachable cells once per episode
//! 2. [`hazard::HazardField`] marks cells close to each adversary
//! 3. [`reward::Classification`] assigns every cell a reward category
//! 4. [`value_iteration::ValueIteration`] solves the Bellman equation
//! 5. [`policy::PolicyExtractor`] picks the move of maximum expected utility
//!
//! The crate performs no I/O and no logging; the runtime drives the pipeline.
pub mod adversary;
pub mod cell;
pub mod config;
pub mod env;
pub mod error;
pub mod graph;
pub mod hazard;
pub mod path;
pub mod policy;
pub mod reward;
pub mod transition;
pub mod utility;
pub mod value_iteration;

pub use adversary::{Adversaries, Adversary};
pub use cell::{Cell, Direction};
pub use config::PlannerConfig;
pub use env::{AdversaryReport, Observation, WorldView};
pub use error::{ErrorSeverity, PlanError, PlannerError, Result};
pub use graph::AdjacencyGraph;
pub use hazard::HazardField;
pub use path::shortest_path;
pub use policy::{PolicyExtractor, ScoredMove};
pub use reward::{Classification, Collectibles, RewardKind, RewardTable};
pub use transition::TransitionModel;
pub use utility::UtilityTable;
pub use value_iteration::{Convergence, ValueIteration, ValueIterationParams};
