//! Runtime adapters exposing static content through [`planner_core::WorldView`].
//!
//! The layout data is immutable; the mutable parts of a world (agent position,
//! remaining food, adversary positions and timers) live on the adapter so
//! tests and tools can replay several turns.
mod layout;

pub use layout::LayoutWorld;
