//! Data-driven planner content and loaders.
//!
//! This crate provides loaders for the files that describe a planning session:
//! - Grid layouts (ASCII `.lay` files: walls, food, capsules, agent, adversaries)
//! - Planner configuration (RON: rewards, transition model, iteration parameters)
//!
//! Content is consumed by runtime oracles and never appears in planning state.

pub mod loaders;

pub use loaders::{ConfigLoader, Layout, LayoutLoader};
