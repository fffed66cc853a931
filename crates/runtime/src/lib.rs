//! Runtime orchestration for the grid-world MDP planner.
//!
//! This crate owns the long-lived planning context and wires `planner-core`'s
//! pure pipeline to an environment. Consumers embed [`MdpAgent`] and call
//! [`MdpAgent::next_action`] once per turn with any [`planner_core::WorldView`].
//!
//! Modules are organized by responsibility:
//! - [`agent`] hosts the per-episode planner context and the planning cycle
//! - [`plan`] describes the result of one cycle
//! - [`config`] loads runtime configuration from the environment
//! - [`oracle`] provides `WorldView` adapters over static content
//! - [`error`] exposes the runtime error type
pub mod agent;
pub mod config;
pub mod error;
pub mod oracle;
pub mod plan;

pub use agent::MdpAgent;
pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use oracle::LayoutWorld;
pub use plan::Plan;
