//! Unified error types surfaced by the runtime.
//!
//! Wraps pipeline failures from `planner-core` and environment adapter
//! failures so clients can bubble them up with consistent context.
use planner_core::{ErrorSeverity, PlanError, PlannerError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("planner configuration rejected")]
    InvalidConfig(#[source] PlanError),

    #[error("failed to load planner config: {0}")]
    ConfigLoad(String),

    #[error("expected {expected} adversary timers, got {provided}")]
    TimerCountMismatch { expected: usize, provided: usize },
}

impl PlannerError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Plan(err) => err.severity(),
            Self::InvalidConfig(_) | Self::ConfigLoad(_) | Self::TimerCountMismatch { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Plan(err) => err.error_code(),
            Self::InvalidConfig(_) => "invalid_config",
            Self::ConfigLoad(_) => "config_load",
            Self::TimerCountMismatch { .. } => "timer_count_mismatch",
        }
    }
}
