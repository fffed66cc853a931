//! Common error infrastructure for planner-core.
//!
//! Every stage of the planning pipeline reports failures through [`PlanError`].
//! The variants are classified with an [`ErrorSeverity`] so callers can decide
//! whether to abort the planning cycle, reject their input, or investigate a bug.
//!
//! # Design Principles
//!
//! - **Fail fast**: querying a cell outside the reachable graph is never
//!   silently defaulted
//! - **Rich Context**: errors carry the offending cell, direction or counts
//! - **Severity Classification**: errors are categorized for handling strategies

use crate::cell::Cell;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Inconsistency between pipeline stages, indicates a bug
/// - **Fatal**: The planning cycle cannot produce a policy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown direction name, invalid discount factor
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: hazard field references a cell missing from the graph
    Internal,

    /// Fatal error - the planning cycle must abort.
    ///
    /// Examples: value iteration did not converge, no legal actions
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all planner errors.
///
/// Provides a uniform interface for error classification across crates that
/// wrap [`PlanError`].
pub trait PlannerError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Failures raised while building the graph, analysing hazards, solving
/// utilities, or extracting the policy.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PlanError {
    #[error("cell {0} is not in the reachable graph")]
    CellNotInGraph(Cell),

    #[error("unknown direction {0:?}")]
    UnknownDirection(String),

    #[error("cells {from} and {to} are not adjacent")]
    NotAdjacent { from: Cell, to: Cell },

    #[error("no path from {from} to {to}")]
    Unreachable { from: Cell, to: Cell },

    #[error("value iteration failed to converge after {iterations} sweeps (residual {residual})")]
    NotConverged { iterations: usize, residual: f64 },

    #[error("no legal actions available at {0}")]
    NoLegalActions(Cell),

    #[error("grid exploration exceeded {limit} cells; is the layout enclosed?")]
    UnboundedGrid { limit: usize },

    #[error("start cell {0} is an obstacle")]
    StartIsObstacle(Cell),

    #[error("invalid planner configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("position ({x}, {y}) is not a grid coordinate")]
    InvalidPosition { x: f64, y: f64 },
}

impl PlannerError for PlanError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownDirection(_)
            | Self::NotAdjacent { .. }
            | Self::StartIsObstacle(_)
            | Self::InvalidConfig(_)
            | Self::InvalidPosition { .. } => ErrorSeverity::Validation,
            Self::CellNotInGraph(_) | Self::Unreachable { .. } => ErrorSeverity::Internal,
            Self::NotConverged { .. } | Self::NoLegalActions(_) | Self::UnboundedGrid { .. } => {
                ErrorSeverity::Fatal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CellNotInGraph(_) => "cell_not_in_graph",
            Self::UnknownDirection(_) => "unknown_direction",
            Self::NotAdjacent { .. } => "not_adjacent",
            Self::Unreachable { .. } => "unreachable",
            Self::NotConverged { .. } => "not_converged",
            Self::NoLegalActions(_) => "no_legal_actions",
            Self::UnboundedGrid { .. } => "unbounded_grid",
            Self::StartIsObstacle(_) => "start_is_obstacle",
            Self::InvalidConfig(_) => "invalid_config",
            Self::InvalidPosition { .. } => "invalid_position",
        }
    }
}

pub type Result<T> = core::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classification() {
        assert_eq!(
            PlanError::CellNotInGraph(Cell::new(1, 1)).severity(),
            ErrorSeverity::Internal
        );
        assert_eq!(
            PlanError::NotConverged {
                iterations: 10,
                residual: 1.0
            }
            .severity(),
            ErrorSeverity::Fatal
        );
        assert_eq!(
            PlanError::UnknownDirection("Up".into()).severity(),
            ErrorSeverity::Validation
        );
    }

    #[test]
    fn display_mentions_cell() {
        let err = PlanError::CellNotInGraph(Cell::new(3, 4));
        assert_eq!(err.to_string(), "cell (3, 4) is not in the reachable graph");
        assert_eq!(err.error_code(), "cell_not_in_graph");
    }
}
