//! Planner error types

use thiserror::Error;

/// Planner error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// Invalid plan structure
    #[error("Invalid plan: {0}")]
    InvalidPlan(String),

    /// Aggregate function name with no known aggregation
    #[error("Unknown aggregate function: '{0}'")]
    UnknownAggregate(String),

    /// Internal error
    #[error("Internal planner error: {0}")]
    Internal(String),
}

/// Result type for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
