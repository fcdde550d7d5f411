//! Planner configuration

use serde::{Deserialize, Serialize};

/// What to do with an aggregate call whose name has no known aggregation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownAggregatePolicy {
    /// Map the call to `FunctionKind::default()` and log a warning.
    ///
    /// The aggregator then runs the pass-through aggregation over that
    /// column, which is almost certainly not what the query asked for.
    #[default]
    ZeroValue,
    /// Fail plan construction with `PlannerError::UnknownAggregate`
    Reject,
}

/// Distributed aggregation planning settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistAggConfig {
    /// Handling of unrecognized aggregate function names
    pub unknown_aggregate: UnknownAggregatePolicy,
}

impl DistAggConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unknown-aggregate policy
    #[must_use]
    pub fn unknown_aggregate(mut self, policy: UnknownAggregatePolicy) -> Self {
        self.unknown_aggregate = policy;
        self
    }

    /// Reject unknown aggregate names instead of mapping them to the zero value
    #[must_use]
    pub fn strict(self) -> Self {
        self.unknown_aggregate(UnknownAggregatePolicy::Reject)
    }
}
