//! distagg - distributed aggregation planning
//!
//! Splits the render expressions of a grouping operator into:
//! - the per-column aggregations run by a distributed aggregator stage
//! - the expressions evaluated over the aggregator's output, if any

pub mod planner;
pub mod sql;
