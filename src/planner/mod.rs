//! Query planner
//!
//! Plans grouped queries for distributed execution.
//!
//! ## Pipeline
//!
//! ```text
//! LogicalPlan::Group { render, .. }
//!   → extract_agg_exprs()       → AggregatorSpec (one column per aggregate marker)
//!   → extract_post_agg_exprs()  → PostAggregation (markers replaced by @i)
//!   → PhysicalPlanner::plan()   → Aggregator [→ Evaluator]
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use distagg::planner::{ExplainOutput, PhysicalPlanner};
//!
//! let physical = PhysicalPlanner::new().plan(logical)?;
//! println!("{}", ExplainOutput::format(&physical));
//! ```

pub mod config;
pub mod distagg;
pub mod error;
pub mod explain;
pub mod logical;
pub mod physical;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{DistAggConfig, UnknownAggregatePolicy};
pub use distagg::{
    extract_agg_exprs, extract_post_agg_exprs, plan_aggregation, AggExtractor,
    AggregatorColumnSpec, AggregatorSpec, FunctionKind, PostAggregation,
};
pub use error::{PlannerError, PlannerResult};
pub use explain::ExplainOutput;
pub use logical::{LogicalPlan, OutputColumn};
pub use physical::{PhysicalPlan, PhysicalPlanner};
