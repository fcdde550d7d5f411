//! Physical plan representation
//!
//! Physical plans describe the stages the distributed runtime executes. A
//! group node becomes an aggregator stage, optionally followed by an
//! evaluator stage that computes the group's output from the aggregator's
//! columns.

pub mod planner;

pub use planner::PhysicalPlanner;

use crate::planner::distagg::AggregatorSpec;
use crate::planner::logical::expr::OutputColumn;
use crate::sql::ResolvedExpr;

/// Physical plan node
#[derive(Debug, Clone)]
pub enum PhysicalPlan {
    /// Full table scan
    TableScan {
        table: String,
        columns: Vec<OutputColumn>,
    },

    /// Distributed aggregation; one output column per spec entry
    Aggregator {
        input: Box<PhysicalPlan>,
        spec: AggregatorSpec,
        output: Vec<OutputColumn>,
    },

    /// Evaluate expressions over each input row. `Ordinal` references read
    /// the input row's columns by position.
    Evaluator {
        input: Box<PhysicalPlan>,
        /// (expression, alias)
        exprs: Vec<(ResolvedExpr, String)>,
    },
}

impl PhysicalPlan {
    /// Get the output columns of this plan node
    pub fn output_columns(&self) -> Vec<OutputColumn> {
        match self {
            PhysicalPlan::TableScan { columns, .. } => columns.clone(),

            PhysicalPlan::Aggregator { output, .. } => output.clone(),

            PhysicalPlan::Evaluator { exprs, .. } => exprs
                .iter()
                .enumerate()
                .map(|(i, (expr, alias))| {
                    OutputColumn::new(i, alias.clone(), expr.data_type(), expr.is_nullable())
                })
                .collect(),
        }
    }
}
