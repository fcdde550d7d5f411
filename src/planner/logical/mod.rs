//! Logical plan representation
//!
//! Logical plans arrive from the logical planner with aggregate calls
//! already wrapped in markers; only the shapes the distributed aggregation
//! planner consumes are modelled here.

pub mod expr;

pub use expr::{ColumnId, OutputColumn};

use crate::sql::ResolvedExpr;

/// Logical plan node
#[derive(Debug, Clone)]
pub enum LogicalPlan {
    /// Table scan - read all rows from a table
    Scan {
        table: String,
        columns: Vec<OutputColumn>,
    },

    /// Grouping / aggregation
    Group {
        input: Box<LogicalPlan>,
        /// (render expression, output alias)
        render: Vec<(ResolvedExpr, String)>,
    },
}

impl LogicalPlan {
    /// Get the output columns of this plan node
    pub fn output_columns(&self) -> Vec<OutputColumn> {
        match self {
            LogicalPlan::Scan { columns, .. } => columns.clone(),

            LogicalPlan::Group { render, .. } => render
                .iter()
                .enumerate()
                .map(|(i, (expr, alias))| {
                    OutputColumn::new(i, alias.clone(), expr.data_type(), expr.is_nullable())
                })
                .collect(),
        }
    }
}
