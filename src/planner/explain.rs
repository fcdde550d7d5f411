//! EXPLAIN output formatting
//!
//! Formats physical plans for display to users.

use std::fmt;

use crate::planner::distagg::AggregatorColumnSpec;
use crate::planner::physical::PhysicalPlan;

/// Format a physical plan for EXPLAIN output
pub struct ExplainOutput;

impl ExplainOutput {
    /// Format a physical plan as a string
    pub fn format(plan: &PhysicalPlan) -> String {
        Tree(plan).to_string()
    }

    fn format_node(
        plan: &PhysicalPlan,
        indent: usize,
        out: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let prefix = "  ".repeat(indent);

        match plan {
            PhysicalPlan::TableScan { table, columns } => {
                let col_names: Vec<_> = columns.iter().map(|c| c.name.as_str()).collect();
                writeln!(out, "{}TableScan: {} [{}]", prefix, table, col_names.join(", "))
            }

            PhysicalPlan::Aggregator {
                input,
                spec,
                output,
            } => {
                let aggs: Vec<_> = spec.aggregations.iter().map(format_aggregation).collect();
                let cols: Vec<_> = output
                    .iter()
                    .map(|c| format!("{}: {}", c.name, c.data_type))
                    .collect();
                writeln!(out, "{}Aggregator", prefix)?;
                if !spec.is_empty() {
                    writeln!(out, "{}  aggregations: [{}]", prefix, aggs.join(", "))?;
                }
                writeln!(out, "{}  output: [{}]", prefix, cols.join(", "))?;
                Self::format_node(input, indent + 1, out)
            }

            PhysicalPlan::Evaluator { input, exprs } => {
                let items: Vec<_> = exprs
                    .iter()
                    .map(|(expr, alias)| format!("{} AS {}", expr, alias))
                    .collect();
                writeln!(out, "{}Evaluator: [{}]", prefix, items.join(", "))?;
                Self::format_node(input, indent + 1, out)
            }
        }
    }
}

fn format_aggregation(spec: &AggregatorColumnSpec) -> String {
    let distinct = if spec.distinct { "DISTINCT " } else { "" };
    format!("{}({}@{})", spec.func, distinct, spec.col_idx)
}

struct Tree<'a>(&'a PhysicalPlan);

impl fmt::Display for Tree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ExplainOutput::format_node(self.0, 0, f)
    }
}
