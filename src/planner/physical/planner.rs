//! Physical planner
//!
//! Converts logical plans into physical (execution-ready) plans.

use tracing::debug;

use crate::planner::config::DistAggConfig;
use crate::planner::distagg::{plan_aggregation, PostAggregation};
use crate::planner::error::{PlannerError, PlannerResult};
use crate::planner::logical::expr::OutputColumn;
use crate::planner::logical::LogicalPlan;
use crate::sql::{DataType, ExprVisitor, Recursion, ResolvedExpr};

use super::PhysicalPlan;

/// Physical planner - converts logical plans to physical plans
#[derive(Debug, Clone, Default)]
pub struct PhysicalPlanner {
    config: DistAggConfig,
}

impl PhysicalPlanner {
    /// Create a planner with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a planner with the given settings
    pub fn with_config(config: DistAggConfig) -> Self {
        Self { config }
    }

    /// Convert a logical plan to a physical plan
    pub fn plan(&self, logical: LogicalPlan) -> PlannerResult<PhysicalPlan> {
        self.plan_node(logical)
    }

    /// Plan a single logical node
    fn plan_node(&self, logical: LogicalPlan) -> PlannerResult<PhysicalPlan> {
        match logical {
            LogicalPlan::Scan { table, columns } => Ok(PhysicalPlan::TableScan { table, columns }),

            LogicalPlan::Group { input, render } => self.plan_group(*input, render),
        }
    }

    /// Plan a group as an aggregator stage, followed by an evaluator stage
    /// unless the aggregator output already is the group's output.
    fn plan_group(
        &self,
        input: LogicalPlan,
        render: Vec<(ResolvedExpr, String)>,
    ) -> PlannerResult<PhysicalPlan> {
        if render.is_empty() {
            return Err(PlannerError::InvalidPlan(
                "group has no render expressions".to_string(),
            ));
        }

        let (exprs, aliases): (Vec<_>, Vec<_>) = render.into_iter().unzip();
        let (spec, post) = plan_aggregation(&exprs, &self.config)?;
        let columns = aggregator_columns(&post, spec.len())?;
        let input = Box::new(self.plan_node(input)?);

        debug!(
            aggregations = spec.len(),
            needs_evaluation = post.needs_evaluation,
            "Planned distributed aggregation"
        );

        if !post.needs_evaluation {
            // Every render is the bare @i, so column i takes render i's alias
            let output = columns
                .into_iter()
                .zip(aliases)
                .enumerate()
                .map(|(i, ((data_type, nullable), alias))| {
                    OutputColumn::new(i, alias, data_type, nullable)
                })
                .collect();
            return Ok(PhysicalPlan::Aggregator {
                input,
                spec,
                output,
            });
        }

        let output = columns
            .into_iter()
            .enumerate()
            .map(|(i, (data_type, nullable))| {
                OutputColumn::new(i, format!("agg_{}", i), data_type, nullable)
            })
            .collect();
        let aggregator = PhysicalPlan::Aggregator {
            input,
            spec,
            output,
        };

        Ok(PhysicalPlan::Evaluator {
            input: Box::new(aggregator),
            exprs: post.exprs.into_iter().zip(aliases).collect(),
        })
    }
}

/// Type and nullability of each aggregator output column, taken from the
/// ordinal references that read it.
fn aggregator_columns(
    post: &PostAggregation,
    width: usize,
) -> PlannerResult<Vec<(DataType, bool)>> {
    let mut collector = OrdinalColumns {
        columns: vec![None; width],
    };
    for expr in &post.exprs {
        expr.walk(&mut collector);
    }

    collector
        .columns
        .into_iter()
        .enumerate()
        .map(|(i, column)| {
            column.ok_or_else(|| {
                PlannerError::Internal(format!("aggregator column {} is never referenced", i))
            })
        })
        .collect()
}

struct OrdinalColumns {
    columns: Vec<Option<(DataType, bool)>>,
}

impl ExprVisitor for OrdinalColumns {
    fn visit_pre(&mut self, expr: &ResolvedExpr) -> Recursion {
        if let ResolvedExpr::Ordinal {
            position,
            data_type,
            nullable,
        } = expr
        {
            if let Some(slot) = self.columns.get_mut(*position) {
                *slot = Some((data_type.clone(), *nullable));
            }
        }
        Recursion::Continue
    }
}
