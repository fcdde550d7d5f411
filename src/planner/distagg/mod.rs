//! Distributed aggregation planning
//!
//! A group node's render expressions carry aggregate markers. Planning it for
//! distributed execution takes two passes over the same render list:
//!
//! - [`extract_agg_exprs`] flattens the markers into the column specs run by
//!   the aggregator stage;
//! - [`extract_post_agg_exprs`] replaces the markers with ordinal references
//!   into the aggregator output and decides whether an evaluation stage is
//!   needed after it.
//!
//! Both passes number markers with the same counter in the same order, so
//! `@i` in a post-aggregation expression always reads the output of
//! `aggregations[i]`.

pub mod extract;
pub mod func;
pub mod rewrite;

pub use extract::{extract_agg_exprs, AggExtractor};
pub use func::FunctionKind;
pub use rewrite::extract_post_agg_exprs;

use serde::{Deserialize, Serialize};

use crate::planner::config::DistAggConfig;
use crate::planner::error::{PlannerError, PlannerResult};
use crate::sql::ResolvedExpr;

/// One aggregation run by the aggregator: `func` over input column `col_idx`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorColumnSpec {
    pub func: FunctionKind,
    pub distinct: bool,
    pub col_idx: u32,
}

impl AggregatorColumnSpec {
    /// Create a spec reading column 0; extraction stamps the real index
    pub fn new(func: FunctionKind, distinct: bool) -> Self {
        Self {
            func,
            distinct,
            col_idx: 0,
        }
    }
}

/// Work shipped to the distributed aggregator. Produces one output column per
/// entry, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorSpec {
    pub aggregations: Vec<AggregatorColumnSpec>,
}

impl AggregatorSpec {
    /// Number of output columns
    pub fn len(&self) -> usize {
        self.aggregations.len()
    }

    /// Check if the aggregator produces no columns
    pub fn is_empty(&self) -> bool {
        self.aggregations.is_empty()
    }
}

/// Expressions to evaluate over the aggregator output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostAggregation {
    /// One rewritten expression per render expression
    pub exprs: Vec<ResolvedExpr>,
    /// False when every expression is a bare ordinal reference
    pub needs_evaluation: bool,
    /// Number of ordinal references assigned
    pub ordinals: usize,
}

/// Run both passes over a group's render expressions.
///
/// Fails if the policy rejects an unknown aggregate, or if the two passes
/// disagree on the number of aggregator columns.
pub fn plan_aggregation(
    render: &[ResolvedExpr],
    config: &DistAggConfig,
) -> PlannerResult<(AggregatorSpec, PostAggregation)> {
    let aggregations = AggExtractor::new(config.clone()).extract(render)?;
    let post = extract_post_agg_exprs(render);

    if aggregations.len() != post.ordinals {
        return Err(PlannerError::Internal(format!(
            "{} aggregations but {} ordinal references",
            aggregations.len(),
            post.ordinals
        )));
    }

    Ok((AggregatorSpec { aggregations }, post))
}
