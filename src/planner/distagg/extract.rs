//! Aggregation extraction
//!
//! Flattens the aggregate markers of a group's render expressions into the
//! column specs run by the distributed aggregator. For the n-th marker found
//! (across all render expressions, not per expression) the aggregator reads
//! the n-th input column:
//!
//! ```text
//! SELECT COUNT(k), SUM(v + w), v + w FROM kv GROUP BY v + w
//!   render:  [COUNT(k), SUM(v + w), v + w]
//!   specs:   [COUNT @0, SUM @1, IDENT @2]
//!
//! SELECT COUNT(k) + COUNT(v) FROM kv
//!   render:  [COUNT(k) + COUNT(v)]
//!   specs:   [COUNT @0, COUNT @1]
//! ```
//!
//! The addition in the second query is left to the post-aggregation stage,
//! see [`super::rewrite`].

use tracing::{debug, trace, warn};

use crate::planner::config::{DistAggConfig, UnknownAggregatePolicy};
use crate::planner::error::{PlannerError, PlannerResult};
use crate::sql::{ExprVisitor, Recursion, ResolvedExpr};

use super::func::FunctionKind;
use super::AggregatorColumnSpec;

/// Extracts aggregator column specs from render expressions
#[derive(Debug, Clone, Default)]
pub struct AggExtractor {
    config: DistAggConfig,
}

impl AggExtractor {
    /// Create an extractor with the given configuration
    pub fn new(config: DistAggConfig) -> Self {
        Self { config }
    }

    /// Extract one column spec per aggregate marker.
    ///
    /// Fails only when the policy is `Reject` and a marker wraps a call to an
    /// unknown aggregate; the first such name is reported.
    pub fn extract(&self, render: &[ResolvedExpr]) -> PlannerResult<Vec<AggregatorColumnSpec>> {
        let policy = self.config.unknown_aggregate;
        let collected = collect(render, policy);

        if policy == UnknownAggregatePolicy::Reject {
            if let Some(name) = collected.unknown.into_iter().next() {
                return Err(PlannerError::UnknownAggregate(name));
            }
        }
        Ok(collected.specs)
    }
}

/// Extract one column spec per aggregate marker, in discovery order.
///
/// Never fails: a call to an unknown aggregate is mapped to
/// `FunctionKind::default()`.
pub fn extract_agg_exprs(render: &[ResolvedExpr]) -> Vec<AggregatorColumnSpec> {
    collect(render, UnknownAggregatePolicy::ZeroValue).specs
}

struct Collected {
    specs: Vec<AggregatorColumnSpec>,
    unknown: Vec<String>,
}

fn collect(render: &[ResolvedExpr], policy: UnknownAggregatePolicy) -> Collected {
    let mut visitor = AggExprVisitor {
        policy,
        specs: Vec::new(),
        unknown: Vec::new(),
    };
    for expr in render {
        expr.walk(&mut visitor);
    }

    let mut specs = visitor.specs;
    for (idx, spec) in specs.iter_mut().enumerate() {
        spec.col_idx = idx as u32;
        trace!(col_idx = spec.col_idx, func = %spec.func, distinct = spec.distinct, "aggregation");
    }
    debug!(
        render = render.len(),
        aggregations = specs.len(),
        "Extracted aggregations"
    );

    Collected {
        specs,
        unknown: visitor.unknown,
    }
}

/// Stops at every aggregate marker; anything else is descended into so that
/// markers nested in expressions like `COUNT(k) + 1` are found.
struct AggExprVisitor {
    policy: UnknownAggregatePolicy,
    specs: Vec<AggregatorColumnSpec>,
    unknown: Vec<String>,
}

impl AggExprVisitor {
    fn spec_for(&mut self, inner: &ResolvedExpr) -> AggregatorColumnSpec {
        let ResolvedExpr::Function { name, distinct, .. } = inner else {
            return AggregatorColumnSpec::new(FunctionKind::Ident, false);
        };

        let func = match FunctionKind::lookup(name) {
            Some(func) => func,
            None => {
                if self.policy == UnknownAggregatePolicy::ZeroValue {
                    warn!(function = %name, "Unknown aggregate function, using pass-through aggregation");
                }
                self.unknown.push(name.clone());
                FunctionKind::default()
            }
        };
        AggregatorColumnSpec::new(func, *distinct)
    }
}

impl ExprVisitor for AggExprVisitor {
    fn visit_pre(&mut self, expr: &ResolvedExpr) -> Recursion {
        let ResolvedExpr::Aggregate(inner) = expr else {
            return Recursion::Continue;
        };
        let spec = self.spec_for(inner);
        self.specs.push(spec);
        Recursion::Skip
    }
}
