//! Post-aggregation expressions
//!
//! The aggregator emits one column per aggregate marker, but the group's
//! output may combine several of them. For `SELECT COUNT(k) + COUNT(v) FROM
//! kv` the aggregator produces `[count(k), count(v)]` while the query wants
//! `[count(k) + count(v)]`; the gap is bridged by evaluating `@0 + @1` over
//! the aggregator's output rows.
//!
//! Ordinals are numbered across all render expressions with the same counter
//! the extraction uses for column indexes, so
//! `SELECT COUNT(k), COUNT(v), COUNT(k) + COUNT(v) FROM kv` becomes
//! `[@0, @1, @2 + @3]` over the aggregator output
//! `[count(k), count(v), count(k), count(v)]`.

use tracing::debug;

use crate::sql::ResolvedExpr;

use super::PostAggregation;

/// Replace every aggregate marker with an ordinal reference into the
/// aggregator's output.
///
/// `needs_evaluation` is false when every rewritten expression is a bare
/// ordinal: the aggregator output then already has the shape of the group's
/// output and can be forwarded as-is.
pub fn extract_post_agg_exprs(render: &[ResolvedExpr]) -> PostAggregation {
    let mut next = 0;
    let mut exprs = Vec::with_capacity(render.len());
    for expr in render {
        let (rewritten, after) = substitute(expr.clone(), next);
        exprs.push(rewritten);
        next = after;
    }

    let needs_evaluation = !exprs.iter().all(ResolvedExpr::is_ordinal);
    debug!(
        render = render.len(),
        ordinals = next,
        needs_evaluation,
        "Extracted post-aggregation expressions"
    );

    PostAggregation {
        exprs,
        needs_evaluation,
        ordinals: next,
    }
}

/// Bottom-up: children are substituted before their parent is rebuilt, so
/// `COUNT(k) + COUNT(v)` is rebuilt as `@n + @n+1`. The subtree under a
/// marker is dropped, not rewritten.
fn substitute(expr: ResolvedExpr, next: usize) -> (ResolvedExpr, usize) {
    match expr {
        marker @ ResolvedExpr::Aggregate(_) => (
            ResolvedExpr::Ordinal {
                position: next,
                data_type: marker.data_type(),
                nullable: marker.is_nullable(),
            },
            next + 1,
        ),
        other => other.map_children_with(next, substitute),
    }
}
