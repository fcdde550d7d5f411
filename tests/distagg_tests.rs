//! Distributed aggregation planning tests

mod test_utils;

use distagg::planner::{
    extract_agg_exprs, extract_post_agg_exprs, plan_aggregation, AggExtractor,
    AggregatorColumnSpec, DistAggConfig, FunctionKind, PlannerError,
};
use distagg::sql::{BinaryOp, DataType, ResolvedExpr};
use pretty_assertions::assert_eq;
use test_utils::*;

fn spec(func: FunctionKind, distinct: bool, col_idx: u32) -> AggregatorColumnSpec {
    AggregatorColumnSpec {
        func,
        distinct,
        col_idx,
    }
}

// ============ Scenarios ============

/// SELECT COUNT(k), SUM(v + w), v + w FROM kv GROUP BY v + w
#[test]
fn test_count_sum_and_grouping_column() {
    let render = vec![
        agg_call("COUNT", k()),
        agg_call("SUM", plus(v(), w())),
        marker(plus(v(), w())),
    ];

    assert_eq!(
        extract_agg_exprs(&render),
        vec![
            spec(FunctionKind::Count, false, 0),
            spec(FunctionKind::Sum, false, 1),
            spec(FunctionKind::Ident, false, 2),
        ]
    );

    let post = extract_post_agg_exprs(&render);
    assert_eq!(
        post.exprs,
        vec![
            at(0, DataType::BigInt),
            at(1, DataType::Int),
            at(2, DataType::Int),
        ]
    );
    assert!(!post.needs_evaluation);
}

/// SELECT COUNT(k) + COUNT(v) FROM kv
#[test]
fn test_sum_of_counts() {
    let render = vec![plus(agg_call("COUNT", k()), agg_call("COUNT", v()))];

    assert_eq!(
        extract_agg_exprs(&render),
        vec![
            spec(FunctionKind::Count, false, 0),
            spec(FunctionKind::Count, false, 1),
        ]
    );

    let post = extract_post_agg_exprs(&render);
    assert_eq!(
        post.exprs,
        vec![plus(at(0, DataType::BigInt), at(1, DataType::BigInt))]
    );
    assert!(post.needs_evaluation);
}

/// SELECT k, v, COUNT(k) + COUNT(v) FROM kv GROUP BY k, v
#[test]
fn test_grouping_columns_and_computed_aggregate() {
    let render = vec![
        marker(k()),
        marker(v()),
        plus(agg_call("COUNT", k()), agg_call("COUNT", v())),
    ];

    let specs = extract_agg_exprs(&render);
    let summary: Vec<_> = specs.iter().map(|s| (s.func, s.col_idx)).collect();
    assert_eq!(
        summary,
        vec![
            (FunctionKind::Ident, 0),
            (FunctionKind::Ident, 1),
            (FunctionKind::Count, 2),
            (FunctionKind::Count, 3),
        ]
    );

    let post = extract_post_agg_exprs(&render);
    let shown: Vec<_> = post.exprs.iter().map(|e| e.to_string()).collect();
    assert_eq!(shown, vec!["@0", "@1", "(@2 + @3)"]);
    // The third entry is not a bare reference
    assert!(post.needs_evaluation);
}

// ============ Properties ============

#[test]
fn test_count_distinct_propagates() {
    let render = vec![marker(func("count", vec![k()], true))];
    assert_eq!(
        extract_agg_exprs(&render),
        vec![spec(FunctionKind::Count, true, 0)]
    );
}

#[test]
fn test_passthrough_of_call_argument_is_not_distinct() {
    // The marker wraps a non-aggregate form, so no distinct flag applies
    let render = vec![marker(plus(k(), lit(1)))];
    assert_eq!(
        extract_agg_exprs(&render),
        vec![spec(FunctionKind::Ident, false, 0)]
    );
}

#[test]
fn test_ordinals_line_up_with_column_specs() {
    let render = vec![
        binary(agg_call("MAX", v()), BinaryOp::Gt, lit(10)),
        marker(k()),
        plus(
            agg_call("AVG", w()),
            plus(agg_call("MIN", v()), agg_call("SUM_INT", k())),
        ),
    ];

    let specs = extract_agg_exprs(&render);
    let post = extract_post_agg_exprs(&render);

    // Ordinals in pre-order match the order the specs were produced in
    let mut positions = Vec::new();
    for expr in &post.exprs {
        collect_positions(expr, &mut positions);
    }
    let indexes: Vec<_> = specs.iter().map(|s| s.col_idx as usize).collect();
    assert_eq!(positions, indexes);
    assert_eq!(positions, vec![0, 1, 2, 3, 4]);

    let funcs: Vec<_> = specs.iter().map(|s| s.func).collect();
    assert_eq!(
        funcs,
        vec![
            FunctionKind::Max,
            FunctionKind::Ident,
            FunctionKind::Avg,
            FunctionKind::Min,
            FunctionKind::SumInt,
        ]
    );
}

fn collect_positions(expr: &ResolvedExpr, out: &mut Vec<usize>) {
    if let ResolvedExpr::Ordinal { position, .. } = expr {
        out.push(*position);
    }
    for child in expr.children() {
        collect_positions(child, out);
    }
}

#[test]
fn test_passes_are_repeatable() {
    let render = vec![
        marker(k()),
        plus(agg_call("COUNT", k()), agg_call("SUM", v())),
    ];

    assert_eq!(extract_agg_exprs(&render), extract_agg_exprs(&render));
    assert_eq!(extract_post_agg_exprs(&render), extract_post_agg_exprs(&render));
}

#[test]
fn test_wrapping_one_output_flips_needs_evaluation() {
    let bare = vec![marker(k()), agg_call("COUNT", v())];
    assert!(!extract_post_agg_exprs(&bare).needs_evaluation);

    let wrapped = vec![marker(k()), plus(agg_call("COUNT", v()), lit(1))];
    let post = extract_post_agg_exprs(&wrapped);
    assert!(post.needs_evaluation);
    assert_eq!(post.exprs[0], at_not_null(0, DataType::Int));
}

#[test]
fn test_marker_inner_subtree_is_dropped() {
    // Nothing of COUNT(k + 1) survives in the rewritten expression
    let render = vec![plus(
        marker(func("COUNT", vec![plus(k(), lit(1))], false)),
        lit(2),
    )];
    let post = extract_post_agg_exprs(&render);
    assert_eq!(post.exprs, vec![plus(at(0, DataType::BigInt), lit(2))]);
}

// ============ Unknown aggregates ============

#[test]
fn test_unknown_aggregate_resolves_to_zero_value() {
    // Known weak point: BOGUS is not rejected and reaches the aggregator as
    // a pass-through column
    let render = vec![agg_call("BOGUS", k())];
    assert_eq!(
        extract_agg_exprs(&render),
        vec![spec(FunctionKind::default(), false, 0)]
    );
    assert_eq!(FunctionKind::default(), FunctionKind::Ident);
}

#[test]
fn test_unknown_aggregate_rejected_by_strict_config() {
    let render = vec![agg_call("COUNT", k()), agg_call("BOGUS", v())];
    let config = DistAggConfig::new().strict();

    assert_eq!(
        AggExtractor::new(config.clone()).extract(&render),
        Err(PlannerError::UnknownAggregate("BOGUS".to_string()))
    );
    assert!(plan_aggregation(&render, &config).is_err());
    assert!(plan_aggregation(&render, &DistAggConfig::default()).is_ok());
}
