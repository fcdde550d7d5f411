//! Shared test utilities
//!
//! Note: clippy reports false-positive dead_code warnings because it can't
//! trace usage across test binaries. These utilities are used by multiple tests.

#![allow(dead_code)]

use distagg::planner::{LogicalPlan, OutputColumn};
use distagg::sql::{BinaryOp, DataType, Literal, ResolvedColumn, ResolvedExpr};

/// Columns of the "kv" table: k INT NOT NULL, v INT, w INT
pub fn kv_scan() -> LogicalPlan {
    LogicalPlan::Scan {
        table: "kv".to_string(),
        columns: vec![
            OutputColumn::new(0, "k", DataType::Int, false),
            OutputColumn::new(1, "v", DataType::Int, true),
            OutputColumn::new(2, "w", DataType::Int, true),
        ],
    }
}

/// Group over kv with the given (render, alias) list
pub fn kv_group(render: Vec<(ResolvedExpr, &str)>) -> LogicalPlan {
    LogicalPlan::Group {
        input: Box::new(kv_scan()),
        render: render
            .into_iter()
            .map(|(expr, alias)| (expr, alias.to_string()))
            .collect(),
    }
}

pub fn column(name: &str, index: usize) -> ResolvedExpr {
    ResolvedExpr::Column(ResolvedColumn {
        table: "kv".to_string(),
        name: name.to_string(),
        index,
        data_type: DataType::Int,
        nullable: index != 0,
    })
}

pub fn k() -> ResolvedExpr {
    column("k", 0)
}

pub fn v() -> ResolvedExpr {
    column("v", 1)
}

pub fn w() -> ResolvedExpr {
    column("w", 2)
}

pub fn lit(value: i64) -> ResolvedExpr {
    ResolvedExpr::Literal(Literal::Integer(value))
}

pub fn binary(left: ResolvedExpr, op: BinaryOp, right: ResolvedExpr) -> ResolvedExpr {
    let result_type = match op {
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => {
            left.data_type()
        }
        _ => DataType::Boolean,
    };
    ResolvedExpr::BinaryOp {
        left: Box::new(left),
        op,
        right: Box::new(right),
        result_type,
    }
}

pub fn plus(left: ResolvedExpr, right: ResolvedExpr) -> ResolvedExpr {
    binary(left, BinaryOp::Add, right)
}

pub fn func(name: &str, args: Vec<ResolvedExpr>, distinct: bool) -> ResolvedExpr {
    let result_type = match name.to_uppercase().as_str() {
        "COUNT" => DataType::BigInt,
        "AVG" | "STDDEV" | "VARIANCE" => DataType::Double,
        _ => args.first().map(|a| a.data_type()).unwrap_or(DataType::BigInt),
    };
    ResolvedExpr::Function {
        name: name.to_string(),
        args,
        distinct,
        result_type,
    }
}

/// Aggregate marker around `inner`
pub fn marker(inner: ResolvedExpr) -> ResolvedExpr {
    ResolvedExpr::Aggregate(Box::new(inner))
}

/// Marked aggregate call, e.g. `agg_call("COUNT", k())`
pub fn agg_call(name: &str, arg: ResolvedExpr) -> ResolvedExpr {
    marker(func(name, vec![arg], false))
}

/// Nullable ordinal reference `@position`
pub fn at(position: usize, data_type: DataType) -> ResolvedExpr {
    ResolvedExpr::Ordinal {
        position,
        data_type,
        nullable: true,
    }
}

/// NOT NULL ordinal reference, as produced for a marker around `k`
pub fn at_not_null(position: usize, data_type: DataType) -> ResolvedExpr {
    ResolvedExpr::Ordinal {
        position,
        data_type,
        nullable: false,
    }
}
