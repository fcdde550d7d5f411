//! Shared test utilities for planner module tests

use crate::sql::{BinaryOp, DataType, Literal, ResolvedColumn, ResolvedExpr};

/// Nullable INT column of table "kv"
pub fn col(name: &str, index: usize) -> ResolvedExpr {
    ResolvedExpr::Column(ResolvedColumn {
        table: "kv".to_string(),
        name: name.to_string(),
        index,
        data_type: DataType::Int,
        nullable: true,
    })
}

/// NOT NULL INT column of table "kv"
pub fn not_null_col(name: &str, index: usize) -> ResolvedExpr {
    ResolvedExpr::Column(ResolvedColumn {
        table: "kv".to_string(),
        name: name.to_string(),
        index,
        data_type: DataType::Int,
        nullable: false,
    })
}

pub fn int(value: i64) -> ResolvedExpr {
    ResolvedExpr::Literal(Literal::Integer(value))
}

/// INT addition
pub fn add(left: ResolvedExpr, right: ResolvedExpr) -> ResolvedExpr {
    ResolvedExpr::BinaryOp {
        left: Box::new(left),
        op: BinaryOp::Add,
        right: Box::new(right),
        result_type: DataType::Int,
    }
}

/// Function call returning BIGINT
pub fn call(name: &str, args: Vec<ResolvedExpr>) -> ResolvedExpr {
    ResolvedExpr::Function {
        name: name.to_string(),
        args,
        distinct: false,
        result_type: DataType::BigInt,
    }
}

pub fn count(arg: ResolvedExpr) -> ResolvedExpr {
    call("COUNT", vec![arg])
}

pub fn count_distinct(arg: ResolvedExpr) -> ResolvedExpr {
    ResolvedExpr::Function {
        name: "COUNT".to_string(),
        args: vec![arg],
        distinct: true,
        result_type: DataType::BigInt,
    }
}

pub fn sum(arg: ResolvedExpr) -> ResolvedExpr {
    call("SUM", vec![arg])
}

/// Aggregate marker
pub fn agg(inner: ResolvedExpr) -> ResolvedExpr {
    ResolvedExpr::Aggregate(Box::new(inner))
}

/// Nullable ordinal reference
pub fn ordinal(position: usize, data_type: DataType) -> ResolvedExpr {
    ResolvedExpr::Ordinal {
        position,
        data_type,
        nullable: true,
    }
}

pub fn not_null_ordinal(position: usize, data_type: DataType) -> ResolvedExpr {
    ResolvedExpr::Ordinal {
        position,
        data_type,
        nullable: false,
    }
}
