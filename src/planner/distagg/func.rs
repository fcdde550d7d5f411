//! Aggregate function kinds understood by the distributed aggregator

use std::fmt;

use serde::{Deserialize, Serialize};

/// Aggregation run by the distributed aggregator over one input column.
///
/// `Ident` is the zero value. It forwards the column unchanged (used for
/// grouping columns that are selected as-is) and is never produced by a name
/// lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionKind {
    #[default]
    Ident,
    Avg,
    BoolAnd,
    BoolOr,
    ConcatAgg,
    Count,
    Max,
    Min,
    Stddev,
    Sum,
    SumInt,
    Variance,
    XorAgg,
}

impl FunctionKind {
    /// Look up an aggregate by SQL function name, ignoring case
    pub fn lookup(name: &str) -> Option<FunctionKind> {
        match name.to_uppercase().as_str() {
            "AVG" => Some(FunctionKind::Avg),
            "BOOL_AND" => Some(FunctionKind::BoolAnd),
            "BOOL_OR" => Some(FunctionKind::BoolOr),
            "CONCAT_AGG" => Some(FunctionKind::ConcatAgg),
            "COUNT" => Some(FunctionKind::Count),
            "MAX" => Some(FunctionKind::Max),
            "MIN" => Some(FunctionKind::Min),
            "STDDEV" => Some(FunctionKind::Stddev),
            "SUM" => Some(FunctionKind::Sum),
            "SUM_INT" => Some(FunctionKind::SumInt),
            "VARIANCE" => Some(FunctionKind::Variance),
            "XOR_AGG" => Some(FunctionKind::XorAgg),
            _ => None,
        }
    }

    /// Look up an aggregate by name, falling back to the zero value.
    ///
    /// An unknown name yields `FunctionKind::Ident`, not an error. Use
    /// [`FunctionKind::lookup`] when the caller needs to tell the two apart.
    pub fn from_name(name: &str) -> FunctionKind {
        Self::lookup(name).unwrap_or_default()
    }

    /// Canonical upper-case name
    pub fn name(&self) -> &'static str {
        match self {
            FunctionKind::Ident => "IDENT",
            FunctionKind::Avg => "AVG",
            FunctionKind::BoolAnd => "BOOL_AND",
            FunctionKind::BoolOr => "BOOL_OR",
            FunctionKind::ConcatAgg => "CONCAT_AGG",
            FunctionKind::Count => "COUNT",
            FunctionKind::Max => "MAX",
            FunctionKind::Min => "MIN",
            FunctionKind::Stddev => "STDDEV",
            FunctionKind::Sum => "SUM",
            FunctionKind::SumInt => "SUM_INT",
            FunctionKind::Variance => "VARIANCE",
            FunctionKind::XorAgg => "XOR_AGG",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
