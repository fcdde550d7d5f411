//! Resolved expression tree
//!
//! These are the typed expressions handed to the planner after name
//! resolution and type checking. Aggregate invocations (and grouping columns
//! re-selected verbatim) arrive wrapped in [`ResolvedExpr::Aggregate`]
//! markers; the distributed aggregation pass replaces those markers with
//! [`ResolvedExpr::Ordinal`] references into the aggregator's output stream.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::DataType;

/// Literal value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// SQL spelling of the operator
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    Not,
    Neg,
}

/// Resolved column reference with metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedColumn {
    pub table: String,
    pub name: String,
    /// Position of the column in the input stream
    pub index: usize,
    pub data_type: DataType,
    pub nullable: bool,
}

/// Resolved expression with type information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResolvedExpr {
    /// Resolved column reference
    Column(ResolvedColumn),
    /// Literal value
    Literal(Literal),
    /// Binary operation with result type
    BinaryOp {
        left: Box<ResolvedExpr>,
        op: BinaryOp,
        right: Box<ResolvedExpr>,
        result_type: DataType,
    },
    /// Unary operation with result type
    UnaryOp {
        op: UnaryOp,
        expr: Box<ResolvedExpr>,
        result_type: DataType,
    },
    /// Function call with result type
    Function {
        name: String,
        args: Vec<ResolvedExpr>,
        distinct: bool,
        result_type: DataType,
    },
    /// IS NULL / IS NOT NULL
    IsNull {
        expr: Box<ResolvedExpr>,
        negated: bool,
    },
    /// IN (list)
    InList {
        expr: Box<ResolvedExpr>,
        list: Vec<ResolvedExpr>,
        negated: bool,
    },
    /// BETWEEN
    Between {
        expr: Box<ResolvedExpr>,
        low: Box<ResolvedExpr>,
        high: Box<ResolvedExpr>,
        negated: bool,
    },
    /// One aggregated value of a grouping operator.
    ///
    /// Wraps either an aggregate function call (`COUNT(k)`) or, for a
    /// grouping column selected as-is, the plain expression. Markers never
    /// nest.
    Aggregate(Box<ResolvedExpr>),
    /// Reference to the `position`-th column of the aggregator output.
    /// Type and nullability are those of the marker it replaced.
    Ordinal {
        position: usize,
        data_type: DataType,
        nullable: bool,
    },
}

impl ResolvedExpr {
    /// Get the data type of this expression
    pub fn data_type(&self) -> DataType {
        match self {
            ResolvedExpr::Column(col) => col.data_type.clone(),
            ResolvedExpr::Literal(lit) => match lit {
                Literal::Boolean(_) => DataType::Boolean,
                Literal::Integer(_) => DataType::BigInt,
                Literal::Float(_) => DataType::Double,
                Literal::String(_) => DataType::Text,
            },
            ResolvedExpr::BinaryOp { result_type, .. } => result_type.clone(),
            ResolvedExpr::UnaryOp { result_type, .. } => result_type.clone(),
            ResolvedExpr::Function { result_type, .. } => result_type.clone(),
            ResolvedExpr::IsNull { .. } => DataType::Boolean,
            ResolvedExpr::InList { .. } => DataType::Boolean,
            ResolvedExpr::Between { .. } => DataType::Boolean,
            ResolvedExpr::Aggregate(inner) => inner.data_type(),
            ResolvedExpr::Ordinal { data_type, .. } => data_type.clone(),
        }
    }

    /// Check if this expression is nullable
    pub fn is_nullable(&self) -> bool {
        match self {
            ResolvedExpr::Column(col) => col.nullable,
            ResolvedExpr::Literal(_) => false,
            ResolvedExpr::BinaryOp { left, right, .. } => left.is_nullable() || right.is_nullable(),
            ResolvedExpr::UnaryOp { expr, .. } => expr.is_nullable(),
            ResolvedExpr::Function { args, .. } => args.iter().any(|a| a.is_nullable()),
            ResolvedExpr::IsNull { .. } => false,
            ResolvedExpr::InList { expr, list, .. } => {
                expr.is_nullable() || list.iter().any(|e| e.is_nullable())
            }
            ResolvedExpr::Between {
                expr, low, high, ..
            } => expr.is_nullable() || low.is_nullable() || high.is_nullable(),
            // Aggregates can be NULL for empty groups
            ResolvedExpr::Aggregate(inner) => match inner.as_ref() {
                ResolvedExpr::Function { .. } => true,
                other => other.is_nullable(),
            },
            ResolvedExpr::Ordinal { nullable, .. } => *nullable,
        }
    }

    /// Check if this is an aggregate marker
    pub fn is_aggregate(&self) -> bool {
        matches!(self, ResolvedExpr::Aggregate(_))
    }

    /// Check if this is a bare ordinal reference
    pub fn is_ordinal(&self) -> bool {
        matches!(self, ResolvedExpr::Ordinal { .. })
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Boolean(true) => write!(f, "TRUE"),
            Literal::Boolean(false) => write!(f, "FALSE"),
            Literal::Integer(i) => write!(f, "{}", i),
            Literal::Float(v) => write!(f, "{}", v),
            Literal::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, exprs: &[ResolvedExpr]) -> fmt::Result {
    for (i, expr) in exprs.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", expr)?;
    }
    Ok(())
}

impl fmt::Display for ResolvedExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedExpr::Column(col) => write!(f, "{}", col.name),
            ResolvedExpr::Literal(lit) => write!(f, "{}", lit),
            ResolvedExpr::BinaryOp {
                left, op, right, ..
            } => write!(f, "({} {} {})", left, op.symbol(), right),
            ResolvedExpr::UnaryOp { op, expr, .. } => match op {
                UnaryOp::Not => write!(f, "(NOT {})", expr),
                UnaryOp::Neg => write!(f, "(-{})", expr),
            },
            ResolvedExpr::Function {
                name,
                args,
                distinct,
                ..
            } => {
                write!(f, "{}(", name)?;
                if *distinct {
                    write!(f, "DISTINCT ")?;
                }
                write_list(f, args)?;
                write!(f, ")")
            }
            ResolvedExpr::IsNull { expr, negated } => {
                let not = if *negated { " NOT" } else { "" };
                write!(f, "({} IS{} NULL)", expr, not)
            }
            ResolvedExpr::InList {
                expr,
                list,
                negated,
            } => {
                let not = if *negated { " NOT" } else { "" };
                write!(f, "({}{} IN (", expr, not)?;
                write_list(f, list)?;
                write!(f, "))")
            }
            ResolvedExpr::Between {
                expr,
                low,
                high,
                negated,
            } => {
                let not = if *negated { " NOT" } else { "" };
                write!(f, "({}{} BETWEEN {} AND {})", expr, not, low, high)
            }
            // Markers are invisible in SQL text
            ResolvedExpr::Aggregate(inner) => write!(f, "{}", inner),
            ResolvedExpr::Ordinal { position, .. } => write!(f, "@{}", position),
        }
    }
}
