//! SQL layer - resolved expression model
//!
//! This module provides:
//! - `ResolvedExpr`: typed expression trees produced by name resolution
//! - `DataType`: SQL types carried on those trees
//! - `ExprVisitor` / `map_children_with`: traversal and rewrite support

pub mod ast;
pub mod types;
pub mod visit;

pub use ast::*;
pub use types::DataType;
pub use visit::{ExprVisitor, Recursion};
