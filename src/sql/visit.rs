//! Traversal over resolved expression trees
//!
//! Two styles are supported:
//!
//! - [`ResolvedExpr::walk`]: read-only pre-order visitation. The visitor
//!   decides per node whether to descend, so a pass can treat a subtree as a
//!   leaf once it has recognized it.
//! - [`ResolvedExpr::map_children_with`]: consumes a node and rebuilds it
//!   from rewritten children, threading an accumulator through the children
//!   left to right. Recursing through it gives a bottom-up rewrite.

use super::ast::ResolvedExpr;

/// Whether a walk descends into the children of the node just visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recursion {
    /// Visit the children
    Continue,
    /// Treat the node as a leaf
    Skip,
}

/// Read-only expression visitor
pub trait ExprVisitor {
    /// Called before the children of `expr` are visited
    fn visit_pre(&mut self, expr: &ResolvedExpr) -> Recursion;

    /// Called after the children of `expr` were visited. Not called for
    /// nodes whose `visit_pre` returned [`Recursion::Skip`].
    fn visit_post(&mut self, _expr: &ResolvedExpr) {}
}

impl ResolvedExpr {
    /// Direct children, left to right
    pub fn children(&self) -> Vec<&ResolvedExpr> {
        match self {
            ResolvedExpr::Column(_) | ResolvedExpr::Literal(_) | ResolvedExpr::Ordinal { .. } => {
                vec![]
            }
            ResolvedExpr::BinaryOp { left, right, .. } => vec![left.as_ref(), right.as_ref()],
            ResolvedExpr::UnaryOp { expr, .. } => vec![expr.as_ref()],
            ResolvedExpr::Function { args, .. } => args.iter().collect(),
            ResolvedExpr::IsNull { expr, .. } => vec![expr.as_ref()],
            ResolvedExpr::InList { expr, list, .. } => {
                let mut children = Vec::with_capacity(list.len() + 1);
                children.push(expr.as_ref());
                children.extend(list.iter());
                children
            }
            ResolvedExpr::Between {
                expr, low, high, ..
            } => vec![expr.as_ref(), low.as_ref(), high.as_ref()],
            ResolvedExpr::Aggregate(inner) => vec![inner.as_ref()],
        }
    }

    /// Walk this tree in pre-order
    pub fn walk<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) {
        if visitor.visit_pre(self) == Recursion::Skip {
            return;
        }
        for child in self.children() {
            child.walk(visitor);
        }
        visitor.visit_post(self);
    }

    /// Rebuild this node with every direct child replaced by `f(child, acc)`.
    ///
    /// Children are processed left to right; the accumulator returned by one
    /// call is passed to the next and finally returned with the rebuilt node.
    /// Leaves come back unchanged together with the untouched accumulator.
    pub fn map_children_with<A, F>(self, acc: A, mut f: F) -> (ResolvedExpr, A)
    where
        F: FnMut(ResolvedExpr, A) -> (ResolvedExpr, A),
    {
        match self {
            leaf @ (ResolvedExpr::Column(_)
            | ResolvedExpr::Literal(_)
            | ResolvedExpr::Ordinal { .. }) => (leaf, acc),

            ResolvedExpr::BinaryOp {
                left,
                op,
                right,
                result_type,
            } => {
                let (left, acc) = f(*left, acc);
                let (right, acc) = f(*right, acc);
                (
                    ResolvedExpr::BinaryOp {
                        left: Box::new(left),
                        op,
                        right: Box::new(right),
                        result_type,
                    },
                    acc,
                )
            }

            ResolvedExpr::UnaryOp {
                op,
                expr,
                result_type,
            } => {
                let (expr, acc) = f(*expr, acc);
                (
                    ResolvedExpr::UnaryOp {
                        op,
                        expr: Box::new(expr),
                        result_type,
                    },
                    acc,
                )
            }

            ResolvedExpr::Function {
                name,
                args,
                distinct,
                result_type,
            } => {
                let (args, acc) = map_all(args, acc, &mut f);
                (
                    ResolvedExpr::Function {
                        name,
                        args,
                        distinct,
                        result_type,
                    },
                    acc,
                )
            }

            ResolvedExpr::IsNull { expr, negated } => {
                let (expr, acc) = f(*expr, acc);
                (
                    ResolvedExpr::IsNull {
                        expr: Box::new(expr),
                        negated,
                    },
                    acc,
                )
            }

            ResolvedExpr::InList {
                expr,
                list,
                negated,
            } => {
                let (expr, acc) = f(*expr, acc);
                let (list, acc) = map_all(list, acc, &mut f);
                (
                    ResolvedExpr::InList {
                        expr: Box::new(expr),
                        list,
                        negated,
                    },
                    acc,
                )
            }

            ResolvedExpr::Between {
                expr,
                low,
                high,
                negated,
            } => {
                let (expr, acc) = f(*expr, acc);
                let (low, acc) = f(*low, acc);
                let (high, acc) = f(*high, acc);
                (
                    ResolvedExpr::Between {
                        expr: Box::new(expr),
                        low: Box::new(low),
                        high: Box::new(high),
                        negated,
                    },
                    acc,
                )
            }

            ResolvedExpr::Aggregate(inner) => {
                let (inner, acc) = f(*inner, acc);
                (ResolvedExpr::Aggregate(Box::new(inner)), acc)
            }
        }
    }
}

fn map_all<A, F>(exprs: Vec<ResolvedExpr>, mut acc: A, f: &mut F) -> (Vec<ResolvedExpr>, A)
where
    F: FnMut(ResolvedExpr, A) -> (ResolvedExpr, A),
{
    let mut mapped = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let (expr, next) = f(expr, acc);
        mapped.push(expr);
        acc = next;
    }
    (mapped, acc)
}
