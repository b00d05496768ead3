//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the expression to simplify as an argument,
//! and returns `Some(expr)` with the simplified expression if the rule applies, or `None` if the
//! rule does not apply. Rules never recurse; [`simplify_with`](super::simplify_with) walks the
//! tree and offers every node to the active [`RuleSet`](super::RuleSet).

pub mod distribute;
pub mod fold;
pub mod grouping;
pub mod identity;
pub mod negation;

use crate::expr::{BinOp, Expr, UnaryOp};

/// If the expression is a binary node, calls the given transformation function with the operator
/// and both operands.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_binary(
    expr: &Expr,
    f: impl Fn(BinOp, &Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    if let Expr::Binary(op, lhs, rhs) = expr {
        f(*op, lhs, rhs)
    } else {
        None
    }
}

/// If the expression is a unary node, calls the given transformation function with the operator
/// and operand.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_unary(
    expr: &Expr,
    f: impl Fn(UnaryOp, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    if let Expr::Unary(op, operand) = expr {
        f(*op, operand)
    } else {
        None
    }
}

/// If the expression is a grouping node, calls the given transformation function with the inner
/// expression.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
pub(crate) fn do_grouping(
    expr: &Expr,
    f: impl Fn(&Expr) -> Option<Expr>,
) -> Option<Expr> {
    if let Expr::Paren(inner) = expr {
        f(inner)
    } else {
        None
    }
}
