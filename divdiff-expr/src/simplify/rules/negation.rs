//! Sign normalization: folding negations into the surrounding operator.
//!
//! These rules keep rendered formulas free of double negatives like `a - -5` or `a + -3`.

use crate::expr::{BinOp, Expr, UnaryOp};
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use super::{do_binary, do_unary};

/// `-(-a) = a`
pub fn double_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_unary(expr, |_, operand| {
        if let Expr::Unary(UnaryOp::Neg, inner) = operand {
            Some((**inner).clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::DoubleNegation);
    Some(opt)
}

/// `a+(-b) = a-b`
pub fn add_negative(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, |op, lhs, rhs| {
        if op == BinOp::Add && rhs.is_negative() {
            Some(lhs.clone() - rhs.clone().into_unsigned())
        } else {
            None
        }
    })?;

    step_collector.push(Step::AddNegative);
    Some(opt)
}

/// `a-(-b) = a+b`
pub fn subtract_negative(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, |op, lhs, rhs| {
        if op == BinOp::Sub && rhs.is_negative() {
            Some(lhs.clone() + rhs.clone().into_unsigned())
        } else {
            None
        }
    })?;

    step_collector.push(Step::SubtractNegative);
    Some(opt)
}
