//! Exact constant folding.

use crate::expr::{BinOp, Expr};
use crate::primitive::rat;
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use rug::Rational;
use std::cmp::Ordering;
use super::{do_binary, do_unary};

/// Raises a rational to an integer power. Returns `None` for non-integer exponents, exponents
/// that overflow `i32`, and negative powers of zero.
fn pow(base: &Rational, exp: &Rational) -> Option<Rational> {
    if !exp.is_integer() {
        return None;
    }
    let exp = exp.numer().to_i32()?;
    if exp < 0 && base.cmp0() == Ordering::Equal {
        return None;
    }

    let mut result = rat(1);
    for _ in 0..exp.unsigned_abs() {
        result *= base;
    }
    if exp < 0 {
        result = result.recip();
    }
    Some(result)
}

/// Folds a binary operator applied to two constants into a single constant, exactly.
///
/// `2 + 3 = 5`
/// `(10 - 20)/(4 - 2) = -5`
///
/// Division by a zero constant is **not** folded: the quotient node stays in the tree as a
/// renderable symbolic artifact.
pub fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, |op, lhs, rhs| {
        let (lhs, rhs) = (lhs.as_num()?, rhs.as_num()?);
        let value = match op {
            BinOp::Add => Rational::from(lhs + rhs),
            BinOp::Sub => Rational::from(lhs - rhs),
            BinOp::Mul => Rational::from(lhs * rhs),
            BinOp::Div => {
                if rhs.cmp0() == Ordering::Equal {
                    return None;
                }
                Rational::from(lhs / rhs)
            },
            BinOp::Pow => pow(lhs, rhs)?,
        };
        Some(Expr::Num(value))
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::FoldConstants);
    Some(opt)
}

/// Folds negation of a constant into the constant itself.
///
/// `-(5) = -5`
pub fn fold_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_unary(expr, |_, operand| {
        operand.as_num().map(|num| Expr::Num(-num.clone()))
    })?;

    step_collector.push(Step::NegateConstant);
    Some(opt)
}
