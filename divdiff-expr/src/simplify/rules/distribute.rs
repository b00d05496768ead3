//! Expansion rules: rewriting subtraction as addition of a negation and distributing
//! multiplication over addition in both operand orders.
//!
//! These rules can *increase* the size of the expression, so they are not part of the basic rule
//! set; the beautifier opts into them to flatten a Newton-form polynomial into a sum of monomials.

use crate::expr::{BinOp, Expr};
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use super::{do_binary, do_unary};

/// `a-b = a + (-1)*b`
pub fn subtract_as_negation(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, |op, lhs, rhs| {
        if op == BinOp::Sub {
            Some(lhs.clone() + Expr::num(-1) * rhs.clone())
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::SubtractAsNegation);
    Some(opt)
}

/// `-a = (-1)*a`
pub fn negation_as_factor(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_unary(expr, |_, operand| {
        // constants are handled by folding; rewriting them here would loop
        if operand.is_num() {
            None
        } else {
            Some(Expr::num(-1) * operand.clone())
        }
    })?;

    step_collector.push(Step::NegationAsFactor);
    Some(opt)
}

/// `a/b = a * (1/b)` for a non-zero constant `b`
pub fn division_as_reciprocal(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, |op, lhs, rhs| {
        if op != BinOp::Div {
            return None;
        }
        let divisor = rhs.as_num()?;
        if divisor.cmp0() == std::cmp::Ordering::Equal {
            return None;
        }
        Some(lhs.clone() * Expr::Num(divisor.clone().recip()))
    })?;

    step_collector.push(Step::DivisionAsReciprocal);
    Some(opt)
}

/// `a*(b+c) = a*b + a*c`
pub fn distribute_left(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, |op, lhs, rhs| {
        if op != BinOp::Mul {
            return None;
        }
        if let Expr::Binary(BinOp::Add, b, c) = rhs {
            Some(lhs.clone() * (**b).clone() + lhs.clone() * (**c).clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::DistributeLeft);
    Some(opt)
}

/// `(a+b)*c = a*c + b*c`
pub fn distribute_right(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, |op, lhs, rhs| {
        if op != BinOp::Mul {
            return None;
        }
        if let Expr::Binary(BinOp::Add, a, b) = lhs {
            Some((**a).clone() * rhs.clone() + (**b).clone() * rhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::DistributeRight);
    Some(opt)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn left_distribution() {
        let expr = Expr::symbol("a") * (Expr::symbol("b") + Expr::symbol("c"));
        assert_eq!(
            distribute_left(&expr, &mut ()).unwrap(),
            Expr::symbol("a") * Expr::symbol("b") + Expr::symbol("a") * Expr::symbol("c"),
        );
    }

    #[test]
    fn subtraction_rewrite() {
        let expr = Expr::symbol("x") - Expr::num(1);
        assert_eq!(
            subtract_as_negation(&expr, &mut ()).unwrap(),
            Expr::symbol("x") + Expr::num(-1) * Expr::num(1),
        );
    }
}
