//! Identity elimination for the additive and multiplicative identities.

use crate::expr::{BinOp, Expr};
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use super::do_binary;

/// `0+a = a`
/// `a+0 = a`
/// `a-0 = a`
/// `0-a = -a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, |op, lhs, rhs| match op {
        BinOp::Add if lhs.is_int(0) => Some(rhs.clone()),
        BinOp::Add | BinOp::Sub if rhs.is_int(0) => Some(lhs.clone()),
        BinOp::Sub if lhs.is_int(0) => Some(-rhs.clone()),
        _ => None,
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, |op, lhs, rhs| {
        if op == BinOp::Mul && (lhs.is_int(0) || rhs.is_int(0)) {
            Some(Expr::num(0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, |op, lhs, rhs| match op {
        BinOp::Mul if lhs.is_int(1) => Some(rhs.clone()),
        BinOp::Mul if rhs.is_int(1) => Some(lhs.clone()),
        _ => None,
    })?;

    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, |op, lhs, rhs| {
        if op == BinOp::Div && rhs.is_int(1) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, |op, lhs, rhs| {
        if op == BinOp::Pow && rhs.is_int(1) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `a^0 = 1`
pub fn power_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, |op, _, rhs| {
        if op == BinOp::Pow && rhs.is_int(0) {
            Some(Expr::num(1))
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}
