//! Rules that peel redundant [`Expr::Paren`] groupings.

use crate::expr::Expr;
use crate::simplify::step::Step;
use crate::step_collector::StepCollector;
use super::do_grouping;

/// `(a) = a` for a constant, symbol, or nested grouping.
///
/// Groupings around compound expressions are kept: they were placed deliberately (for example
/// around the negative operand of a subtraction) and removing them would change the rendering.
pub fn collapse_grouping(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_grouping(expr, |inner| match inner {
        Expr::Num(_) | Expr::Symbol(_) | Expr::Paren(_) => Some(inner.clone()),
        _ => None,
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::CollapseGrouping);
    Some(opt)
}

/// `(a) = a` unconditionally.
///
/// Only used by the expanding rule set, where the tree is about to be rebuilt into a canonical
/// sum of monomials and the original grouping carries no information.
pub fn discard_grouping(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_grouping(expr, |inner| Some(inner.clone()))?;

    step_collector.push(Step::CollapseGrouping);
    Some(opt)
}
