//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which attempts to reduce the complexity of an
//! expression. It does this by repeatedly applying rewriting rules to the expression in multiple
//! passes, until no more rules apply.
//!
//! The set of rules is an explicit value, not a hidden global: [`simplify_with`] accepts any
//! [`RuleSet`], and callers can extend one with [`RuleSet::with`]. Two curated sets are provided:
//!
//! - [`RuleSet::basic`]: exact constant folding, identity elimination, sign normalization and
//!   grouping collapse. These rules only ever shrink the expression, and [`simplify`] (which uses
//!   them) is idempotent: simplifying a second time changes nothing.
//! - [`RuleSet::expanding`]: everything needed to flatten a polynomial into a sum of monomials:
//!   the folding and identity rules, plus subtraction-as-negation and two-sided distribution of
//!   multiplication over addition. Used by the beautifier.
//!
//! Both rule sets terminate on the bounded-degree polynomial expressions this workspace produces;
//! the tests pin that down.

pub mod rules;
pub mod step;

use crate::expr::Expr;
use crate::step_collector::StepCollector;
use step::Step;

/// A single rewriting rule.
///
/// A rule inspects only the top level of the given expression, and returns `Some(expr)` with the
/// rewritten expression if it applies.
pub type Rule = fn(&Expr, &mut dyn StepCollector<Step>) -> Option<Expr>;

/// An ordered collection of rewriting rules.
///
/// The first rule that applies to a node wins; the simplifier then re-offers the rewritten node
/// to the whole set until nothing applies.
#[derive(Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// The basic, strictly-simplifying rule set.
    pub fn basic() -> Self {
        Self {
            rules: vec![
                rules::fold::fold_constants,
                rules::fold::fold_negation,
                rules::identity::add_zero,
                rules::identity::multiply_zero,
                rules::identity::multiply_one,
                rules::identity::divide_one,
                rules::identity::power_one,
                rules::identity::power_zero,
                rules::negation::double_negation,
                rules::negation::add_negative,
                rules::negation::subtract_negative,
                rules::grouping::collapse_grouping,
            ],
        }
    }

    /// The expanding rule set: basic folding and identities, plus subtraction-as-negation and
    /// distribution of multiplication over addition in both operand orders.
    ///
    /// The sign-normalization rules of [`RuleSet::basic`] are deliberately absent; they would
    /// undo `a-b = a + (-1)*b` and the pair would rewrite forever.
    pub fn expanding() -> Self {
        Self {
            rules: vec![
                rules::fold::fold_constants,
                rules::fold::fold_negation,
                rules::identity::add_zero,
                rules::identity::multiply_zero,
                rules::identity::multiply_one,
                rules::identity::divide_one,
                rules::identity::power_one,
                rules::identity::power_zero,
                rules::negation::double_negation,
                rules::grouping::discard_grouping,
                rules::distribute::subtract_as_negation,
                rules::distribute::negation_as_factor,
                rules::distribute::division_as_reciprocal,
                rules::distribute::distribute_left,
                rules::distribute::distribute_right,
            ],
        }
    }

    /// Returns the rule set extended with one more rule, tried after the existing ones.
    pub fn with(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Applies the first rule that matches the top level of the given expression.
    fn apply(&self, expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
        self.rules.iter().find_map(|rule| rule(expr, step_collector))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::basic()
    }
}

/// Base implementation of the simplification algorithm.
fn inner_simplify_with(
    expr: &Expr,
    rules: &RuleSet,
    step_collector: &mut dyn StepCollector<Step>,
) -> (Expr, bool) {
    let mut expr = expr.clone();
    let mut changed_at_least_once = false;

    loop {
        let mut changed_in_this_pass = false;

        // try to simplify this expression using all rules
        if let Some(new_expr) = rules.apply(&expr, step_collector) {
            expr = new_expr;
            changed_in_this_pass = true;
            changed_at_least_once = true;
        }

        // then begin recursing into the expression's children
        match expr {
            Expr::Num(_) | Expr::Symbol(_) => return (expr, changed_at_least_once),
            Expr::Unary(_, ref mut operand) => {
                let result = inner_simplify_with(operand, rules, step_collector);
                **operand = result.0;
                // use |= instead of = to not reset these variables to false if already true
                changed_in_this_pass |= result.1;
                changed_at_least_once |= result.1;
            },
            Expr::Binary(_, ref mut lhs, ref mut rhs) => {
                let result_l = inner_simplify_with(lhs, rules, step_collector);
                let result_r = inner_simplify_with(rhs, rules, step_collector);

                **lhs = result_l.0;
                **rhs = result_r.0;
                changed_in_this_pass |= result_l.1 || result_r.1;
                changed_at_least_once |= result_l.1 || result_r.1;
            },
            Expr::Paren(ref mut inner) => {
                let result = inner_simplify_with(inner, rules, step_collector);
                **inner = result.0;
                changed_in_this_pass |= result.1;
                changed_at_least_once |= result.1;
            },
        }

        if !changed_in_this_pass {
            break;
        }
    }

    (expr, changed_at_least_once)
}

/// Simplify the given expression, using the basic rule set.
pub fn simplify(expr: &Expr) -> Expr {
    inner_simplify_with(expr, &RuleSet::basic(), &mut ()).0
}

/// Simplify the given expression, using the given rule set.
pub fn simplify_with(expr: &Expr, rules: &RuleSet) -> Expr {
    inner_simplify_with(expr, rules, &mut ()).0
}

/// Simplify the given expression with the given rule set. The steps taken by the simplifier will
/// also be collected and returned. This is useful for debugging, and also for displaying the
/// steps taken to the user.
pub fn simplify_with_steps(expr: &Expr, rules: &RuleSet) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify_with(expr, rules, &mut steps).0;
    (expr, steps)
}

#[cfg(test)]
mod tests {
    use crate::expr::{BinOp, Expr};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn fold_divided_difference_cell() {
        // (10 - 20)/(4 - 2) = -5
        let expr = (Expr::num(10) - Expr::num(20)) / (Expr::num(4) - Expr::num(2));
        assert_eq!(simplify(&expr), Expr::num(-5));
    }

    #[test]
    fn fold_to_exact_fraction() {
        // (-5 - 14)/(4 - 1) = -19/3
        let expr = (Expr::num(-5) - Expr::num(14)) / (Expr::num(4) - Expr::num(1));
        assert_eq!(simplify(&expr), Expr::num((-19, 3)));
    }

    #[test]
    fn sign_normalization() {
        let expr = Expr::symbol("a") - (-Expr::symbol("b"));
        assert_eq!(
            simplify(&expr),
            Expr::symbol("a") + Expr::symbol("b"),
        );
    }

    #[test]
    fn identities() {
        let expr = (Expr::symbol("x") * Expr::num(1) + Expr::num(0)) / Expr::num(1);
        assert_eq!(simplify(&expr), Expr::symbol("x"));
    }

    #[test]
    fn division_by_zero_is_kept_symbolic() {
        let expr = (Expr::num(3) - Expr::num(3)) / (Expr::num(2) - Expr::num(2));
        assert_eq!(simplify(&expr), Expr::num(0) / Expr::num(0));
    }

    #[test]
    fn idempotent() {
        let exprs = [
            (Expr::num(-5) - Expr::num(14)) / (Expr::num(4) - Expr::num(1)),
            Expr::symbol("a") - (-Expr::symbol("b")),
            Expr::num(14) * (Expr::symbol("x") - Expr::num(1)).grouped(),
        ];
        for expr in exprs {
            let once = simplify(&expr);
            assert_eq!(simplify(&once), once);
        }
    }

    #[test]
    fn expansion_distributes_both_sides() {
        // (x + 1) * (x + 2) = x*x + 3x + 2, reached purely by rewriting
        let expr = (Expr::symbol("x") + Expr::num(1)) * (Expr::symbol("x") + Expr::num(2));
        let expanded = simplify_with(&expr, &RuleSet::expanding());

        // no subtraction, grouping or un-distributed product may survive
        fn fully_expanded(expr: &Expr) -> bool {
            match expr {
                Expr::Num(_) | Expr::Symbol(_) => true,
                Expr::Paren(_) | Expr::Unary(..) => false,
                Expr::Binary(BinOp::Sub | BinOp::Div, ..) => false,
                Expr::Binary(BinOp::Add, lhs, rhs) => fully_expanded(lhs) && fully_expanded(rhs),
                Expr::Binary(BinOp::Mul, lhs, rhs) => {
                    !matches!(**lhs, Expr::Binary(BinOp::Add, ..))
                        && !matches!(**rhs, Expr::Binary(BinOp::Add, ..))
                        && fully_expanded(lhs)
                        && fully_expanded(rhs)
                },
                Expr::Binary(BinOp::Pow, ..) => true,
            }
        }
        assert!(fully_expanded(&expanded), "not fully expanded: {}", expanded);
    }

    #[test]
    fn custom_rule() {
        // x = 42: a caller-supplied rule slots in after the basic set
        fn substitute(expr: &Expr, _: &mut dyn StepCollector<Step>) -> Option<Expr> {
            match expr {
                Expr::Symbol(sym) if sym == "x" => Some(Expr::num(42)),
                _ => None,
            }
        }

        let rules = RuleSet::basic().with(substitute);
        let expr = Expr::symbol("x") + Expr::num(1);
        assert_eq!(simplify_with(&expr, &rules), Expr::num(43));
    }

    #[test]
    fn steps_are_collected() {
        let expr = Expr::symbol("a") - (-Expr::symbol("b"));
        let (_, steps) = simplify_with_steps(&expr, &RuleSet::basic());
        assert_eq!(steps, vec![Step::SubtractNegative]);
    }
}
