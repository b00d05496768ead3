//! Expanding a Newton-form polynomial into a canonical rational form.
//!
//! [`beautify`] produces the second, algebraically equivalent rendering shown next to the raw
//! Newton form: the polynomial fully expanded, like terms combined exactly, monomials ordered by
//! descending degree, and every constant spelled out as an explicit fraction.

use crate::newton::VARIABLE;
use divdiff_expr::expr::{BinOp, Expr, UnaryOp};
use divdiff_expr::rational::to_exact_fractions;
use divdiff_expr::simplify::{simplify_with, RuleSet};
use rug::Rational;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Splits an expanded sum into its top-level terms.
fn flatten_terms<'a>(expr: &'a Expr, terms: &mut Vec<&'a Expr>) {
    if let Expr::Binary(BinOp::Add, lhs, rhs) = expr {
        flatten_terms(lhs, terms);
        flatten_terms(rhs, terms);
    } else {
        terms.push(expr);
    }
}

/// Reads one expanded term as `coefficient * x^degree`.
///
/// Returns `None` if the term is not a monomial in the given symbol, for example if a foreign
/// symbol or an unexpanded sum is left inside it.
fn monomial(expr: &Expr, symbol: &str) -> Option<(Rational, u32)> {
    match expr {
        Expr::Num(num) => Some((num.clone(), 0)),
        Expr::Symbol(sym) if sym == symbol => Some((Rational::from(1), 1)),
        Expr::Symbol(_) => None,
        Expr::Unary(UnaryOp::Neg, operand) => {
            let (coefficient, degree) = monomial(operand, symbol)?;
            Some((-coefficient, degree))
        },
        Expr::Binary(BinOp::Mul, lhs, rhs) => {
            let (lhs_coefficient, lhs_degree) = monomial(lhs, symbol)?;
            let (rhs_coefficient, rhs_degree) = monomial(rhs, symbol)?;
            Some((lhs_coefficient * rhs_coefficient, lhs_degree + rhs_degree))
        },
        Expr::Binary(BinOp::Div, lhs, rhs) => {
            let (coefficient, degree) = monomial(lhs, symbol)?;
            let divisor = rhs.as_num()?;
            if divisor.cmp0() == Ordering::Equal {
                return None;
            }
            Some((coefficient / divisor.clone(), degree))
        },
        Expr::Binary(BinOp::Pow, base, exp) => {
            let exp = exp.as_num()?;
            if !exp.is_integer() {
                return None;
            }
            let exp = exp.numer().to_u32()?;
            match &**base {
                Expr::Symbol(sym) if sym == symbol => Some((Rational::from(1), exp)),
                _ => None,
            }
        },
        Expr::Paren(inner) => monomial(inner, symbol),
        Expr::Binary(BinOp::Add | BinOp::Sub, ..) => None,
    }
}

/// Renders one monomial. The coefficient keeps whatever sign it carries; the chaining logic in
/// [`collect_monomials`] passes unsigned coefficients for all but the leading term.
fn term_expr(coefficient: Rational, degree: u32, symbol: &str) -> Expr {
    let power = match degree {
        0 => return Expr::Num(coefficient),
        1 => Expr::symbol(symbol),
        degree => Expr::Binary(
            BinOp::Pow,
            Box::new(Expr::symbol(symbol)),
            Box::new(Expr::num(degree)),
        ),
    };

    if coefficient == 1 {
        power
    } else if coefficient == -1 {
        -power
    } else {
        Expr::Num(coefficient) * power
    }
}

/// Combines the expanded terms by degree and re-emits them in descending order, sign-aware.
///
/// Zero coefficients are dropped; a polynomial whose terms all cancel collapses to `0`. Returns
/// `None` if some term is not a monomial in `symbol`.
fn collect_monomials(expr: &Expr, symbol: &str) -> Option<Expr> {
    let mut terms = Vec::new();
    flatten_terms(expr, &mut terms);

    let mut by_degree: BTreeMap<u32, Rational> = BTreeMap::new();
    for term in terms {
        let (coefficient, degree) = monomial(term, symbol)?;
        *by_degree.entry(degree).or_insert_with(Rational::new) += coefficient;
    }
    by_degree.retain(|_, coefficient| coefficient.cmp0() != Ordering::Equal);

    if by_degree.is_empty() {
        return Some(Expr::num(0));
    }

    let mut acc: Option<Expr> = None;
    for (&degree, coefficient) in by_degree.iter().rev() {
        acc = Some(match acc {
            None => term_expr(coefficient.clone(), degree, symbol),
            Some(acc) => {
                if coefficient.cmp0() == Ordering::Less {
                    acc - term_expr(-coefficient.clone(), degree, symbol)
                } else {
                    acc + term_expr(coefficient.clone(), degree, symbol)
                }
            },
        });
    }
    acc
}

/// Produces the simplified/expanded/rationalized form of a polynomial expression.
///
/// The pipeline is: expand with [`RuleSet::expanding`] (subtraction as negation, two-sided
/// distribution), combine like monomials exactly, then rewrite every constant as an explicit
/// fraction via [`to_exact_fractions`]. The input is returned expanded-but-uncollected if it
/// turns out not to be a polynomial in the interpolation variable.
pub fn beautify(expr: &Expr) -> Expr {
    let expanded = simplify_with(expr, &RuleSet::expanding());
    let collected = collect_monomials(&expanded, VARIABLE).unwrap_or(expanded);
    to_exact_fractions(&collected)
}

#[cfg(test)]
mod tests {
    use crate::newton::assemble;
    use crate::point::Point;
    use crate::table::Table;
    use divdiff_expr::eval::evaluate;
    use divdiff_expr::primitive::rat;
    use pretty_assertions::assert_eq;
    use super::*;

    fn sample_polynomial() -> Expr {
        let points = vec![Point::new(1, 6), Point::new(2, 20), Point::new(4, 10)];
        let table = Table::build(&points).unwrap();
        assemble(&points, &table).unwrap()
    }

    #[test]
    fn sample_expansion() {
        // 6 + 14(x-1) - 19/3(x-1)(x-2)  =  -19/3 x^2 + 33 x - 62/3
        let beautified = beautify(&sample_polynomial());
        assert_eq!(beautified.to_string(), "-19/3 * x^2 + 33 * x - 62/3");
        assert_eq!(
            beautified.to_latex(),
            r"\frac{-19}{3} \cdot x^{2} + 33 \cdot x - \frac{62}{3}",
        );
    }

    #[test]
    fn equivalent_to_the_newton_form() {
        let polynomial = sample_polynomial();
        let beautified = beautify(&polynomial);
        for x in [rat(1), rat(2), rat(4), rat((7, 2)), rat(-3)] {
            assert_eq!(
                evaluate(&beautified, VARIABLE, &x),
                evaluate(&polynomial, VARIABLE, &x),
            );
        }
    }

    #[test]
    fn passes_through_the_sample_points() {
        let beautified = beautify(&sample_polynomial());
        assert_eq!(evaluate(&beautified, VARIABLE, &rat(1)), Ok(rat(6)));
        assert_eq!(evaluate(&beautified, VARIABLE, &rat(2)), Ok(rat(20)));
        assert_eq!(evaluate(&beautified, VARIABLE, &rat(4)), Ok(rat(10)));
    }

    #[test]
    fn idempotent() {
        let beautified = beautify(&sample_polynomial());
        assert_eq!(beautify(&beautified), beautified);
    }

    #[test]
    fn degenerate_constant() {
        assert_eq!(beautify(&Expr::num(6)), Expr::num(6));
        assert_eq!(beautify(&Expr::num((13, 2))), Expr::num(13) / Expr::num(2));
    }

    #[test]
    fn cancelling_terms_collapse_to_zero() {
        let expr = Expr::symbol("x") - Expr::symbol("x");
        assert_eq!(beautify(&expr), Expr::num(0));
    }

    #[test]
    fn like_terms_combine_exactly() {
        // 1/3 x + 1/6 x = 1/2 x, with no drift
        let expr = Expr::num((1, 3)) * Expr::symbol("x")
            + Expr::num((1, 6)) * Expr::symbol("x");
        let beautified = beautify(&expr);
        assert_eq!(beautified, Expr::num(1) / Expr::num(2) * Expr::symbol("x"));
    }
}
