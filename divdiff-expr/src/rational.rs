//! Rewriting constants into explicit numerator / denominator form.
//!
//! A [`Rational`](rug::Rational) leaf prints compactly (`-19/3`), but a presentation layer
//! usually wants the fraction spelled out as a division node so it can typeset a proper fraction
//! bar with the sign on the numerator. [`to_exact_fractions`] performs exactly that rewrite.

use crate::expr::{BinOp, Expr};

/// Rewrites every constant leaf into an explicit division of two integers.
///
/// Each `Num(r)` becomes `Num(n) / Num(d)` where `n/d` is `r` in lowest terms with the sign
/// carried on the numerator ([`rug::Rational`] keeps its value in exactly that canonical form).
/// One shallow collapse is applied on the way: a denominator of 1 folds back to the bare
/// numerator, matching what the basic simplifier's `a/1 = a` rule would do. A full
/// re-simplification is deliberately **not** run, since constant folding would immediately
/// collapse the explicit fraction back into a single constant.
///
/// The transform is exact (no floating point is involved anywhere) and idempotent: the integer
/// leaves it produces are mapped to themselves on a second pass.
///
/// ```
/// use divdiff_expr::expr::Expr;
/// use divdiff_expr::rational::to_exact_fractions;
///
/// let expr = Expr::num((-19, 3)) * Expr::symbol("x") + Expr::num(6);
/// let normalized = to_exact_fractions(&expr);
/// assert_eq!(normalized.to_string(), "-19/3 * x + 6");
/// assert_eq!(to_exact_fractions(&normalized), normalized);
/// ```
pub fn to_exact_fractions(expr: &Expr) -> Expr {
    match expr {
        Expr::Num(num) => {
            if num.is_integer() {
                Expr::Num(num.clone())
            } else {
                Expr::Binary(
                    BinOp::Div,
                    Box::new(Expr::Num(num.numer().clone().into())),
                    Box::new(Expr::Num(num.denom().clone().into())),
                )
            }
        },
        Expr::Symbol(_) => expr.clone(),
        Expr::Unary(op, operand) => {
            Expr::Unary(*op, Box::new(to_exact_fractions(operand)))
        },
        Expr::Binary(op, lhs, rhs) => Expr::Binary(
            *op,
            Box::new(to_exact_fractions(lhs)),
            Box::new(to_exact_fractions(rhs)),
        ),
        Expr::Paren(inner) => Expr::Paren(Box::new(to_exact_fractions(inner))),
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::rat;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn fraction_becomes_explicit_division() {
        let normalized = to_exact_fractions(&Expr::num((-19, 3)));
        assert_eq!(normalized, Expr::num(-19) / Expr::num(3));
    }

    #[test]
    fn integer_stays_bare() {
        // 6/1 collapses; only irreducible fractions keep the division node
        assert_eq!(to_exact_fractions(&Expr::num(6)), Expr::num(6));
    }

    #[test]
    fn sign_lands_on_numerator() {
        let normalized = to_exact_fractions(&Expr::Num(rat((7, -2))));
        assert_eq!(normalized, Expr::num(-7) / Expr::num(2));
    }

    #[test]
    fn fixed_point() {
        let expr = Expr::num((1, 2)) + Expr::num(5) * Expr::symbol("x");
        let once = to_exact_fractions(&expr);
        let twice = to_exact_fractions(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn no_drift_through_simplify_cycles() {
        use crate::simplify::simplify;

        // normalize -> simplify -> normalize must land back on the same two shapes
        let expr = Expr::num((1, 2));
        let normalized = to_exact_fractions(&expr);
        assert_eq!(simplify(&normalized), expr);
        assert_eq!(to_exact_fractions(&simplify(&normalized)), normalized);
    }
}
