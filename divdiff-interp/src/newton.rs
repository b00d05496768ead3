//! Assembling the Newton-form interpolation polynomial from a divided-difference table.
//!
//! The polynomial is `Σ c_k · Π_{i<k} (x - x_i)`, where `c_k` is the simplified formula of the
//! first cell of layer `k`. Terms are chained sign-aware: a negative coefficient contributes a
//! subtraction node with the sign stripped, so the rendered polynomial reads `… - 19/3 · …`
//! rather than `… + -19/3 · …`.

use crate::point::Point;
use crate::table::Table;
use divdiff_expr::{simplify, Expr};

/// The name of the interpolation variable.
pub const VARIABLE: &str = "x";

/// The product `(x - x_0) * (x - x_1) * …` over the given points, as a left-associated chain of
/// parenthesized factors. Returns `None` for an empty slice: the empty product is the
/// multiplicative identity and is rendered by omitting the factor entirely.
fn product_term(points: &[Point]) -> Option<Expr> {
    points
        .iter()
        .map(|point| (Expr::symbol(VARIABLE) - Expr::Num(point.x.clone())).grouped())
        .reduce(|product, factor| product * factor)
}

/// Chains one `coefficient · product` term onto the accumulated polynomial.
///
/// The first term is emitted as-is. Every later term checks the top-level sign of its
/// coefficient: negative coefficients become a subtraction of the unsigned coefficient. The check
/// looks at the top level only, so a nested expression that is negative overall but does not
/// simplify to a negated top-level form would be chained as an addition; with constant
/// coefficients (always the case for numeric sample points) that situation cannot arise.
fn sum_or_diff(acc: Option<Expr>, coefficient: Expr, product: Option<Expr>) -> Expr {
    let Some(acc) = acc else {
        return match product {
            Some(product) => coefficient * product,
            None => coefficient,
        };
    };

    if coefficient.is_negative() {
        let unsigned = coefficient.into_unsigned();
        match product {
            Some(product) => acc - unsigned * product,
            None => acc - unsigned,
        }
    } else {
        match product {
            Some(product) => acc + coefficient * product,
            None => acc + coefficient,
        }
    }
}

/// Builds the Newton-form polynomial for the given points and their divided-difference table.
///
/// Returns `None` for zero points: there is no polynomial, and the caller is expected to handle
/// the absence. For a single point the result is the bare constant `y_0`.
///
/// The table must be the one built from `points`; the `k`-th coefficient is read from layer `k`,
/// column 0.
pub fn assemble(points: &[Point], table: &Table) -> Option<Expr> {
    let mut acc = None;
    for k in 0..points.len() {
        let coefficient = simplify(&table.layer(k)?.first()?.formula);
        acc = Some(sum_or_diff(acc, coefficient, product_term(&points[..k])));
    }
    acc
}

#[cfg(test)]
mod tests {
    use divdiff_expr::expr::BinOp;
    use pretty_assertions::assert_eq;
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![Point::new(1, 6), Point::new(2, 20), Point::new(4, 10)]
    }

    #[test]
    fn sample_polynomial() {
        let points = sample_points();
        let table = Table::build(&points).unwrap();
        let polynomial = assemble(&points, &table).unwrap();
        assert_eq!(
            polynomial.to_string(),
            "6 + 14 * (x - 1) - 19/3 * (x - 1) * (x - 2)",
        );
    }

    #[test]
    fn negative_coefficient_becomes_subtraction() {
        let points = sample_points();
        let table = Table::build(&points).unwrap();
        let polynomial = assemble(&points, &table).unwrap();

        // the k = 2 coefficient is -19/3; it must be chained with a top-level Sub node, with the
        // sign stripped from the coefficient itself
        let Expr::Binary(BinOp::Sub, _, rhs) = &polynomial else {
            panic!("expected a subtraction at the top level, got {}", polynomial);
        };
        let Expr::Binary(BinOp::Mul, coefficient, _) = &**rhs else {
            panic!("expected coefficient * product, got {}", rhs);
        };
        assert_eq!(**coefficient, Expr::num((19, 3)));
    }

    #[test]
    fn latex_rendering() {
        let points = sample_points();
        let table = Table::build(&points).unwrap();
        let polynomial = assemble(&points, &table).unwrap();
        assert_eq!(
            polynomial.to_latex(),
            r"6 + 14 \cdot \left(x - 1\right) - \frac{19}{3} \cdot \left(x - 1\right) \cdot \left(x - 2\right)",
        );
    }

    #[test]
    fn single_point_is_a_bare_constant() {
        let points = vec![Point::new(3, 7)];
        let table = Table::build(&points).unwrap();
        assert_eq!(assemble(&points, &table), Some(Expr::num(7)));
    }

    #[test]
    fn no_points_no_polynomial() {
        let table = Table::build(&[]).unwrap();
        assert_eq!(assemble(&[], &table), None);
    }

    #[test]
    fn interpolates_every_input_point() {
        use divdiff_expr::eval::evaluate;

        let points = sample_points();
        let table = Table::build(&points).unwrap();
        let polynomial = assemble(&points, &table).unwrap();
        for point in &points {
            assert_eq!(
                evaluate(&polynomial, VARIABLE, &point.x).as_ref(),
                Ok(&point.y),
            );
        }
    }
}
