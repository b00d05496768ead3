//! Newton divided-difference interpolation over symbolic formulas.
//!
//! Given sample points with exact rational coordinates, this crate builds the divided-difference
//! table as a pyramid of symbolic quotient formulas, assembles the Newton-form interpolation
//! polynomial from the table's leading column, and derives an expanded canonical form with exact
//! fractional coefficients for side-by-side display.
//!
//! ```
//! use divdiff_interp::{Interpolation, Point};
//!
//! let points = [Point::new(1, 6), Point::new(2, 20), Point::new(4, 10)];
//! let interpolation = Interpolation::new(&points).unwrap();
//!
//! let polynomial = interpolation.polynomial.unwrap();
//! assert_eq!(polynomial.to_string(), "6 + 14 * (x - 1) - 19/3 * (x - 1) * (x - 2)");
//!
//! let beautified = interpolation.beautified.unwrap();
//! assert_eq!(beautified.to_string(), "-19/3 * x^2 + 33 * x - 62/3");
//! ```
//!
//! Everything is recomputed from scratch on each call, as a pure function of the input points:
//! no caching, no shared state, and structurally equal inputs give structurally equal outputs.
//! The caller is responsible for collecting and validating points; see
//! [`Table::build`] for the (loudly rejected) preconditions.

pub mod beautify;
pub mod error;
pub mod newton;
pub mod point;
pub mod table;

pub use beautify::beautify;
pub use error::InterpError;
pub use newton::{assemble, VARIABLE};
pub use point::Point;
pub use table::{Table, TableCell};

use divdiff_expr::Expr;

/// Every output derived from one set of sample points.
///
/// For zero points the table is empty and both polynomial fields are `None`; callers must handle
/// the absence rather than expect a placeholder expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolation {
    /// The divided-difference table; render cells directly, or via [`Table::grid`].
    pub table: Table,

    /// The Newton-form polynomial `Σ c_k · Π (x - x_i)`.
    pub polynomial: Option<Expr>,

    /// The expanded, rationalized form of [`polynomial`](Self::polynomial).
    pub beautified: Option<Expr>,
}

impl Interpolation {
    /// Computes the table, the Newton-form polynomial, and its beautified form for the given
    /// points.
    pub fn new(points: &[Point]) -> Result<Self, InterpError> {
        let table = Table::build(points)?;
        let polynomial = assemble(points, &table);
        let beautified = polynomial.as_ref().map(beautify);
        Ok(Self { table, polynomial, beautified })
    }
}

#[cfg(test)]
mod tests {
    use divdiff_expr::eval::evaluate;
    use divdiff_expr::primitive::rat;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn end_to_end() {
        let points = [Point::new(1, 6), Point::new(2, 20), Point::new(4, 10)];
        let interpolation = Interpolation::new(&points).unwrap();

        let sizes = interpolation.table.layers().iter().map(Vec::len).collect::<Vec<_>>();
        assert_eq!(sizes, vec![3, 2, 1]);

        for expr in [
            interpolation.polynomial.as_ref().unwrap(),
            interpolation.beautified.as_ref().unwrap(),
        ] {
            for point in &points {
                assert_eq!(evaluate(expr, VARIABLE, &point.x).as_ref(), Ok(&point.y));
            }
        }
    }

    #[test]
    fn fractional_coordinates() {
        let points = [
            Point::new((1, 2), (13, 2)),
            Point::new(1, 3),
            Point::new((5, 2), -4),
        ];
        let interpolation = Interpolation::new(&points).unwrap();
        let beautified = interpolation.beautified.unwrap();
        for point in &points {
            assert_eq!(evaluate(&beautified, VARIABLE, &point.x).as_ref(), Ok(&point.y));
        }
    }

    #[test]
    fn empty_input_yields_no_polynomial() {
        let interpolation = Interpolation::new(&[]).unwrap();
        assert!(interpolation.table.is_empty());
        assert_eq!(interpolation.polynomial, None);
        assert_eq!(interpolation.beautified, None);
    }

    #[test]
    fn referential_transparency() {
        let points = [Point::new(0, 1), Point::new(1, 2), Point::new(2, 5), Point::new(3, 10)];
        assert_eq!(Interpolation::new(&points), Interpolation::new(&points));
    }

    #[test]
    fn single_point() {
        let interpolation = Interpolation::new(&[Point::new(3, rat((7, 3)))]).unwrap();
        assert_eq!(interpolation.polynomial, Some(Expr::num((7, 3))));
        assert_eq!(
            interpolation.beautified,
            Some(Expr::num(7) / Expr::num(3)),
        );
    }
}
