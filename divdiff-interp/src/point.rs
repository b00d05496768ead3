//! Sample points for interpolation.

use rug::Rational;

/// An `(x, y)` sample point with exact coordinates.
///
/// The table builder expects its input points to be sorted by strictly ascending `x`; see
/// [`Table::build`](crate::table::Table::build). Because the coordinates are
/// [`Rational`], non-finite values cannot be represented at all.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: Rational,

    /// The y-coordinate of the point.
    pub y: Rational,
}

impl Point {
    /// Creates a point from anything convertible to exact rationals.
    pub fn new(x: impl Into<Rational>, y: impl Into<Rational>) -> Self {
        Self { x: x.into(), y: y.into() }
    }
}

impl<X, Y> From<(X, Y)> for Point
where
    X: Into<Rational>,
    Y: Into<Rational>,
{
    fn from((x, y): (X, Y)) -> Self {
        Self::new(x, y)
    }
}
