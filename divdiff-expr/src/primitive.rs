//! Functions to construct [`Integer`]s and [`Rational`]s from various types.

use rug::{Integer, Rational};

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] with the given value.
///
/// Accepts anything [`Rational`] can be built from, most usefully integers and `(numerator,
/// denominator)` pairs:
///
/// ```
/// use divdiff_expr::primitive::rat;
///
/// assert_eq!(rat(3) + rat((1, 2)), rat((7, 2)));
/// ```
pub fn rat<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}
