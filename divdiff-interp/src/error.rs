//! Error type for precondition violations at the table-builder boundary.

use rug::Rational;
use std::fmt;

/// An error produced while building a divided-difference table.
///
/// Input validation proper (parsing, deduplication, sorting) belongs to the caller; these
/// variants exist so that a caller bug surfaces as an explicit error instead of a symbolic
/// division by zero buried inside the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpError {
    /// Two input points share the same x-value. The divided-difference quotient for them would
    /// divide by an exact zero.
    DuplicateX {
        /// The repeated x-value.
        x: Rational,
    },

    /// The x-values of the input points are not in ascending order.
    UnsortedPoints,
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateX { x } => write!(f, "duplicate x-value in input points: {}", x),
            Self::UnsortedPoints => write!(f, "input points are not sorted by ascending x"),
        }
    }
}

impl std::error::Error for InterpError {}
