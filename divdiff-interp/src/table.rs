//! The divided-difference table: a triangular pyramid of symbolic quotient formulas.
//!
//! Layer 0 holds one cell per input point, each carrying the constant `y` as its formula. Every
//! further layer combines adjacent cells of the layer below with the classical recurrence
//!
//! ```text
//! f[x_i..x_j] = (f[x_{i+1}..x_j] - f[x_i..x_{j-1}]) / (x_j - x_i)
//! ```
//!
//! except that the cells store the quotient as a *formula*, not an evaluated number. A cell's
//! divisor is the difference of the x-range endpoints it covers, which is why each cell tracks
//! `min_x` and `max_x` alongside its formula.

use crate::error::InterpError;
use crate::point::Point;
use divdiff_expr::{simplify, Expr};
use rug::Rational;
use std::cmp::Ordering;

/// Wraps the expression in an explicit grouping if it is negative, so that a following `-` or `/`
/// renders against `(-5)` instead of `-5`.
fn maybe_paren(expr: Expr) -> Expr {
    if expr.is_negative() {
        expr.grouped()
    } else {
        expr
    }
}

/// One cell of the divided-difference table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableCell {
    /// The lowest x-value this cell covers.
    pub min_x: Rational,

    /// The highest x-value this cell covers.
    pub max_x: Rational,

    /// The divided-difference formula for this cell, unsimplified.
    pub formula: Expr,
}

impl TableCell {
    /// Creates a layer-0 cell from a single point: it covers `[x, x]` and its formula is the
    /// constant `y`.
    pub fn from_point(point: &Point) -> Self {
        Self {
            min_x: point.x.clone(),
            max_x: point.x.clone(),
            formula: Expr::Num(point.y.clone()),
        }
    }

    /// Combines two adjacent cells into the cell one layer up.
    ///
    /// The new cell covers `[left.min_x, right.max_x]` and its formula is the quotient
    /// `(right - left) / (right.max_x - left.min_x)`. Both operand formulas are simplified first
    /// to keep the nested expression compact; the divisor is a difference of *values*, taken from
    /// the covered ranges.
    pub fn from_pair(left: &Self, right: &Self) -> Self {
        let numerator = simplify(&right.formula) - maybe_paren(simplify(&left.formula));
        let denominator = Expr::Num(right.max_x.clone())
            - maybe_paren(Expr::Num(left.min_x.clone()));

        Self {
            min_x: left.min_x.clone(),
            max_x: right.max_x.clone(),
            formula: numerator / denominator,
        }
    }

    /// The simplified form of this cell's formula; a presentation layer shows it next to the raw
    /// formula when the two differ textually.
    pub fn simplified(&self) -> Expr {
        simplify(&self.formula)
    }
}

/// A complete divided-difference table.
///
/// Layer sizes strictly decrease by one: for `N` input points the layers have sizes `N`, `N-1`,
/// …, `1`. For `N = 0` the table holds a single empty layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    layers: Vec<Vec<TableCell>>,
}

impl Table {
    /// Builds the table for the given points.
    ///
    /// The points must be sorted by strictly ascending x-value. Although validating input is the
    /// caller's job, violations are cheap to detect here and would otherwise surface as a
    /// symbolic division by zero inside the table, so they are rejected loudly instead.
    pub fn build(points: &[Point]) -> Result<Self, InterpError> {
        for pair in points.windows(2) {
            match pair[0].x.cmp(&pair[1].x) {
                Ordering::Equal => return Err(InterpError::DuplicateX { x: pair[0].x.clone() }),
                Ordering::Greater => return Err(InterpError::UnsortedPoints),
                Ordering::Less => {},
            }
        }

        let mut layers = vec![points.iter().map(TableCell::from_point).collect::<Vec<_>>()];
        loop {
            let current = layers.last().expect("table always has a layer");
            if current.len() <= 1 {
                break;
            }
            let next = current
                .windows(2)
                .map(|pair| TableCell::from_pair(&pair[0], &pair[1]))
                .collect();
            layers.push(next);
        }

        Ok(Self { layers })
    }

    /// The layers of the table, bottom (one cell per point) first.
    pub fn layers(&self) -> &[Vec<TableCell>] {
        &self.layers
    }

    /// The cells of layer `k`, if the table has that many layers.
    pub fn layer(&self, k: usize) -> Option<&[TableCell]> {
        self.layers.get(k).map(Vec::as_slice)
    }

    /// The number of points the table was built from.
    pub fn len(&self) -> usize {
        self.layers[0].len()
    }

    /// Returns true if the table was built from zero points.
    pub fn is_empty(&self) -> bool {
        self.layers[0].is_empty()
    }

    /// Projects the table onto a triangular display grid.
    ///
    /// Layer `k`'s row is padded with `k` empty slots on both sides, and one empty slot separates
    /// adjacent cells, so that every row of the triangle lines up:
    ///
    /// ```text
    /// layer 0:  c  .  c  .  c
    /// layer 1:  .  c  .  c  .
    /// layer 2:  .  .  c  .  .
    /// ```
    ///
    /// This is purely a presentation transform; the algebra lives in the cells.
    pub fn grid(&self) -> Vec<Vec<Option<&TableCell>>> {
        self.layers
            .iter()
            .enumerate()
            .map(|(k, layer)| {
                let mut row = vec![None; k];
                for (j, cell) in layer.iter().enumerate() {
                    if j > 0 {
                        row.push(None);
                    }
                    row.push(Some(cell));
                }
                row.extend(std::iter::repeat(None).take(k));
                row
            })
            .collect()
    }
}
