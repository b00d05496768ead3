//! A tree representation of mathematical formulas built from exact rational constants.
//!
//! The [`Expr`] type is the value that every other module in this crate (and in
//! `divdiff-interp`) manipulates. It is a plain tagged tree: constants, symbols, unary negation,
//! binary operators and an explicit grouping node. Unlike many CAS representations, sums and
//! products are **not** flattened into n-ary nodes; the tree mirrors exactly how a formula was
//! written down, which is what lets a divided-difference cell display its raw, unsimplified
//! quotient verbatim.
//!
//! Nodes are immutable after construction and exclusively own their children. Construction does
//! no simplification whatsoever; `(x - 1) * 1` stays `(x - 1) * 1` until it is run through
//! [`simplify`](crate::simplify::simplify).
//!
//! Constants are [`rug::Rational`], so the tree can never hold a `NaN`, an infinity, or a rounded
//! value. Whatever exact arithmetic the simplifier performs stays exact.

mod latex;

use rug::Rational;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinOp {
    /// `a + b`
    Add,

    /// `a - b`
    Sub,

    /// `a * b`
    Mul,

    /// `a / b`
    Div,

    /// `a ^ b`
    ///
    /// Only produced by the beautifier's monomial collection (`x * x` is re-emitted as `x^2`) and
    /// by constant folding of such nodes; the table builder and the Newton assembler never create
    /// powers.
    Pow,
}

/// A unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    /// `-a`
    Neg,
}

/// A node in an expression tree.
///
/// Use the [`std::ops`] implementations to combine expressions; each one builds the corresponding
/// operator node without simplifying:
///
/// ```
/// use divdiff_expr::expr::Expr;
///
/// let expr = Expr::symbol("x") - Expr::num(1);
/// assert_eq!(expr.to_string(), "x - 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// An exact rational constant, such as `6` or `-19/3`.
    Num(Rational),

    /// A variable, such as `x`.
    Symbol(String),

    /// A unary operator applied to an operand.
    Unary(UnaryOp, Box<Expr>),

    /// A binary operator applied to two operands.
    Binary(BinOp, Box<Expr>, Box<Expr>),

    /// A grouping that forces parentheses when rendering.
    ///
    /// Semantically a no-op wrapper; [`simplify`](crate::simplify::simplify) peels it off
    /// wherever the parentheses carry no information.
    Paren(Box<Expr>),
}

/// Operator precedence, used to decide where parentheses are needed when printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    /// `a + b`, `a - b`
    Term,

    /// `a * b`, `a / b`, `-a`
    Factor,

    /// `a ^ b`
    Power,

    /// A single constant or symbol, or an explicit grouping.
    Atom,
}

impl BinOp {
    pub(crate) fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Pow => Precedence::Power,
        }
    }

    /// The text rendering of the operator itself.
    fn symbol(self) -> &'static str {
        match self {
            Self::Add => " + ",
            Self::Sub => " - ",
            Self::Mul => " * ",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

impl Expr {
    /// Creates a constant node from anything convertible to a [`Rational`].
    pub fn num(value: impl Into<Rational>) -> Self {
        Self::Num(value.into())
    }

    /// Creates a symbol node with the given name.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Wraps the expression in an explicit grouping, forcing parentheses when rendered.
    pub fn grouped(self) -> Self {
        Self::Paren(Box::new(self))
    }

    /// If the expression is a constant, returns a reference to its value.
    pub fn as_num(&self) -> Option<&Rational> {
        match self {
            Self::Num(num) => Some(num),
            _ => None,
        }
    }

    /// Returns true if the expression is a constant.
    pub fn is_num(&self) -> bool {
        matches!(self, Self::Num(_))
    }

    /// Returns true if the expression is a constant equal to the given integer.
    pub fn is_int(&self, n: i32) -> bool {
        self.as_num().map(|num| *num == n).unwrap_or(false)
    }

    /// Returns true if the top level of the expression is algebraically negative: a negated
    /// expression, a negative constant, or a grouping around either.
    ///
    /// This deliberately inspects only the top level. A nested expression that happens to be
    /// negative overall, but whose top-level form does not show it, is not detected.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Num(num) => num.cmp0() == Ordering::Less,
            Self::Unary(UnaryOp::Neg, _) => true,
            Self::Paren(inner) => inner.is_negative(),
            _ => false,
        }
    }

    /// Strips one top-level negation from the expression, returning its absolute-value form.
    ///
    /// Expressions for which [`is_negative`](Self::is_negative) returns false are returned
    /// unchanged.
    pub fn into_unsigned(self) -> Self {
        match self {
            Self::Num(num) => {
                if num.cmp0() == Ordering::Less {
                    Self::Num(-num)
                } else {
                    Self::Num(num)
                }
            },
            Self::Unary(UnaryOp::Neg, operand) => *operand,
            Self::Paren(inner) => inner.into_unsigned(),
            expr => expr,
        }
    }

    pub(crate) fn precedence(&self) -> Precedence {
        match self {
            Self::Num(_) | Self::Symbol(_) | Self::Paren(_) => Precedence::Atom,
            Self::Unary(UnaryOp::Neg, _) => Precedence::Factor,
            Self::Binary(op, ..) => op.precedence(),
        }
    }
}

/// Writes a child expression, parenthesizing it if its precedence demands it.
///
/// With `strict` set, a child of equal precedence is parenthesized too; this is what keeps the
/// right-hand side of `-` and `/` unambiguous (`a - (b + c)`, not `a - b + c`).
fn fmt_child(
    f: &mut fmt::Formatter<'_>,
    child: &Expr,
    parent: Precedence,
    strict: bool,
) -> fmt::Result {
    let needs_parens = match child.precedence().cmp(&parent) {
        Ordering::Less => true,
        Ordering::Equal => strict,
        Ordering::Greater => false,
    };

    if needs_parens {
        write!(f, "({})", child)
    } else {
        write!(f, "{}", child)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(num) => write!(f, "{}", num),
            Self::Symbol(sym) => write!(f, "{}", sym),
            Self::Unary(UnaryOp::Neg, operand) => {
                write!(f, "-")?;
                fmt_child(f, operand, Precedence::Factor, false)
            },
            Self::Binary(op, lhs, rhs) => {
                let prec = op.precedence();
                // subtraction, division and exponentiation do not associate with their own
                // precedence level on the relevant side
                let (strict_lhs, strict_rhs) = match op {
                    BinOp::Add | BinOp::Mul => (false, false),
                    BinOp::Sub => (false, true),
                    BinOp::Div => (true, true),
                    BinOp::Pow => (true, false),
                };
                fmt_child(f, lhs, prec, strict_lhs)?;
                write!(f, "{}", op.symbol())?;
                fmt_child(f, rhs, prec, strict_rhs)
            },
            Self::Paren(inner) => write!(f, "({})", inner),
        }
    }
}

/// Builds an [`Expr::Binary`] addition node. No simplification is done.
impl Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::Binary(BinOp::Add, Box::new(self), Box::new(rhs))
    }
}

/// Builds an [`Expr::Binary`] subtraction node. No simplification is done.
impl Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::Binary(BinOp::Sub, Box::new(self), Box::new(rhs))
    }
}

/// Builds an [`Expr::Binary`] multiplication node. No simplification is done.
impl Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::Binary(BinOp::Mul, Box::new(self), Box::new(rhs))
    }
}

/// Builds an [`Expr::Binary`] division node. No simplification is done.
impl Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::Binary(BinOp::Div, Box::new(self), Box::new(rhs))
    }
}

/// Builds an [`Expr::Unary`] negation node. No simplification is done.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::Unary(UnaryOp::Neg, Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn display_precedence() {
        let expr = (Expr::num(2) + Expr::symbol("x")) * Expr::num(3);
        assert_eq!(expr.to_string(), "(2 + x) * 3");
    }

    #[test]
    fn display_subtraction_rhs() {
        let expr = Expr::symbol("a") - (Expr::symbol("b") + Expr::symbol("c"));
        assert_eq!(expr.to_string(), "a - (b + c)");
    }

    #[test]
    fn display_division() {
        let numerator = Expr::num(20) - Expr::num(6);
        let denominator = Expr::num(2) - Expr::num(1);
        let expr = numerator / denominator;
        assert_eq!(expr.to_string(), "(20 - 6)/(2 - 1)");
    }

    #[test]
    fn display_grouping() {
        let expr = (Expr::symbol("x") - Expr::num(1)).grouped()
            * (Expr::symbol("x") - Expr::num(2)).grouped();
        assert_eq!(expr.to_string(), "(x - 1) * (x - 2)");
    }

    #[test]
    fn display_fraction_constant() {
        let expr = Expr::num((-19, 3)) * Expr::symbol("x");
        assert_eq!(expr.to_string(), "-19/3 * x");
    }

    #[test]
    fn negative_top_level() {
        assert!(Expr::num(-5).is_negative());
        assert!((-Expr::symbol("x")).is_negative());
        assert!(Expr::num(-5).grouped().is_negative());
        assert!(!(Expr::num(2) - Expr::num(5)).is_negative());
    }

    #[test]
    fn strip_sign() {
        assert_eq!(Expr::num(-5).into_unsigned(), Expr::num(5));
        assert_eq!((-Expr::symbol("x")).into_unsigned(), Expr::symbol("x"));
        assert_eq!(Expr::num(5).into_unsigned(), Expr::num(5));
    }
}
