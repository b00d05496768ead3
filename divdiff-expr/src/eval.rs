//! Exact evaluation of an expression at a rational value of its symbol.
//!
//! This is substitution plus arithmetic over [`Rational`], with no rounding anywhere. Its main
//! consumer is the property "the interpolation polynomial passes through every input point",
//! which only holds exactly because evaluation is exact.

use crate::expr::{BinOp, Expr, UnaryOp};
use rug::Rational;
use std::cmp::Ordering;
use std::fmt;

/// An error that occurred while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The expression divides by an exact zero.
    DivisionByZero,

    /// The expression contains a symbol other than the one being substituted.
    UnknownSymbol(String),

    /// The expression raises to a non-integer or out-of-range power.
    BadExponent,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::UnknownSymbol(sym) => write!(f, "unknown symbol `{}`", sym),
            Self::BadExponent => write!(f, "exponent is not a small integer"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluates the expression with the named symbol bound to the given value.
///
/// ```
/// use divdiff_expr::eval::evaluate;
/// use divdiff_expr::expr::Expr;
/// use divdiff_expr::primitive::rat;
///
/// let expr = Expr::num(14) * (Expr::symbol("x") - Expr::num(1)).grouped();
/// assert_eq!(evaluate(&expr, "x", &rat(2)), Ok(rat(14)));
/// ```
pub fn evaluate(expr: &Expr, symbol: &str, value: &Rational) -> Result<Rational, EvalError> {
    match expr {
        Expr::Num(num) => Ok(num.clone()),
        Expr::Symbol(sym) => {
            if sym == symbol {
                Ok(value.clone())
            } else {
                Err(EvalError::UnknownSymbol(sym.clone()))
            }
        },
        Expr::Unary(UnaryOp::Neg, operand) => Ok(-evaluate(operand, symbol, value)?),
        Expr::Binary(op, lhs, rhs) => {
            let lhs = evaluate(lhs, symbol, value)?;
            let rhs = evaluate(rhs, symbol, value)?;
            match op {
                BinOp::Add => Ok(lhs + rhs),
                BinOp::Sub => Ok(lhs - rhs),
                BinOp::Mul => Ok(lhs * rhs),
                BinOp::Div => {
                    if rhs.cmp0() == Ordering::Equal {
                        Err(EvalError::DivisionByZero)
                    } else {
                        Ok(lhs / rhs)
                    }
                },
                BinOp::Pow => {
                    if !rhs.is_integer() {
                        return Err(EvalError::BadExponent);
                    }
                    let exp = rhs.numer().to_i32().ok_or(EvalError::BadExponent)?;
                    if exp < 0 && lhs.cmp0() == Ordering::Equal {
                        return Err(EvalError::DivisionByZero);
                    }

                    let mut result = Rational::from(1);
                    for _ in 0..exp.unsigned_abs() {
                        result *= &lhs;
                    }
                    if exp < 0 {
                        result = result.recip();
                    }
                    Ok(result)
                },
            }
        },
        Expr::Paren(inner) => evaluate(inner, symbol, value),
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::rat;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn substitution() {
        // 6 + 14(x - 1) at x = 2
        let expr = Expr::num(6)
            + Expr::num(14) * (Expr::symbol("x") - Expr::num(1)).grouped();
        assert_eq!(evaluate(&expr, "x", &rat(2)), Ok(rat(20)));
    }

    #[test]
    fn exact_fractions() {
        let expr = Expr::num((19, 3)) * Expr::symbol("x");
        assert_eq!(evaluate(&expr, "x", &rat(3)), Ok(rat(19)));
    }

    #[test]
    fn division_by_zero() {
        let expr = Expr::num(1) / (Expr::symbol("x") - Expr::num(2));
        assert_eq!(evaluate(&expr, "x", &rat(2)), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn unknown_symbol() {
        let expr = Expr::symbol("y");
        assert_eq!(
            evaluate(&expr, "x", &rat(0)),
            Err(EvalError::UnknownSymbol("y".into())),
        );
    }
}
