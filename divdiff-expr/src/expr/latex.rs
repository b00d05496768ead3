//! LaTeX rendering of expression trees.
//!
//! The output is a typesettable formula string for a surrounding presentation layer (MathJax,
//! KaTeX, a LaTeX document) to render. Rendering never mutates the tree, and the caller never
//! needs to know the tree structure; [`Expr::to_latex`] is the whole interface.

use std::cmp::Ordering;
use super::{BinOp, Expr, Precedence, UnaryOp};

impl Expr {
    /// Renders the expression as a LaTeX formula string.
    ///
    /// Divisions become `\frac{..}{..}`, multiplication uses `\cdot`, powers brace their
    /// exponents, and [`Expr::Paren`] groupings become `\left( .. \right)` pairs:
    ///
    /// ```
    /// use divdiff_expr::expr::Expr;
    ///
    /// let expr = (Expr::num(20) - Expr::num(6)) / (Expr::num(2) - Expr::num(1));
    /// assert_eq!(expr.to_latex(), r"\frac{20 - 6}{2 - 1}");
    /// ```
    pub fn to_latex(&self) -> String {
        let mut out = String::new();
        write_latex(&mut out, self);
        out
    }
}

/// Writes a child expression, wrapping it in `\left( .. \right)` if precedence demands it.
fn write_child(out: &mut String, child: &Expr, parent: Precedence, strict: bool) {
    let needs_parens = match child.precedence().cmp(&parent) {
        Ordering::Less => true,
        Ordering::Equal => strict,
        Ordering::Greater => false,
    };

    if needs_parens {
        out.push_str(r"\left(");
        write_latex(out, child);
        out.push_str(r"\right)");
    } else {
        write_latex(out, child);
    }
}

fn write_latex(out: &mut String, expr: &Expr) {
    match expr {
        Expr::Num(num) => {
            if num.is_integer() {
                out.push_str(&num.numer().to_string());
            } else {
                // sign out front, magnitude in the fraction
                let (numer, denom) = (num.numer(), num.denom());
                if numer.cmp0() == Ordering::Less {
                    out.push('-');
                }
                out.push_str(&format!(r"\frac{{{}}}{{{}}}", numer.clone().abs(), denom));
            }
        },
        Expr::Symbol(sym) => out.push_str(sym),
        Expr::Unary(UnaryOp::Neg, operand) => {
            out.push('-');
            write_child(out, operand, Precedence::Factor, false);
        },
        Expr::Binary(BinOp::Div, lhs, rhs) => {
            // the fraction bar groups on its own; operands never need parentheses
            out.push_str(r"\frac{");
            write_latex(out, lhs);
            out.push_str("}{");
            write_latex(out, rhs);
            out.push('}');
        },
        Expr::Binary(BinOp::Pow, base, exp) => {
            write_child(out, base, Precedence::Power, true);
            out.push_str("^{");
            write_latex(out, exp);
            out.push('}');
        },
        Expr::Binary(op, lhs, rhs) => {
            let prec = op.precedence();
            let symbol = match op {
                BinOp::Add => " + ",
                BinOp::Sub => " - ",
                BinOp::Mul => r" \cdot ",
                BinOp::Div | BinOp::Pow => unreachable!(),
            };
            write_child(out, lhs, prec, false);
            out.push_str(symbol);
            write_child(out, rhs, prec, matches!(op, BinOp::Sub));
        },
        Expr::Paren(inner) => {
            out.push_str(r"\left(");
            write_latex(out, inner);
            out.push_str(r"\right)");
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn fraction_constant() {
        assert_eq!(Expr::num((19, 3)).to_latex(), r"\frac{19}{3}");
        assert_eq!(Expr::num((-19, 3)).to_latex(), r"-\frac{19}{3}");
        assert_eq!(Expr::num(6).to_latex(), "6");
    }

    #[test]
    fn explicit_division() {
        let expr = Expr::num(-19) / Expr::num(3);
        assert_eq!(expr.to_latex(), r"\frac{-19}{3}");
    }

    #[test]
    fn product_with_grouping() {
        let expr = Expr::num(14) * (Expr::symbol("x") - Expr::num(1)).grouped();
        assert_eq!(expr.to_latex(), r"14 \cdot \left(x - 1\right)");
    }

    #[test]
    fn power() {
        let expr = Expr::Binary(
            BinOp::Pow,
            Box::new(Expr::symbol("x")),
            Box::new(Expr::num(2)),
        );
        assert_eq!(expr.to_latex(), "x^{2}");
    }
}
