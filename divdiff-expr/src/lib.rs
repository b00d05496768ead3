//! Symbolic expression trees with exact rational constants.
//!
//! This crate is the algebra core underneath `divdiff-interp`. It provides:
//!
//! - [`expr::Expr`]: an immutable expression tree over [`rug::Rational`] constants, with plain
//!   text ([`Display`](std::fmt::Display)) and LaTeX ([`Expr::to_latex`](expr::Expr::to_latex))
//!   rendering.
//! - [`simplify`](simplify::simplify): rule-based rewriting to a fixed point. The rule set is an
//!   explicit [`RuleSet`](simplify::RuleSet) value; the basic set strictly shrinks an expression,
//!   the expanding set flattens products over sums for polynomial expansion.
//! - [`rational::to_exact_fractions`]: rewriting every constant into an explicit
//!   numerator/denominator division for typeset output.
//! - [`eval::evaluate`]: exact substitution of a rational value for a symbol.
//!
//! # Example
//!
//! ```
//! use divdiff_expr::expr::Expr;
//! use divdiff_expr::simplify::simplify;
//!
//! // (10 - 20)/(4 - 2), the kind of quotient a divided-difference table is made of
//! let expr = (Expr::num(10) - Expr::num(20)) / (Expr::num(4) - Expr::num(2));
//! assert_eq!(expr.to_string(), "(10 - 20)/(4 - 2)");
//! assert_eq!(simplify(&expr), Expr::num(-5));
//! ```
//!
//! Everything here is a pure function over value-like trees: no interior mutability, no global
//! state, and structurally equal inputs produce structurally equal outputs.

pub mod eval;
pub mod expr;
pub mod primitive;
pub mod rational;
pub mod simplify;
pub mod step_collector;

pub use expr::Expr;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
