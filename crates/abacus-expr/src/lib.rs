//! # Abacus Expr
//!
//! Turns calculator input such as `2 + sin(30) × 3` into a number.
//!
//! The evaluator is a recursive-descent parser that computes values while it
//! parses. Precedence, from lowest to highest:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := power (('*' | '/') power)*
//! power      := unary ('^' unary)*
//! unary      := ('-' | '+') unary | primary
//! primary    := number | '(' expression ')' | name [ '(' arglist ')' ]
//! ```
//!
//! `^` chains left to right, so `2^3^2` is `(2^3)^2 = 64`, and its right
//! operand is a `unary`, so `2^-3` works.
//!
//! ## Example
//!
//! ```rust
//! use abacus_expr::{evaluate, EvalError};
//! use abacus_core::AngleUnit;
//!
//! assert_eq!(evaluate("2+3*4", AngleUnit::Radians), Ok(14.0));
//! assert_eq!(evaluate("1/0", AngleUnit::Radians), Err(EvalError::DivisionByZero));
//! ```
//!
//! The [`plot`] module samples an expression in `x` over a [`plot::Viewport`]
//! for graphing front-ends.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod functions;
pub mod parser;
pub mod plot;
pub mod substitute;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{EvalError, EvalResult};
    pub use crate::functions::{BinaryFunction, Constant, UnaryFunction};
    pub use crate::parser::{evaluate, Evaluator};
    pub use crate::plot::{grid_step, sample, segments, tick_label, Sample, Viewport};
    pub use crate::substitute::substitute_variable;
    pub use abacus_core::AngleUnit;
}

pub use error::{EvalError, EvalResult};
pub use parser::{evaluate, Evaluator};
pub use substitute::substitute_variable;
