//! # Abacus Math
//!
//! The numeric engine behind the Abacus calculator.
//!
//! This crate provides:
//!
//! - **Scientific functions**: trigonometric, hyperbolic, logarithmic, roots,
//!   factorial and combinatorics, each with an explicit domain check
//! - **Solvers**: Root-finding algorithms (Newton-Raphson, Bisection, and a
//!   Newton-with-bisection hybrid) used by the financial solvers
//!
//! ## Design Philosophy
//!
//! - **No Silent NaN**: A violated domain is reported as [`MathError::Domain`]
//!   instead of leaking NaN or infinity into later calculations
//! - **Stateless**: Every function is pure; nothing here holds mutable state
//! - **Bounded**: Iterative solvers always terminate within their iteration cap

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod scientific;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::scientific;
    pub use crate::solvers::{bisection, hybrid, newton_raphson, SolverConfig, SolverResult};
    pub use abacus_core::AngleUnit;
}

pub use error::{MathError, MathResult};
