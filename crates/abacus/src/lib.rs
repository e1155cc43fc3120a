//! # Abacus
//!
//! A scientific and financial calculator engine.
//!
//! This crate re-exports the workspace crates under one name:
//!
//! - [`base`]: angle units and result formatting
//! - [`math`]: scalar functions and root finders
//! - [`expr`]: the expression evaluator and graph sampling
//! - [`finance`]: TVM, cash flows, amortization, depreciation and bonds
//! - [`config`]: settings files
//!
//! ## Example
//!
//! ```rust
//! use abacus::prelude::*;
//!
//! let value = evaluate("2 + sin(30) * 3", AngleUnit::Degrees).unwrap();
//! assert_eq!(format_result(value), "3.5");
//!
//! let pmt = payment(12.0, 1.0, 10_000.0, 0.0, PaymentTiming::End).unwrap();
//! assert_eq!(format_amount(pmt), "-888.49");
//! ```

#![warn(missing_docs)]

pub use abacus_config as config;
pub use abacus_core as base;
pub use abacus_expr as expr;
pub use abacus_finance as finance;
pub use abacus_math as math;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use abacus_config::{CalculatorConfig, Validate};
    pub use abacus_core::prelude::*;
    pub use abacus_expr::prelude::*;
    pub use abacus_finance::prelude::*;
}
