//! # Abacus Core
//!
//! Core types shared by every crate of the Abacus calculator engine.
//!
//! This crate provides the foundational building blocks used throughout Abacus:
//!
//! - **Types**: [`AngleUnit`], the unit every trigonometric call is resolved against
//! - **Formatting**: [`format_result`], the display rendering shared by all front-ends
//!
//! ## Design Philosophy
//!
//! - **Value Types**: Everything here is `Copy` or owned, with no hidden state
//! - **Explicit Over Implicit**: Angle units travel with every angle-sensitive call
//! - **One Rendering**: A single formatter so display text round-trips into expressions
//!
//! ## Example
//!
//! ```rust
//! use abacus_core::prelude::*;
//!
//! let unit: AngleUnit = "deg".parse().unwrap();
//! assert_eq!(unit, AngleUnit::Degrees);
//! assert_eq!(format_result(42.0), "42");
//! assert_eq!(format_result(3.14159), "3.14159");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod format;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::format::{format_result, format_significant};
    pub use crate::types::AngleUnit;
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use format::format_result;
pub use types::AngleUnit;
