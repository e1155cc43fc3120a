//! Abacus Configuration Layer
//!
//! Settings shared by Abacus front-ends: the angle unit, the iterative solver
//! limits used by the financial functions, and the initial graph view.
//!
//! # Features
//!
//! - **Defaults everywhere**: every field of a file is optional
//! - **TOML and JSON**: picked from the file extension
//! - **Validation**: ranges are checked through the [`Validate`] trait
//!
//! # Example
//!
//! ```rust
//! use abacus_config::{CalculatorConfig, Validate};
//! use abacus_math::solvers::SolverConfig;
//!
//! let config = CalculatorConfig::from_json_str(r#"{"solver": {"max_iterations": 200}}"#).unwrap();
//! assert!(config.is_valid());
//!
//! let solver: SolverConfig = config.solver.into();
//! assert_eq!(solver.max_iterations, 200);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod loader;
pub mod settings;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use loader::default_path;
pub use settings::{CalculatorConfig, GraphSettings, SolverSettings};
