//! CLI command implementations.

pub mod amortize;
pub mod bond;
pub mod cashflow;
pub mod depreciate;
pub mod eval;
pub mod plot;
pub mod tvm;

pub use amortize::AmortizeArgs;
pub use bond::BondArgs;
pub use cashflow::{IrrArgs, NpvArgs};
pub use depreciate::DepreciateArgs;
pub use eval::EvalArgs;
pub use plot::PlotArgs;
pub use tvm::TvmArgs;

use abacus_core::AngleUnit;

use crate::error::{CliError, CliResult};

/// Resolves `--degrees` / `--radians` against the configured unit.
pub fn angle_unit(degrees: bool, radians: bool, configured: AngleUnit) -> AngleUnit {
    if degrees {
        AngleUnit::Degrees
    } else if radians {
        AngleUnit::Radians
    } else {
        configured
    }
}

/// Validates a plot range.
pub fn validate_range(x_min: f64, x_max: f64) -> CliResult<(f64, f64)> {
    if x_min.is_nan() || x_max.is_nan() || x_min >= x_max {
        return Err(CliError::InvalidArgument(format!(
            "x range {x_min}..{x_max} is empty"
        )));
    }
    Ok((x_min, x_max))
}

/// Validates a sample count.
pub fn validate_samples(samples: usize) -> CliResult<usize> {
    if samples < 2 {
        return Err(CliError::InvalidArgument(format!(
            "at least 2 samples are needed, got {samples}"
        )));
    }
    Ok(samples)
}
