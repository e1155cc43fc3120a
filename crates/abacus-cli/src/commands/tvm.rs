//! TVM command implementation.
//!
//! Mirrors the five financial registers: four are given, one is solved.

use abacus_config::CalculatorConfig;
use abacus_core::format_result;
use abacus_finance::format::{format_amount, format_percent};
use abacus_finance::tvm::{
    future_value, interest_rate_with_config, number_of_periods, payment, present_value,
    PaymentTiming,
};
use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_report, KeyValue};

/// The register to solve for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TvmTarget {
    /// Future value
    Fv,
    /// Present value
    Pv,
    /// Payment per period
    Pmt,
    /// Number of periods
    N,
    /// Interest rate per period
    Rate,
}

/// Arguments for the tvm command.
#[derive(Args, Debug)]
pub struct TvmArgs {
    /// Register to solve for
    #[arg(long, value_enum)]
    pub solve: TvmTarget,

    /// Number of periods
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub n: f64,

    /// Interest rate per period, in percent
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub rate: f64,

    /// Present value
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pv: f64,

    /// Payment per period
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub pmt: f64,

    /// Future value
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub fv: f64,

    /// Payments at the start of each period (annuity due)
    #[arg(long)]
    pub begin: bool,
}

/// Execute the tvm command.
pub fn execute(args: TvmArgs, config: &CalculatorConfig, format: OutputFormat) -> Result<()> {
    let timing = PaymentTiming::from_begin_mode(args.begin);
    let TvmArgs {
        n,
        rate,
        pv,
        pmt,
        fv,
        ..
    } = args;

    let solved = match args.solve {
        TvmTarget::Fv => future_value(n, rate, pv, pmt, timing),
        TvmTarget::Pv => present_value(n, rate, fv, pmt, timing),
        TvmTarget::Pmt => payment(n, rate, pv, fv, timing).map_err(CliError::from)?,
        TvmTarget::N => number_of_periods(rate, pv, pmt, fv, timing).map_err(CliError::from)?,
        TvmTarget::Rate => {
            let solver = config.solver.solver_config();
            interest_rate_with_config(n, pv, pmt, fv, timing, &solver).map_err(CliError::from)?
        }
    };

    let register = |target: TvmTarget, given: f64| {
        if target == args.solve {
            solved
        } else {
            given
        }
    };

    let rows = vec![
        KeyValue::new("N", format_result(register(TvmTarget::N, n))),
        KeyValue::new("I%", format_percent(register(TvmTarget::Rate, rate))),
        KeyValue::new("PV", format_amount(register(TvmTarget::Pv, pv))),
        KeyValue::new("PMT", format_amount(register(TvmTarget::Pmt, pmt))),
        KeyValue::new("FV", format_amount(register(TvmTarget::Fv, fv))),
        KeyValue::new("Mode", timing.to_string()),
    ];

    let title = format!("Solved {:?}", args.solve).to_uppercase();
    print_report(&title, &rows, &format_result(solved), format)
}
