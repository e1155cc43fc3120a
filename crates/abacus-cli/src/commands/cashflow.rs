//! NPV and IRR command implementations.

use abacus_config::CalculatorConfig;
use abacus_core::format_result;
use abacus_finance::cashflows::{irr_with_config, npv};
use abacus_finance::format::{format_amount, format_percent};
use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_report, KeyValue};

/// Arguments for the npv command.
#[derive(Args, Debug)]
pub struct NpvArgs {
    /// Discount rate per period, in percent
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Cash flows, starting with the one at time zero
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub flows: Vec<f64>,
}

/// Arguments for the irr command.
#[derive(Args, Debug)]
pub struct IrrArgs {
    /// Starting guess, in percent (default from configuration)
    #[arg(long, allow_negative_numbers = true)]
    pub guess: Option<f64>,

    /// Cash flows, starting with the one at time zero
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub flows: Vec<f64>,
}

/// Execute the npv command.
pub fn execute_npv(args: NpvArgs, format: OutputFormat) -> Result<()> {
    let value = npv(args.rate, &args.flows);

    let rows = vec![
        KeyValue::new("Rate", format_percent(args.rate)),
        KeyValue::new("Cash flows", args.flows.len().to_string()),
        KeyValue::new("NPV", format_amount(value)),
    ];
    print_report("Net Present Value", &rows, &format_result(value), format)
}

/// Execute the irr command.
pub fn execute_irr(args: IrrArgs, config: &CalculatorConfig, format: OutputFormat) -> Result<()> {
    let guess = args.guess.unwrap_or(config.solver.irr_guess);
    let solver = config.solver.solver_config();
    let rate = irr_with_config(&args.flows, guess, &solver).map_err(CliError::from)?;

    let rows = vec![
        KeyValue::new("Cash flows", args.flows.len().to_string()),
        KeyValue::new("Guess", format_percent(guess)),
        KeyValue::new("IRR", format_percent(rate)),
    ];
    print_report("Internal Rate of Return", &rows, &format_result(rate), format)
}
