//! Eval command implementation.

use abacus_config::CalculatorConfig;
use abacus_core::format_result;
use abacus_expr::Evaluator;
use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::commands::angle_unit;
use crate::error::CliError;
use crate::output::{print_report, KeyValue};

/// Arguments for the eval command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Expression to evaluate
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Read and write angles in degrees
    #[arg(long, conflicts_with = "radians")]
    pub degrees: bool,

    /// Read and write angles in radians
    #[arg(long)]
    pub radians: bool,
}

/// Execute the eval command.
pub fn execute(args: EvalArgs, config: &CalculatorConfig, format: OutputFormat) -> Result<()> {
    let unit = angle_unit(args.degrees, args.radians, config.angle_unit);
    let value = Evaluator::new(unit)
        .evaluate(&args.expression)
        .map_err(CliError::from)?;
    let display = format_result(value);

    let rows = vec![
        KeyValue::new("Expression", args.expression),
        KeyValue::new("Angle unit", unit.to_string()),
        KeyValue::new("Result", display.clone()),
    ];
    print_report("Result", &rows, &display, format)
}
