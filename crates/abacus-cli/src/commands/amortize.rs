//! Amortize command implementation.

use abacus_finance::amortization::{amortization_schedule, total_interest, AmortizationRow};
use abacus_finance::format::format_amount;
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{display_amount, print_header, print_output};

/// Arguments for the amortize command.
#[derive(Args, Debug)]
pub struct AmortizeArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: f64,

    /// Annual interest rate, in percent
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Number of payments
    #[arg(long)]
    pub periods: u32,

    /// Payments per year
    #[arg(long, default_value_t = 12)]
    pub per_year: u32,
}

/// One schedule line.
#[derive(Debug, Serialize, Tabled)]
pub struct ScheduleRow {
    #[tabled(rename = "Period")]
    pub period: u32,
    #[tabled(rename = "Payment", display_with = "display_amount")]
    pub payment: f64,
    #[tabled(rename = "Principal", display_with = "display_amount")]
    pub principal: f64,
    #[tabled(rename = "Interest", display_with = "display_amount")]
    pub interest: f64,
    #[tabled(rename = "Balance", display_with = "display_amount")]
    pub balance: f64,
}

impl From<AmortizationRow> for ScheduleRow {
    fn from(row: AmortizationRow) -> Self {
        Self {
            period: row.period,
            payment: row.payment,
            principal: row.principal,
            interest: row.interest,
            balance: row.balance,
        }
    }
}

/// Execute the amortize command.
pub fn execute(args: AmortizeArgs, format: OutputFormat) -> Result<()> {
    let schedule = amortization_schedule(args.principal, args.rate, args.periods, args.per_year)
        .map_err(CliError::from)?;

    if format == OutputFormat::Table {
        let payment = schedule.first().map_or(0.0, |row| row.payment);
        print_header(&format!(
            "{} payments of {} (total interest {})",
            schedule.len(),
            format_amount(payment),
            format_amount(total_interest(&schedule))
        ));
    }

    let rows: Vec<ScheduleRow> = schedule.into_iter().map(ScheduleRow::from).collect();
    print_output(&rows, format)
}
