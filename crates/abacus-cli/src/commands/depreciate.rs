//! Depreciate command implementation.

use abacus_core::format_result;
use abacus_finance::depreciation::{
    declining_balance_with_factor, straight_line, sum_of_years_digits,
};
use abacus_finance::format::format_amount;
use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::{display_amount, print_header, print_output, print_report, KeyValue};

/// Depreciation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Straight line
    Sl,
    /// Declining balance (rate = factor / life)
    Db,
    /// Sum of the years' digits
    Syd,
}

impl Method {
    fn label(self) -> &'static str {
        match self {
            Method::Sl => "Straight line",
            Method::Db => "Declining balance",
            Method::Syd => "Sum of years' digits",
        }
    }
}

/// Arguments for the depreciate command.
#[derive(Args, Debug)]
pub struct DepreciateArgs {
    /// Depreciation method
    #[arg(long, value_enum)]
    pub method: Method,

    /// Purchase cost
    #[arg(long)]
    pub cost: f64,

    /// Value at the end of the useful life
    #[arg(long, default_value_t = 0.0)]
    pub salvage: f64,

    /// Useful life in years
    #[arg(long)]
    pub life: u32,

    /// Year to report. Without it the whole schedule is printed.
    #[arg(long)]
    pub year: Option<u32>,

    /// Declining-balance factor (2 = double declining)
    #[arg(long, default_value_t = 1.0)]
    pub factor: f64,
}

/// One year of a depreciation schedule.
#[derive(Debug, Serialize, Tabled)]
pub struct DepreciationRow {
    #[tabled(rename = "Year")]
    pub year: u32,
    #[tabled(rename = "Charge", display_with = "display_amount")]
    pub charge: f64,
    #[tabled(rename = "Book value", display_with = "display_amount")]
    pub book_value: f64,
}

fn charge(args: &DepreciateArgs, year: u32) -> CliResult<f64> {
    let value = match args.method {
        Method::Sl => {
            if year == 0 || year > args.life {
                return Err(CliError::InvalidArgument(format!(
                    "year {year} is outside the useful life of 1..={}",
                    args.life
                )));
            }
            straight_line(args.cost, args.salvage, args.life)?
        }
        Method::Db => {
            declining_balance_with_factor(args.cost, args.salvage, args.life, year, args.factor)?
        }
        Method::Syd => sum_of_years_digits(args.cost, args.salvage, args.life, year)?,
    };
    Ok(value)
}

/// Execute the depreciate command.
pub fn execute(args: DepreciateArgs, format: OutputFormat) -> Result<()> {
    straight_line(args.cost, args.salvage, args.life).map_err(CliError::from)?;

    if let Some(year) = args.year {
        let value = charge(&args, year)?;
        let rows = vec![
            KeyValue::new("Method", args.method.label()),
            KeyValue::new("Year", year.to_string()),
            KeyValue::new("Charge", format_amount(value)),
        ];
        return print_report("Depreciation", &rows, &format_result(value), format);
    }

    let mut book_value = args.cost;
    let mut rows = Vec::with_capacity(args.life as usize);
    for year in 1..=args.life {
        let value = charge(&args, year)?;
        book_value -= value;
        rows.push(DepreciationRow {
            year,
            charge: value,
            book_value,
        });
    }
    if format == OutputFormat::Table {
        print_header(&format!("{} over {} years", args.method.label(), args.life));
    }
    print_output(&rows, format)
}
