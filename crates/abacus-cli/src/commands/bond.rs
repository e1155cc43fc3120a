//! Bond command implementation.

use abacus_core::format_result;
use abacus_finance::bond::bond_price;
use abacus_finance::format::{format_amount, format_percent};
use anyhow::Result;
use clap::Args;

use crate::cli::OutputFormat;
use crate::output::{print_report, KeyValue};

/// Arguments for the bond command.
#[derive(Args, Debug)]
pub struct BondArgs {
    /// Face value
    #[arg(long, default_value_t = 1000.0)]
    pub face: f64,

    /// Annual coupon rate (as percentage, e.g., 6.0 for 6%)
    #[arg(long)]
    pub coupon: f64,

    /// Annual yield to maturity (as percentage)
    #[arg(long = "yield", allow_negative_numbers = true)]
    pub yield_rate: f64,

    /// Years to maturity
    #[arg(long)]
    pub years: u32,
}

/// Execute the bond command.
pub fn execute(args: BondArgs, format: OutputFormat) -> Result<()> {
    let price = bond_price(args.face, args.coupon, args.yield_rate, args.years);

    let standing = if (price - args.face).abs() < 0.005 {
        "Par"
    } else if price > args.face {
        "Premium"
    } else {
        "Discount"
    };

    let rows = vec![
        KeyValue::new("Face", format_amount(args.face)),
        KeyValue::new("Coupon", format_percent(args.coupon)),
        KeyValue::new("Yield", format_percent(args.yield_rate)),
        KeyValue::new("Years", args.years.to_string()),
        KeyValue::new("Price", format_amount(price)),
        KeyValue::new("Trades at", standing),
    ];
    print_report("Bond Price", &rows, &format_result(price), format)
}
