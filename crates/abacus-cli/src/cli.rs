//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{
    AmortizeArgs, BondArgs, DepreciateArgs, EvalArgs, IrrArgs, NpvArgs, PlotArgs, TvmArgs,
};

/// Abacus - scientific and financial calculator
#[derive(Parser)]
#[command(name = "abacus")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (.toml or .json). Defaults to <config dir>/abacus/config.toml
    #[arg(short, long, global = true, env = "ABACUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log solver and configuration diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate an expression such as "2 + sin(30) * 3"
    Eval(EvalArgs),

    /// Sample an expression in x over a range
    Plot(PlotArgs),

    /// Solve the time-value-of-money equation for one unknown
    Tvm(TvmArgs),

    /// Net present value of a cash-flow series
    Npv(NpvArgs),

    /// Internal rate of return of a cash-flow series
    Irr(IrrArgs),

    /// Loan amortization schedule
    Amortize(AmortizeArgs),

    /// Depreciation charge or schedule
    Depreciate(DepreciateArgs),

    /// Price of a semiannual-coupon bond
    Bond(BondArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
