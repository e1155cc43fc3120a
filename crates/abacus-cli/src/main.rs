//! Abacus CLI - scientific and financial calculator on the command line.
//!
//! # Usage
//!
//! ```bash
//! # Evaluate an expression
//! abacus eval "2 + sin(30) * 3" --degrees
//!
//! # Monthly payment on a 30-year loan at 6% a year
//! abacus tvm --solve pmt --n 360 --rate 0.5 --pv 200000
//!
//! # Internal rate of return
//! abacus irr -- -1000 300 400 500 200
//!
//! # Amortization schedule as CSV
//! abacus --format csv amortize --principal 10000 --rate 12 --periods 12
//! ```

use std::process::ExitCode;

use abacus_config::CalculatorConfig;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber. `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn load_config(cli: &Cli) -> Result<CalculatorConfig, CliError> {
    let config = match &cli.config {
        Some(path) => CalculatorConfig::load(path)?,
        None => CalculatorConfig::load_default()?,
    };
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let format = cli.format;

    match cli.command {
        Commands::Eval(args) => commands::eval::execute(args, &config, format)?,
        Commands::Plot(args) => commands::plot::execute(args, &config, format)?,
        Commands::Tvm(args) => commands::tvm::execute(args, &config, format)?,
        Commands::Npv(args) => commands::cashflow::execute_npv(args, format)?,
        Commands::Irr(args) => commands::cashflow::execute_irr(args, &config, format)?,
        Commands::Amortize(args) => commands::amortize::execute(args, format)?,
        Commands::Depreciate(args) => commands::depreciate::execute(args, format)?,
        Commands::Bond(args) => commands::bond::execute(args, format)?,
    }

    Ok(())
}
