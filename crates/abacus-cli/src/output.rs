//! Rendering of command results to the terminal.

use std::io::{self, Write};

use abacus_core::format_result;
use abacus_finance::format::format_amount;
use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Prints a list of rows in the requested format.
///
/// Minimal output is CSV without a header line.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print_table(data),
        OutputFormat::Json => print_json(data),
        OutputFormat::Csv | OutputFormat::Minimal => {
            write_csv(io::stdout().lock(), data, format == OutputFormat::Csv)
        }
    }
}

/// Prints a scalar result: `rows` describe it, `minimal` is the bare value.
pub fn print_report(
    title: &str,
    rows: &[KeyValue],
    minimal: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    if format == OutputFormat::Minimal {
        println!("{minimal}");
        return Ok(());
    }
    if format == OutputFormat::Table {
        print_header(title);
    }
    print_output(rows, format)
}

/// Prints rows as a rounded table with a left-aligned first column.
pub fn print_table<T: Tabled>(data: &[T]) -> anyhow::Result<()> {
    if data.is_empty() {
        println!("No results.");
        return Ok(());
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()));
    println!("{table}");
    Ok(())
}

/// Prints any serializable value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

fn write_csv<W: Write, T: Serialize>(out: W, data: &[T], headers: bool) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(headers)
        .from_writer(out);
    for row in data {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Prints an error line to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {message}", "✗".red());
}

/// Prints a warning line to stderr.
pub fn print_warning(message: &str) {
    eprintln!("{} {message}", "⚠".yellow());
}

/// Prints an underlined section title.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// One labelled line of a report.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    pub fn new(metric: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            value: value.into(),
        }
    }
}

/// Table cell for an amount.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn display_amount(value: &f64) -> String {
    format_amount(*value)
}

/// Table cell for a plain number.
#[allow(clippy::trivially_copy_pass_by_ref)]
pub fn display_number(value: &f64) -> String {
    format_result(*value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_text(rows: &[KeyValue], headers: bool) -> String {
        let mut buffer = Vec::new();
        write_csv(&mut buffer, rows, headers).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_csv_with_and_without_header() {
        let rows = [KeyValue::new("NPV", "1,250.00"), KeyValue::new("Rate", "8%")];

        assert_eq!(
            csv_text(&rows, true),
            "metric,value\nNPV,\"1,250.00\"\nRate,8%\n"
        );
        assert_eq!(csv_text(&rows, false), "NPV,\"1,250.00\"\nRate,8%\n");
    }

    #[test]
    fn test_cell_formatters() {
        assert_eq!(display_amount(&-1199.101), "-1,199.10");
        assert_eq!(display_number(&0.5), "0.5");
    }
}
