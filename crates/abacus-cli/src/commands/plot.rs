//! Plot command implementation.
//!
//! Prints sampled points rather than drawing; undefined points are kept so
//! gaps stay visible.

use abacus_config::CalculatorConfig;
use abacus_core::format_result;
use abacus_expr::plot::{sample, segments, Viewport};
use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{angle_unit, validate_range, validate_samples};
use crate::output::{display_number, print_header, print_output, print_warning};

/// Arguments for the plot command.
#[derive(Args, Debug)]
pub struct PlotArgs {
    /// Expression in x, e.g. "x^2 - 3"
    #[arg(allow_hyphen_values = true)]
    pub expression: String,

    /// Left end of the range (default from configuration)
    #[arg(long, allow_negative_numbers = true)]
    pub x_min: Option<f64>,

    /// Right end of the range (default from configuration)
    #[arg(long, allow_negative_numbers = true)]
    pub x_max: Option<f64>,

    /// Number of sample points (default from configuration)
    #[arg(long)]
    pub samples: Option<usize>,

    /// Read angles in degrees
    #[arg(long, conflicts_with = "radians")]
    pub degrees: bool,

    /// Read angles in radians
    #[arg(long)]
    pub radians: bool,
}

/// One printed sample.
#[derive(Debug, Serialize, Tabled)]
pub struct PlotPoint {
    #[tabled(rename = "x", display_with = "display_number")]
    pub x: f64,
    #[tabled(rename = "y", display_with = "display_y")]
    pub y: Option<f64>,
}

fn display_y(y: &Option<f64>) -> String {
    y.map_or_else(|| "undefined".to_string(), format_result)
}

/// Execute the plot command.
pub fn execute(args: PlotArgs, config: &CalculatorConfig, format: OutputFormat) -> Result<()> {
    let graph = config.graph;
    let (x_min, x_max) = validate_range(
        args.x_min.unwrap_or(graph.x_min),
        args.x_max.unwrap_or(graph.x_max),
    )?;
    let samples = validate_samples(args.samples.unwrap_or(graph.samples))?;
    let viewport = Viewport::new(x_min, x_max, graph.y_min, graph.y_max);
    let unit = angle_unit(args.degrees, args.radians, config.angle_unit);

    let points = sample(&args.expression, unit, &viewport, samples);
    if points.iter().all(|point| point.y.is_none()) {
        print_warning(&format!(
            "'{}' is undefined everywhere on [{}, {}]",
            args.expression,
            format_result(x_min),
            format_result(x_max)
        ));
    }

    if format == OutputFormat::Table {
        let runs = segments(&points, &viewport).len();
        print_header(&format!(
            "{} on [{}, {}]: {} points, {} segment(s)",
            args.expression,
            format_result(x_min),
            format_result(x_max),
            points.len(),
            runs
        ));
    }

    let rows: Vec<PlotPoint> = points
        .into_iter()
        .map(|point| PlotPoint {
            x: point.x,
            y: point.y,
        })
        .collect();
    print_output(&rows, format)
}
