//! Sampling expressions in `x` for graphing.
//!
//! A front-end keeps a [`Viewport`], calls [`sample`] for each function it
//! draws, splits the result into polylines with [`segments`], and lays out
//! axes with [`grid_step`] and [`tick_label`].

use abacus_core::AngleUnit;
use serde::{Deserialize, Serialize};

use crate::parser::Evaluator;
use crate::substitute::substitute_variable;

/// Half-range multiplier applied by [`Viewport::zoom_in`].
pub const ZOOM_IN_FACTOR: f64 = 0.4;

/// Half-range multiplier applied by [`Viewport::zoom_out`].
pub const ZOOM_OUT_FACTOR: f64 = 0.75;

/// Target spacing between grid lines, in pixels.
const GRID_TARGET_PIXELS: f64 = 80.0;

/// The visible region of the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Left edge.
    pub x_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Top edge.
    pub y_max: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x_min: -10.0,
            x_max: 10.0,
            y_min: -10.0,
            y_max: 10.0,
        }
    }
}

impl Viewport {
    /// Creates a viewport from its edges.
    #[must_use]
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Vertical extent.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Centre point.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Shrinks about the centre: each new half-range is 0.4 × the old full range.
    pub fn zoom_in(&mut self) {
        self.rescale(ZOOM_IN_FACTOR);
    }

    /// Grows about the centre: each new half-range is 0.75 × the old full range.
    pub fn zoom_out(&mut self) {
        self.rescale(ZOOM_OUT_FACTOR);
    }

    /// Shifts by `(dx, dy)` in plane units.
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.x_min += dx;
        self.x_max += dx;
        self.y_min += dy;
        self.y_max += dy;
    }

    /// Restores the default `[-10, 10]²` view.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn rescale(&mut self, factor: f64) {
        let (cx, cy) = self.center();
        let half_x = self.width() * factor;
        let half_y = self.height() * factor;
        self.x_min = cx - half_x;
        self.x_max = cx + half_x;
        self.y_min = cy - half_y;
        self.y_max = cy + half_y;
    }

    fn is_far_outside(&self, y: f64) -> bool {
        let margin = self.height() * 10.0;
        y < self.y_min - margin || y > self.y_max + margin
    }
}

/// One sampled point. `y` is `None` where the expression failed or was not finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Abscissa.
    pub x: f64,
    /// Ordinate, if defined.
    pub y: Option<f64>,
}

/// Evaluates `expression` (in the variable `x`) at `samples` evenly spaced
/// points starting at `viewport.x_min`.
///
/// ```rust
/// use abacus_expr::plot::{sample, Viewport};
/// use abacus_core::AngleUnit;
///
/// let points = sample("1/x", AngleUnit::Radians, &Viewport::default(), 4);
/// assert_eq!(points.len(), 4);
/// assert_eq!(points[2].y, None); // x = 0
/// ```
pub fn sample(
    expression: &str,
    angle_unit: AngleUnit,
    viewport: &Viewport,
    samples: usize,
) -> Vec<Sample> {
    let evaluator = Evaluator::new(angle_unit);
    let range = viewport.width();

    (0..samples)
        .map(|k| {
            let x = viewport.x_min + range * k as f64 / samples as f64;
            let y = evaluator
                .evaluate(&substitute_variable(expression, "x", x))
                .ok()
                .filter(|y| y.is_finite());
            Sample { x, y }
        })
        .collect()
}

/// Splits samples into continuous runs for drawing.
///
/// A run ends at a missing point, at a point more than ten viewport heights
/// outside the viewport, or before a jump larger than two viewport heights.
pub fn segments(samples: &[Sample], viewport: &Viewport) -> Vec<Vec<(f64, f64)>> {
    let jump_limit = viewport.height() * 2.0;
    let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    for point in samples {
        let Some(y) = point.y.filter(|&y| !viewport.is_far_outside(y)) else {
            if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
            continue;
        };

        if let Some(&(_, prev_y)) = current.last() {
            if (y - prev_y).abs() > jump_limit {
                runs.push(std::mem::take(&mut current));
            }
        }
        current.push((point.x, y));
    }

    if !current.is_empty() {
        runs.push(current);
    }
    runs
}

/// Grid spacing for `range` plane units drawn across `pixels` pixels.
///
/// Aims for a line every 80 pixels, snapped to 1, 2 or 5 times a power of ten.
pub fn grid_step(range: f64, pixels: u32) -> f64 {
    let raw = range * GRID_TARGET_PIXELS / f64::from(pixels.max(1));
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    if normalized <= 1.0 {
        magnitude
    } else if normalized <= 2.0 {
        2.0 * magnitude
    } else if normalized <= 5.0 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    }
}

/// Axis label for a tick at `value`.
///
/// Very large or very small magnitudes use one-decimal scientific notation,
/// integers print bare, anything else gets two decimals.
#[allow(clippy::cast_possible_truncation)]
pub fn tick_label(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1e6 || (magnitude < 0.01 && value != 0.0) {
        let formatted = format!("{value:.1e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().unwrap_or(0);
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
            }
            None => formatted,
        };
    }
    if value == value.floor() {
        return format!("{}", value as i64);
    }
    format!("{value:.2}")
}
