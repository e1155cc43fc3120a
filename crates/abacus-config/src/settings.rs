//! Calculator settings.

use abacus_core::AngleUnit;
use abacus_expr::plot::Viewport;
use abacus_math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};

use crate::error::{Validate, ValidationError};

/// Iteration cap applied by the rate and IRR solvers unless configured.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;
/// Convergence tolerance unless configured.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;
/// Derivative magnitude treated as zero unless configured.
pub const DEFAULT_DERIVATIVE_FLOOR: f64 = 1e-20;
/// IRR starting guess in percent unless configured.
pub const DEFAULT_IRR_GUESS: f64 = 10.0;
/// Points sampled per plotted function unless configured.
pub const DEFAULT_SAMPLES: usize = 200;

/// Everything a front-end can configure.
///
/// Every field is optional in a file; missing fields take their defaults.
///
/// ```rust
/// use abacus_config::CalculatorConfig;
/// use abacus_core::AngleUnit;
///
/// let config = CalculatorConfig::from_toml_str(r#"
///     angle_unit = "degrees"
///
///     [graph]
///     samples = 400
/// "#).unwrap();
///
/// assert_eq!(config.angle_unit, AngleUnit::Degrees);
/// assert_eq!(config.graph.samples, 400);
/// assert_eq!(config.solver.max_iterations, 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Unit for trigonometric functions.
    pub angle_unit: AngleUnit,
    /// Iterative solver settings.
    pub solver: SolverSettings,
    /// Initial graph view.
    pub graph: GraphSettings,
}

/// Settings for the interest-rate and IRR solvers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Maximum iterations before giving up.
    pub max_iterations: u32,
    /// Step size at which the solver stops.
    pub tolerance: f64,
    /// Derivative magnitude treated as zero.
    pub derivative_floor: f64,
    /// IRR starting guess in percent.
    pub irr_guess: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            tolerance: DEFAULT_TOLERANCE,
            derivative_floor: DEFAULT_DERIVATIVE_FLOOR,
            irr_guess: DEFAULT_IRR_GUESS,
        }
    }
}

impl SolverSettings {
    /// Solver configuration for [`abacus_math::solvers`].
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
            .with_derivative_floor(self.derivative_floor)
    }
}

impl From<SolverSettings> for SolverConfig {
    fn from(settings: SolverSettings) -> Self {
        settings.solver_config()
    }
}

/// Initial viewport and sampling density for graphs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    /// Left edge.
    pub x_min: f64,
    /// Right edge.
    pub x_max: f64,
    /// Bottom edge.
    pub y_min: f64,
    /// Top edge.
    pub y_max: f64,
    /// Points sampled per function.
    pub samples: usize,
}

impl Default for GraphSettings {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            x_min: viewport.x_min,
            x_max: viewport.x_max,
            y_min: viewport.y_min,
            y_max: viewport.y_max,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl GraphSettings {
    /// Viewport described by these settings.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.x_min, self.x_max, self.y_min, self.y_max)
    }
}

impl From<GraphSettings> for Viewport {
    fn from(settings: GraphSettings) -> Self {
        settings.viewport()
    }
}

impl Validate for SolverSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.max_iterations == 0 {
            errors.push(ValidationError::with_rule(
                "solver.max_iterations",
                "Max iterations must be at least 1",
                "positive_iterations",
            ));
        }

        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            errors.push(ValidationError::with_rule(
                "solver.tolerance",
                format!("Tolerance must be positive, got {}", self.tolerance),
                "positive_tolerance",
            ));
        }

        if self.derivative_floor.is_nan() || self.derivative_floor <= 0.0 {
            errors.push(ValidationError::with_rule(
                "solver.derivative_floor",
                format!(
                    "Derivative floor must be positive, got {}",
                    self.derivative_floor
                ),
                "positive_tolerance",
            ));
        }

        if !self.irr_guess.is_finite() {
            errors.push(ValidationError::new(
                "solver.irr_guess",
                "IRR guess must be a finite number",
            ));
        }

        errors
    }
}

impl Validate for GraphSettings {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.x_min.is_nan() || self.x_max.is_nan() || self.x_min >= self.x_max {
            errors.push(ValidationError::with_rule(
                "graph.x_min",
                format!("x_min ({}) must be less than x_max ({})", self.x_min, self.x_max),
                "ordered_range",
            ));
        }

        if self.y_min.is_nan() || self.y_max.is_nan() || self.y_min >= self.y_max {
            errors.push(ValidationError::with_rule(
                "graph.y_min",
                format!("y_min ({}) must be less than y_max ({})", self.y_min, self.y_max),
                "ordered_range",
            ));
        }

        if self.samples < 2 {
            errors.push(ValidationError::with_rule(
                "graph.samples",
                format!("At least 2 samples are needed, got {}", self.samples),
                "min_samples",
            ));
        }

        errors
    }
}

impl Validate for CalculatorConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.solver.validate();
        errors.extend(self.graph.validate());
        errors
    }
}
