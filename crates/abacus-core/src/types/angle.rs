//! Angle unit type.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Unit in which angles are read and written by trigonometric functions.
///
/// Native trig calls always work in radians; the unit only decides whether a
/// conversion happens on the way in (forward functions) or on the way out
/// (inverse functions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AngleUnit {
    /// Degrees (full turn = 360)
    #[serde(rename = "DEG", alias = "deg", alias = "degrees", alias = "Degrees")]
    Degrees,
    /// Radians (full turn = 2π)
    #[default]
    #[serde(rename = "RAD", alias = "rad", alias = "radians", alias = "Radians")]
    Radians,
}

impl AngleUnit {
    /// Converts an angle expressed in this unit to radians.
    #[must_use]
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value * PI / 180.0,
            AngleUnit::Radians => value,
        }
    }

    /// Converts an angle in radians to this unit.
    #[must_use]
    pub fn from_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value * 180.0 / PI,
            AngleUnit::Radians => value,
        }
    }

    /// Short display label (`DEG` / `RAD`).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "DEG",
            AngleUnit::Radians => "RAD",
        }
    }

    /// Returns the other unit.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            AngleUnit::Degrees => AngleUnit::Radians,
            AngleUnit::Radians => AngleUnit::Degrees,
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AngleUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(AngleUnit::Degrees),
            "rad" | "radian" | "radians" => Ok(AngleUnit::Radians),
            _ => Err(CoreError::invalid_angle_unit(s)),
        }
    }
}
