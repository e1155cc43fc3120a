//! Trigonometric and hyperbolic functions.
//!
//! Forward functions convert their argument to radians before the native
//! call; inverse functions convert the native radian result back to the
//! caller's unit. Hyperbolic functions are unit-free.

use abacus_core::AngleUnit;

use crate::error::{MathError, MathResult};

/// `tan` is rejected when `|cos(x)|` is at or below this value.
pub const TAN_POLE_THRESHOLD: f64 = 1e-15;

/// Converts `value` in `unit` to radians.
pub fn to_radians(value: f64, unit: AngleUnit) -> f64 {
    unit.to_radians(value)
}

/// Converts `value` in radians to `unit`.
pub fn from_radians(value: f64, unit: AngleUnit) -> f64 {
    unit.from_radians(value)
}

/// sin x
pub fn sin(x: f64, unit: AngleUnit) -> f64 {
    to_radians(x, unit).sin()
}

/// cos x
pub fn cos(x: f64, unit: AngleUnit) -> f64 {
    to_radians(x, unit).cos()
}

/// tan x, rejected at the poles (odd multiples of 90°) and for non-finite angles.
pub fn tan(x: f64, unit: AngleUnit) -> MathResult<f64> {
    let rad = to_radians(x, unit);
    if !rad.is_finite() || rad.cos().abs() <= TAN_POLE_THRESHOLD {
        return Err(MathError::domain("tan", "an angle away from its poles"));
    }
    Ok(rad.tan())
}

/// sin⁻¹ x
pub fn asin(x: f64, unit: AngleUnit) -> MathResult<f64> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(MathError::domain("asin", "x in [-1, 1]"));
    }
    Ok(from_radians(x.asin(), unit))
}

/// cos⁻¹ x
pub fn acos(x: f64, unit: AngleUnit) -> MathResult<f64> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(MathError::domain("acos", "x in [-1, 1]"));
    }
    Ok(from_radians(x.acos(), unit))
}

/// tan⁻¹ x
pub fn atan(x: f64, unit: AngleUnit) -> f64 {
    from_radians(x.atan(), unit)
}

/// sinh x
pub fn sinh(x: f64) -> f64 {
    x.sinh()
}

/// cosh x
pub fn cosh(x: f64) -> f64 {
    x.cosh()
}

/// tanh x
pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

/// sinh⁻¹ x
pub fn asinh(x: f64) -> f64 {
    x.asinh()
}

/// cosh⁻¹ x
pub fn acosh(x: f64) -> MathResult<f64> {
    if x.is_nan() || x < 1.0 {
        return Err(MathError::domain("acosh", "x >= 1"));
    }
    Ok(x.acosh())
}

/// tanh⁻¹ x
pub fn atanh(x: f64) -> MathResult<f64> {
    if x.is_nan() || x <= -1.0 || x >= 1.0 {
        return Err(MathError::domain("atanh", "x in (-1, 1)"));
    }
    Ok(x.atanh())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_trig_degrees() {
        assert_relative_eq!(sin(30.0, AngleUnit::Degrees), 0.5, epsilon = 1e-10);
        assert_relative_eq!(cos(60.0, AngleUnit::Degrees), 0.5, epsilon = 1e-10);
        assert_relative_eq!(tan(45.0, AngleUnit::Degrees).unwrap(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_trig_radians() {
        assert_relative_eq!(sin(PI / 2.0, AngleUnit::Radians), 1.0, epsilon = 1e-10);
        assert_relative_eq!(cos(0.0, AngleUnit::Radians), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_tan_pole() {
        assert!(matches!(
            tan(90.0, AngleUnit::Degrees),
            Err(MathError::Domain { function: "tan", .. })
        ));
        assert!(tan(-270.0, AngleUnit::Degrees).is_err());
        assert!(tan(PI / 2.0, AngleUnit::Radians).is_err());
    }

    #[test]
    fn test_inverse_trig_units() {
        assert_relative_eq!(asin(0.5, AngleUnit::Degrees).unwrap(), 30.0, epsilon = 1e-10);
        assert_relative_eq!(acos(0.0, AngleUnit::Radians).unwrap(), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(atan(1.0, AngleUnit::Degrees), 45.0, epsilon = 1e-10);
    }

    #[test]
    fn test_inverse_trig_domain() {
        assert!(asin(2.0, AngleUnit::Radians).is_err());
        assert!(acos(-1.000_001, AngleUnit::Degrees).is_err());
        assert!(asin(1.0, AngleUnit::Radians).is_ok());
    }

    #[test]
    fn test_hyperbolic() {
        assert_eq!(sinh(0.0), 0.0);
        assert_eq!(cosh(0.0), 1.0);
        assert_relative_eq!(asinh(sinh(1.5)), 1.5, epsilon = 1e-12);
        assert_relative_eq!(acosh(1.0).unwrap(), 0.0);
        assert!(acosh(0.5).is_err());
        assert_relative_eq!(atanh(tanh(0.3)).unwrap(), 0.3, epsilon = 1e-12);
        assert!(atanh(1.0).is_err());
        assert!(atanh(-1.0).is_err());
    }

    #[test]
    fn test_nan_arguments_are_rejected() {
        assert!(matches!(acosh(f64::NAN), Err(MathError::Domain { function: "acosh", .. })));
        assert!(atanh(f64::NAN).is_err());
        assert!(asin(f64::NAN, AngleUnit::Radians).is_err());
        assert!(acos(f64::NAN, AngleUnit::Degrees).is_err());
        assert!(tan(f64::NAN, AngleUnit::Radians).is_err());
        assert!(tan(f64::INFINITY, AngleUnit::Degrees).is_err());
    }
}
