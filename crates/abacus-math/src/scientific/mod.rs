//! Scientific functions over `f64`.
//!
//! Every partial function checks its domain up front and returns a
//! [`MathError`] instead of producing NaN or infinity:
//!
//! | Function | Domain | Error |
//! |----------|--------|-------|
//! | [`divide`], [`modulo`], [`reciprocal`] | divisor ≠ 0 | `DivisionByZero` |
//! | [`square_root`] | x ≥ 0 | `Domain` |
//! | [`nth_root`] | n ≠ 0, odd integer n for x < 0 | `Domain` |
//! | [`natural_log`], [`log10`], [`log2`] | x > 0 | `Domain` |
//! | [`asin`], [`acos`] | -1 ≤ x ≤ 1 | `Domain` |
//! | [`tan`] | cos(x) ≠ 0 | `Domain` |
//! | [`acosh`] | x ≥ 1 | `Domain` |
//! | [`atanh`] | -1 < x < 1 | `Domain` |
//! | [`factorial`], [`permutation`], [`combination`] | integers in 0..=170 | `Domain` |
//!
//! # Example
//!
//! ```rust
//! use abacus_math::scientific;
//! use abacus_math::MathError;
//! use abacus_core::AngleUnit;
//!
//! let s = scientific::sin(30.0, AngleUnit::Degrees);
//! assert!((s - 0.5).abs() < 1e-12);
//!
//! assert_eq!(scientific::divide(1.0, 0.0), Err(MathError::DivisionByZero));
//! assert!(scientific::square_root(-1.0).is_err());
//! ```

mod combinatorics;
mod trig;

pub use combinatorics::{
    as_integer, combination, factorial, permutation, MAX_FACTORIAL_ARGUMENT,
};
pub use trig::{
    acos, acosh, asin, asinh, atan, atanh, cos, cosh, from_radians, sin, sinh, tan, tanh,
    to_radians, TAN_POLE_THRESHOLD,
};

use crate::error::{MathError, MathResult};

/// π
pub const PI: f64 = std::f64::consts::PI;

/// Euler's number.
pub const E: f64 = std::f64::consts::E;

/// The golden ratio, (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

// ============================================================================
// ARITHMETIC
// ============================================================================

/// a + b
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// a - b
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// a × b
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// a ÷ b, rejecting a zero divisor.
pub fn divide(a: f64, b: f64) -> MathResult<f64> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

/// Remainder of a ÷ b (sign follows the dividend), rejecting a zero divisor.
pub fn modulo(a: f64, b: f64) -> MathResult<f64> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a % b)
}

/// 1 / x
pub fn reciprocal(x: f64) -> MathResult<f64> {
    if x == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(1.0 / x)
}

// ============================================================================
// POWERS & ROOTS
// ============================================================================

/// base ^ exponent
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// x²
pub fn square(x: f64) -> f64 {
    x * x
}

/// x³
pub fn cube(x: f64) -> f64 {
    x * x * x
}

/// 10 ^ x
pub fn ten_to_the(x: f64) -> f64 {
    10f64.powf(x)
}

/// e ^ x
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// √x
pub fn square_root(x: f64) -> MathResult<f64> {
    if x.is_nan() || x < 0.0 {
        return Err(MathError::domain("sqrt", "x >= 0"));
    }
    Ok(x.sqrt())
}

/// ∛x, defined for every real x.
pub fn cube_root(x: f64) -> f64 {
    x.cbrt()
}

/// The `n`th root of `x`.
///
/// Negative radicands are accepted only for odd integer indices, in which
/// case the result is `-(|x|^(1/n))`.
pub fn nth_root(x: f64, n: f64) -> MathResult<f64> {
    if n.is_nan() || n == 0.0 {
        return Err(MathError::domain("root", "a non-zero index"));
    }
    if x.is_nan() {
        return Err(MathError::domain("root", "a real radicand"));
    }
    if x < 0.0 {
        let is_odd_integer = n.fract() == 0.0 && n % 2.0 != 0.0;
        if !is_odd_integer {
            return Err(MathError::domain(
                "root",
                "an odd integer index for a negative radicand",
            ));
        }
        return Ok(-(-x).powf(1.0 / n));
    }
    Ok(x.powf(1.0 / n))
}

// ============================================================================
// LOGARITHMS
// ============================================================================

/// ln x
pub fn natural_log(x: f64) -> MathResult<f64> {
    if x.is_nan() || x <= 0.0 {
        return Err(MathError::domain("ln", "x > 0"));
    }
    Ok(x.ln())
}

/// log₁₀ x
pub fn log10(x: f64) -> MathResult<f64> {
    if x.is_nan() || x <= 0.0 {
        return Err(MathError::domain("log10", "x > 0"));
    }
    Ok(x.log10())
}

/// log₂ x
pub fn log2(x: f64) -> MathResult<f64> {
    if x.is_nan() || x <= 0.0 {
        return Err(MathError::domain("log2", "x > 0"));
    }
    Ok(x.log2())
}

/// Logarithm of `x` in an arbitrary `base`.
pub fn log_base(x: f64, base: f64) -> MathResult<f64> {
    if x.is_nan() || x <= 0.0 {
        return Err(MathError::domain("log", "x > 0"));
    }
    if base.is_nan() || base <= 0.0 || base == 1.0 {
        return Err(MathError::domain("log", "a positive base other than 1"));
    }
    Ok(x.ln() / base.ln())
}

// ============================================================================
// UTILITY
// ============================================================================

/// |x|
pub fn absolute(x: f64) -> f64 {
    x.abs()
}

/// -x
pub fn negate(x: f64) -> f64 {
    -x
}

/// x / 100
pub fn percentage(x: f64) -> f64 {
    x / 100.0
}

/// -1, 0 or 1 according to the sign of x (0 for ±0).
pub fn sign(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x.signum()
    }
}
