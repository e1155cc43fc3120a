//! Factorial, permutations and combinations.

use crate::error::{MathError, MathResult};

/// Largest `n` whose factorial is finite in `f64`.
pub const MAX_FACTORIAL_ARGUMENT: i64 = 170;

/// Converts a finite, integral `f64` to `i64`.
///
/// Used by callers (such as the expression evaluator) that receive integer
/// arguments as floats.
#[allow(clippy::cast_possible_truncation)]
pub fn as_integer(value: f64, function: &'static str) -> MathResult<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(MathError::domain(function, "integer arguments"));
    }
    Ok(value as i64)
}

/// n!
///
/// ```rust
/// use abacus_math::scientific::factorial;
///
/// assert_eq!(factorial(5), Ok(120.0));
/// assert!(factorial(171).is_err());
/// ```
pub fn factorial(n: i64) -> MathResult<f64> {
    if !(0..=MAX_FACTORIAL_ARGUMENT).contains(&n) {
        return Err(MathError::domain("fact", "an integer in 0..=170"));
    }
    Ok((2..=n).fold(1.0, |acc, k| acc * k as f64))
}

/// nPr = n! / (n - r)!
pub fn permutation(n: i64, r: i64) -> MathResult<f64> {
    check_choice("npr", n, r)?;
    Ok((n - r + 1..=n).fold(1.0, |acc, k| acc * k as f64))
}

/// nCr = n! / (r! (n - r)!)
///
/// Computed multiplicatively over the smaller of `r` and `n - r` and rounded
/// to the nearest integer.
pub fn combination(n: i64, r: i64) -> MathResult<f64> {
    check_choice("ncr", n, r)?;
    let r = r.min(n - r);
    let value = (1..=r).fold(1.0, |acc, k| acc * (n - r + k) as f64 / k as f64);
    Ok(value.round())
}

fn check_choice(function: &'static str, n: i64, r: i64) -> MathResult<()> {
    if n < 0 || r < 0 || r > n || n > MAX_FACTORIAL_ARGUMENT {
        return Err(MathError::domain(function, "0 <= r <= n <= 170"));
    }
    Ok(())
}
