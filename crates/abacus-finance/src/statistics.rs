//! Summary statistics keys: mean, sample standard deviation and a
//! least-squares line.

use serde::Serialize;

use crate::error::{FinanceError, FinanceResult};

/// Least-squares line `y = intercept + slope · x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    /// Value of the line at `x = 0`.
    pub intercept: f64,
    /// Change in `y` per unit of `x`.
    pub slope: f64,
    /// Coefficient of determination; 1 when every `y` is the same.
    pub r_squared: f64,
}

impl LinearFit {
    /// The fitted `y` at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> FinanceResult<f64> {
    if values.is_empty() {
        return Err(FinanceError::invalid_input("mean of an empty list"));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (divides by `n − 1`).
pub fn std_dev(values: &[f64]) -> FinanceResult<f64> {
    if values.len() < 2 {
        return Err(FinanceError::invalid_input(
            "standard deviation needs at least two values",
        ));
    }
    let m = mean(values)?;
    let squares: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Ok((squares / (values.len() - 1) as f64).sqrt())
}

/// Fits `y` against `x` by ordinary least squares.
///
/// ```rust
/// use abacus_finance::statistics::linear_regression;
///
/// let fit = linear_regression(&[1.0, 2.0, 3.0], &[3.0, 5.0, 7.0]).unwrap();
/// assert!((fit.slope - 2.0).abs() < 1e-12);
/// assert!((fit.intercept - 1.0).abs() < 1e-12);
/// ```
pub fn linear_regression(x: &[f64], y: &[f64]) -> FinanceResult<LinearFit> {
    if x.len() != y.len() {
        return Err(FinanceError::invalid_input(format!(
            "x has {} values but y has {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(FinanceError::invalid_input(
            "regression needs at least two points",
        ));
    }

    let n = x.len() as f64;
    let sum_x: f64 = x.iter().sum();
    let sum_y: f64 = y.iter().sum();
    let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();
    let sum_x2: f64 = x.iter().map(|a| a * a).sum();

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 || x.iter().all(|&v| v == x[0]) {
        return Err(FinanceError::invalid_input(
            "x values are all equal, so the slope is undefined",
        ));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let y_mean = sum_y / n;
    let ss_total: f64 = y.iter().map(|v| (v - y_mean).powi(2)).sum();
    let ss_residual: f64 = x
        .iter()
        .zip(y)
        .map(|(a, b)| (b - (intercept + slope * a)).powi(2))
        .sum();
    let r_squared = if ss_total == 0.0 {
        1.0
    } else {
        1.0 - ss_residual / ss_total
    };

    Ok(LinearFit {
        intercept,
        slope,
        r_squared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[2.0, 4.0, 9.0]).unwrap(), 5.0);
        assert_relative_eq!(mean(&[-3.5]).unwrap(), -3.5);
        assert!(matches!(mean(&[]), Err(FinanceError::InvalidInput { .. })));
    }

    #[test]
    fn test_sample_std_dev() {
        // squared deviations sum to 32 over 8 values
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(std_dev(&values).unwrap(), (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
        assert_eq!(std_dev(&[3.0, 3.0]).unwrap(), 0.0);
        assert!(matches!(std_dev(&[1.0]), Err(FinanceError::InvalidInput { .. })));
    }

    #[test]
    fn test_perfect_line() {
        let fit = linear_regression(&[0.0, 1.0, 2.0, 3.0], &[10.0, 8.0, 6.0, 4.0]).unwrap();
        assert_relative_eq!(fit.slope, -2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 10.0, epsilon = 1e-12);
        assert_relative_eq!(fit.r_squared, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.predict(5.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_noisy_line() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 5.0, 4.0, 5.0];
        let fit = linear_regression(&x, &y).unwrap();
        assert_relative_eq!(fit.slope, 0.6, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 2.2, epsilon = 1e-12);
        assert_relative_eq!(fit.r_squared, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_y_has_full_fit() {
        let fit = linear_regression(&[1.0, 2.0, 3.0], &[7.0, 7.0, 7.0]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.r_squared, 1.0);
    }

    #[test]
    fn test_regression_rejects_bad_input() {
        let cases: [(&[f64], &[f64]); 4] = [
            (&[1.0, 2.0], &[1.0]),
            (&[1.0], &[1.0]),
            (&[], &[]),
            (&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]),
        ];
        for (x, y) in cases {
            assert!(matches!(
                linear_regression(x, y),
                Err(FinanceError::InvalidInput { .. })
            ));
        }
    }
}
