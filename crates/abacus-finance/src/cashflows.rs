//! Net present value and internal rate of return.
//!
//! Cash flows are given per period with index 0 at time zero.

use abacus_math::solvers::{hybrid, SolverConfig};

use crate::error::{FinanceError, FinanceResult};

/// Default IRR starting guess, in percent.
pub const DEFAULT_IRR_GUESS: f64 = 10.0;

/// Fallback bracket for IRR, as fractions per period.
pub const IRR_BRACKET: (f64, f64) = (-0.999, 10.0);

/// Net present value of `cash_flows` discounted at `rate` percent per period.
///
/// ```rust
/// use abacus_finance::cashflows::npv;
///
/// let value = npv(10.0, &[-1000.0, 300.0, 400.0, 500.0, 200.0]);
/// assert!((value - 115.57).abs() < 0.01);
/// ```
pub fn npv(rate: f64, cash_flows: &[f64]) -> f64 {
    npv_at(rate / 100.0, cash_flows)
}

fn npv_at(r: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, cf)| cf / (1.0 + r).powi(t as i32))
        .sum()
}

fn npv_derivative_at(r: f64, cash_flows: &[f64]) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(t, cf)| -(t as f64) * cf / (1.0 + r).powi(t as i32 + 1))
        .sum()
}

/// True if the series has both a strictly positive and a strictly negative flow.
pub fn has_sign_change(cash_flows: &[f64]) -> bool {
    cash_flows.iter().any(|&cf| cf > 0.0) && cash_flows.iter().any(|&cf| cf < 0.0)
}

/// Internal rate of return, in percent, starting the search at `guess` percent.
///
/// A series without a sign change has no IRR and is rejected up front.
/// Otherwise Newton-Raphson runs from the guess with
/// [`SolverConfig::financial`]; if it fails, bisection over rates of
/// −99.9%..1000% is tried.
///
/// ```rust
/// use abacus_finance::cashflows::irr;
///
/// let rate = irr(&[-1000.0, 1100.0], 10.0).unwrap();
/// assert!((rate - 10.0).abs() < 1e-8);
/// ```
pub fn irr(cash_flows: &[f64], guess: f64) -> FinanceResult<f64> {
    irr_with_config(cash_flows, guess, &SolverConfig::financial())
}

/// [`irr`] with explicit solver settings.
pub fn irr_with_config(
    cash_flows: &[f64],
    guess: f64,
    config: &SolverConfig,
) -> FinanceResult<f64> {
    if !has_sign_change(cash_flows) {
        return Err(FinanceError::non_convergent(
            "cash flows need at least one sign change to have an IRR",
        ));
    }

    let f = |r: f64| npv_at(r, cash_flows);
    let df = |r: f64| npv_derivative_at(r, cash_flows);

    let result = hybrid(f, df, guess / 100.0, Some(IRR_BRACKET), config)
        .map_err(|err| FinanceError::non_convergent(format!("IRR search failed: {err}")))?;

    log::trace!(
        "IRR converged to {} after {} iterations",
        result.root,
        result.iterations
    );
    Ok(result.root * 100.0)
}
