//! Percentage keys: %, Δ%, %T, markup and margin.

use crate::error::{FinanceError, FinanceResult};

/// `percent` percent of `value`.
pub fn percent_of(value: f64, percent: f64) -> f64 {
    value * percent / 100.0
}

/// Change from `old` to `new` as a percentage of `|old|`.
pub fn percent_change(old: f64, new: f64) -> FinanceResult<f64> {
    if old == 0.0 {
        return Err(FinanceError::invalid_input(
            "percent change from zero is undefined",
        ));
    }
    Ok((new - old) / old.abs() * 100.0)
}

/// Share of `total` that `part` makes up, in percent.
pub fn percent_total(part: f64, total: f64) -> FinanceResult<f64> {
    if total == 0.0 {
        return Err(FinanceError::invalid_input(
            "percent of a zero total is undefined",
        ));
    }
    Ok(part / total * 100.0)
}

/// Profit as a percentage of `cost`.
pub fn markup(cost: f64, price: f64) -> FinanceResult<f64> {
    if cost == 0.0 {
        return Err(FinanceError::invalid_input("markup on a zero cost is undefined"));
    }
    Ok((price - cost) / cost * 100.0)
}

/// Profit as a percentage of `price`.
pub fn margin(cost: f64, price: f64) -> FinanceResult<f64> {
    if price == 0.0 {
        return Err(FinanceError::invalid_input("margin on a zero price is undefined"));
    }
    Ok((price - cost) / price * 100.0)
}
