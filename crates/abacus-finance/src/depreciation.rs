//! Depreciation charges.
//!
//! `life` is in years and `year` counts from 1. Book value never falls below
//! `salvage`.

use crate::error::{FinanceError, FinanceResult};

fn check_life(life: u32) -> FinanceResult<()> {
    if life == 0 {
        return Err(FinanceError::invalid_input("useful life must be at least 1 year"));
    }
    Ok(())
}

fn check_year(life: u32, year: u32) -> FinanceResult<()> {
    check_life(life)?;
    if year == 0 || year > life {
        return Err(FinanceError::invalid_input(format!(
            "year {year} is outside the useful life of 1..={life}"
        )));
    }
    Ok(())
}

/// Equal charge every year: `(cost − salvage) / life`.
pub fn straight_line(cost: f64, salvage: f64, life: u32) -> FinanceResult<f64> {
    check_life(life)?;
    Ok((cost - salvage) / f64::from(life))
}

/// Declining-balance charge for `year` at a rate of `1 / life`.
pub fn declining_balance(cost: f64, salvage: f64, life: u32, year: u32) -> FinanceResult<f64> {
    declining_balance_with_factor(cost, salvage, life, year, 1.0)
}

/// Declining-balance charge for `year` at a rate of `factor / life`.
///
/// A factor of 2 gives double-declining balance.
///
/// ```rust
/// use abacus_finance::depreciation::declining_balance_with_factor;
///
/// let charge = declining_balance_with_factor(10_000.0, 1_000.0, 5, 1, 2.0).unwrap();
/// assert!((charge - 4_000.0).abs() < 1e-9);
/// ```
pub fn declining_balance_with_factor(
    cost: f64,
    salvage: f64,
    life: u32,
    year: u32,
    factor: f64,
) -> FinanceResult<f64> {
    check_year(life, year)?;
    if factor.is_nan() || factor <= 0.0 {
        return Err(FinanceError::invalid_input(format!(
            "declining-balance factor must be positive, got {factor}"
        )));
    }

    let rate = factor / f64::from(life);
    let mut book_value = cost;
    for _ in 1..year {
        book_value = (book_value - book_value * rate).max(salvage);
    }

    let charge = (book_value * rate).min(book_value - salvage);
    Ok(charge.max(0.0))
}

/// Sum-of-years-digits charge for `year`.
///
/// The charge is `(cost − salvage) · remaining / (life·(life+1)/2)` with
/// `remaining = life − year + 1`.
pub fn sum_of_years_digits(cost: f64, salvage: f64, life: u32, year: u32) -> FinanceResult<f64> {
    check_year(life, year)?;
    let life = f64::from(life);
    let remaining = life - f64::from(year) + 1.0;
    let digits = life * (life + 1.0) / 2.0;
    Ok((cost - salvage) * remaining / digits)
}
