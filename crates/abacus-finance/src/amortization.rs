//! Level-payment loan amortization.

use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};
use crate::tvm::ZERO_RATE_THRESHOLD;

/// A final balance smaller than this is reported as exactly zero.
pub const BALANCE_SNAP_THRESHOLD: f64 = 0.01;

/// One period of an amortization schedule.
///
/// All amounts are positive: `payment = principal + interest`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Period number, starting at 1.
    pub period: u32,
    /// Level payment.
    pub payment: f64,
    /// Part of the payment that reduces the balance.
    pub principal: f64,
    /// Part of the payment that pays interest.
    pub interest: f64,
    /// Balance left after this payment.
    pub balance: f64,
}

/// Schedule for repaying `principal` in `periods` level payments.
///
/// `annual_rate` is a percentage, compounded `periods_per_year` times a year.
/// Each row's interest is charged on the previous row's balance.
///
/// ```rust
/// use abacus_finance::amortization::amortization_schedule;
///
/// let rows = amortization_schedule(10_000.0, 12.0, 12, 12).unwrap();
/// assert_eq!(rows.len(), 12);
/// assert!((rows[0].payment - 888.49).abs() < 0.01);
/// assert_eq!(rows[11].balance, 0.0);
/// ```
pub fn amortization_schedule(
    principal: f64,
    annual_rate: f64,
    periods: u32,
    periods_per_year: u32,
) -> FinanceResult<Vec<AmortizationRow>> {
    if periods == 0 {
        return Err(FinanceError::invalid_input("number of periods must be at least 1"));
    }
    if periods_per_year == 0 {
        return Err(FinanceError::invalid_input(
            "periods per year must be at least 1",
        ));
    }

    let i = annual_rate / 100.0 / f64::from(periods_per_year);
    let n = f64::from(periods);
    let payment = if i.abs() < ZERO_RATE_THRESHOLD {
        principal / n
    } else {
        let factor = (1.0 + i).powf(n);
        principal * i * factor / (factor - 1.0)
    };

    let mut balance = principal;
    let mut rows = Vec::with_capacity(periods as usize);
    for period in 1..=periods {
        let interest = balance * i;
        let principal_part = payment - interest;
        balance = (balance - principal_part).max(0.0);
        if period == periods && balance < BALANCE_SNAP_THRESHOLD {
            balance = 0.0;
        }
        rows.push(AmortizationRow {
            period,
            payment,
            principal: principal_part,
            interest,
            balance,
        });
    }

    log::trace!("amortized {principal} over {periods} periods at {payment} per period");
    Ok(rows)
}

/// Sum of the interest column.
pub fn total_interest(rows: &[AmortizationRow]) -> f64 {
    rows.iter().map(|row| row.interest).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_schedule_shape() {
        let rows = amortization_schedule(200_000.0, 6.0, 360, 12).unwrap();
        assert_eq!(rows.len(), 360);
        assert_eq!(rows[0].period, 1);
        assert_eq!(rows[359].period, 360);
        assert_eq!(rows[359].balance, 0.0);
    }

    #[test]
    fn test_first_row() {
        let rows = amortization_schedule(200_000.0, 6.0, 360, 12).unwrap();
        let first = rows[0];
        assert_relative_eq!(first.payment, 1199.101, epsilon = 1e-3);
        assert_relative_eq!(first.interest, 1000.0, epsilon = 1e-9);
        assert_relative_eq!(first.principal, 199.101, epsilon = 1e-3);
        assert_relative_eq!(first.balance, 200_000.0 - 199.101, epsilon = 1e-3);
    }

    #[test]
    fn test_rows_add_up() {
        let rows = amortization_schedule(10_000.0, 12.0, 12, 12).unwrap();
        for row in &rows {
            assert_relative_eq!(row.principal + row.interest, row.payment, epsilon = 1e-9);
            assert!(row.balance >= 0.0);
        }
        let repaid: f64 = rows.iter().map(|row| row.principal).sum();
        assert_relative_eq!(repaid, 10_000.0, epsilon = 1e-6);
        assert_relative_eq!(
            total_interest(&rows),
            12.0 * rows[0].payment - 10_000.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_zero_rate() {
        let rows = amortization_schedule(1200.0, 0.0, 12, 12).unwrap();
        assert!(rows.iter().all(|row| row.payment == 100.0 && row.interest == 0.0));
        assert_eq!(rows[11].balance, 0.0);
        assert_eq!(total_interest(&rows), 0.0);
    }

    #[test]
    fn test_balance_is_monotonic() {
        let rows = amortization_schedule(50_000.0, 7.5, 60, 12).unwrap();
        assert!(rows.windows(2).all(|pair| pair[1].balance <= pair[0].balance));
    }

    #[test]
    fn test_invalid_periods() {
        assert!(matches!(
            amortization_schedule(1000.0, 5.0, 0, 12),
            Err(FinanceError::InvalidInput { .. })
        ));
        assert!(matches!(
            amortization_schedule(1000.0, 5.0, 12, 0),
            Err(FinanceError::InvalidInput { .. })
        ));
    }
}
