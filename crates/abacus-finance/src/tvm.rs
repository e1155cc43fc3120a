//! Time value of money.
//!
//! All five functions solve the same annuity equation
//!
//! ```text
//! pv·(1+i)^n + pmt·(1 + i·t)·((1+i)^n − 1)/i + fv = 0
//! ```
//!
//! for a different unknown, where `i = rate / 100` and `t` is 1 when payments
//! fall at the start of each period ([`PaymentTiming::Begin`]) and 0 otherwise.

use std::fmt;
use std::str::FromStr;

use abacus_math::solvers::{newton_raphson, SolverConfig};
use serde::{Deserialize, Serialize};

use crate::error::{FinanceError, FinanceResult};

/// Periodic rates with a smaller magnitude are treated as exactly zero.
pub const ZERO_RATE_THRESHOLD: f64 = 1e-15;

/// Starting guess for [`interest_rate`], as a fraction per period.
pub const INTEREST_RATE_GUESS: f64 = 0.1;

/// When payments fall within each period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentTiming {
    /// Ordinary annuity: payments at the end of each period.
    #[default]
    End,
    /// Annuity due: payments at the start of each period.
    Begin,
}

impl PaymentTiming {
    /// `Begin` when `begin_mode` is set, `End` otherwise.
    pub fn from_begin_mode(begin_mode: bool) -> Self {
        if begin_mode {
            Self::Begin
        } else {
            Self::End
        }
    }

    /// Payment multiplier `1 + i` for annuity-due, `1` otherwise.
    fn adjustment(self, i: f64) -> f64 {
        match self {
            Self::End => 1.0,
            Self::Begin => 1.0 + i,
        }
    }

    fn indicator(self) -> f64 {
        match self {
            Self::End => 0.0,
            Self::Begin => 1.0,
        }
    }
}

impl fmt::Display for PaymentTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::End => write!(f, "END"),
            Self::Begin => write!(f, "BEGIN"),
        }
    }
}

impl FromStr for PaymentTiming {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "end" => Ok(Self::End),
            "begin" | "beg" => Ok(Self::Begin),
            other => Err(FinanceError::invalid_input(format!(
                "unknown payment timing '{other}' (expected 'begin' or 'end')"
            ))),
        }
    }
}

/// `(1+i)^n`
fn growth(i: f64, n: f64) -> f64 {
    (1.0 + i).powf(n)
}

/// Annuity factor `((1+i)^n − 1)/i`, with its limit `n` at `i = 0`.
fn annuity_factor(i: f64, n: f64) -> f64 {
    if i.abs() < ZERO_RATE_THRESHOLD {
        n
    } else {
        (growth(i, n) - 1.0) / i
    }
}

/// d/di of [`annuity_factor`], with its limit `n(n−1)/2` at `i = 0`.
fn annuity_factor_derivative(i: f64, n: f64) -> f64 {
    if i.abs() < ZERO_RATE_THRESHOLD {
        n * (n - 1.0) / 2.0
    } else {
        let d_growth = n * (1.0 + i).powf(n - 1.0);
        (d_growth * i - (growth(i, n) - 1.0)) / (i * i)
    }
}

/// Future value after `n` periods.
///
/// ```rust
/// use abacus_finance::tvm::{future_value, PaymentTiming};
///
/// // 1000 deposited at 5% for 10 periods
/// let fv = future_value(10.0, 5.0, -1000.0, 0.0, PaymentTiming::End);
/// assert!((fv - 1628.89).abs() < 0.01);
/// ```
pub fn future_value(n: f64, rate: f64, pv: f64, pmt: f64, timing: PaymentTiming) -> f64 {
    let i = rate / 100.0;
    if i.abs() < ZERO_RATE_THRESHOLD {
        return -(pv + pmt * n);
    }
    let pmt_adjusted = pmt * timing.adjustment(i);
    -(pv * growth(i, n) + pmt_adjusted * annuity_factor(i, n))
}

/// Present value of a future sum and/or payment stream.
pub fn present_value(n: f64, rate: f64, fv: f64, pmt: f64, timing: PaymentTiming) -> f64 {
    let i = rate / 100.0;
    if i.abs() < ZERO_RATE_THRESHOLD {
        return -(fv + pmt * n);
    }
    let pmt_adjusted = pmt * timing.adjustment(i);
    -(fv + pmt_adjusted * annuity_factor(i, n)) / growth(i, n)
}

/// Level payment that takes `pv` to `fv` over `n` periods.
pub fn payment(n: f64, rate: f64, pv: f64, fv: f64, timing: PaymentTiming) -> FinanceResult<f64> {
    if n == 0.0 {
        return Err(FinanceError::unsolvable("payment needs at least one period"));
    }
    let i = rate / 100.0;
    if i.abs() < ZERO_RATE_THRESHOLD {
        return Ok(-(pv + fv) / n);
    }
    let divisor = annuity_factor(i, n) * timing.adjustment(i);
    Ok(-(pv * growth(i, n) + fv) / divisor)
}

/// Number of periods needed, solved in closed form.
///
/// Fails with [`FinanceError::Unsolvable`] when no real `n` exists: a zero
/// payment at zero rate, a zero denominator, a non-positive log ratio, or a
/// rate of −100% or below.
pub fn number_of_periods(
    rate: f64,
    pv: f64,
    pmt: f64,
    fv: f64,
    timing: PaymentTiming,
) -> FinanceResult<f64> {
    let i = rate / 100.0;
    if i.abs() < ZERO_RATE_THRESHOLD {
        if pmt == 0.0 {
            return Err(FinanceError::unsolvable(
                "payment must be non-zero when the rate is zero",
            ));
        }
        return Ok(-(pv + fv) / pmt);
    }
    if 1.0 + i <= 0.0 {
        return Err(FinanceError::unsolvable("rate must be above -100%"));
    }

    let pmt_adjusted = pmt * timing.adjustment(i);
    let numerator = pmt_adjusted - fv * i;
    let denominator = pmt_adjusted + pv * i;
    if denominator == 0.0 {
        return Err(FinanceError::unsolvable(
            "payment exactly offsets interest on the present value",
        ));
    }

    let ratio = numerator / denominator;
    if ratio.is_nan() || ratio <= 0.0 {
        return Err(FinanceError::unsolvable(
            "no whole number of periods reaches the future value",
        ));
    }
    Ok(ratio.ln() / (1.0 + i).ln())
}

/// Periodic interest rate, in percent, that balances the annuity equation.
///
/// Newton-Raphson from 10% with [`SolverConfig::financial`]: at most 1000
/// iterations, converged once a step is below 1e-10, and abandoned when
/// `|f'(i)|` drops below 1e-20.
///
/// ```rust
/// use abacus_finance::tvm::{interest_rate, payment, PaymentTiming};
///
/// let pmt = payment(12.0, 1.0, 10_000.0, 0.0, PaymentTiming::End).unwrap();
/// let rate = interest_rate(12.0, 10_000.0, pmt, 0.0, PaymentTiming::End).unwrap();
/// assert!((rate - 1.0).abs() < 1e-8);
/// ```
pub fn interest_rate(
    n: f64,
    pv: f64,
    pmt: f64,
    fv: f64,
    timing: PaymentTiming,
) -> FinanceResult<f64> {
    interest_rate_with_config(n, pv, pmt, fv, timing, &SolverConfig::financial())
}

/// [`interest_rate`] with explicit solver settings.
pub fn interest_rate_with_config(
    n: f64,
    pv: f64,
    pmt: f64,
    fv: f64,
    timing: PaymentTiming,
    config: &SolverConfig,
) -> FinanceResult<f64> {
    let t = timing.indicator();

    let f = |i: f64| pv * growth(i, n) + pmt * (1.0 + i * t) * annuity_factor(i, n) + fv;
    let df = |i: f64| {
        let d_growth = n * (1.0 + i).powf(n - 1.0);
        pv * d_growth
            + pmt * ((1.0 + i * t) * annuity_factor_derivative(i, n) + t * annuity_factor(i, n))
    };

    let result = newton_raphson(f, df, INTEREST_RATE_GUESS, config).map_err(|err| {
        FinanceError::non_convergent(format!("interest rate search failed: {err}"))
    })?;

    log::trace!(
        "interest rate converged to {} after {} iterations",
        result.root,
        result.iterations
    );
    Ok(result.root * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const END: PaymentTiming = PaymentTiming::End;
    const BEGIN: PaymentTiming = PaymentTiming::Begin;

    #[test]
    fn test_future_value() {
        assert_relative_eq!(future_value(10.0, 5.0, -1000.0, 0.0, END), 1628.89, epsilon = 0.01);
        assert_relative_eq!(future_value(10.0, 5.0, 0.0, -100.0, END), 1257.79, epsilon = 0.01);
        assert_relative_eq!(future_value(10.0, 5.0, 0.0, -100.0, BEGIN), 1320.68, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate() {
        assert_eq!(future_value(10.0, 0.0, -1000.0, -100.0, END), 2000.0);
        assert_eq!(present_value(10.0, 0.0, 2000.0, -100.0, END), -1000.0);
        assert_eq!(payment(10.0, 0.0, 1000.0, 0.0, END), Ok(-100.0));
        assert_eq!(number_of_periods(0.0, 1000.0, -100.0, 0.0, END), Ok(10.0));
    }

    #[test]
    fn test_present_value() {
        assert_relative_eq!(present_value(5.0, 8.0, -10_000.0, 0.0, END), 6805.83, epsilon = 0.01);
    }

    #[test]
    fn test_payment() {
        let pmt = payment(360.0, 0.5, 200_000.0, 0.0, END).unwrap();
        assert_relative_eq!(pmt, -1199.10, epsilon = 0.01);

        let pmt = payment(12.0, 1.0, 10_000.0, 0.0, BEGIN).unwrap();
        assert_relative_eq!(pmt, -879.69, epsilon = 0.01);
    }

    #[test]
    fn test_payment_needs_periods() {
        assert!(matches!(
            payment(0.0, 1.0, 1000.0, 0.0, END),
            Err(FinanceError::Unsolvable { .. })
        ));
    }

    #[test]
    fn test_number_of_periods() {
        let pmt = payment(12.0, 1.0, 10_000.0, 0.0, END).unwrap();
        let n = number_of_periods(1.0, 10_000.0, pmt, 0.0, END).unwrap();
        assert_relative_eq!(n, 12.0, epsilon = 1e-9);

        let pmt = payment(24.0, 0.75, 5_000.0, -1_000.0, BEGIN).unwrap();
        let n = number_of_periods(0.75, 5_000.0, pmt, -1_000.0, BEGIN).unwrap();
        assert_relative_eq!(n, 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_number_of_periods_unsolvable() {
        // payment too small to ever cover the interest
        assert!(matches!(
            number_of_periods(1.0, 10_000.0, -50.0, 0.0, END),
            Err(FinanceError::Unsolvable { .. })
        ));
        // payment exactly equals the interest
        assert!(matches!(
            number_of_periods(1.0, 10_000.0, -100.0, 0.0, END),
            Err(FinanceError::Unsolvable { .. })
        ));
        assert!(matches!(
            number_of_periods(0.0, 1000.0, 0.0, 0.0, END),
            Err(FinanceError::Unsolvable { .. })
        ));
        assert!(matches!(
            number_of_periods(-100.0, 1000.0, -10.0, 0.0, END),
            Err(FinanceError::Unsolvable { .. })
        ));
    }

    #[test]
    fn test_interest_rate_round_trip() {
        for (n, rate, timing) in [(12.0, 1.0, END), (60.0, 0.4, BEGIN), (5.0, 7.5, END)] {
            let pmt = payment(n, rate, 10_000.0, 0.0, timing).unwrap();
            let solved = interest_rate(n, 10_000.0, pmt, 0.0, timing).unwrap();
            assert_relative_eq!(solved, rate, epsilon = 1e-8);
        }
    }

    #[test]
    fn test_interest_rate_lump_sum() {
        // 1000 grows to 1628.89 in 10 periods at 5%
        let rate = interest_rate(10.0, -1000.0, 0.0, 1628.894_626_777_442, END).unwrap();
        assert_relative_eq!(rate, 5.0, epsilon = 1e-8);
    }

    #[test]
    fn test_interest_rate_through_zero() {
        // sum of payments equals the loan, so the rate is exactly zero
        let rate = interest_rate(10.0, 1000.0, -100.0, 0.0, END).unwrap();
        assert!(rate.abs() < 1e-8);
    }

    #[test]
    fn test_interest_rate_tiny_amounts() {
        // 1e-12 doubles in one period; the 10% starting guess already has |f| < 1e-10
        let rate = interest_rate(1.0, -1e-12, 0.0, 2e-12, END).unwrap();
        assert_relative_eq!(rate, 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_interest_rate_non_convergent() {
        // both cash flows positive: no rate balances the equation
        let result = interest_rate(10.0, 1000.0, 0.0, 1000.0, END);
        assert!(matches!(result, Err(FinanceError::NonConvergent { .. })));
    }

    #[test]
    fn test_annuity_factor_limit_is_continuous() {
        let n = 24.0;
        assert_relative_eq!(annuity_factor(1e-9, n), annuity_factor(0.0, n), epsilon = 1e-5);
        assert_relative_eq!(
            annuity_factor_derivative(1e-6, n),
            annuity_factor_derivative(0.0, n),
            max_relative = 1e-3
        );
    }

    #[test]
    fn test_payment_timing_parsing() {
        assert_eq!("BEGIN".parse::<PaymentTiming>(), Ok(BEGIN));
        assert_eq!("end".parse::<PaymentTiming>(), Ok(END));
        assert!("middle".parse::<PaymentTiming>().is_err());
        assert_eq!(PaymentTiming::from_begin_mode(true), BEGIN);
        assert_eq!(PaymentTiming::default(), END);
        assert_eq!(BEGIN.to_string(), "BEGIN");
    }

    proptest::proptest! {
        #[test]
        fn prop_present_and_future_value_agree(
            n in 1.0f64..240.0,
            rate in -5.0f64..15.0,
            pv in -1e6f64..1e6,
            pmt in -1e4f64..1e4,
            begin in proptest::bool::ANY,
        ) {
            let timing = PaymentTiming::from_begin_mode(begin);
            let fv = future_value(n, rate, pv, pmt, timing);
            let back = present_value(n, rate, fv, pmt, timing);
            let scale = pv.abs() + pmt.abs() * n + 1.0;
            proptest::prop_assert!((back - pv).abs() <= scale * 1e-9, "{} vs {}", back, pv);
        }

        #[test]
        fn prop_periods_recover_payment_term(
            n in 1u32..360,
            rate in 0.05f64..3.0,
            pv in 100.0f64..1e6,
            begin in proptest::bool::ANY,
        ) {
            let timing = PaymentTiming::from_begin_mode(begin);
            let pmt = payment(f64::from(n), rate, pv, 0.0, timing).unwrap();
            let periods = number_of_periods(rate, pv, pmt, 0.0, timing).unwrap();
            proptest::prop_assert!((periods - f64::from(n)).abs() < 1e-6);
        }

        #[test]
        fn prop_rate_ignores_the_scale_of_amounts(
            n in 2.0f64..120.0,
            rate in 0.1f64..3.0,
            exponent in -14i32..9,
        ) {
            let k = 10f64.powi(exponent);
            let pv = 1000.0 * k;
            let pmt = payment(n, rate, pv, 0.0, END).unwrap();
            let solved = interest_rate(n, pv, pmt, 0.0, END).unwrap();
            proptest::prop_assert!((solved - rate).abs() < 1e-6, "{} vs {}", solved, rate);
        }
    }
}
