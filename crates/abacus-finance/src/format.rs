//! Display helpers for money and rates.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places shown for amounts.
pub const AMOUNT_DECIMALS: u32 = 2;

/// Rounds `value` to cents, half away from zero.
///
/// Returns `None` for values a [`Decimal`] cannot hold (non-finite or
/// beyond about 7.9e28).
pub fn round_amount(value: f64) -> Option<Decimal> {
    let mut rounded = Decimal::from_f64(value)?
        .round_dp_with_strategy(AMOUNT_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(AMOUNT_DECIMALS);
    Some(rounded)
}

/// Formats an amount with two decimals and thousands separators.
///
/// ```rust
/// use abacus_finance::format::format_amount;
///
/// assert_eq!(format_amount(-1_199.101), "-1,199.10");
/// assert_eq!(format_amount(200_000.0), "200,000.00");
/// ```
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let Some(rounded) = round_amount(value) else {
        return format!("{value:.2}");
    };

    let text = rounded.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, cents) = digits.split_once('.').unwrap_or((digits, "00"));
    format!("{sign}{}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a rate with four decimals and a percent sign.
pub fn format_percent(value: f64) -> String {
    format!("{value:.4}%")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_amount() {
        assert_eq!(round_amount(0.125), Some(dec!(0.13)));
        assert_eq!(round_amount(-0.125), Some(dec!(-0.13)));
        assert_eq!(round_amount(42.0), Some(dec!(42.00)));
        assert_eq!(round_amount(f64::NAN), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(1_234_567.891), "1,234,567.89");
        assert_eq!(format_amount(-123.4), "-123.40");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn test_format_amount_non_finite() {
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::INFINITY), "∞");
        assert_eq!(format_amount(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(15.322_14), "15.3221%");
        assert_eq!(format_percent(-2.5), "-2.5000%");
    }
}
