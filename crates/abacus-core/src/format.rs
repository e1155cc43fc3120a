//! Display formatting for calculator results.
//!
//! Every front-end renders numbers through [`format_result`]; the text it
//! produces is also fed back into the evaluator (memory recall, history), so
//! the output must stay parseable by the expression grammar.

/// Significant digits used for non-integral results.
pub const DISPLAY_SIGNIFICANT_DIGITS: usize = 10;

/// Integral values below this magnitude are printed without a decimal point.
pub const INTEGER_DISPLAY_LIMIT: f64 = 1e15;

/// Formats a result for display.
///
/// - NaN renders as `Error`
/// - infinities render as `∞` / `-∞`
/// - integral values with magnitude below 1e15 render as plain integers
/// - everything else renders like C's `%.10g`, with trailing zeros removed
///
/// # Example
///
/// ```rust
/// use abacus_core::format_result;
///
/// assert_eq!(format_result(1024.0), "1024");
/// assert_eq!(format_result(0.1 + 0.2), "0.3");
/// assert_eq!(format_result(1.5e20), "1.5e+20");
/// assert_eq!(format_result(f64::NAN), "Error");
/// ```
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "Error".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    if value == value.round() && value.abs() < INTEGER_DISPLAY_LIMIT {
        // -0.0 would otherwise print as "-0"
        if value == 0.0 {
            return "0".to_string();
        }
        return format!("{:.0}", value);
    }

    format_significant(value, DISPLAY_SIGNIFICANT_DIGITS)
}

/// Formats a finite value with `precision` significant digits using the
/// rules of C's `%g` conversion.
///
/// Scientific notation is used when the decimal exponent is below -4 or at
/// least `precision`; the exponent always carries a sign and two digits.
pub fn format_significant(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format_result(value);
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Removes trailing zeros, then a dangling decimal point.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
