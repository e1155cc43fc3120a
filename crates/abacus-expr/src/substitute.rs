//! Variable substitution for function plotting.

/// Replaces every identifier equal to `name` (case-insensitive) with
/// `(value)`.
///
/// Only whole identifiers are replaced: with `name = "x"`, the `x` inside
/// `exp` is left alone, and so is the exponent marker of a literal such as
/// `1e5` when `name = "e"`.
///
/// ```rust
/// use abacus_expr::substitute_variable;
///
/// assert_eq!(substitute_variable("exp(x)*x", "x", -2.0), "exp((-2))*(-2)");
/// ```
pub fn substitute_variable(expression: &str, name: &str, value: f64) -> String {
    let target = name.to_lowercase();
    let replacement = format!("({value})");
    let chars: Vec<char> = expression.chars().collect();
    let mut out = String::with_capacity(expression.len() + replacement.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() || c == '.' {
            let end = number_end(&chars, i);
            out.extend(&chars[i..end]);
            i = end;
        } else if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphanumeric() {
                i += 1;
            }
            let identifier: String = chars[start..i].iter().collect();
            if identifier.to_lowercase() == target {
                out.push_str(&replacement);
            } else {
                out.push_str(&identifier);
            }
        } else {
            out.push(c);
            i += 1;
        }
    }

    out
}

/// End index of the numeric literal starting at `start`, mirroring the
/// evaluator's number rule.
fn number_end(chars: &[char], start: usize) -> usize {
    let mut i = start;
    let mut seen_dot = false;
    while i < chars.len() && (chars[i].is_ascii_digit() || (chars[i] == '.' && !seen_dot)) {
        seen_dot |= chars[i] == '.';
        i += 1;
    }
    if i < chars.len() && matches!(chars[i], 'e' | 'E') {
        let digits_at = if matches!(chars.get(i + 1), Some('+' | '-')) {
            i + 2
        } else {
            i + 1
        };
        if chars.get(digits_at).is_some_and(char::is_ascii_digit) {
            i = digits_at;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
        }
    }
    i
}
