//! Recursive-descent evaluator.
//!
//! Values are computed while parsing; no syntax tree is built. Each call to
//! [`Evaluator::evaluate`] owns a fresh `ParseState`, so an evaluator can be
//! shared freely between threads.

use abacus_core::AngleUnit;
use abacus_math::scientific;

use crate::error::{EvalError, EvalResult};
use crate::functions::{is_function, BinaryFunction, Constant, UnaryFunction};

/// Evaluates `expression` with trigonometric functions working in `angle_unit`.
///
/// ```rust
/// use abacus_expr::evaluate;
/// use abacus_core::AngleUnit;
///
/// let value = evaluate("sin(30) × 2", AngleUnit::Degrees).unwrap();
/// assert!((value - 1.0).abs() < 1e-12);
/// ```
pub fn evaluate(expression: &str, angle_unit: AngleUnit) -> EvalResult {
    Evaluator::new(angle_unit).evaluate(expression)
}

/// Expression evaluator configured with an angle unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    angle_unit: AngleUnit,
}

impl Evaluator {
    /// Creates an evaluator.
    #[must_use]
    pub fn new(angle_unit: AngleUnit) -> Self {
        Self { angle_unit }
    }

    /// The angle unit used by trigonometric functions.
    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    /// Evaluates `expression`.
    ///
    /// The whole input must be consumed; anything left over after a complete
    /// expression is reported as [`EvalError::UnexpectedCharacter`].
    pub fn evaluate(&self, expression: &str) -> EvalResult {
        let mut state = ParseState::new(expression);
        let value = self.parse_expression(&mut state)?;
        match state.peek() {
            None => Ok(value),
            Some(_) => Err(state.unexpected()),
        }
    }

    // ========================================================================
    // GRAMMAR
    // ========================================================================

    fn parse_expression(&self, state: &mut ParseState) -> EvalResult {
        let mut value = self.parse_term(state)?;
        loop {
            if state.eat('+') {
                value = scientific::add(value, self.parse_term(state)?);
            } else if state.eat('-') {
                value = scientific::subtract(value, self.parse_term(state)?);
            } else {
                return Ok(value);
            }
        }
    }

    fn parse_term(&self, state: &mut ParseState) -> EvalResult {
        let mut value = self.parse_power(state)?;
        loop {
            if state.eat('*') || state.eat('×') {
                value = scientific::multiply(value, self.parse_power(state)?);
            } else if state.eat('/') || state.eat('÷') {
                value = scientific::divide(value, self.parse_power(state)?)?;
            } else {
                return Ok(value);
            }
        }
    }

    fn parse_power(&self, state: &mut ParseState) -> EvalResult {
        let mut value = self.parse_unary(state)?;
        while state.eat('^') {
            value = scientific::power(value, self.parse_unary(state)?);
        }
        Ok(value)
    }

    fn parse_unary(&self, state: &mut ParseState) -> EvalResult {
        if state.eat('-') {
            return Ok(scientific::negate(self.parse_unary(state)?));
        }
        if state.eat('+') {
            return self.parse_unary(state);
        }
        self.parse_primary(state)
    }

    fn parse_primary(&self, state: &mut ParseState) -> EvalResult {
        match state.peek() {
            Some(c) if c.is_ascii_digit() || c == '.' => state.parse_number(),
            Some('(') => {
                state.advance();
                let value = self.parse_expression(state)?;
                state.expect(')')?;
                Ok(value)
            }
            Some(c) if c.is_alphabetic() => self.parse_name(state),
            _ => Err(state.unexpected()),
        }
    }

    fn parse_name(&self, state: &mut ParseState) -> EvalResult {
        let name = state.parse_identifier();

        if !state.eat('(') {
            return Constant::from_name(&name)
                .map(Constant::value)
                .ok_or_else(|| EvalError::unknown_function(name));
        }

        if !is_function(&name) {
            return Err(EvalError::unknown_function(name));
        }

        let first = self.parse_expression(state)?;
        if state.eat(',') {
            let second = self.parse_expression(state)?;
            state.expect(')')?;
            let function = BinaryFunction::from_name(&name)
                .ok_or_else(|| EvalError::unknown_function(&name))?;
            Ok(function.apply(first, second)?)
        } else {
            state.expect(')')?;
            let function = UnaryFunction::from_name(&name)
                .ok_or_else(|| EvalError::unknown_function(&name))?;
            Ok(function.apply(first, self.angle_unit)?)
        }
    }
}

/// Cursor over whitespace-free input, local to one evaluation.
#[derive(Debug)]
pub(crate) struct ParseState {
    input: Vec<char>,
    pos: usize,
}

impl ParseState {
    pub(crate) fn new(expression: &str) -> Self {
        Self {
            input: expression.chars().filter(|c| !c.is_whitespace()).collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consumes `expected` if it is next.
    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> EvalResult<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// The error for whatever sits under the cursor.
    fn unexpected(&self) -> EvalError {
        match self.peek() {
            Some(character) => EvalError::UnexpectedCharacter {
                character,
                position: self.pos,
            },
            None => EvalError::UnexpectedEnd,
        }
    }

    /// Digits with at most one `.`, then an optional `e`/`E` exponent.
    ///
    /// The exponent is only taken when at least one digit follows it, so in
    /// `2e` the `e` is left for the caller.
    fn parse_number(&mut self) -> EvalResult {
        let start = self.pos;
        let mut seen_dot = false;
        let mut seen_digit = false;

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                seen_digit = true;
            } else if c == '.' && !seen_dot {
                seen_dot = true;
            } else {
                break;
            }
            self.advance();
        }

        if !seen_digit {
            return Err(EvalError::UnexpectedCharacter {
                character: '.',
                position: start,
            });
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let digits_at = match self.peek_at(1) {
                Some('+' | '-') => 2,
                _ => 1,
            };
            if self.peek_at(digits_at).is_some_and(|c| c.is_ascii_digit()) {
                self.pos += digits_at;
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }

        let text: String = self.input[start..self.pos].iter().collect();
        text.parse::<f64>()
            .map_err(|_| EvalError::UnexpectedCharacter {
                character: self.input[start],
                position: start,
            })
    }

    /// A letter followed by letters or digits, lowercased.
    fn parse_identifier(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(char::is_alphanumeric) {
            self.advance();
        }
        self.input[start..self.pos]
            .iter()
            .collect::<String>()
            .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn eval(expression: &str) -> EvalResult {
        evaluate(expression, AngleUnit::Radians)
    }

    fn eval_deg(expression: &str) -> EvalResult {
        evaluate(expression, AngleUnit::Degrees)
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2+3*4"), Ok(14.0));
        assert_eq!(eval("(2+3)*4"), Ok(20.0));
        assert_eq!(eval("10-2*3"), Ok(4.0));
        assert_eq!(eval("2*3^2"), Ok(18.0));
        assert_eq!(eval("8/2/2"), Ok(2.0));
        assert_eq!(eval("10-3-2"), Ok(5.0));
    }

    #[test]
    fn test_power_chains_left_to_right() {
        assert_eq!(eval("2^3^2"), Ok(64.0));
        assert_eq!(eval("2^-3"), Ok(0.125));
        assert_eq!(eval("-2^2"), Ok(4.0));
    }

    #[test]
    fn test_unary_operators() {
        assert_eq!(eval("-5"), Ok(-5.0));
        assert_eq!(eval("--5"), Ok(5.0));
        assert_eq!(eval("+5"), Ok(5.0));
        assert_eq!(eval("3--2"), Ok(5.0));
        assert_eq!(eval("-(2+3)"), Ok(-5.0));
    }

    #[test]
    fn test_whitespace_and_aliases() {
        assert_eq!(eval("  2 +\t3 "), Ok(5.0));
        assert_eq!(eval("6 × 7"), Ok(42.0));
        assert_eq!(eval("84 ÷ 2"), Ok(42.0));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(eval("3.25"), Ok(3.25));
        assert_eq!(eval(".5"), Ok(0.5));
        assert_eq!(eval("5."), Ok(5.0));
        assert_eq!(eval("1.5e3"), Ok(1500.0));
        assert_eq!(eval("2E-2"), Ok(0.02));
        assert_eq!(eval("1e+2"), Ok(100.0));
    }

    #[test]
    fn test_malformed_numbers() {
        assert_eq!(
            eval("1.2.3"),
            Err(EvalError::UnexpectedCharacter {
                character: '.',
                position: 3
            })
        );
        assert_eq!(
            eval("."),
            Err(EvalError::UnexpectedCharacter {
                character: '.',
                position: 0
            })
        );
        // a dangling exponent marker is not part of the number
        assert_eq!(
            eval("2e"),
            Err(EvalError::UnexpectedCharacter {
                character: 'e',
                position: 1
            })
        );
    }

    #[test]
    fn test_constants() {
        assert_relative_eq!(eval("pi").unwrap(), std::f64::consts::PI);
        assert_relative_eq!(eval("π").unwrap(), std::f64::consts::PI);
        assert_relative_eq!(eval("E").unwrap(), std::f64::consts::E);
        assert_relative_eq!(eval("phi^2 - phi").unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eval("2*PI").unwrap(), std::f64::consts::TAU);
    }

    #[test]
    fn test_unary_functions() {
        assert_relative_eq!(eval("sqrt(16)").unwrap(), 4.0);
        assert_relative_eq!(eval("ln(e)").unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eval("log(1000)").unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(eval("LOG2(8)").unwrap(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(eval("cbrt(-27)").unwrap(), -3.0, epsilon = 1e-12);
        assert_eq!(eval("abs(-3)"), Ok(3.0));
        assert_eq!(eval("fact(5)"), Ok(120.0));
        assert_eq!(eval("sgn(-0.5)"), Ok(-1.0));
        assert_eq!(eval("floor(2.7)+ceil(2.1)+round(2.5)"), Ok(8.0));
    }

    #[test]
    fn test_binary_functions() {
        assert_eq!(eval("pow(2,10)"), Ok(1024.0));
        assert_relative_eq!(eval("root(27,3)").unwrap(), 3.0, epsilon = 1e-12);
        assert_eq!(eval("npr(5,2)"), Ok(20.0));
        assert_eq!(eval("ncr(5,2)"), Ok(10.0));
        assert_relative_eq!(eval("log(8,2)").unwrap(), 3.0, epsilon = 1e-12);
        assert_eq!(eval("mod(17,5)"), Ok(2.0));
    }

    #[test]
    fn test_trig_follows_angle_unit() {
        assert_relative_eq!(eval_deg("sin(30)").unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(eval_deg("asin(1)").unwrap(), 90.0, epsilon = 1e-10);
        assert_relative_eq!(eval("cos(pi)").unwrap(), -1.0, epsilon = 1e-12);
        assert_relative_eq!(eval("sin(30)").unwrap(), 30f64.sin(), epsilon = 1e-12);
    }

    #[test]
    fn test_nested_functions() {
        assert_relative_eq!(eval("sqrt(abs(-16)) + pow(2, 1+1)").unwrap(), 8.0);
        assert_relative_eq!(eval_deg("sin(asin(0.5))").unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(eval("1/0"), Err(EvalError::DivisionByZero));
        assert_eq!(eval("mod(1,0)"), Err(EvalError::DivisionByZero));
        assert_eq!(eval("5/(3-3)"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_domain_errors() {
        assert!(matches!(eval("sqrt(-1)"), Err(EvalError::Domain { .. })));
        assert!(matches!(eval("asin(2)"), Err(EvalError::Domain { .. })));
        assert!(matches!(eval("ln(0)"), Err(EvalError::Domain { .. })));
        assert!(matches!(eval_deg("tan(90)"), Err(EvalError::Domain { .. })));
        assert!(matches!(eval("fact(171)"), Err(EvalError::Domain { .. })));
        assert!(matches!(eval("fact(2.5)"), Err(EvalError::Domain { .. })));
        assert!(matches!(eval("ncr(2,5)"), Err(EvalError::Domain { .. })));
    }

    #[test]
    fn test_nan_argument_is_a_domain_error() {
        // 1e999 reads as infinity and 0 * infinity is NaN
        for expr in ["sqrt(0*1e999)", "ln(0*1e999)", "log(0*1e999)", "log(8, 0*1e999)"] {
            assert!(matches!(eval(expr), Err(EvalError::Domain { .. })), "{expr}");
        }
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(eval("foo(1)"), Err(EvalError::unknown_function("foo")));
        assert_eq!(eval("FOO(1)"), Err(EvalError::unknown_function("foo")));
        assert_eq!(eval("x"), Err(EvalError::unknown_function("x")));
        // known name, wrong arity
        assert_eq!(eval("sin(1,2)"), Err(EvalError::unknown_function("sin")));
        assert_eq!(eval("pow(2)"), Err(EvalError::unknown_function("pow")));
        // constants are not callable
        assert_eq!(eval("pi(2)"), Err(EvalError::unknown_function("pi")));
    }

    #[test]
    fn test_trailing_input_rejected() {
        assert_eq!(
            eval(")"),
            Err(EvalError::UnexpectedCharacter {
                character: ')',
                position: 0
            })
        );
        assert_eq!(
            eval("2+3)"),
            Err(EvalError::UnexpectedCharacter {
                character: ')',
                position: 3
            })
        );
        assert!(eval("2(3)").is_err());
    }

    #[test]
    fn test_incomplete_input() {
        assert_eq!(eval(""), Err(EvalError::UnexpectedEnd));
        assert_eq!(eval("2+"), Err(EvalError::UnexpectedEnd));
        assert_eq!(eval("(2+3"), Err(EvalError::UnexpectedEnd));
        assert_eq!(eval("sqrt(4"), Err(EvalError::UnexpectedEnd));
        assert_eq!(eval("pow(2,"), Err(EvalError::UnexpectedEnd));
    }

    #[test]
    fn test_positions_ignore_whitespace() {
        assert_eq!(
            eval("2 + 3 )"),
            Err(EvalError::UnexpectedCharacter {
                character: ')',
                position: 3
            })
        );
    }

    #[test]
    fn test_evaluator_is_reusable() {
        let evaluator = Evaluator::new(AngleUnit::Degrees);
        assert_eq!(evaluator.angle_unit(), AngleUnit::Degrees);
        let first = evaluator.evaluate("sin(45)^2").unwrap();
        let second = evaluator.evaluate("sin(45)^2").unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
        assert_eq!(Evaluator::default().angle_unit(), AngleUnit::Radians);
    }

    #[test]
    fn test_evaluator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Evaluator>();
    }

    proptest::proptest! {
        #[test]
        fn prop_matches_native_arithmetic(
            a in -10_000i32..10_000,
            b in -10_000i32..10_000,
            c in 1i32..10_000,
        ) {
            let (x, y, z) = (f64::from(a), f64::from(b), f64::from(c));
            proptest::prop_assert_eq!(eval(&format!("{a}+{b}*{c}")), Ok(x + y * z));
            proptest::prop_assert_eq!(eval(&format!("({a}-{b})/{c}")), Ok((x - y) / z));
            proptest::prop_assert_eq!(eval(&format!("-({a})×{c}÷{c}")), Ok(-x * z / z));
        }

        #[test]
        fn prop_same_text_same_bits(
            value in -1e6f64..1e6,
            unit_is_degrees in proptest::bool::ANY,
        ) {
            let unit = if unit_is_degrees { AngleUnit::Degrees } else { AngleUnit::Radians };
            let expr = format!("sin({value})*cos({value})+sqrt(abs({value}))");
            let evaluator = Evaluator::new(unit);
            let first = evaluator.evaluate(&expr).unwrap();
            let second = evaluate(&expr, unit).unwrap();
            proptest::prop_assert_eq!(first.to_bits(), second.to_bits());
        }
    }
}
