//! Name tables for constants and functions.
//!
//! Identifiers are resolved once, into one of three closed enums, and the
//! variant is then applied. Lookups expect an already-lowercased name.

use abacus_core::AngleUnit;
use abacus_math::scientific;
use abacus_math::MathResult;

/// A named constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    /// `pi` or `π`
    Pi,
    /// `e`
    E,
    /// `phi` or `φ`
    Phi,
}

impl Constant {
    /// Resolves a lowercased identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" | "π" => Some(Self::Pi),
            "e" => Some(Self::E),
            "phi" | "φ" => Some(Self::Phi),
            _ => None,
        }
    }

    /// The constant's value.
    pub fn value(self) -> f64 {
        match self {
            Self::Pi => scientific::PI,
            Self::E => scientific::E,
            Self::Phi => scientific::PHI,
        }
    }
}

/// A function of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum UnaryFunction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Ln,
    Log10,
    Log2,
    Exp,
    Sqrt,
    Cbrt,
    Abs,
    Floor,
    Ceil,
    Round,
    Factorial,
    Sign,
}

impl UnaryFunction {
    /// Resolves a lowercased identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        let function = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" | "arcsin" => Self::Asin,
            "acos" | "arccos" => Self::Acos,
            "atan" | "arctan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "asinh" => Self::Asinh,
            "acosh" => Self::Acosh,
            "atanh" => Self::Atanh,
            "ln" => Self::Ln,
            "log" | "log10" => Self::Log10,
            "log2" => Self::Log2,
            "exp" => Self::Exp,
            "sqrt" => Self::Sqrt,
            "cbrt" => Self::Cbrt,
            "abs" => Self::Abs,
            "floor" => Self::Floor,
            "ceil" => Self::Ceil,
            "round" => Self::Round,
            "fact" => Self::Factorial,
            "sign" | "sgn" => Self::Sign,
            _ => return None,
        };
        Some(function)
    }

    /// Applies the function, converting angles with `unit` where relevant.
    pub fn apply(self, x: f64, unit: AngleUnit) -> MathResult<f64> {
        match self {
            Self::Sin => Ok(scientific::sin(x, unit)),
            Self::Cos => Ok(scientific::cos(x, unit)),
            Self::Tan => scientific::tan(x, unit),
            Self::Asin => scientific::asin(x, unit),
            Self::Acos => scientific::acos(x, unit),
            Self::Atan => Ok(scientific::atan(x, unit)),
            Self::Sinh => Ok(scientific::sinh(x)),
            Self::Cosh => Ok(scientific::cosh(x)),
            Self::Tanh => Ok(scientific::tanh(x)),
            Self::Asinh => Ok(scientific::asinh(x)),
            Self::Acosh => scientific::acosh(x),
            Self::Atanh => scientific::atanh(x),
            Self::Ln => scientific::natural_log(x),
            Self::Log10 => scientific::log10(x),
            Self::Log2 => scientific::log2(x),
            Self::Exp => Ok(scientific::exp(x)),
            Self::Sqrt => scientific::square_root(x),
            Self::Cbrt => Ok(scientific::cube_root(x)),
            Self::Abs => Ok(scientific::absolute(x)),
            Self::Floor => Ok(x.floor()),
            Self::Ceil => Ok(x.ceil()),
            Self::Round => Ok(x.round()),
            Self::Factorial => scientific::factorial(scientific::as_integer(x, "fact")?),
            Self::Sign => Ok(scientific::sign(x)),
        }
    }
}

/// A function of two arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryFunction {
    /// `pow(base, exponent)`
    Pow,
    /// `root(x, index)`
    Root,
    /// `npr(n, r)`
    Permutation,
    /// `ncr(n, r)`
    Combination,
    /// `log(x, base)`
    LogBase,
    /// `mod(a, b)`
    Mod,
}

impl BinaryFunction {
    /// Resolves a lowercased identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pow" => Some(Self::Pow),
            "root" => Some(Self::Root),
            "npr" => Some(Self::Permutation),
            "ncr" => Some(Self::Combination),
            "log" => Some(Self::LogBase),
            "mod" => Some(Self::Mod),
            _ => None,
        }
    }

    /// Applies the function.
    pub fn apply(self, a: f64, b: f64) -> MathResult<f64> {
        match self {
            Self::Pow => Ok(scientific::power(a, b)),
            Self::Root => scientific::nth_root(a, b),
            Self::Permutation => scientific::permutation(
                scientific::as_integer(a, "npr")?,
                scientific::as_integer(b, "npr")?,
            ),
            Self::Combination => scientific::combination(
                scientific::as_integer(a, "ncr")?,
                scientific::as_integer(b, "ncr")?,
            ),
            Self::LogBase => scientific::log_base(a, b),
            Self::Mod => scientific::modulo(a, b),
        }
    }
}

/// True if `name` is a function of any arity.
pub fn is_function(name: &str) -> bool {
    UnaryFunction::from_name(name).is_some() || BinaryFunction::from_name(name).is_some()
}
