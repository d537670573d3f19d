use std::rc::Rc;

use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in bindings,
/// printed output, and conditions. Values are produced only by evaluation;
/// failures are reported through `Result`, never encoded as values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit integer value.
    Integer(i64),
    /// A numeric value (double precision floating-point). Produced by
    /// division, which is always true division.
    Real(f64),
    /// A string value.
    Str(String),
    /// A boolean value (`true` or `false`). Produced by comparison
    /// operators (`<`, `>`, `==`) and logical operations (`and`, `or`,
    /// `not`).
    Bool(bool),
    /// A list of `Value` elements.
    List(Rc<Vec<Self>>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(n) => (*n).into(),
            LiteralValue::Str(s) => s.clone().into(),
        }
    }
}

impl Value {
    /// Reports whether the value counts as true in a condition.
    ///
    /// Booleans are themselves; zero numerics, empty strings and empty
    /// lists are falsy, everything else is truthy.
    ///
    /// # Example
    /// ```
    /// use multiop::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(3).is_truthy());
    /// assert!(!Value::Str(String::new()).is_truthy());
    /// ```
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Real(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::List(elements) => !elements.is_empty(),
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Integer` and `Value::Real`. For integers, conversion
    /// fails if the value is too large to be represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is real or a safe integer.
    /// - `Err(RuntimeError::TypeError | Overflow)`: If not numeric or not
    ///   representable.
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64_checked(*n, RuntimeError::Overflow { line })?),
            _ => Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                                self.type_name()),
                                               line }),
        }
    }

    /// Returns a short name for the value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "an integer",
            Self::Real(_) => "a number",
            Self::Str(_) => "a string",
            Self::Bool(_) => "a boolean",
            Self::List(_) => "a list",
        }
    }

    /// Returns `true` if the value is numeric (`Integer` or `Real`).
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(..) | Self::Real(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Whole reals keep one decimal so division results render as
            // `5.0`, never indistinguishable from integers.
            Self::Real(r) => {
                if r.is_finite() && r.fract() == 0.0 {
                    write!(f, "{r:.1}")
                } else {
                    write!(f, "{r}")
                }
            },
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(elements) => {
                write!(f, "[")?;

                for (index, value) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}
