use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
    util::num::i64_to_f64_checked,
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers
    /// depending on the operator and operand types. `+` concatenates when
    /// either side is a string and adds otherwise; `-`, `*` and `/` are
    /// numeric; relational operators and equality use `eval_comparison`;
    /// the logical connectives reduce both operands to their truthiness.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use multiop::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, And, Div, Equal, Greater, Less, Mul, Or, Sub};
        use Value::Str;

        match op {
            // String-coercing concatenation: either operand being a string
            // turns `+` into concatenation of both renderings.
            Add => match (&left, &right) {
                (Str(_), _) | (_, Str(_)) => Ok(Value::Str(format!("{left}{right}"))),
                _ => Self::eval_arithmetic(op, left, right, line),
            },

            Sub | Mul | Div => Self::eval_arithmetic(op, left, right, line),

            Less | Greater | Equal => Self::eval_comparison(op, left, right, line),

            // No short-circuiting: both operands were already evaluated by
            // the caller.
            And => Ok(Value::Bool(left.is_truthy() && right.is_truthy())),
            Or => Ok(Value::Bool(left.is_truthy() || right.is_truthy())),
        }
    }

    /// Evaluates a numeric arithmetic operation.
    ///
    /// Integer pairs stay integral for `+`, `-` and `*`, with overflow
    /// checked. Division is always true division and produces a real, and
    /// a divisor evaluating to numeric zero is an error. Mixed
    /// integer/real operands are promoted to real.
    ///
    /// # Parameters
    /// - `op`: One of `Add`, `Sub`, `Mul`, `Div`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed number.
    fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Integer, Real};

        if !left.is_numeric() || !right.is_numeric() {
            return Err(RuntimeError::TypeError { details: format!("cannot apply '{op}' to {} and {}",
                                                                  left.type_name(),
                                                                  right.type_name()),
                                                 line });
        }

        match (&left, &right) {
            (Integer(a), Integer(b)) if op != Div => {
                let result = match op {
                    Add => a.checked_add(*b),
                    Sub => a.checked_sub(*b),
                    Mul => a.checked_mul(*b),
                    _ => unreachable!(),
                };
                result.map(Integer).ok_or(RuntimeError::Overflow { line })
            },
            _ => {
                let a = left.as_real(line)?;
                let b = right.as_real(line)?;
                match op {
                    Add => Ok(Real(a + b)),
                    Sub => Ok(Real(a - b)),
                    Mul => Ok(Real(a * b)),
                    Div => {
                        if b == 0.0 {
                            return Err(RuntimeError::DivisionByZero { line });
                        }
                        Ok(Real(a / b))
                    },
                    _ => unreachable!(),
                }
            },
        }
    }

    /// Evaluates a relational or equality operation.
    ///
    /// `<` and `>` order numbers (with promotion) or two strings
    /// lexicographically; other combinations are a type error. `==`
    /// compares numbers numerically, values of one type structurally, and
    /// is false across unrelated types.
    ///
    /// # Parameters
    /// - `op`: One of `Less`, `Greater`, `Equal`.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing a boolean.
    fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Greater, Less};
        use Value::Str;

        if op == BinaryOperator::Equal {
            return Ok(Value::Bool(values_equal(left, right)));
        }

        let ordering_holds = match (&left, &right) {
            (Str(a), Str(b)) => {
                if op == Less {
                    a < b
                } else {
                    a > b
                }
            },
            _ if left.is_numeric() && right.is_numeric() => {
                let a = left.as_real(line)?;
                let b = right.as_real(line)?;
                if op == Less { a < b } else { a > b }
            },
            _ => {
                let symbol = if op == Greater { ">" } else { "<" };
                return Err(RuntimeError::TypeError { details: format!("cannot compare {} {symbol} {}",
                                                                      left.type_name(),
                                                                      right.type_name()),
                                                     line });
            },
        };

        Ok(Value::Bool(ordering_holds))
    }
}

/// Tests two values for equality.
///
/// Integers and reals compare numerically, so `1 == 1.0` holds. An integer
/// too large to represent exactly as a real compares unequal to every
/// real. Values of the same type compare structurally; values of
/// unrelated types are never equal.
fn values_equal(left: &Value, right: &Value) -> bool {
    use Value::{Integer, Real};

    match (left, right) {
        (Integer(i), Real(r)) | (Real(r), Integer(i)) => {
            i64_to_f64_checked(*i, ()).is_ok_and(|f| f == *r)
        },
        _ => left == right,
    }
}
