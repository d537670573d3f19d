#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and execution.
///
/// Every variant records the source line it was raised on. The rendered
/// message omits the line; the structured field remains available to
/// embedders and tests.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function that was never defined.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to access a list element outside the allowed bounds.
    IndexOutOfRange {
        /// The index that was requested.
        index: i64,
        /// The number of elements in the list.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Arithmetic operation overflowed or left the exactly representable
    /// range.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Execution exceeded the configured statement budget.
    StepLimitExceeded {
        /// The configured budget.
        limit: u64,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { .. } => write!(f, "Division by zero"),
            Self::UndefinedVariable { name, .. } => {
                write!(f, "Undefined variable '{name}'")
            },
            Self::UnknownFunction { name, .. } => {
                write!(f, "Unknown function '{name}'")
            },
            Self::IndexOutOfRange { index, len, .. } => write!(f,
                                                               "Index {index} is out of range for a list of length {len}"),
            Self::TypeError { details, .. } => write!(f, "Type error: {details}"),
            Self::Overflow { .. } => {
                write!(f, "Integer overflow while evaluating expression")
            },
            Self::StepLimitExceeded { limit, .. } => {
                write!(f, "Execution exceeded the budget of {limit} statements")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
