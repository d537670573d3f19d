#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A description of the token encountered, and what was expected.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The program contained no statements at all.
    InvalidCode,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Line {line}: unexpected token: {token}")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Line {line}: unexpected end of input")
            },
            Self::InvalidCode => write!(f, "Invalid code"),
        }
    }
}

impl std::error::Error for ParseError {}
