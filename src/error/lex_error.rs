#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// Found a character that is not part of any token.
    UnrecognizedCharacter {
        /// The offending character.
        ch:   char,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A string literal was opened but not closed on the same line.
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit into 64 bits.
    NumberTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A line dedented to an indentation width that matches no enclosing
    /// block.
    DedentMismatch {
        /// The computed indentation width of the offending line.
        indent: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedCharacter { ch, line } => {
                write!(f, "Line {line}: unrecognized character '{ch}'")
            },
            Self::UnterminatedString { line } => {
                write!(f, "Line {line}: unterminated string literal")
            },
            Self::NumberTooLarge { line } => {
                write!(f, "Line {line}: integer literal is too large")
            },
            Self::DedentMismatch { indent, line } => write!(f,
                                                            "Line {line}: dedent to width {indent} does not match any outer indentation level"),
        }
    }
}

impl std::error::Error for LexError {}
