/// Lexing errors.
///
/// Defines all error types that can occur while turning raw source text into
/// tokens: unrecognized characters, unterminated string literals, and
/// indentation that does not line up with any enclosing block.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur during parsing of the token
/// stream. Parse errors include unexpected tokens, truncated input, and
/// programs containing no statements at all.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// execution. Runtime errors include things like division by zero, undefined
/// names, out-of-range list indices, and type mismatches.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
