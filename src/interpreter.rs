/// The evaluator module executes AST nodes against the interpreter state.
///
/// The evaluator traverses the AST, evaluates expressions, executes
/// statements, manages variable and function state, and collects program
/// output. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates expressions, performing all supported operations.
/// - Executes statements, including conditionals, loops and function calls.
/// - Reports runtime errors such as division by zero or undefined names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a meaningful language element such as numbers, string
/// literals, identifiers, operators, and keywords. Because block structure is
/// expressed through indentation, the lexer also synthesizes `Newline`,
/// `Indent` and `Dedent` tokens from the physical layout of the text. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Tracks an indentation stack and emits block-structure tokens.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions. This enables the evaluator to execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates grammar and syntax, reporting errors with location info.
/// - Handles operator precedence and indentation-delimited blocks.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution: integers,
/// floating-point numbers, strings, booleans and lists. It also provides
/// methods for truthiness, numeric promotion and rendering.
pub mod value;
