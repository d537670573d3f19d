//! # multiop
//!
//! multiop is an interpreter for the MultiOp scripting language, a small
//! imperative language with indentation-delimited blocks, variables,
//! arithmetic and boolean expressions, conditionals, loops, user-defined
//! functions, and lists.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::ParseError, interpreter::evaluator::core::Context};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Keeps string literals and identifiers structurally distinct.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running code. It
/// standardizes error reporting and carries detailed information about
/// failures, including error kinds, descriptions, and source locations.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, error handling, and all supporting infrastructure to
/// provide a complete runtime for source code execution.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for tokenizing and executing programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable helpers used throughout the interpreter,
/// such as exact conversions between integer and floating-point types.
pub mod util;

pub use crate::interpreter::lexer::{Token, scan, tokenize};

/// An interpreter session for the MultiOp language.
///
/// Each `Interpreter` owns its whole environment: variables, user-defined
/// functions, and pending output. The environment deliberately persists
/// across [`execute`](Self::execute) calls on the same instance, so a host
/// (a REPL, an editor) sees bindings left behind by earlier runs; call
/// [`reset`](Self::reset) between runs for a clean slate. There is no
/// process-global state, so independent sessions never observe each other.
///
/// # Examples
/// ```
/// use multiop::Interpreter;
///
/// let mut interpreter = Interpreter::new();
/// assert_eq!(interpreter.execute("let x = 2 + 3 * 4\nprint x"), "14");
///
/// // Bindings persist between calls on the same session.
/// assert_eq!(interpreter.execute("print x"), "14");
/// ```
pub struct Interpreter {
    context: Context,
}

impl Interpreter {
    /// Creates a session with an empty environment and no execution
    /// budget.
    #[must_use]
    pub fn new() -> Self {
        Self { context: Context::new() }
    }

    /// Creates a session that aborts any single run executing more than
    /// `limit` statements.
    ///
    /// The language itself has no iteration cap: a `while` loop whose
    /// condition never becomes false blocks the calling thread forever.
    /// Hosts that cannot tolerate that opt into a budget here; the default
    /// construction leaves behavior unchanged.
    #[must_use]
    pub fn with_step_limit(limit: u64) -> Self {
        Self { context: Context::with_step_limit(limit) }
    }

    /// Clears all variables, functions and buffered output from the
    /// session.
    pub fn reset(&mut self) {
        self.context.reset();
    }

    /// Runs a program and renders its outcome as text.
    ///
    /// On success the result is the newline-joined sequence of all
    /// `print`ed lines, in execution order (empty if nothing printed). Any
    /// failure in any phase produces a single line of the form
    /// `Error: <message>`; output printed before a runtime failure is
    /// discarded, matching the language's all-or-nothing contract. A
    /// program containing no statements reports `Error: Invalid code`.
    ///
    /// # Example
    /// ```
    /// use multiop::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    /// assert_eq!(interpreter.execute("print 1 / 0"), "Error: Division by zero");
    /// ```
    pub fn execute(&mut self, source: &str) -> String {
        match self.run(source) {
            Ok(output) => output.join("\n"),
            Err(error) => format!("Error: {error}"),
        }
    }

    /// Runs the pipeline on `source` and returns the collected output
    /// lines, or the first error any phase raised.
    fn run(&mut self, source: &str) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let tokens = tokenize(source)?;
        let mut tokens = tokens.iter().peekable();
        let program = interpreter::parser::core::parse_program(&mut tokens)?;
        if program.is_empty() {
            return Err(Box::new(ParseError::InvalidCode));
        }

        match self.context.exec_program(&program) {
            Ok(()) => Ok(self.context.take_output()),
            Err(error) => {
                // First error wins; whatever was printed before it is
                // dropped with the rest of the run.
                self.context.take_output();
                Err(Box::new(error))
            },
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
