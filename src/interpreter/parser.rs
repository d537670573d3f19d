/// Core parsing logic and entry points.
///
/// Contains the program and expression entry points shared by the rest of
/// the parser, and the `ParseResult` alias.
pub mod core;

/// Binary operator parsing.
///
/// Implements the operator-precedence chain for logical, comparison,
/// additive and multiplicative operators.
pub mod binary;

/// Unary, primary and postfix parsing.
///
/// Handles the `not` prefix operator, literals, identifiers, grouping,
/// list literals and index postfixes.
pub mod unary;

/// Block parsing.
///
/// Parses indentation-delimited statement blocks following `if`, `while`
/// and `def` headers.
pub mod block;

/// Statement parsing.
///
/// Implements logic for parsing the statement forms of the language:
/// bindings, printing, conditionals, loops, definitions and calls.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides helpers for comma-separated lists, identifiers, and newline
/// handling shared across the parser.
pub mod utils;
