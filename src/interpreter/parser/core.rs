use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical, statement::parse_statement, utils::skip_newlines},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// A program is a sequence of statements separated by newlines. Redundant
/// newlines before, between and after statements are tolerated and ignored.
/// Parsing consumes the entire token stream; any token left over after a
/// statement ends is reported as an error rather than silently dropped.
///
/// Note that an empty token stream parses successfully to an empty program;
/// deciding what to do with a program containing no statements is left to
/// the caller.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The ordered list of parsed top-level statements.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut program = Vec::new();

    loop {
        skip_newlines(tokens);
        if tokens.peek().is_none() {
            break;
        }
        program.push(parse_statement(tokens)?);
    }

    Ok(program)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, the logical connectives, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_logical(tokens)
}
