use std::iter::Peekable;

use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement, utils::skip_newlines},
    },
};

/// Parses an indentation-delimited block following a control header.
///
/// A block begins on the line after an `if`, `while` or `def` header: the
/// header line must end in a newline, the body must be indented deeper than
/// the header, and the block runs until the matching dedent. Statements
/// inside the block are separated by newlines; redundant newlines are
/// ignored.
///
/// Grammar: `block := NEWLINE INDENT statement+ DEDENT`
///
/// The lexer guarantees an `Indent` is only ever emitted ahead of a real
/// token, so a parsed block always holds at least one statement.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the header.
/// - `line`: Line number of the header, for error reporting.
///
/// # Returns
/// The ordered statements of the block. The terminating `Dedent` is
/// consumed.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Block>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Newline, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("expected a new line before an indented block, found {tok:?}"),
                                                     line:  *l, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }
    skip_newlines(tokens);

    match tokens.next() {
        Some((Token::Indent(_), _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("expected an indented block, found {tok:?}"),
                                                     line:  *l, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    let mut statements = Vec::new();
    loop {
        skip_newlines(tokens);
        match tokens.peek() {
            Some((Token::Dedent(_), _)) => {
                tokens.next();
                break;
            },
            Some(_) => statements.push(parse_statement(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    Ok(statements)
}
