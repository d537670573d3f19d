use std::iter::Peekable;

use crate::{
    ast::{FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect_statement_end, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a variable binding (`let x = ...`),
/// - a `print` statement,
/// - an `if` conditional with an indented body,
/// - a `while` loop with an indented body,
/// - a function definition (`def name(params)` with an indented body),
/// - a function call (`name(args)`).
///
/// The leading token decides the form. An identifier in statement position
/// can only start a call, since the language has no expression statements.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Let, _)) => parse_let(tokens),
        Some((Token::Print, _)) => parse_print(tokens),
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::While, _)) => parse_while(tokens),
        Some((Token::Def, _)) => parse_def(tokens),
        Some((Token::Identifier(_), _)) => parse_call(tokens),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected statement, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a variable binding statement.
///
/// A binding has the form `let <identifier> = <expression>`. The name is
/// bound unconditionally, overwriting any previous value.
fn parse_let<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::Let, line)) => *line,
        _ => unreachable!(),
    };

    let name = parse_identifier(tokens)?;

    match tokens.next() {
        Some((Token::Equals, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("expected '=', found {tok:?}"),
                                                     line:  *l, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    let value = parse_expression(tokens)?;
    expect_statement_end(tokens)?;

    Ok(Statement::Let { name, value, line })
}

/// Parses a `print` statement: `print <expression>`.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::Print, line)) => *line,
        _ => unreachable!(),
    };

    let expr = parse_expression(tokens)?;
    expect_statement_end(tokens)?;

    Ok(Statement::Print { expr, line })
}

/// Parses a conditional statement.
///
/// Syntax:
/// ```text
///     if <condition>
///         <body>
/// ```
/// The condition guards a single pass over the body; there is no `else`
/// form.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::If, line)) => *line,
        _ => unreachable!(),
    };

    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens, line)?;

    Ok(Statement::If { condition, body, line })
}

/// Parses a loop statement.
///
/// Syntax:
/// ```text
///     while <condition>
///         <body>
/// ```
/// The condition is re-evaluated before every pass over the body.
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::While, line)) => *line,
        _ => unreachable!(),
    };

    let condition = parse_expression(tokens)?;
    let body = parse_block(tokens, line)?;

    Ok(Statement::While { condition, body, line })
}

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     def <name>(<param>, ...)
///         <body>
/// ```
/// The parameter list may be empty. The body is captured, not executed, at
/// definition time.
fn parse_def<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::Def, line)) => *line,
        _ => unreachable!(),
    };

    let name = parse_identifier(tokens)?;

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("expected '(' after function name, found {tok:?}"),
                                                     line:  *l, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    let params = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;
    let body = parse_block(tokens, line)?;

    Ok(Statement::Def(FunctionDef { name,
                                    params,
                                    body,
                                    line }))
}

/// Parses a function call statement.
///
/// Syntax: `<name>(<argument>, ...)`. The argument list may be empty.
/// Calls only exist in statement position; they are not expressions and
/// produce no value.
fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(name), line)) => (name.clone(), *line),
        _ => unreachable!(),
    };

    match tokens.next() {
        Some((Token::LParen, _)) => {},
        Some((tok, l)) => {
            return Err(ParseError::UnexpectedToken { token: format!("expected '(' after '{name}', found {tok:?}"),
                                                     line:  *l, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line }),
    }

    let arguments = parse_comma_separated(tokens, parse_expression, &Token::RParen)?;
    expect_statement_end(tokens)?;

    Ok(Statement::Call { name,
                         arguments,
                         line })
}
