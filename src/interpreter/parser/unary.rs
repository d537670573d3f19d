use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// The only prefix operator is logical `not`. It is right-associative, so
/// `not not x` parses as `not (not x)`, and it binds tighter than every
/// binary operator.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`] and then applies any index postfixes via
/// [`parse_postfix`].
///
/// Grammar:
/// ```text
///     unary := "not" unary
///            | primary postfix*
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression possibly followed by
/// postfixes.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Not, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Not,
                           expr: Box::new(expr),
                           line })
    } else {
        let primary = parse_primary(tokens)?;
        parse_postfix(tokens, primary)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer and string literals
/// - identifiers (plain variable references; calls are statements, not
///   expressions)
/// - parenthesized expressions
/// - list literals (`[ ... ]`)
///
/// This function does not handle unary operators or postfix operators.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier
///              | "(" expression ")"
///              | "[" elements "]"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Integer(..) | Token::Str(..), _) => parse_literal(tokens),
        (Token::Identifier(_), _) => parse_variable(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::LBracket, _) => parse_list_literal(tokens),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses index postfixes following a primary expression.
///
/// Indexing may be chained, so `grid[1][2]` indexes the result of the first
/// index operation.
///
/// Grammar: `postfix := "[" expression "]"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned after the primary expression.
/// - `node`: The expression the postfixes apply to.
///
/// # Returns
/// The input expression wrapped in zero or more [`Expr::Index`] nodes.
fn parse_postfix<'a, I>(tokens: &mut Peekable<I>, mut node: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    while let Some((Token::LBracket, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let index = parse_expression(tokens)?;
        match tokens.next() {
            Some((Token::RBracket, _)) => {},
            Some((tok, l)) => {
                return Err(ParseError::UnexpectedToken { token: format!("expected ']', found {tok:?}"),
                                                         line:  *l, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
        node = Expr::Index { list: Box::new(node),
                             index: Box::new(index),
                             line };
    }
    Ok(node)
}

/// Parses an integer or string literal.
fn parse_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Integer(n), line)) => Ok(Expr::Literal { value: LiteralValue::Integer(*n),
                                                              line:  *line, }),
        Some((Token::Str(s), line)) => Ok(Expr::Literal { value: LiteralValue::Str(s.clone()),
                                                          line:  *line, }),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected literal, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a bare identifier into a variable reference.
///
/// An identifier in expression position is always a variable read. Whether
/// the name is actually bound is a runtime question; the parser never
/// consults the environment.
fn parse_variable<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                     line: *line, }),
        _ => unreachable!(),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::LParen, line)) => *line,
        _ => unreachable!(),
    };

    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((tok, l)) => {
            Err(ParseError::UnexpectedToken { token: format!("expected ')', found {tok:?}"),
                                              line:  *l, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a list literal of the form `[ expr1, expr2, ..., exprN ]`.
///
/// Elements are parsed using [`parse_expression`] and collected into an
/// `Expr::ListLiteral` node. An empty list `[]` is accepted.
///
/// Grammar: `list := "[" (expression ("," expression)*)? "]"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `[`.
///
/// # Returns
/// An `Expr::ListLiteral` with its list of element expressions.
fn parse_list_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::LBracket, line)) => *line,
        _ => unreachable!(),
    };

    let elements = parse_comma_separated(tokens, parse_expression, &Token::RBracket)?;

    Ok(Expr::ListLiteral { elements, line })
}
