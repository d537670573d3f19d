use std::ops::Range;

use logos::Logos;

use crate::error::LexError;

/// Number of columns a tab character contributes to an indentation width.
/// Spaces contribute one column each; the two are summed without any
/// consistency check, so mixing them within one file is legal but fragile.
const TAB_WIDTH: usize = 4;

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are consumed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Raw lexemes produced by the generated scanner.
///
/// This is the direct output of the `logos` state machine: one variant per
/// concrete lexeme, before any block structure has been derived. A newline
/// is matched together with the leading whitespace of the following line and
/// carries that line's indentation width; [`tokenize`] later turns those
/// widths into `Indent`/`Dedent` tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
enum RawToken {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// String literal tokens, delimited by double quotes on one line. No
    /// escape sequences are supported.
    #[regex(r#""[^"\n]*""#, parse_string)]
    Str(String),
    /// `let`
    #[token("let")]
    Let,
    /// `print`
    #[token("print")]
    Print,
    /// `and`
    #[token("and")]
    And,
    /// `or`
    #[token("or")]
    Or,
    /// `not`
    #[token("not")]
    Not,
    /// `if`
    #[token("if")]
    If,
    /// `while`
    #[token("while")]
    While,
    /// `def`
    #[token("def")]
    Def,
    /// Identifier tokens; variable or function names such as `x` or `add`.
    /// Keyword patterns above win over this rule for reserved words.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.` Discarded; never emitted.
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `=`
    #[token("=")]
    Equals,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// A physical newline, matched together with the leading whitespace of
    /// the next line. Carries the indentation width of that line.
    #[regex(r"\n[ \t]*", lex_newline)]
    Newline(usize),
    /// Blanks inside a line. Only whitespace following a newline counts as
    /// indentation; everything else is skipped.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// A token of the MultiOp language, as consumed by the parser.
///
/// Unlike [`RawToken`] this stream has block structure made explicit:
/// consecutive physical newlines collapse into a single `Newline`, and
/// changes in indentation appear as `Indent`/`Dedent` tokens carrying the
/// indentation width they open or close.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// An integer literal.
    Integer(i64),
    /// A string literal, without the surrounding quotes.
    Str(String),
    /// A variable or function name.
    Identifier(String),
    /// `let`
    Let,
    /// `print`
    Print,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `if`
    If,
    /// `while`
    While,
    /// `def`
    Def,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Equals,
    /// `==`
    EqualEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// End of a logical line. Blank and comment-only lines never produce
    /// one.
    Newline,
    /// Start of an indented block; carries the new indentation width.
    Indent(usize),
    /// End of an indented block; carries the width of the level being
    /// closed. A jump back over several levels emits one `Dedent` per
    /// closed level.
    Dedent(usize),
}

/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i64)`: The parsed value if it fits into 64 bits.
/// - `None`: If the literal is too large; surfaced as a lexing error.
fn parse_integer(lex: &logos::Lexer<RawToken>) -> Option<i64> {
    lex.slice().parse().ok()
}

/// Strips the delimiting quotes from a string literal slice.
fn parse_string(lex: &logos::Lexer<RawToken>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

/// Handles a newline match: advances the line counter and computes the
/// indentation width of the following line from the matched whitespace.
fn lex_newline(lex: &mut logos::Lexer<RawToken>) -> usize {
    lex.extras.line += 1;
    indent_width(&lex.slice()[1..])
}

/// Computes the indentation width of a run of leading whitespace.
///
/// Tabs count as [`TAB_WIDTH`] columns and spaces as one; the result is the
/// naive sum of the two.
fn indent_width(whitespace: &str) -> usize {
    whitespace.chars()
              .map(|ch| if ch == '\t' { TAB_WIDTH } else { 1 })
              .sum()
}

/// Maps a raw lexeme to the cooked token the parser consumes.
///
/// `Newline` loses its indentation payload here; indentation handling is the
/// caller's business. `Comment` and `Ignored` are skipped by the scanner and
/// never reach this function.
fn cook(raw: RawToken) -> Token {
    match raw {
        RawToken::Integer(n) => Token::Integer(n),
        RawToken::Str(s) => Token::Str(s),
        RawToken::Identifier(name) => Token::Identifier(name),
        RawToken::Let => Token::Let,
        RawToken::Print => Token::Print,
        RawToken::And => Token::And,
        RawToken::Or => Token::Or,
        RawToken::Not => Token::Not,
        RawToken::If => Token::If,
        RawToken::While => Token::While,
        RawToken::Def => Token::Def,
        RawToken::Plus => Token::Plus,
        RawToken::Minus => Token::Minus,
        RawToken::Star => Token::Star,
        RawToken::Slash => Token::Slash,
        RawToken::EqualEqual => Token::EqualEqual,
        RawToken::Equals => Token::Equals,
        RawToken::Less => Token::Less,
        RawToken::Greater => Token::Greater,
        RawToken::LParen => Token::LParen,
        RawToken::RParen => Token::RParen,
        RawToken::LBracket => Token::LBracket,
        RawToken::RBracket => Token::RBracket,
        RawToken::Comma => Token::Comma,
        RawToken::Newline(_) => Token::Newline,
        RawToken::Comment | RawToken::Ignored => unreachable!(),
    }
}

/// Classifies an unmatched slice into a lexing error.
///
/// The scanner reports failures as an offending slice; the shape of that
/// slice tells unterminated strings and oversized numbers apart from plain
/// stray characters.
fn classify_error(slice: &str, line: usize) -> LexError {
    let mut chars = slice.chars();
    match chars.next() {
        Some('"') => LexError::UnterminatedString { line },
        Some(ch) if ch.is_ascii_digit() => LexError::NumberTooLarge { line },
        Some(ch) => LexError::UnrecognizedCharacter { ch, line },
        None => LexError::UnrecognizedCharacter { ch: '\0', line },
    }
}

/// Measures the indentation of the first line of the source, if that line
/// holds any code.
///
/// Blank and comment-only first lines are ignored; their layout is handled
/// by the ordinary newline rule.
fn leading_indent(source: &str) -> Option<usize> {
    let rest = source.trim_start_matches([' ', '\t']);
    match rest.chars().next() {
        None | Some('\n' | '\r' | '#') => None,
        Some(_) => Some(indent_width(&source[..source.len() - rest.len()])),
    }
}

/// Applies an indentation width against the indent stack, emitting the
/// structure tokens the change implies.
///
/// A width greater than the stack top opens a block (`Indent`); a smaller
/// width closes blocks (`Dedent`) until a matching level is found. Reaching
/// past every enclosing level without a match is a [`LexError::DedentMismatch`].
fn apply_indent(width: usize,
                line: usize,
                stack: &mut Vec<usize>,
                tokens: &mut Vec<(Token, usize)>)
                -> Result<(), LexError> {
    let top = stack.last().copied().unwrap_or(0);
    if width > top {
        stack.push(width);
        tokens.push((Token::Indent(width), line));
        return Ok(());
    }
    while let Some(&level) = stack.last() {
        if level == width {
            return Ok(());
        }
        if level < width {
            break;
        }
        stack.pop();
        tokens.push((Token::Dedent(level), line));
    }
    Err(LexError::DedentMismatch { indent: width, line })
}

/// Turns source text into the token stream consumed by the parser.
///
/// Tokens are paired with the source line they were found on. Block
/// structure is made explicit: each logical line ends in a `Newline`, runs
/// of blank or comment-only lines collapse into one, and indentation
/// changes appear as `Indent`/`Dedent` pairs that always nest. A trailing
/// `Newline` and the `Dedent`s for every still-open block are synthesized
/// at end of input, so a program need not end in a newline.
///
/// # Errors
/// Fails with a [`LexError`] on the first unrecognized character,
/// unterminated string literal, oversized integer literal, or dedent that
/// matches no enclosing indentation level.
///
/// # Example
/// ```
/// use multiop::{Token, tokenize};
///
/// let tokens = tokenize("let x = 1").unwrap();
/// assert_eq!(tokens[0], (Token::Let, 1));
/// assert_eq!(tokens[1], (Token::Identifier("x".to_string()), 1));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut stack = vec![0];

    if let Some(width) = leading_indent(source)
       && width > 0
    {
        apply_indent(width, 1, &mut stack, &mut tokens)?;
    }

    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras { line: 1 });
    // Indentation width and starting line of the newline run currently
    // being consumed; flushed when the next real token shows up.
    let mut pending: Option<(usize, usize)> = None;

    while let Some(result) = lexer.next() {
        match result {
            Ok(RawToken::Newline(width)) => {
                let start = pending.map_or(lexer.extras.line - 1, |(_, l)| l);
                pending = Some((width, start));
            },
            Ok(raw) => {
                if let Some((width, newline_line)) = pending.take() {
                    tokens.push((Token::Newline, newline_line));
                    apply_indent(width, lexer.extras.line, &mut stack, &mut tokens)?;
                }
                tokens.push((cook(raw), lexer.extras.line));
            },
            Err(()) => {
                return Err(classify_error(lexer.slice(), lexer.extras.line));
            },
        }
    }

    // Synthesize the trailing newline and close every open block.
    let ends_with_newline = matches!(tokens.last(), Some((Token::Newline, _)));
    if let Some((_, newline_line)) = pending.take() {
        tokens.push((Token::Newline, newline_line));
    } else if !tokens.is_empty() && !ends_with_newline {
        tokens.push((Token::Newline, lexer.extras.line));
    }
    while let Some(&level) = stack.last() {
        if level == 0 {
            break;
        }
        stack.pop();
        tokens.push((Token::Dedent(level), lexer.extras.line));
    }

    Ok(tokens)
}

/// Re-lexes an arbitrary buffer leniently, for display purposes.
///
/// This is the entry point used by editors for syntax coloring: it never
/// fails, skips over characters it does not recognize, performs no
/// indentation synthesis, and pairs every token with its byte span in the
/// buffer. The buffer does not need to parse or execute.
#[must_use]
pub fn scan(source: &str) -> Vec<(Token, Range<usize>)> {
    let mut lexer = RawToken::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(raw) = result {
            tokens.push((cook(raw), lexer.span()));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap()
                        .into_iter()
                        .map(|(token, _)| token)
                        .collect()
    }

    #[test]
    fn keywords_win_over_identifiers() {
        assert_eq!(kinds("let letter = 1")[..2],
                   [Token::Let, Token::Identifier("letter".to_string())]);
    }

    #[test]
    fn operators_and_literals() {
        assert_eq!(kinds(r#"print "hi" + 2 * 3"#),
                   vec![Token::Print,
                        Token::Str("hi".to_string()),
                        Token::Plus,
                        Token::Integer(2),
                        Token::Star,
                        Token::Integer(3),
                        Token::Newline]);
    }

    #[test]
    fn equals_vs_equal_equal() {
        assert_eq!(kinds("x == 1")[1], Token::EqualEqual);
        assert_eq!(kinds("x = 1")[1], Token::Equals);
    }

    #[test]
    fn comments_are_discarded() {
        assert_eq!(kinds("print 1 # trailing\n# whole line\nprint 2"),
                   vec![Token::Print,
                        Token::Integer(1),
                        Token::Newline,
                        Token::Print,
                        Token::Integer(2),
                        Token::Newline]);
    }

    #[test]
    fn blank_lines_collapse_to_one_newline() {
        let tokens = kinds("print 1\n\n\nprint 2");
        let newlines = tokens.iter().filter(|t| **t == Token::Newline).count();
        assert_eq!(newlines, 2);
    }

    #[test]
    fn indent_and_dedent_are_emitted() {
        assert_eq!(kinds("if x\n    print x"),
                   vec![Token::If,
                        Token::Identifier("x".to_string()),
                        Token::Newline,
                        Token::Indent(4),
                        Token::Print,
                        Token::Identifier("x".to_string()),
                        Token::Newline,
                        Token::Dedent(4)]);
    }

    #[test]
    fn multi_level_dedent_emits_one_token_per_level() {
        let tokens = kinds("if a\n    if b\n        print c\nprint d");
        let dedents = tokens.iter()
                            .filter(|t| matches!(t, Token::Dedent(_)))
                            .count();
        assert_eq!(dedents, 2);
    }

    #[test]
    fn tabs_count_four_columns() {
        assert!(kinds("if x\n\tprint x").contains(&Token::Indent(4)));
    }

    #[test]
    fn dedent_mismatch_is_an_error() {
        let result = tokenize("if a\n        print b\n    print c");
        assert_eq!(result,
                   Err(LexError::DedentMismatch { indent: 4,
                                                  line:   3, }));
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert_eq!(tokenize("print \"oops"),
                   Err(LexError::UnterminatedString { line: 1 }));
    }

    #[test]
    fn unrecognized_character_is_an_error() {
        assert_eq!(tokenize("let x = 1 ; let y = 2"),
                   Err(LexError::UnrecognizedCharacter { ch:   ';',
                                                         line: 1, }));
    }

    #[test]
    fn scan_skips_what_tokenize_rejects() {
        let tokens = scan("let x = ; 1");
        assert!(tokens.iter().any(|(t, _)| *t == Token::Integer(1)));
    }

    #[test]
    fn scan_reports_byte_spans() {
        let tokens = scan("let x");
        assert_eq!(tokens[0], (Token::Let, 0..3));
        assert_eq!(tokens[1], (Token::Identifier("x".to_string()), 4..5));
    }

    #[test]
    fn line_numbers_track_physical_lines() {
        let tokens = tokenize("print 1\nprint 2").unwrap();
        assert_eq!(tokens[0].1, 1);
        assert_eq!(tokens[3].1, 2);
    }
}
