use std::fmt;

use winnow::combinator::{alt, opt, preceded};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::{any, take_till, take_while};

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Field,
    Operator,
    Literal,
    ParenOpen,
    ParenClose,
    And,
    Or,
}

/// A lexeme and its category. String literal text excludes the quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// -- Lexemes, in priority order -----------------------------------------------

fn paren(input: &mut &str) -> ModalResult<Token> {
    alt((
        '('.map(|_| Token::new(TokenKind::ParenOpen, "(")),
        ')'.map(|_| Token::new(TokenKind::ParenClose, ")")),
    ))
    .parse_next(input)
}

fn connective(input: &mut &str) -> ModalResult<Token> {
    alt((
        alt(("AND", "&&")).map(|s: &str| Token::new(TokenKind::And, s)),
        alt(("OR", "||")).map(|s: &str| Token::new(TokenKind::Or, s)),
    ))
    .parse_next(input)
}

// An unterminated quote runs to the end of the input.
fn quoted(input: &mut &str) -> ModalResult<Token> {
    let text = preceded('\'', take_till(0.., '\'')).parse_next(input)?;
    opt('\'').parse_next(input)?;
    Ok(Token::new(TokenKind::Literal, text))
}

fn number(input: &mut &str) -> ModalResult<Token> {
    take_while(1.., |c: char| c.is_ascii_digit())
        .map(|s: &str| Token::new(TokenKind::Literal, s))
        .parse_next(input)
}

fn identifier(input: &mut &str) -> ModalResult<Token> {
    take_while(1.., |c: char| c.is_ascii_lowercase())
        .map(|s: &str| Token::new(TokenKind::Field, s))
        .parse_next(input)
}

fn comparator(input: &mut &str) -> ModalResult<Token> {
    alt(("==", "=", ">", "<"))
        .map(|s: &str| Token::new(TokenKind::Operator, s))
        .parse_next(input)
}

/// One step of the scanner: a token, or `None` for skipped input.
fn lexeme(input: &mut &str) -> ModalResult<Option<Token>> {
    alt((
        take_while(1.., |c: char| c.is_whitespace()).value(None),
        paren.map(Some),
        connective.map(Some),
        quoted.map(Some),
        number.map(Some),
        identifier.map(Some),
        comparator.map(Some),
        any.value(None),
    ))
    .parse_next(input)
}

/// Split rule text into tokens.
///
/// Never fails: characters outside the rule grammar are skipped, and the
/// parser reports whatever is left incomplete.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut input = text;
    let mut tokens = Vec::new();
    // Every alternative of `lexeme` consumes input, so this stops at the end.
    while let Ok(next) = lexeme.parse_next(&mut input) {
        tokens.extend(next);
    }
    tokens
}
