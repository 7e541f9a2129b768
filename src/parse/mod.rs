mod grammar;
mod lexer;

pub use lexer::{Token, TokenKind, tokenize};

use crate::{Node, RuleError};

/// Parse an already tokenized rule into a tree.
///
/// # Errors
///
/// Returns [`RuleError::MalformedRule`] if the tokens do not form exactly one
/// complete expression, or [`RuleError::DepthLimitExceeded`] if the
/// expression nests deeper than `max_depth`.
pub fn parse_tokens(tokens: &[Token], max_depth: usize) -> Result<Node, RuleError> {
    grammar::Parser::new(tokens, max_depth).parse()
}
