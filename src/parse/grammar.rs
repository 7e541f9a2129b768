use crate::{Comparator, Literal, LogicalOp, Node, RuleError};

use super::lexer::{Token, TokenKind};

// expression := term ( (AND | OR) term )*
// term       := '(' expression ')' | comparison
// comparison := FIELD OPERATOR LITERAL
//
// AND and OR share one precedence level and chain to the left; only
// parentheses regroup.

pub(crate) struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'t> Parser<'t> {
    pub(crate) fn new(tokens: &'t [Token], max_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Parse the whole token sequence as one expression.
    pub(crate) fn parse(mut self) -> Result<Node, RuleError> {
        if self.tokens.is_empty() {
            return Err(RuleError::malformed("empty rule"));
        }
        let node = self.expression()?;
        match self.peek() {
            None => Ok(node),
            Some(tok) if tok.kind == TokenKind::ParenClose => {
                Err(RuleError::malformed("unmatched ')'"))
            }
            Some(tok) => Err(RuleError::malformed(format!(
                "unexpected '{tok}' after complete expression"
            ))),
        }
    }

    fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'t Token> {
        let tok = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(tok)
    }

    fn expression(&mut self) -> Result<Node, RuleError> {
        let mut node = self.term()?;
        let mut depth = node.depth();
        while let Some(op) = self.peek().and_then(connective) {
            self.pos += 1;
            let right = self.term()?;
            depth = depth.max(right.depth()) + 1;
            self.check_depth(depth)?;
            node = Node::operator(op, node, right);
        }
        Ok(node)
    }

    fn term(&mut self) -> Result<Node, RuleError> {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::ParenOpen => {
                self.pos += 1;
                self.depth += 1;
                self.check_depth(self.depth)?;
                let inner = self.expression()?;
                self.depth -= 1;
                match self.advance() {
                    Some(tok) if tok.kind == TokenKind::ParenClose => Ok(inner),
                    Some(tok) => Err(RuleError::malformed(format!(
                        "expected ')' but found '{tok}'"
                    ))),
                    None => Err(RuleError::malformed("unmatched '('")),
                }
            }
            _ => self.comparison(),
        }
    }

    fn comparison(&mut self) -> Result<Node, RuleError> {
        let field = match self.advance() {
            Some(tok) if tok.kind == TokenKind::Field => tok.text.clone(),
            Some(tok) => {
                return Err(RuleError::malformed(format!(
                    "expected a field name but found '{tok}'"
                )));
            }
            None => return Err(RuleError::malformed("expected a field name")),
        };

        let comparator = match self.advance() {
            Some(tok) if tok.kind == TokenKind::Operator => tok.text.parse::<Comparator>()?,
            Some(tok) => {
                return Err(RuleError::malformed(format!(
                    "expected a comparison operator after '{field}' but found '{tok}'"
                )));
            }
            None => {
                return Err(RuleError::malformed(format!(
                    "expected a comparison operator after '{field}'"
                )));
            }
        };

        let value = match self.advance() {
            Some(tok) if matches!(tok.kind, TokenKind::Literal | TokenKind::Field) => {
                literal(tok)?
            }
            Some(tok) => {
                return Err(RuleError::malformed(format!(
                    "expected a value after '{field} {comparator}' but found '{tok}'"
                )));
            }
            None => {
                return Err(RuleError::malformed(format!(
                    "expected a value after '{field} {comparator}'"
                )));
            }
        };

        Ok(Node::Operand {
            field,
            comparator,
            value,
        })
    }

    fn check_depth(&self, depth: usize) -> Result<(), RuleError> {
        if depth > self.max_depth {
            return Err(RuleError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}

fn connective(tok: &Token) -> Option<LogicalOp> {
    match tok.kind {
        TokenKind::And => Some(LogicalOp::And),
        TokenKind::Or => Some(LogicalOp::Or),
        _ => None,
    }
}

/// Type a literal token: digit runs are numbers, bare `true`/`false` are
/// booleans, everything else is text.
fn literal(tok: &Token) -> Result<Literal, RuleError> {
    match tok.kind {
        TokenKind::Literal if is_digits(&tok.text) => {
            tok.text.parse::<i64>().map(Literal::Number).map_err(|_| {
                RuleError::malformed(format!("number '{}' is out of range", tok.text))
            })
        }
        TokenKind::Field if tok.text == "true" => Ok(Literal::Bool(true)),
        TokenKind::Field if tok.text == "false" => Ok(Literal::Bool(false)),
        _ => Ok(Literal::Text(tok.text.clone())),
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
