//! Compile small boolean filter rules such as
//! `age > 30 AND department = 'Marketing'` into trees, combine several rules
//! into one, and evaluate the result against a record.
//!
//! ```
//! use ruletree::Record;
//!
//! let rule = ruletree::parse("age > 30 AND department = 'Marketing'").unwrap();
//! let record = Record::new().set("age", 35).set("department", "marketing");
//! assert!(ruletree::evaluate(&rule, &record).unwrap());
//! ```
//!
//! The free functions use [`Options::default()`]; build an [`Engine`] to
//! change depth and length limits or the missing-field policy.

mod combine;
mod evaluate;
mod parse;
mod types;

pub use parse::{Token, TokenKind, parse_tokens, tokenize};
pub use types::{
    Comparator, Engine, FieldCondition, Literal, LogicalOp, MissingField, Node, NodeKind, Options,
    Range, Record, Rule, RuleError, Value, field,
};

/// Parse rule text into a tree with the default [`Options`].
///
/// # Errors
///
/// See [`Engine::parse`].
pub fn parse(text: &str) -> Result<Node, RuleError> {
    Engine::default().parse(text)
}

/// Combine trees into one with the default [`Options`].
///
/// # Errors
///
/// See [`Engine::combine`].
pub fn combine(nodes: Vec<Node>) -> Result<Node, RuleError> {
    Engine::default().combine(nodes)
}

/// Parse and combine rule texts with the default [`Options`].
///
/// # Errors
///
/// See [`Engine::combine_rules`].
pub fn combine_rules<S: AsRef<str>>(rules: &[S]) -> Result<Node, RuleError> {
    Engine::default().combine_rules(rules)
}

/// Evaluate a tree against a record with the default [`Options`].
///
/// # Errors
///
/// See [`Engine::evaluate`].
pub fn evaluate(node: &Node, record: &Record) -> Result<bool, RuleError> {
    Engine::default().evaluate(node, record)
}
