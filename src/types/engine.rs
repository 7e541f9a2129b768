use std::fmt;

use tracing::trace;

use super::error::RuleError;
use super::node::Node;
use super::record::Record;
use super::rule::Rule;
use crate::parse::{self, Token};

/// What evaluation does when a condition names a field the record lacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MissingField {
    /// Fail with [`RuleError::MissingField`].
    #[default]
    Error,
    /// Treat the condition as not satisfied.
    NoMatch,
}

/// Engine configuration.
///
/// # Example
///
/// ```
/// use ruletree::{Engine, MissingField, Options};
///
/// let engine = Engine::new(
///     Options::new()
///         .max_depth(32)
///         .missing_field(MissingField::NoMatch),
/// );
/// assert_eq!(engine.options().get_max_depth(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Options {
    max_depth: usize,
    max_input_len: usize,
    missing_field: MissingField,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: 256,
            max_input_len: 4096,
            missing_field: MissingField::Error,
        }
    }
}

impl Options {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deepest tree accepted by parsing, combining and evaluation.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Longest rule text, in bytes, accepted by parsing.
    #[must_use]
    pub fn max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = len;
        self
    }

    #[must_use]
    pub fn missing_field(mut self, policy: MissingField) -> Self {
        self.missing_field = policy;
        self
    }

    #[must_use]
    pub fn get_max_depth(&self) -> usize {
        self.max_depth
    }

    #[must_use]
    pub fn get_max_input_len(&self) -> usize {
        self.max_input_len
    }

    #[must_use]
    pub fn get_missing_field(&self) -> MissingField {
        self.missing_field
    }
}

/// Tokenizes, parses, combines and evaluates rules under one [`Options`].
///
/// Holds no mutable state; share one behind `Arc` or copy it freely.
///
/// # Example
///
/// ```
/// use ruletree::{Engine, Record};
///
/// let engine = Engine::default();
/// let rule = engine.parse("age > 30 AND department = 'Marketing'").unwrap();
/// let record = Record::new().set("age", 35).set("department", "marketing");
/// assert!(engine.evaluate(&rule, &record).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    options: Options,
}

impl Engine {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        parse::tokenize(text)
    }

    /// Parse rule text into a tree.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InputTooLong`] if the text exceeds the configured
    /// length, otherwise any error of [`parse_tokens`](crate::parse_tokens).
    pub fn parse(&self, text: &str) -> Result<Node, RuleError> {
        if text.len() > self.options.max_input_len {
            return Err(RuleError::InputTooLong {
                len: text.len(),
                limit: self.options.max_input_len,
            });
        }
        parse::parse_tokens(&parse::tokenize(text), self.options.max_depth)
    }

    /// Parse rule text and keep it alongside its tree.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    pub fn compile(&self, text: &str) -> Result<Rule, RuleError> {
        let node = self.parse(text)?;
        Ok(Rule::new(text.to_owned(), node, *self))
    }

    /// Combine trees into one conjunction, merging adjacent conditions on
    /// the same field.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptyRuleSet`] for an empty input and
    /// [`RuleError::DepthLimitExceeded`] if the result would be too deep.
    pub fn combine(&self, nodes: Vec<Node>) -> Result<Node, RuleError> {
        crate::combine::combine(nodes, self.options.max_depth)
    }

    /// Parse every rule text, then [`combine`](Self::combine) the trees.
    ///
    /// # Errors
    ///
    /// Returns the first parse error in input order, or any error of
    /// [`combine`](Self::combine).
    pub fn combine_rules<S: AsRef<str>>(&self, rules: &[S]) -> Result<Node, RuleError> {
        let nodes = rules
            .iter()
            .map(|text| self.parse(text.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        self.combine(nodes)
    }

    /// Evaluate a tree against a record.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::MissingField`] when a condition names a field the
    /// record lacks (unless the policy is [`MissingField::NoMatch`]) and
    /// [`RuleError::DepthLimitExceeded`] for trees deeper than configured.
    pub fn evaluate(&self, node: &Node, record: &Record) -> Result<bool, RuleError> {
        let verdict = crate::evaluate::evaluate(node, record, &self.options)?;
        trace!(verdict, fields = record.len(), "evaluated rule");
        Ok(verdict)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Engine(max_depth {}, max_input_len {}, missing field {:?})",
            self.options.max_depth, self.options.max_input_len, self.options.missing_field,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field;

    #[test]
    fn default_options() {
        let options = Options::default();
        assert_eq!(options.get_max_depth(), 256);
        assert_eq!(options.get_max_input_len(), 4096);
        assert_eq!(options.get_missing_field(), MissingField::Error);
    }

    #[test]
    fn options_builder() {
        let options = Options::new()
            .max_depth(8)
            .max_input_len(100)
            .missing_field(MissingField::NoMatch);
        assert_eq!(options.get_max_depth(), 8);
        assert_eq!(options.get_max_input_len(), 100);
        assert_eq!(options.get_missing_field(), MissingField::NoMatch);
    }

    #[test]
    fn parse_rejects_long_input() {
        let engine = Engine::new(Options::new().max_input_len(10));
        assert_eq!(
            engine.parse("department = 'Marketing'"),
            Err(RuleError::InputTooLong { len: 24, limit: 10 })
        );
        assert!(engine.parse("age > 30").is_ok());
    }

    #[test]
    fn combine_rules_reports_first_parse_error() {
        let engine = Engine::default();
        let err = engine
            .combine_rules(&["age > 30", "salary >", "(x = 1"])
            .unwrap_err();
        assert!(matches!(err, RuleError::MalformedRule { reason } if reason.contains("salary")));
    }

    #[test]
    fn combine_rules_parses_then_combines() {
        let engine = Engine::default();
        let node = engine
            .combine_rules(&["age > 30", "department = 'Sales'"])
            .unwrap();
        assert_eq!(node, field("age").gt(30).and(field("department").eq("Sales")));
    }

    #[test]
    fn compile_keeps_source() {
        let rule = Engine::default().compile("age > 30").unwrap();
        assert_eq!(rule.source(), "age > 30");
        assert_eq!(rule.node(), &field("age").gt(30));
    }

    #[test]
    fn display() {
        assert_eq!(
            Engine::default().to_string(),
            "Engine(max_depth 256, max_input_len 4096, missing field Error)"
        );
    }
}
