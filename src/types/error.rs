use thiserror::Error;

/// Errors produced while parsing, combining or evaluating rules.
///
/// Every variant is deterministic: the same input always reproduces the
/// same error, and no operation leaves a partial result behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("malformed rule: {reason}")]
    MalformedRule { reason: String },

    #[error("no rules to combine")]
    EmptyRuleSet,

    #[error("missing field '{field}' in record")]
    MissingField { field: String },

    #[error("unsupported operator '{operator}'")]
    UnsupportedOperator { operator: String },

    #[error("rule nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    #[error("rule text is {len} bytes, limit is {limit}")]
    InputTooLong { len: usize, limit: usize },
}

impl RuleError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        RuleError::MalformedRule {
            reason: reason.into(),
        }
    }

    /// Whether the error is caused by the caller's input rather than an
    /// inconsistency between a stored tree and this engine.
    ///
    /// `UnsupportedOperator` is the only internal fault: the parser never
    /// produces an operator the evaluator cannot handle, so one showing up
    /// means a tree was built or stored by something else.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        !matches!(self, RuleError::UnsupportedOperator { .. })
    }
}
