use std::fmt;
use std::str::FromStr;

use super::RuleError;

/// Comparison operators carried by operand nodes.
///
/// `=` and `==` are kept apart so a parsed tree records exactly what was
/// written; they evaluate identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Comparator {
    /// `=`
    Eq,
    /// `==`
    DoubleEq,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `in`, membership in a range or set. Never produced by the parser.
    In,
}

/// Logical connectives joining two subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum LogicalOp {
    And,
    Or,
}

impl Comparator {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::DoubleEq => "==",
            Comparator::Gt => ">",
            Comparator::Lt => "<",
            Comparator::In => "in",
        }
    }

    /// Whether this is one of the two equality spellings.
    #[must_use]
    pub fn is_equality(self) -> bool {
        matches!(self, Comparator::Eq | Comparator::DoubleEq)
    }
}

impl LogicalOp {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

impl FromStr for Comparator {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Comparator::Eq),
            "==" => Ok(Comparator::DoubleEq),
            ">" => Ok(Comparator::Gt),
            "<" => Ok(Comparator::Lt),
            "in" => Ok(Comparator::In),
            other => Err(RuleError::UnsupportedOperator {
                operator: other.to_owned(),
            }),
        }
    }
}

impl FromStr for LogicalOp {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AND" | "and" | "&&" => Ok(LogicalOp::And),
            "OR" | "or" | "||" => Ok(LogicalOp::Or),
            other => Err(RuleError::UnsupportedOperator {
                operator: other.to_owned(),
            }),
        }
    }
}

impl TryFrom<String> for Comparator {
    type Error = RuleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for LogicalOp {
    type Error = RuleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Comparator> for String {
    fn from(op: Comparator) -> Self {
        op.as_str().to_owned()
    }
}

impl From<LogicalOp> for String {
    fn from(op: LogicalOp) -> Self {
        op.as_str().to_owned()
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
