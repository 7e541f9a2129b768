use std::fmt;

use super::{Comparator, Literal, LogicalOp, RuleError};

/// A node of a compiled rule tree.
///
/// Leaves are operand conditions (`age > 30`); inner nodes join exactly two
/// subtrees with AND or OR. Children are owned outright, so a tree is always
/// finite and acyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum Node {
    Operand {
        field: String,
        comparator: Comparator,
        value: Literal,
    },
    Operator {
        op: LogicalOp,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// The two node kinds, without their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Operand,
    Operator,
}

impl Node {
    #[must_use]
    pub fn operand(
        field: impl Into<String>,
        comparator: Comparator,
        value: impl Into<Literal>,
    ) -> Node {
        Node::Operand {
            field: field.into(),
            comparator,
            value: value.into(),
        }
    }

    /// Build an operand from a textual comparator, as received from outside
    /// the parser.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::UnsupportedOperator`] if `comparator` is not one
    /// of `=`, `==`, `>`, `<` or `in`.
    pub fn try_operand(
        field: impl Into<String>,
        comparator: &str,
        value: impl Into<Literal>,
    ) -> Result<Node, RuleError> {
        Ok(Node::operand(field, comparator.parse()?, value))
    }

    #[must_use]
    pub fn operator(op: LogicalOp, left: Node, right: Node) -> Node {
        Node::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn and(self, other: Node) -> Node {
        Node::operator(LogicalOp::And, self, other)
    }

    #[must_use]
    pub fn or(self, other: Node) -> Node {
        Node::operator(LogicalOp::Or, self, other)
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Operand { .. } => NodeKind::Operand,
            Node::Operator { .. } => NodeKind::Operator,
        }
    }

    /// The field an operand constrains, `None` for operator nodes.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Node::Operand { field, .. } => Some(field),
            Node::Operator { .. } => None,
        }
    }

    /// Number of nodes on the longest root-to-leaf path. A lone operand has
    /// depth 1.
    ///
    /// Walks the tree with an explicit stack, so it is safe on trees that
    /// did not come from the parser.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1_usize)];
        while let Some((node, d)) = stack.pop() {
            deepest = deepest.max(d);
            if let Node::Operator { left, right, .. } = node {
                stack.push((right, d + 1));
                stack.push((left, d + 1));
            }
        }
        deepest
    }

    /// Field names referenced by operand leaves, left to right, with repeats.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Operand { field, .. } => out.push(field.as_str()),
                Node::Operator { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        out
    }

    fn write_tree(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            Node::Operand {
                field,
                comparator,
                value,
            } => writeln!(f, "{pad}{field} {comparator} {value}"),
            Node::Operator { op, left, right } => {
                writeln!(f, "{pad}{op}")?;
                left.write_tree(f, indent + 1)?;
                right.write_tree(f, indent + 1)
            }
        }
    }
}

/// `{}` renders rule text; for trees the parser produced it parses back to
/// the same tree. `{:#}` renders an indented outline, one node per line.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return self.write_tree(f, 0);
        }
        match self {
            Node::Operand {
                field,
                comparator,
                value,
            } => write!(f, "{field} {comparator} {value}"),
            Node::Operator { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// Intermediate builder for operand conditions.
/// Created by [`field()`]; a comparison method turns it into a [`Node`].
#[derive(Debug, Clone)]
pub struct FieldCondition {
    name: String,
}

impl FieldCondition {
    /// `field = value`
    #[must_use]
    pub fn eq(self, value: impl Into<Literal>) -> Node {
        Node::operand(self.name, Comparator::Eq, value)
    }

    /// `field == value`
    #[must_use]
    pub fn double_eq(self, value: impl Into<Literal>) -> Node {
        Node::operand(self.name, Comparator::DoubleEq, value)
    }

    #[must_use]
    pub fn gt(self, value: impl Into<Literal>) -> Node {
        Node::operand(self.name, Comparator::Gt, value)
    }

    #[must_use]
    pub fn lt(self, value: impl Into<Literal>) -> Node {
        Node::operand(self.name, Comparator::Lt, value)
    }

    /// Membership in a range or set of strings.
    #[must_use]
    pub fn is_in(self, value: impl Into<Literal>) -> Node {
        Node::operand(self.name, Comparator::In, value)
    }
}

#[must_use]
pub fn field(name: &str) -> FieldCondition {
    FieldCondition {
        name: name.to_owned(),
    }
}
