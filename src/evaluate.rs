use crate::{Comparator, Literal, LogicalOp, MissingField, Node, Options, Record, RuleError, Value};

pub(crate) fn evaluate(node: &Node, record: &Record, options: &Options) -> Result<bool, RuleError> {
    eval_node(node, record, options, 1)
}

fn eval_node(
    node: &Node,
    record: &Record,
    options: &Options,
    depth: usize,
) -> Result<bool, RuleError> {
    if depth > options.get_max_depth() {
        return Err(RuleError::DepthLimitExceeded {
            limit: options.get_max_depth(),
        });
    }
    match node {
        // Both sides are always evaluated, so a missing field on either
        // side is reported regardless of the other side's result.
        Node::Operator { op, left, right } => {
            let left = eval_node(left, record, options, depth + 1)?;
            let right = eval_node(right, record, options, depth + 1)?;
            Ok(match op {
                LogicalOp::And => left && right,
                LogicalOp::Or => left || right,
            })
        }
        Node::Operand {
            field,
            comparator,
            value,
        } => match record.get(field) {
            Some(actual) => Ok(compare(actual, *comparator, value)),
            None => match options.get_missing_field() {
                MissingField::Error => Err(RuleError::MissingField {
                    field: field.clone(),
                }),
                MissingField::NoMatch => Ok(false),
            },
        },
    }
}

/// Apply one condition to a record value. Mismatched types never match.
fn compare(actual: &Value, comparator: Comparator, expected: &Literal) -> bool {
    let equality = comparator.is_equality() || comparator == Comparator::In;
    match (actual, expected) {
        (Value::Number(a), Literal::Number(b)) => match comparator {
            Comparator::Gt => a > b,
            Comparator::Lt => a < b,
            Comparator::Eq | Comparator::DoubleEq | Comparator::In => a == b,
        },
        (Value::Text(a), Literal::Text(b)) => equality && equal_fold(a, b),
        (Value::Bool(a), Literal::Bool(b)) => equality && a == b,

        // Merged conditions: the comparator no longer applies.
        (Value::Number(v), Literal::Range(range)) => range.contains(*v),
        (Value::Text(v), Literal::Set(items)) => items.iter().any(|item| equal_fold(v, item)),

        (Value::Number(_), Literal::Text(_) | Literal::Bool(_) | Literal::Set(_))
        | (Value::Text(_), Literal::Number(_) | Literal::Bool(_) | Literal::Range(_))
        | (Value::Bool(_), Literal::Number(_) | Literal::Text(_) | Literal::Range(_) | Literal::Set(_)) => {
            false
        }
    }
}

fn equal_fold(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
