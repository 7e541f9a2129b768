use tracing::debug;

use crate::{Comparator, Literal, Node, Range, RuleError};

/// Fold `nodes` left to right into one tree.
///
/// Two adjacent conditions on the same field merge into one condition;
/// anything else is joined under AND. Only the running result and the next
/// node are compared, so a field repeated further apart is not merged.
pub(crate) fn combine(nodes: Vec<Node>, max_depth: usize) -> Result<Node, RuleError> {
    let mut combined: Option<Node> = None;
    for node in nodes {
        check_depth(&node, max_depth)?;
        let node = normalize(node);
        let next = match combined {
            None => node,
            Some(acc) => remove_redundancy(combine_pair(acc, node)),
        };
        check_depth(&next, max_depth)?;
        combined = Some(next);
    }
    combined.ok_or(RuleError::EmptyRuleSet)
}

// Both inputs are already normalized.
fn combine_pair(first: Node, second: Node) -> Node {
    match (first, second) {
        (
            Node::Operand {
                field,
                comparator,
                value,
            },
            Node::Operand {
                field: other,
                value: other_value,
                ..
            },
        ) if field == other => {
            let value = combine_values(value, other_value);
            debug!(%field, %value, "merged conditions on the same field");
            Node::Operand {
                field,
                comparator,
                value,
            }
        }
        (first, second) => first.and(second),
    }
}

/// Merge the values of two conditions on one field: numbers widen into a
/// range, strings collect into a set, and any other pairing keeps the first.
fn combine_values(first: Literal, second: Literal) -> Literal {
    match (first, second) {
        (Literal::Number(a), Literal::Number(b)) => Literal::Range(Range::spanning(a, b)),
        (Literal::Text(a), Literal::Text(b)) => Literal::Set(vec![a, b]),
        (first, _) => first,
    }
}

/// Rewrite membership conditions into their canonical value shape. Does not
/// change what the tree evaluates to.
fn normalize(node: Node) -> Node {
    match node {
        Node::Operator { op, left, right } => {
            Node::operator(op, normalize(*left), normalize(*right))
        }
        Node::Operand {
            field,
            comparator: Comparator::In,
            value,
        } => Node::Operand {
            field,
            comparator: Comparator::In,
            value: membership(value),
        },
        operand => operand,
    }
}

fn membership(value: Literal) -> Literal {
    match value {
        Literal::Number(n) => Literal::Range(Range::spanning(n, n)),
        Literal::Text(s) => Literal::Set(vec![s]),
        other => other,
    }
}

/// Collapse every AND/OR node whose two subtrees are identical into one
/// copy, bottom up. `x AND x` and `x OR x` both equal `x`.
fn remove_redundancy(node: Node) -> Node {
    match node {
        Node::Operator { op, left, right } => {
            let left = remove_redundancy(*left);
            let right = remove_redundancy(*right);
            if left == right {
                debug!(%op, "collapsed duplicate subtree");
                left
            } else {
                Node::operator(op, left, right)
            }
        }
        operand => operand,
    }
}

fn check_depth(node: &Node, max_depth: usize) -> Result<(), RuleError> {
    if node.depth() > max_depth {
        return Err(RuleError::DepthLimitExceeded { limit: max_depth });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LogicalOp, field};

    fn combine(nodes: Vec<Node>) -> Result<Node, RuleError> {
        super::combine(nodes, 64)
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(combine(vec![]), Err(RuleError::EmptyRuleSet));
    }

    #[test]
    fn single_node_is_returned() {
        let node = field("age").gt(30).or(field("age").lt(10));
        assert_eq!(combine(vec![node.clone()]), Ok(node));
    }

    #[test]
    fn different_fields_join_under_and() {
        let node = combine(vec![field("age").gt(30), field("department").eq("Sales")]).unwrap();
        assert_eq!(node, field("age").gt(30).and(field("department").eq("Sales")));
    }

    #[test]
    fn numbers_on_same_field_become_a_range() {
        let node = combine(vec![field("age").gt(30), field("age").gt(10)]).unwrap();
        assert_eq!(node, field("age").gt(Range { lower: 10, upper: 30 }));
    }

    #[test]
    fn strings_on_same_field_become_a_set() {
        let node = combine(vec![
            field("department").eq("Sales"),
            field("department").eq("Sales"),
        ])
        .unwrap();
        assert_eq!(
            node,
            field("department").eq(Literal::Set(vec!["Sales".into(), "Sales".into()]))
        );
    }

    #[test]
    fn merged_condition_keeps_first_comparator() {
        let node = combine(vec![field("age").lt(50), field("age").gt(18)]).unwrap();
        assert!(matches!(
            node,
            Node::Operand { comparator: Comparator::Lt, value: Literal::Range(Range { lower: 18, upper: 50 }), .. }
        ));
    }

    #[test]
    fn mismatched_values_keep_the_first() {
        let node = combine(vec![field("x").eq(5), field("x").eq("five")]).unwrap();
        assert_eq!(node, field("x").eq(5));

        let node = combine(vec![field("flag").eq(true), field("flag").eq(false)]).unwrap();
        assert_eq!(node, field("flag").eq(true));
    }

    #[test]
    fn third_value_on_merged_field_keeps_the_range() {
        let node = combine(vec![field("age").gt(10), field("age").gt(30), field("age").gt(50)])
            .unwrap();
        assert_eq!(node, field("age").gt(Range { lower: 10, upper: 30 }));
    }

    #[test]
    fn only_adjacent_conditions_merge() {
        let node = combine(vec![
            field("age").gt(10),
            field("salary").gt(100),
            field("age").gt(30),
        ])
        .unwrap();
        assert_eq!(
            node,
            field("age")
                .gt(10)
                .and(field("salary").gt(100))
                .and(field("age").gt(30))
        );
    }

    #[test]
    fn operator_nodes_never_merge() {
        let a = field("x").eq(1).or(field("y").eq(2));
        let b = field("z").eq(3).or(field("w").eq(4));
        let node = combine(vec![a.clone(), b.clone()]).unwrap();
        assert_eq!(node, a.and(b));
    }

    #[test]
    fn membership_is_canonicalized() {
        let node = combine(vec![field("age").is_in(30)]).unwrap();
        assert_eq!(node, field("age").is_in(Range { lower: 30, upper: 30 }));

        let node = combine(vec![field("team").is_in("core")]).unwrap();
        assert_eq!(node, field("team").is_in(Literal::Set(vec!["core".into()])));
    }

    #[test]
    fn membership_inside_operators_is_canonicalized() {
        let node = combine(vec![field("a").eq(1).and(field("team").is_in("core"))]).unwrap();
        assert_eq!(
            node,
            field("a")
                .eq(1)
                .and(field("team").is_in(Literal::Set(vec!["core".into()])))
        );
    }

    #[test]
    fn identical_rules_collapse() {
        let rule = field("x").eq(1).or(field("y").eq(2));
        assert_eq!(combine(vec![rule.clone(), rule.clone()]), Ok(rule));
    }

    #[test]
    fn duplicate_subtrees_inside_inputs_collapse() {
        let dup = field("x").eq(1).and(field("x").eq(1));
        let node = combine(vec![dup, field("y").eq(2)]).unwrap();
        assert_eq!(node, field("x").eq(1).and(field("y").eq(2)));
    }

    #[test]
    fn distinct_subtrees_with_same_operator_are_kept() {
        let a = field("a").eq(1).and(field("b").eq(2));
        let b = field("c").eq(3).and(field("d").eq(4));
        let node = combine(vec![a, b]).unwrap();
        assert_eq!(node.fields(), vec!["a", "b", "c", "d"]);
        assert!(matches!(node, Node::Operator { op: LogicalOp::And, .. }));
    }

    #[test]
    fn depth_limit_applies_to_the_result() {
        let nodes: Vec<Node> = (0..10).map(|i| field(&format!("f{i}")).eq(i)).collect();
        assert_eq!(
            super::combine(nodes.clone(), 5),
            Err(RuleError::DepthLimitExceeded { limit: 5 })
        );
        assert!(super::combine(nodes, 10).is_ok());
    }
}
