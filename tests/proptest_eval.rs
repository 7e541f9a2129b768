
use proptest::prelude::*;
use ruletree::{Node, evaluate, parse};
use strategies::{arb_node, arb_record, reference_eval};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The evaluator agrees with an independent reference semantics.
    #[test]
    fn matches_reference(node in arb_node(5), record in arb_record()) {
        prop_assert_eq!(evaluate(&node, &record), Ok(reference_eval(&node, &record)));
    }

    /// An operator node is exactly the boolean combination of its children.
    #[test]
    fn operator_decomposes(node in arb_node(5), record in arb_record()) {
        if let Node::Operator { op, left, right } = &node {
            let l = evaluate(left, &record).unwrap();
            let r = evaluate(right, &record).unwrap();
            let expected = match op {
                ruletree::LogicalOp::And => l && r,
                ruletree::LogicalOp::Or => l || r,
            };
            prop_assert_eq!(evaluate(&node, &record), Ok(expected));
        }
    }

    #[test]
    fn evaluation_is_deterministic(node in arb_node(5), record in arb_record()) {
        let first = evaluate(&node, &record);
        for _ in 0..3 {
            prop_assert_eq!(&evaluate(&node, &record), &first);
        }
    }

    /// Rendered rule text parses back to the tree it came from.
    #[test]
    fn display_parses_back(node in arb_node(5)) {
        let text = node.to_string();
        prop_assert_eq!(parse(&text), Ok(node), "text was {}", text);
    }

    /// Parsing rendered text keeps the verdict.
    #[test]
    fn reparsed_rule_keeps_verdict(node in arb_node(4), record in arb_record()) {
        let reparsed = parse(&node.to_string()).unwrap();
        prop_assert_eq!(evaluate(&reparsed, &record), evaluate(&node, &record));
    }
}

proptest! {
    /// The parser never panics on arbitrary text; it returns a tree or an error.
    #[test]
    fn parse_arbitrary_text(text in "[a-z0-9 ()'=<>&|ANDOR]{0,80}") {
        let _ = parse(&text);
    }
}
