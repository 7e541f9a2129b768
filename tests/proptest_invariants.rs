
use proptest::prelude::*;
use ruletree::{NodeKind, combine, evaluate};
use strategies::{arb_flag_leaf, arb_node, arb_number_leaf, arb_record, arb_tree};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Combining a single rule leaves it unchanged.
    #[test]
    fn single_rule_is_unchanged(node in arb_node(5)) {
        prop_assert_eq!(combine(vec![node.clone()]), Ok(node));
    }

    /// Rules over disjoint fields combine into their conjunction.
    #[test]
    fn disjoint_fields_conjoin(
        a in arb_tree(arb_number_leaf(), 4),
        b in arb_tree(arb_flag_leaf(), 4),
        record in arb_record(),
    ) {
        let combined = combine(vec![a.clone(), b.clone()]).unwrap();
        let expected = evaluate(&a, &record).unwrap() && evaluate(&b, &record).unwrap();
        prop_assert_eq!(evaluate(&combined, &record), Ok(expected));
    }

    /// A compound rule combined with itself keeps its verdict.
    #[test]
    fn compound_rule_combined_with_itself(node in arb_node(5), record in arb_record()) {
        prop_assume!(node.kind() == NodeKind::Operator);
        let combined = combine(vec![node.clone(), node.clone()]).unwrap();
        prop_assert_eq!(evaluate(&combined, &record), evaluate(&node, &record));
    }

    /// Combining never makes a tree deeper than the AND joining its inputs.
    #[test]
    fn combined_depth_is_bounded(a in arb_node(4), b in arb_node(4)) {
        let bound = a.depth().max(b.depth()) + 1;
        let combined = combine(vec![a, b]).unwrap();
        prop_assert!(combined.depth() <= bound);
    }

    #[test]
    fn combine_is_deterministic(a in arb_node(4), b in arb_node(4)) {
        let first = combine(vec![a.clone(), b.clone()]);
        prop_assert_eq!(combine(vec![a, b]), first);
    }
}
