use ruletree::{Record, RuleError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RuleError> {
    // RUST_LOG=ruletree=debug shows merges and collapsed subtrees.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let rules = [
        "age > 30 AND department = 'Marketing'",
        "salary > 20000 OR experience > 5",
    ];
    let combined = ruletree::combine_rules(&rules)?;
    println!("combined: {combined}");

    let record = Record::new()
        .set("age", 42)
        .set("department", "Marketing")
        .set("salary", 15_000)
        .set("experience", 8);
    println!("verdict: {}", ruletree::evaluate(&combined, &record)?);

    // Adjacent conditions on one field merge into a single condition.
    let merged = ruletree::combine_rules(&["age > 10", "age > 30"])?;
    println!("merged: {merged}");
    for age in [5, 20, 45] {
        let record = Record::new().set("age", age);
        println!("  age {age} -> {}", ruletree::evaluate(&merged, &record)?);
    }

    let departments =
        ruletree::combine_rules(&["department = 'Sales'", "department = 'Marketing'"])?;
    println!("merged: {departments}");

    Ok(())
}
