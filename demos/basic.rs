use ruletree::{Record, RuleError};

fn main() -> Result<(), RuleError> {
    let rule = ruletree::parse("age > 30 AND department = 'Marketing'")?;

    println!("{rule}");
    println!("{rule:#}");

    let record = Record::new().set("age", 35).set("department", "marketing");
    println!("35, marketing -> {}", ruletree::evaluate(&rule, &record)?);

    let record = Record::new().set("age", 25).set("department", "Marketing");
    println!("25, Marketing -> {}", ruletree::evaluate(&rule, &record)?);

    match ruletree::evaluate(&rule, &Record::new().set("age", 40)) {
        Ok(verdict) => println!("40, no department -> {verdict}"),
        Err(err) => println!("40, no department -> error: {err}"),
    }

    Ok(())
}
