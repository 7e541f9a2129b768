use ruletree::{Node, Options, Record};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rule = ruletree::parse("age > 30 AND department = 'Marketing'")?;
    let json = serde_json::to_string_pretty(&rule)?;
    println!("{json}");

    let back: Node = serde_json::from_str(&json)?;
    assert_eq!(back, rule);

    // Fractional numbers are truncated to integers.
    let record: Record = serde_json::from_str(r#"{"age": 35.9, "department": "MARKETING"}"#)?;
    println!("verdict: {}", ruletree::evaluate(&rule, &record)?);

    let options: Options = serde_json::from_str(r#"{"missing_field": "no_match"}"#)?;
    println!("options: {options:?}");

    Ok(())
}
