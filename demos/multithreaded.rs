use std::sync::Arc;
use std::thread;

use ruletree::{Engine, MissingField, Options, Record};

fn main() {
    let engine = Engine::new(Options::new().missing_field(MissingField::NoMatch));
    let rule = Arc::new(
        engine
            .compile("age > 17 AND (status = 'active' OR vip == true)")
            .expect("failed to compile rule"),
    );

    let handles: Vec<_> = (0..4_i64)
        .map(|i| {
            let rule = Arc::clone(&rule);
            thread::spawn(move || {
                let age = 16 + i;
                let record = Record::new()
                    .set("age", age)
                    .set("status", if i % 2 == 0 { "Active" } else { "closed" });
                (age, rule.evaluate(&record))
            })
        })
        .collect();

    for handle in handles {
        let (age, verdict) = handle.join().expect("thread panicked");
        match verdict {
            Ok(v) => println!("age {age}: {v}"),
            Err(err) => println!("age {age}: {err}"),
        }
    }
}
