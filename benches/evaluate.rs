use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ruletree::{Node, Record};

/// Rule text joining `n` conditions on distinct fields with AND, and a
/// record that satisfies all of them.
fn build_rule(n: usize) -> (String, Record) {
    let mut record = Record::new();
    let mut parts = Vec::with_capacity(n);
    for i in 0..n {
        let name = field_name(i);
        parts.push(format!("{name} > 1"));
        record = record.set(&name, 10);
    }
    (parts.join(" AND "), record)
}

// Field names are lowercase letters only.
fn field_name(i: usize) -> String {
    let mut name = String::from("f");
    let mut i = i;
    loop {
        name.push(char::from(b'a' + (i % 26) as u8));
        i /= 26;
        if i == 0 {
            return name;
        }
    }
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_eval");

    for &n in &[5, 20, 50] {
        let (text, record) = build_rule(n);
        let rule = ruletree::parse(&text).unwrap();
        group.bench_function(format!("{n}_conditions"), |b| {
            b.iter(|| ruletree::evaluate(black_box(&rule), black_box(&record)));
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for &n in &[5, 20, 50] {
        let (text, _) = build_rule(n);
        group.bench_function(format!("{n}_conditions"), |b| {
            b.iter(|| ruletree::parse(black_box(&text)).unwrap());
        });
    }

    group.finish();
}

fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");

    for &n in &[5, 20, 50] {
        let rules: Vec<Node> = (0..n)
            .map(|i| ruletree::parse(&format!("{} > {i} OR age < 3", field_name(i))).unwrap())
            .collect();
        group.bench_function(format!("{n}_rules"), |b| {
            b.iter(|| ruletree::combine(black_box(rules.clone())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_parse, bench_combine);
criterion_main!(benches);
