use criterion::*;

use minexpr::{from_str, to_string, Value};

fn sample_tree() -> Value {
    let mut records = Vec::new();
    for i in 0..100 {
        records.push(Value::list([
            Value::string(format!("record-{i}")),
            Value::list(["name", "some value with spaces"]),
            Value::list(["note", "contains a \" quote"]),
            Value::list([Value::string("tags"), Value::list(["a", "b", "c"])]),
        ]));
    }
    Value::List(records.into_iter().collect())
}

fn bench_parse_flat(c: &mut Criterion) {
    c.bench_function("parse flat list", |b| {
        let input = "(".to_string() + &"item ".repeat(1000) + ")";
        b.iter(|| black_box(from_str(&input)))
    });
}

fn bench_parse_quoted(c: &mut Criterion) {
    c.bench_function("parse quoted strings", |b| {
        let input = "(".to_string() + &r#""a ""quoted"" item" "#.repeat(500) + ")";
        b.iter(|| black_box(from_str(&input)))
    });
}

fn bench_parse_nested(c: &mut Criterion) {
    c.bench_function("parse nested tree", |b| {
        let input = to_string(&sample_tree()).unwrap();
        b.iter(|| black_box(from_str(&input)))
    });
}

fn bench_print(c: &mut Criterion) {
    c.bench_function("print nested tree", |b| {
        let tree = sample_tree();
        b.iter(|| black_box(to_string(&tree)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = bench_parse_flat, bench_parse_quoted, bench_parse_nested, bench_print
}
criterion_main!(benches);
