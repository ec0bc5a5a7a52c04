use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use yap::parser::{Tokenizer, parse_expression};
use yap::{Value, YapEngine};

const EXPRESSIONS: &[(&str, &str)] = &[
    ("accessor", "$.books[2].name"),
    ("equals", r#"equals($.books[2].name, "Project Hail Mary 🌌")"#),
    ("length", "length($.books) >= 2"),
    ("where", "where($.numbers, @ > 5)"),
    ("where_field", "where($.books, @.price < 15)"),
];

fn generate_document(size: usize) -> String {
    let books: Vec<String> = (0..size)
        .map(|i| format!(r#"{{"name": "Book {i}", "price": {}.99}}"#, i % 40))
        .collect();
    let numbers: Vec<String> = (0..size).map(|i| i.to_string()).collect();
    format!(
        r#"{{"books": [{}], "numbers": [{}]}}"#,
        books.join(","),
        numbers.join(",")
    )
}

fn bench_tokenizer(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer");
    for (name, expression) in EXPRESSIONS {
        group.bench_function(*name, |b| {
            b.iter(|| Tokenizer::new(black_box(expression)).tokenize_all())
        });
    }
    group.finish();
}

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");
    for (name, expression) in EXPRESSIONS {
        group.bench_function(*name, |b| b.iter(|| parse_expression(black_box(expression))));
    }
    group.finish();
}

fn bench_evaluator(c: &mut Criterion) {
    let engine = YapEngine::new();
    let document = Value::from_json_str(&generate_document(1000)).expect("valid document");

    let mut group = c.benchmark_group("evaluator");
    for (name, expression) in EXPRESSIONS {
        let compiled = engine.compile(expression).expect("valid expression");
        group.bench_function(*name, |b| {
            b.iter(|| compiled.evaluate_value(black_box(&document)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tokenizer, bench_parser, bench_evaluator);
criterion_main!(benches);
