//! Performance benchmarks for string, object and serialization transforms
//! Measures how the allocating transforms scale with input size

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};
use std::hint::black_box;
use toolbelt::object::{deep_merge, flatten_object, object_diff, unflatten_object};
use toolbelt::serialization::{json_to_csv, object_to_query_string, query_string_to_object};
use toolbelt::string::{levenshtein_distance, slugify, to_camel_case, to_snake_case};

/// Build an object `depth` levels deep with `width` keys per level
fn nested_object(depth: usize, width: usize) -> Value {
    if depth == 0 {
        return json!("leaf");
    }
    let map = (0..width)
        .map(|i| (format!("key_{}", i), nested_object(depth - 1, width)))
        .collect();
    Value::Object(map)
}

/// Benchmark case conversion and slug generation
fn bench_string_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_transforms");
    let identifier = "parseHTTPResponse_v2 with-mixed Separators";

    group.bench_function("snake_case", |b| {
        b.iter(|| to_snake_case(black_box(identifier)))
    });
    group.bench_function("camel_case", |b| {
        b.iter(|| to_camel_case(black_box(identifier)))
    });
    group.bench_function("slugify", |b| {
        b.iter(|| slugify(black_box("  Rust 2024: What's New in the Édition?  ")))
    });

    for size in [10usize, 100, 500] {
        let a: String = "kitten".chars().cycle().take(size).collect();
        let b_text: String = "sitting".chars().cycle().take(size).collect();
        group.bench_with_input(
            BenchmarkId::new("levenshtein", size),
            &(a, b_text),
            |b, (left, right)| b.iter(|| levenshtein_distance(black_box(left), black_box(right))),
        );
    }

    group.finish();
}

/// Benchmark nested object operations
fn bench_object_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("object_transforms");

    for (depth, width) in [(2usize, 5usize), (3, 5), (4, 4)] {
        let object = nested_object(depth, width);
        let label = format!("{}x{}", depth, width);

        group.bench_with_input(BenchmarkId::new("flatten", &label), &object, |b, object| {
            b.iter(|| flatten_object(black_box(object), "."))
        });

        let flat = flatten_object(&object, ".").unwrap();
        group.bench_with_input(BenchmarkId::new("unflatten", &label), &flat, |b, flat| {
            b.iter(|| unflatten_object(black_box(flat), "."))
        });

        let patch = nested_object(depth, width / 2 + 1);
        group.bench_with_input(
            BenchmarkId::new("deep_merge", &label),
            &(object.clone(), patch),
            |b, (target, source)| b.iter(|| deep_merge(black_box(target), black_box(source))),
        );

        let mut changed = object.clone();
        if let Some(map) = changed.as_object_mut() {
            map.insert("key_0".to_string(), json!(42));
        }
        group.bench_with_input(
            BenchmarkId::new("diff", &label),
            &(object, changed),
            |b, (before, after)| b.iter(|| object_diff(black_box(before), black_box(after))),
        );
    }

    group.finish();
}

/// Benchmark serialization of tabular and query data
fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");

    for rows in [10usize, 100, 1000] {
        let records: Vec<Value> = (0..rows)
            .map(|i| json!({"id": i, "name": format!("item_{}", i), "active": i % 2 == 0}))
            .collect();
        group.bench_with_input(BenchmarkId::new("json_to_csv", rows), &records, |b, records| {
            b.iter(|| json_to_csv(black_box(records)))
        });
    }

    let params = json!({"q": "rust lang", "page": 2, "tag": ["a", "b", "c"], "sort": "desc"});
    group.bench_function("object_to_query_string", |b| {
        b.iter(|| object_to_query_string(black_box(&params)))
    });
    group.bench_function("query_string_to_object", |b| {
        b.iter(|| query_string_to_object(black_box("?q=rust+lang&page=2&tag=a&tag=b&tag=c")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_string_transforms,
    bench_object_transforms,
    bench_serialization,
);

criterion_main!(benches);
