//! Benchmarks for regex-query evaluation.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use regex_query::{EngineConfig, EngineKind, Evaluator, Query};

// ============================================================================
// Test Data
// ============================================================================

const QUERIES: &[(&str, &str, &str)] = &[
    ("capture", "a(b)c", "xabcY"),
    ("no_match", "a(b)c", "xyz"),
    ("invalid", "a(b", "abc"),
    ("optional_group", "(a)?b", "b"),
    ("email", r"([\w.+-]+)@([\w-]+)\.(\w+)", "contact: someone.else+tag@example.org today"),
];

// Input sizes for throughput testing
const INPUT_SIZES: &[usize] = &[100, 1_000, 10_000, 100_000];

fn evaluator() -> Evaluator {
    Evaluator::with_engine(EngineKind::Rust, &EngineConfig::default()).unwrap()
}

// ============================================================================
// Benchmark: Evaluation
// ============================================================================

fn bench_evaluate(c: &mut Criterion) {
    let evaluator = evaluator();
    let mut group = c.benchmark_group("evaluate");

    for (name, pattern, input) in QUERIES {
        let query = Query::new(*pattern, *input);
        group.bench_function(*name, |b| b.iter(|| evaluator.evaluate(black_box(&query)).unwrap()));
    }

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let result = evaluator()
        .evaluate(&Query::new(r"(\w+)=(\w+)", "key=value"))
        .unwrap();

    c.bench_function("serialize", |b| b.iter(|| black_box(&result).to_json().unwrap()));
}

// ============================================================================
// Benchmark: Throughput
// ============================================================================

fn bench_throughput(c: &mut Criterion) {
    let evaluator = evaluator();
    let mut group = c.benchmark_group("throughput");

    for size in INPUT_SIZES {
        // Match sits at the very end to force a full scan
        let mut input = "x".repeat(*size);
        input.push_str("abc");
        let query = Query::new("a(b)c", input);

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &query, |b, query| {
            b.iter(|| evaluator.evaluate(black_box(query)).unwrap())
        });
    }

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(benches, bench_evaluate, bench_serialize, bench_throughput);

criterion_main!(benches);
