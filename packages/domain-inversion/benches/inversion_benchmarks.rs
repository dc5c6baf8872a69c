//! Performance benchmarks for domain inversion
//!
//! Covers the hot paths of form-driven callers:
//! - inversion of wide conjunctions and nested disjunctions
//! - evaluation against a full context
//! - simplify / merge on deep trees
//! - JSON decoding

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use domain_inversion::{
    domain_inversion, eval_domain, merge, simplify, Context, Domain, DslCodec, Value,
};
use serde_json::json;

// ============================================================================
// Fixtures
// ============================================================================

fn wide_and(width: usize) -> Domain {
    let mut children = vec![Domain::leaf("x", "=", 1)];
    children.extend((0..width).map(|i| Domain::leaf(format!("f{}", i), ">", 0)));
    Domain::and(children)
}

fn nested_or(depth: usize) -> Domain {
    (0..depth).fold(Domain::leaf("x", "=", 0), |inner, i| {
        Domain::or(vec![
            Domain::and(vec![inner, Domain::leaf("y", ">", i as i64)]),
            Domain::leaf("x", "=", i as i64),
        ])
    })
}

fn full_context(width: usize) -> Context {
    (0..width)
        .map(|i| (format!("f{}", i), Value::Int(1)))
        .chain(std::iter::once(("y".to_string(), Value::Int(3))))
        .collect()
}

// ============================================================================
// Inversion
// ============================================================================

fn bench_invert_wide_and(c: &mut Criterion) {
    let mut group = c.benchmark_group("invert_wide_and");

    for width in [10, 100, 1000] {
        let domain = wide_and(width);
        let context = full_context(width);
        group.throughput(Throughput::Elements(width as u64));
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            b.iter(|| black_box(domain_inversion(&domain, "x", &context)));
        });
    }

    group.finish();
}

fn bench_invert_nested_or(c: &mut Criterion) {
    let mut group = c.benchmark_group("invert_nested_or");

    for depth in [4, 16, 64] {
        let domain = nested_or(depth);
        let context = full_context(0);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(domain_inversion(&domain, "x", &context)));
        });
    }

    group.finish();
}

// ============================================================================
// Evaluation and normalization
// ============================================================================

fn bench_eval(c: &mut Criterion) {
    let domain = wide_and(100);
    let context = full_context(100).with("x", 1);
    c.bench_function("eval_wide_and_100", |b| {
        b.iter(|| black_box(eval_domain(&domain, &context)));
    });
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let domain = nested_or(32);

    group.bench_function("simplify", |b| b.iter(|| black_box(simplify(&domain))));
    group.bench_function("merge", |b| b.iter(|| black_box(merge(&domain))));

    group.finish();
}

// ============================================================================
// Decoding
// ============================================================================

fn bench_decode(c: &mut Criterion) {
    let codec = DslCodec::default();
    let document = json!([
        "OR",
        [["x", "=", 3], ["y", ">", 5], ["z", "in", [1, 2, 3]]],
        [["x", "=", 4], ["partner.code", "ilike", "a%", "res.partner"]],
        ["x", "=", null]
    ]);

    c.bench_function("decode_mixed", |b| {
        b.iter(|| black_box(codec.decode(&document)));
    });
}

criterion_group!(
    benches,
    bench_invert_wide_and,
    bench_invert_nested_or,
    bench_eval,
    bench_normalize,
    bench_decode,
);
criterion_main!(benches);
