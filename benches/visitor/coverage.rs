use criterion::{criterion_group, Criterion};
use wordhierarchy::{visitor::CoverageChecker, WordTree};

use crate::common::generate_dictionary;

fn bench(c: &mut Criterion) {
    let words = generate_dictionary(1234, 50_000);
    let tree: WordTree = words.iter().collect();

    c.bench_function("visitor/coverage", |b| {
        b.iter(|| std::hint::black_box(CoverageChecker::check(&tree, words.iter().cloned())));
    });
}

criterion_group!(bench_coverage_group, bench);
