use std::time::Duration;

use criterion::{criterion_group, BenchmarkId, Criterion};
use wordhierarchy::{
    visitor::{PrinterSettings, RegexCompiler, TreePrinter},
    WordTree,
};

use crate::common::generate_dictionary;

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("visitor/render");
    group.measurement_time(Duration::from_secs(10));

    for size in [1_000, 10_000, 100_000] {
        let tree: WordTree = generate_dictionary(69420, size).into_iter().collect();

        group.bench_with_input(BenchmarkId::new("regex", size), &tree, |b, tree| {
            b.iter(|| std::hint::black_box(RegexCompiler::compile(tree)));
        });
        group.bench_with_input(BenchmarkId::new("dump", size), &tree, |b, tree| {
            b.iter(|| std::hint::black_box(TreePrinter::print(tree, PrinterSettings::default())));
        });
    }
}

criterion_group!(bench_compile_regex_group, bench);
