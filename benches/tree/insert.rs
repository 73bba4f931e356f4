use std::time::Duration;

use criterion::{criterion_group, BenchmarkId, Criterion, Throughput};
use wordhierarchy::WordTree;

use crate::common::generate_dictionary;

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree/insert");
    group.measurement_time(Duration::from_secs(10));

    for size in [1_000, 10_000, 100_000] {
        let words = generate_dictionary(69420, size);
        let bytes: usize = words.iter().map(String::len).sum();

        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &words, |b, words| {
            b.iter(|| {
                let tree: WordTree = words.iter().collect();
                std::hint::black_box(tree)
            });
        });
    }
}

criterion_group!(bench_insert_group, bench);
