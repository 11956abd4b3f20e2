//! Criterion benchmarks for the selection engine.

use std::collections::HashSet;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use sieve_clustering::{Cluster, MemberRecord, SelectionMode};
use sieve_core::models::RecordId;

fn make_cluster(n: usize) -> Cluster {
    let mut cluster = Cluster::new();
    for i in 0..n {
        let p = (i % 97) as f64 / 97.0;
        cluster
            .add(MemberRecord::new(i as RecordId, ((i * 31) % 1000) as f64).with_confidence(vec![p, 1.0 - p]))
            .unwrap();
    }
    cluster.finalize(0).unwrap();
    cluster
        .set_likelihood((0..n).map(|i| ((i * 17) % 101) as f64).collect())
        .unwrap();
    cluster
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    for n in [100usize, 10_000] {
        let cluster = make_cluster(n);
        let exclude: HashSet<RecordId> = (0..n as RecordId / 10).collect();
        for mode in [SelectionMode::Center, SelectionMode::Uncertain, SelectionMode::Random] {
            group.bench_with_input(BenchmarkId::new(mode.as_str(), n), &n, |b, _| {
                b.iter(|| cluster.select(mode, 20, &exclude).unwrap())
            });
        }
        group.bench_with_input(BenchmarkId::new("partition", n), &n, |b, _| {
            b.iter(|| cluster.partition(20, true, &exclude).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_selection);
criterion_main!(benches);
