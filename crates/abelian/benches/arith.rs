//! Benchmarks for tuple construction, addition and ordering.

use abelian::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("tuple_add");

    for dimension in [1usize, 2, 3, 8, 32] {
        let s = IntTupleSet::new(dimension);
        let x = s.tuple(&vec![3; dimension]).expect("dimension");
        let y = s.tuple(&vec![-5; dimension]).expect("dimension");
        let g = Group::new(s, s.add_op());

        group.bench_with_input(BenchmarkId::new("typed", dimension), &dimension, |b, _| {
            b.iter(|| s.add(black_box(&x), black_box(&y)));
        });
        group.bench_with_input(BenchmarkId::new("group", dimension), &dimension, |b, _| {
            b.iter(|| g.apply(black_box(&x), black_box(&y)));
        });
    }

    group.finish();
}

fn bench_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("tuple_order");
    let s = IntTupleSet::new(8);
    let x = s.tuple(&[1, 2, 3, 4, 5, 6, 7, 8]).expect("dimension");
    let y = s.tuple(&[1, 2, 3, 4, 5, 6, 7, 9]).expect("dimension");
    let so = s.strict_ordered().expect("ordered");

    group.bench_function("typed_less", |b| {
        b.iter(|| s.less(black_box(&x), black_box(&y)));
    });
    group.bench_function("dyn_less", |b| {
        b.iter(|| so.less(black_box(&x), black_box(&y)));
    });

    group.finish();
}

criterion_group!(benches, bench_add, bench_order);
criterion_main!(benches);
