//! Benchmarks for CustomList vs Vec
//!
//! Run with: `cargo bench --bench custom_list`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use custom_list::CustomList;

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for size in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("CustomList", size), &size, |b, &size| {
            b.iter(|| {
                let list = CustomList::new();
                for i in 0..size {
                    list.add(black_box(i as u64));
                }
                black_box(list);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..size {
                    vec.push(black_box(i as u64));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for size in [256, 4096] {
        let list: CustomList<u64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("try_next", size), &list, |b, list| {
            b.iter(|| {
                let mut iter = list.iter();
                let mut sum = 0u64;
                while iter.has_next() {
                    sum += iter.try_next().unwrap();
                }
                black_box(sum);
            });
        });

        group.bench_with_input(BenchmarkId::new("for_each", size), &list, |b, list| {
            b.iter(|| {
                let mut sum = 0u64;
                list.for_each(|x| sum += x).unwrap();
                black_box(sum);
            });
        });
    }

    group.finish();
}

fn bench_remove_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_front");

    for size in [256, 1024] {
        group.bench_with_input(BenchmarkId::new("iterator", size), &size, |b, &size| {
            b.iter(|| {
                let list: CustomList<u64> = (0..size).collect();
                let mut iter = list.iter();
                while iter.has_next() {
                    iter.try_next().unwrap();
                    iter.remove().unwrap();
                }
                black_box(list.size());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_iterate, bench_remove_front);
criterion_main!(benches);
