//! Benchmarks for GrowableArray vs SmallVec vs Vec
//!
//! Run with: `cargo bench --bench growable_array`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use growlist_core::GrowableArray;
use smallvec::SmallVec;

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [4, 16, 128, 1024] {
        group.bench_with_input(BenchmarkId::new("GrowableArray", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = GrowableArray::new().unwrap();
                for i in 0..size {
                    list.append(black_box(i as u64)).unwrap();
                }
                black_box(list);
            });
        });

        group.bench_with_input(BenchmarkId::new("SmallVec<4>", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = SmallVec::<[u64; 4]>::new();
                for i in 0..size {
                    vec.push(black_box(i as u64));
                }
                black_box(vec);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::<u64>::new();
                for i in 0..size {
                    vec.push(black_box(i as u64));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_growth_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth_factor");

    for rate in [1.25, 1.5, 2.0, 4.0] {
        group.bench_with_input(BenchmarkId::from_parameter(rate), &rate, |b, &rate| {
            b.iter(|| {
                let mut list = GrowableArray::new().unwrap();
                list.set_growth_factor(rate);
                for i in 0..4096u64 {
                    list.append(black_box(i)).unwrap();
                }
                black_box(list);
            });
        });
    }

    group.finish();
}

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");

    group.bench_function("GrowableArray", |b| {
        let mut list = GrowableArray::with_capacity(64).unwrap();
        b.iter(|| {
            for i in 0..64u64 {
                list.append(black_box(i)).unwrap();
            }
            while let Some(value) = list.pop() {
                black_box(value);
            }
        });
    });

    group.bench_function("Vec", |b| {
        let mut vec = Vec::<u64>::with_capacity(64);
        b.iter(|| {
            for i in 0..64u64 {
                vec.push(black_box(i));
            }
            while let Some(value) = vec.pop() {
                black_box(value);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_append, bench_growth_factor, bench_push_pop);
criterion_main!(benches);
