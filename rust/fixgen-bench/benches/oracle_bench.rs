//! Criterion benchmarks for the reference oracles.
//!
//! The sort oracle has to keep up with ten-million-element cases, so sizes go
//! well past what the unit tests exercise.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fixgen_core::map::generate_operations;
use fixgen_core::oracle::{replay, sort_in_place};
use fixgen_core::rng::case_rng;
use fixgen_core::sort::{catalog, CatalogOptions};
use fixgen_core::{Elements, MapRecipe, SortCategory};

fn large_elements(size: usize, name: &str) -> Elements {
    let opts = CatalogOptions {
        large_size: size,
        include_large_floats: true,
        categories: vec![SortCategory::Large],
    };
    let case = catalog(&opts)
        .into_iter()
        .find(|c| c.name == name)
        .expect("large case exists");
    case.elements(&mut case_rng(0, name))
}

fn bench_sort(c: &mut Criterion, group_name: &str, case_name: &str) {
    let sizes = [1_000, 10_000, 100_000, 1_000_000];
    let mut group = c.benchmark_group(group_name);

    for size in sizes {
        let input = large_elements(size, case_name);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let mut els = input.clone();
                sort_in_place(black_box(&mut els));
                els
            });
        });
    }

    group.finish();
}

fn bench_sort_ints(c: &mut Criterion) {
    bench_sort(c, "oracle_sort_ints", "case_large1");
}

fn bench_sort_strings(c: &mut Criterion) {
    bench_sort(c, "oracle_sort_strings", "case_large2");
}

fn bench_sort_floats(c: &mut Criterion) {
    bench_sort(c, "oracle_sort_floats", "case_large3");
}

fn bench_map_replay(c: &mut Criterion) {
    let sizes = [1_000, 10_000, 100_000];
    let mut group = c.benchmark_group("oracle_map_replay");

    for size in sizes {
        let ops = generate_operations(&MapRecipe::mixed(size), &mut case_rng(0, "bench"))
            .expect("valid recipe");
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &ops, |b, ops| {
            b.iter(|| replay(black_box(ops)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sort_ints,
    bench_sort_strings,
    bench_sort_floats,
    bench_map_replay
);
criterion_main!(benches);
