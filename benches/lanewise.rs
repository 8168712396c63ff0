//! Bulk lane-wise application benchmarks.
//!
//! Compares the scalar baseline against sequential and rayon-parallel
//! chunked application over slice sizes spanning the cache hierarchy.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanewise::simd::apply::{par_zip_lanewise, zip_lanewise};
use lanewise::simd::ops::{Associative, Binary};
use lanewise::simd::species::preferred_lane_count;
use lanewise::simd::Vector;

/// Slice sizes from L1-resident to memory-bound.
const SLICE_SIZES: &[usize] = &[1_024, 16_384, 262_144, 4_194_304];

/// Below this size, parallel overhead typically exceeds benefits.
const PARALLEL_THRESHOLD: usize = 262_144;

const LANES: usize = preferred_lane_count::<f32>();

fn scalar_add(a: &[f32], b: &[f32]) -> Vec<f32> {
    a.iter().zip(b.iter()).map(|(x, y)| x + y).collect()
}

fn random_slice(rng: &mut StdRng, len: usize) -> Vec<f32> {
    (0..len).map(|_| rng.random_range(-1.0..1.0)).collect()
}

fn bench_zip_add(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut group = c.benchmark_group("zip_add_f32");

    for &size in SLICE_SIZES {
        let a = random_slice(&mut rng, size);
        let b = random_slice(&mut rng, size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("scalar", size), &size, |bench, _| {
            bench.iter(|| scalar_add(black_box(&a), black_box(&b)))
        });

        group.bench_with_input(BenchmarkId::new("chunked", size), &size, |bench, _| {
            bench.iter(|| zip_lanewise::<f32, LANES>(Binary::Add, black_box(&a), black_box(&b)))
        });

        if size >= PARALLEL_THRESHOLD {
            group.bench_with_input(BenchmarkId::new("parallel", size), &size, |bench, _| {
                bench.iter(|| {
                    par_zip_lanewise::<f32, LANES>(Binary::Add, black_box(&a), black_box(&b))
                })
            });
        }
    }

    group.finish();
}

fn bench_reduce(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let lanes: [i32; 16] = std::array::from_fn(|_| rng.random());
    let v = Vector::<i32, 16>::from_array(lanes);

    c.bench_function("reduce_add_i32x16", |bench| {
        bench.iter(|| black_box(v).reduce(Associative::Add))
    });
    c.bench_function("reduce_min_i32x16", |bench| {
        bench.iter(|| black_box(v).reduce(Associative::Min))
    });
}

criterion_group!(benches, bench_zip_add, bench_reduce);
criterion_main!(benches);
