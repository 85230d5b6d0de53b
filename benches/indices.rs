//! Linear bit scan against word-level skipping

use bit_indices::{BitArray, BitVector, indices_off, indices_on, word_count};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const WIDTH: usize = 4096;
type Wide = BitArray<WIDTH, { word_count(WIDTH) }>;

/// Hides the word-level fast path so every position is tested one by one.
struct BitByBit<'a>(&'a Wide);

impl BitVector for BitByBit<'_> {
    fn width(&self) -> usize {
        WIDTH
    }

    fn is_set(&self, idx: usize) -> bool {
        self.0.is_set(idx)
    }
}

fn benchmark_indices(c: &mut Criterion) {
    let sparse = Wide::from_ones_iter((0..WIDTH).step_by(97));
    let dense = !sparse;

    let mut group = c.benchmark_group("indices_on_sparse");
    group.bench_function("word_skipping", |b| {
        b.iter(|| indices_on(black_box(&sparse)).sum::<usize>())
    });
    group.bench_function("bit_by_bit", |b| {
        b.iter(|| indices_on(&BitByBit(black_box(&sparse))).sum::<usize>())
    });
    group.finish();

    let mut group = c.benchmark_group("indices_off_dense");
    group.bench_function("word_skipping", |b| {
        b.iter(|| indices_off(black_box(&dense)).sum::<usize>())
    });
    group.bench_function("bit_by_bit", |b| {
        b.iter(|| indices_off(&BitByBit(black_box(&dense))).sum::<usize>())
    });
    group.finish();

    c.bench_function("indices_on_u64", |b| {
        b.iter(|| indices_on(black_box(0x8421_0842_1084_2108u64)).sum::<usize>())
    });
}

criterion_group!(benches, benchmark_indices);
criterion_main!(benches);
