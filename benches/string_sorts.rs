use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use mksort::prelude::*;
use rand::Rng;
use std::hint::black_box;

const COUNT: usize = 10_000;

fn random_strings() -> Vec<String> {
    let mut rng = rand::rng();
    (0..COUNT)
        .map(|_| {
            (0..64)
                .map(|_| {
                    let d = rng.random_range(0..62u8);
                    let c = match d {
                        0..=9 => b'0' + d,
                        10..=35 => b'A' + (d - 10),
                        _ => b'a' + (d - 36),
                    };
                    c as char
                })
                .collect()
        })
        .collect()
}

fn pseudo_words() -> Vec<String> {
    let mut rng = rand::rng();
    (0..COUNT)
        .map(|_| {
            let len = rng.random_range(1..=28);
            (0..len)
                .map(|_| (b'a' + rng.random_range(0..26u8)) as char)
                .collect()
        })
        .collect()
}

fn bench_dataset(c: &mut Criterion, name: &str, input: Vec<String>) {
    let mut group = c.benchmark_group(name);
    group.sample_size(10);

    group.bench_function("multikey2", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| multikey2(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("multikey1", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| multikey1(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("burstsort", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| burstsort(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_random(c: &mut Criterion) {
    bench_dataset(c, "Random strings", random_strings());
}

fn bench_pseudo_words(c: &mut Criterion) {
    bench_dataset(c, "Psuedo words", pseudo_words());
}

criterion_group!(benches, bench_random, bench_pseudo_words);
criterion_main!(benches);
