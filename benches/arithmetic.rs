//! Benchmarks for arithmetic operations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fixed_decimal::Decimal;

/// Deterministic operand pool covering a spread of scales and signs
fn random_decimals(count: usize, seed: u128) -> Vec<Decimal> {
    let mut rng = oorandom::Rand64::new(seed);
    (0..count)
        .map(|_| {
            let n = rng.rand_u64();
            let scale = (rng.rand_u64() % 29) as u32;
            let negative = rng.rand_u64() & 1 == 1;
            Decimal::from_parts(n as u32, (n >> 32) as u32, 0, scale, negative).unwrap()
        })
        .collect()
}

fn bench_addition(c: &mut Criterion) {
    let xs = random_decimals(1000, 1);
    let ys = random_decimals(1000, 2);
    let mut i = 0;
    c.bench_function("addition", |b| {
        b.iter(|| {
            i = (i + 1) % xs.len();
            black_box(xs[i].checked_add(ys[i]))
        })
    });
}

fn bench_multiplication(c: &mut Criterion) {
    let xs = random_decimals(1000, 3);
    let ys = random_decimals(1000, 4);
    let mut i = 0;
    c.bench_function("multiplication", |b| {
        b.iter(|| {
            i = (i + 1) % xs.len();
            black_box(xs[i].checked_mul(ys[i]))
        })
    });
}

fn bench_division(c: &mut Criterion) {
    let xs = random_decimals(1000, 5);
    let ys = random_decimals(1000, 6);
    let mut i = 0;
    c.bench_function("division", |b| {
        b.iter(|| {
            i = (i + 1) % xs.len();
            black_box(xs[i].checked_div(ys[i]))
        })
    });
}

fn bench_sqrt(c: &mut Criterion) {
    let xs = random_decimals(1000, 7);
    let mut i = 0;
    c.bench_function("sqrt", |b| {
        b.iter(|| {
            i = (i + 1) % xs.len();
            black_box(xs[i].abs().sqrt())
        })
    });
}

fn bench_parse_and_format(c: &mut Criterion) {
    let strings: Vec<String> = random_decimals(1000, 8)
        .iter()
        .map(|d| d.to_string())
        .collect();
    let mut i = 0;
    c.bench_function("parse", |b| {
        b.iter(|| {
            i = (i + 1) % strings.len();
            black_box(strings[i].parse::<Decimal>())
        })
    });

    let values = random_decimals(1000, 9);
    let mut j = 0;
    c.bench_function("format", |b| {
        b.iter(|| {
            j = (j + 1) % values.len();
            black_box(values[j].to_string())
        })
    });
}

criterion_group!(
    benches,
    bench_addition,
    bench_multiplication,
    bench_division,
    bench_sqrt,
    bench_parse_and_format,
);
criterion_main!(benches);
