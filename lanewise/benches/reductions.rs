use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use lanewise::{BlockIterable, NumericReductions};

fn benchmark_reductions(c: &mut Criterion) {
    let mut rng = Pcg64::seed_from_u64(21564);
    let xs: Vec<f64> = (0..10_000_000).map(|_| rng.gen()).collect();
    let ys: Vec<f64> = (0..10_000_000).map(|_| rng.gen()).collect();

    c.bench_function("sequential_sum", |b| {
        b.iter(|| black_box(&xs).iter().sum::<f64>())
    });
    c.bench_function("block_sum", |b| b.iter(|| black_box(&xs).blocks().scalar_sum()));

    c.bench_function("sequential_dot", |b| {
        b.iter(|| {
            black_box(&xs)
                .iter()
                .zip(black_box(&ys))
                .map(|(x, y)| x * y)
                .sum::<f64>()
        })
    });
    c.bench_function("block_dot", |b| {
        b.iter(|| {
            black_box(&xs)
                .blocks()
                .zip(black_box(&ys).blocks())
                .map(|(x, y)| x * y)
                .scalar_sum()
        })
    });
}

criterion_group!(benches, benchmark_reductions);
criterion_main!(benches);
