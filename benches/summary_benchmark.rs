//! Summary Benchmarks
//!
//! Cost of building full summaries for each analyzer across sample sizes.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use descstats::{BivariateAnalyzer, CategoricalAnalyzer, QuantitativeAnalyzer, Summarizable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 3] = [100, 10_000, 100_000];

fn numeric_sample(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0.0..1000.0)).collect()
}

fn bench_quantitative(c: &mut Criterion) {
    let mut group = c.benchmark_group("quantitative_summary");

    for &n in &SIZES {
        let values = numeric_sample(n, 42);
        group.bench_with_input(BenchmarkId::new("summary", n), &values, |b, values| {
            b.iter(|| {
                let analyzer = QuantitativeAnalyzer::new(values.clone()).unwrap();
                std::hint::black_box(analyzer.summary())
            });
        });
    }

    group.finish();
}

fn bench_categorical(c: &mut Criterion) {
    let mut group = c.benchmark_group("categorical_summary");

    for &n in &SIZES {
        let mut rng = StdRng::seed_from_u64(7);
        let labels: Vec<String> = (0..n)
            .map(|_| format!("category_{}", rng.random_range(0..25)))
            .collect();
        group.bench_with_input(BenchmarkId::new("summary", n), &labels, |b, labels| {
            b.iter(|| {
                let analyzer = CategoricalAnalyzer::new(labels.clone()).unwrap();
                std::hint::black_box(analyzer.summary())
            });
        });
    }

    group.finish();
}

fn bench_bivariate(c: &mut Criterion) {
    let mut group = c.benchmark_group("bivariate_summary");

    for &n in &SIZES {
        let x = numeric_sample(n, 1);
        let y: Vec<f64> = x.iter().zip(numeric_sample(n, 2)).map(|(a, b)| a + 0.1 * b).collect();
        let analyzer = BivariateAnalyzer::new(x, y).unwrap();
        group.bench_with_input(BenchmarkId::new("summary", n), &analyzer, |b, analyzer| {
            b.iter(|| std::hint::black_box(analyzer.summary()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_quantitative, bench_categorical, bench_bivariate);
criterion_main!(benches);
