//! Criterion benchmarks for the triage cascade.
//!
//! Uses seeded synthetic populations so runs are comparable; the
//! cascade's cost is dominated by the initial sort, so sizes are swept
//! over two orders of magnitude.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use triage_cascade::candidate::Candidate;
use triage_cascade::cascade::{apply_cascade, apply_cascade_sweep, CascadeParams};
use triage_cascade::generate::{generate_candidates, GeneratorConfig};
use triage_cascade::score::ScoreModel;

fn scored_population(n: usize) -> Vec<Candidate> {
    let config = GeneratorConfig::default().with_seed(7).with_n_candidates(n);
    let population = generate_candidates(&config).expect("valid generator config");
    ScoreModel::default()
        .score_candidates(&population)
        .expect("finite features")
}

fn bench_apply_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_cascade");
    for &n in &[100usize, 1_000, 10_000] {
        let population = scored_population(n);
        let params = CascadeParams::default()
            .with_threshold(0.5)
            .with_top_k(n / 4)
            .with_budget(n / 8);
        group.bench_with_input(BenchmarkId::from_parameter(n), &population, |b, pop| {
            b.iter(|| apply_cascade(black_box(pop), black_box(&params)));
        });
    }
    group.finish();
}

fn bench_parameter_sweep(c: &mut Criterion) {
    let population = scored_population(1_000);
    let sweep: Vec<CascadeParams> = (1..=50)
        .map(|k| {
            CascadeParams::default()
                .with_threshold(0.4)
                .with_top_k(k * 10)
                .with_budget(k * 5)
        })
        .collect();

    c.bench_function("sweep_50_tuples_n1000", |b| {
        b.iter(|| apply_cascade_sweep(black_box(&population), black_box(&sweep)));
    });
}

fn bench_generate_and_score(c: &mut Criterion) {
    let model = ScoreModel::default();
    c.bench_function("generate_and_score_n1000", |b| {
        b.iter(|| {
            let config = GeneratorConfig::default().with_n_candidates(1_000);
            let population = generate_candidates(black_box(&config)).expect("valid config");
            model.score_candidates(&population).expect("finite features")
        });
    });
}

criterion_group!(
    benches,
    bench_apply_cascade,
    bench_parameter_sweep,
    bench_generate_and_score
);
criterion_main!(benches);
