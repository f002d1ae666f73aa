//! Benchmarks for the scoring engine.

use criterion::{criterion_group, criterion_main, Criterion};
use quality_eval::model::{catalog, AnalysisInput, CaseStudy};
use quality_eval::quality::{normalize, QualityScorer};
use quality_eval::Direction;
use std::hint::black_box;

/// All eight characteristics with default catalog metrics and a value for each.
fn full_catalog_input() -> AnalysisInput {
    let selected: Vec<String> = catalog::CHARACTERISTICS
        .iter()
        .map(|c| c.id.to_string())
        .collect();
    let mut input = AnalysisInput {
        metrics: catalog::default_metric_set(&selected),
        weights: selected
            .iter()
            .map(|id| (id.clone(), 12.5))
            .collect(),
        selected_characteristics: selected,
        ..AnalysisInput::default()
    };
    let keys = input.expected_value_keys();
    for (i, key) in keys.into_iter().enumerate() {
        input.values.insert(key, (i % 10) as f64 / 10.0);
    }
    input
}

fn benchmark_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| {
            normalize(
                black_box(80.0),
                black_box(0.0),
                black_box(100.0),
                black_box(Direction::Lower),
                black_box(Some(50.0)),
            )
        });
    });
}

fn benchmark_case_study(c: &mut Criterion) {
    let input = CaseStudy::IotSystem.to_input();
    let scorer = QualityScorer::default();
    c.bench_function("score_iot_case_study", |b| {
        b.iter(|| scorer.score(black_box(&input)));
    });
}

fn benchmark_full_catalog(c: &mut Criterion) {
    let input = full_catalog_input();
    let scorer = QualityScorer::default();
    c.bench_function("score_full_catalog", |b| {
        b.iter(|| scorer.score(black_box(&input)));
    });
}

criterion_group!(
    benches,
    benchmark_normalize,
    benchmark_case_study,
    benchmark_full_catalog
);
criterion_main!(benches);
