//! Property-based tests for the scoring engine.
//!
//! Ensures the pure engine functions are total and that the documented
//! invariants hold across random inputs.

use indexmap::IndexMap;
use proptest::prelude::*;
use quality_eval::model::{Direction, MetricDefinition, MetricRange};
use quality_eval::quality::{
    aggregate_characteristic, aggregate_overall, aggregate_sub_characteristic, compute_gaps,
    interpret, normalize, QualityLevel, Weighting,
};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Higher), Just(Direction::Lower)]
}

/// A well-formed range `(min, max)` with `min < max`.
fn range() -> impl Strategy<Value = (f64, f64)> {
    (-1.0e6..1.0e6f64, 1.0e-3..1.0e6f64).prop_map(|(min, width)| (min, min + width))
}

fn scores() -> impl Strategy<Value = IndexMap<String, f64>> {
    prop::collection::vec(0.0..=100.0f64, 0..8).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, score)| (format!("c{i}"), score))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn normalize_stays_in_bounds(
        value in -1.0e7..1.0e7f64,
        (min, max) in range(),
        direction in direction(),
        target in prop::option::of(-1.0e6..1.0e6f64),
    ) {
        let score = normalize(value, min, max, direction, target);
        prop_assert!((0.0..=100.0).contains(&score), "score {} out of bounds", score);
    }

    #[test]
    fn normalize_is_total_on_degenerate_input(
        value in any::<f64>(),
        min in any::<f64>(),
        max in any::<f64>(),
        direction in direction(),
        target in prop::option::of(any::<f64>()),
    ) {
        let score = normalize(value, min, max, direction, target);
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn higher_without_target_is_monotone(
        a in -1.0e7..1.0e7f64,
        b in -1.0e7..1.0e7f64,
        (min, max) in range(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            normalize(lo, min, max, Direction::Higher, None)
                <= normalize(hi, min, max, Direction::Higher, None)
        );
        prop_assert_eq!(normalize(min, min, max, Direction::Higher, None), 0.0);
        prop_assert!((normalize(max, min, max, Direction::Higher, None) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn lower_without_target_is_antitone(
        a in -1.0e7..1.0e7f64,
        b in -1.0e7..1.0e7f64,
        (min, max) in range(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            normalize(lo, min, max, Direction::Lower, None)
                >= normalize(hi, min, max, Direction::Lower, None)
        );
        prop_assert!((normalize(min, min, max, Direction::Lower, None) - 100.0).abs() < 1e-9);
        prop_assert_eq!(normalize(max, min, max, Direction::Lower, None), 0.0);
    }

    #[test]
    fn single_metric_sub_score_equals_its_normalized_score(
        value in -1.0e7..1.0e7f64,
        (min, max) in range(),
        direction in direction(),
    ) {
        let definition =
            MetricDefinition::new("m", "unit", MetricRange::new(min, max), direction);
        let values: IndexMap<usize, f64> = [(0, value)].into_iter().collect();
        let definitions: IndexMap<usize, MetricDefinition> =
            [(0, definition)].into_iter().collect();
        prop_assert_eq!(
            aggregate_sub_characteristic(&values, &definitions),
            normalize(value, min, max, direction, None)
        );
    }

    #[test]
    fn characteristic_score_is_bounded_mean(
        subs in prop::collection::vec(prop::option::of(0.0..=100.0f64), 0..10),
    ) {
        let map: IndexMap<usize, Option<f64>> = subs.iter().copied().enumerate().collect();
        let score = aggregate_characteristic(&map);
        let present: Vec<f64> = subs.iter().flatten().copied().collect();
        if present.is_empty() {
            prop_assert_eq!(score, 0.0);
        } else {
            let lo = present.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(score >= lo - 1e-9 && score <= hi + 1e-9);
        }
    }

    #[test]
    fn overall_score_is_bounded(
        scores in scores(),
        weights in prop::collection::vec(0.0..=100.0f64, 0..8),
    ) {
        let weights: IndexMap<String, f64> = weights
            .into_iter()
            .enumerate()
            .map(|(i, w)| (format!("c{i}"), w))
            .collect();
        let overall = aggregate_overall(&scores, &weights);
        prop_assert!(overall.score >= 0.0);
        prop_assert!(overall.score <= 100.0 + 1e-9);
        let total: f64 = weights.values().sum();
        if total <= 0.0 {
            prop_assert_eq!(overall.weighting, Weighting::Unweighted);
        }
    }

    #[test]
    fn gaps_are_sorted_and_below_threshold(
        scores in scores(),
        threshold in 0.0..=100.0f64,
    ) {
        let gaps = compute_gaps(&scores, threshold);
        let below = scores.values().filter(|s| **s < threshold).count();
        prop_assert_eq!(gaps.len(), below);
        for gap in &gaps {
            prop_assert!(gap.gap > 0.0);
            prop_assert!(gap.score < threshold);
        }
        for pair in gaps.windows(2) {
            prop_assert!(pair[0].gap >= pair[1].gap);
            if pair[0].gap == pair[1].gap {
                prop_assert!(pair[0].characteristic_id < pair[1].characteristic_id);
            }
        }
    }

    #[test]
    fn interpretation_bands_partition_the_scale(score in any::<f64>()) {
        let level = interpret(score).level;
        let expected = if score >= 80.0 {
            QualityLevel::Strong
        } else if score >= 60.0 {
            QualityLevel::Moderate
        } else {
            QualityLevel::Weak
        };
        prop_assert_eq!(level, expected);
    }
}

#[test]
fn documented_examples() {
    // Renormalized weights: 80 and 60 at 30/20 give 72
    let scores: IndexMap<String, f64> =
        [("a".to_string(), 80.0), ("b".to_string(), 60.0)].into_iter().collect();
    let weights: IndexMap<String, f64> =
        [("a".to_string(), 30.0), ("b".to_string(), 20.0)].into_iter().collect();
    let overall = aggregate_overall(&scores, &weights);
    assert!((overall.score - 72.0).abs() < 1e-9);
    assert!(overall.weighting.is_renormalized());

    // Gap ranking
    let scores: IndexMap<String, f64> = [("A", 50.0), ("B", 70.0), ("C", 40.0)]
        .into_iter()
        .map(|(id, s)| (id.to_string(), s))
        .collect();
    let gaps = compute_gaps(&scores, 60.0);
    assert_eq!(gaps.len(), 2);
    assert_eq!(gaps[0].characteristic_id, "C");
    assert!((gaps[0].gap - 20.0).abs() < 1e-9);
    assert_eq!(gaps[1].characteristic_id, "A");
    assert!((gaps[1].gap - 10.0).abs() < 1e-9);

    // Targets
    assert!((normalize(50.0, 0.0, 100.0, Direction::Lower, Some(50.0)) - 100.0).abs() < 1e-9);
    assert!((normalize(100.0, 0.0, 100.0, Direction::Higher, Some(100.0)) - 100.0).abs() < 1e-9);
    assert!((normalize(0.0, 0.0, 100.0, Direction::Lower, Some(10.0)) - 100.0).abs() < 1e-9);

    // Empty aggregation
    let empty_values: IndexMap<String, f64> = IndexMap::new();
    let empty_defs: IndexMap<String, MetricDefinition> = IndexMap::new();
    assert_eq!(aggregate_sub_characteristic(&empty_values, &empty_defs), 0.0);
}
