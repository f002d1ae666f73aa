//! End-to-end scoring of the predefined case studies.

use quality_eval::model::CaseStudy;
use quality_eval::{
    AnalysisInput, InputValidator, QualityLevel, QualityScorer, Validatable, Weighting,
};

const EPSILON: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_iot_characteristic_scores() {
    let report = QualityScorer::default().score(&CaseStudy::IotSystem.to_input());

    let scores = &report.characteristic_scores;
    assert_close(scores["performanceEfficiency"], (100.0 + 62.5 + 80.0) / 3.0);
    assert_close(scores["compatibility"], 85.0);
    assert_close(scores["reliability"], (98.0 / 99.9 * 100.0 + 100.0 / 3.0) / 2.0);
    assert_close(scores["security"], 71.5);
}

#[test]
fn test_iot_overall_assessment() {
    let report = QualityScorer::default().score(&CaseStudy::IotSystem.to_input());

    let expected = [
        ((100.0 + 62.5 + 80.0) / 3.0, 30.0),
        (85.0, 20.0),
        ((98.0 / 99.9 * 100.0 + 100.0 / 3.0) / 2.0, 20.0),
        (71.5, 30.0),
    ]
    .iter()
    .map(|(score, weight)| score * weight / 100.0)
    .sum::<f64>();

    assert_close(report.overall_score, expected);
    assert!((report.overall_score - 75.84).abs() < 0.01);
    assert_eq!(report.weighting, Weighting::Exact);
    assert_eq!(report.interpretation.level, QualityLevel::Moderate);
    assert_eq!(report.interpretation.label, "Good Quality");
    assert!(report.gaps.is_empty());
    assert!(report.recommendations.is_empty());
}

#[test]
fn test_iot_input_is_valid() {
    let input = CaseStudy::IotSystem.to_input();
    assert!(InputValidator::new(&input).validate().is_empty());
}

#[test]
fn test_studies_without_values_score_zero() {
    for study in [CaseStudy::Healthcare, CaseStudy::MobileApp] {
        let input = study.to_input();
        let report = QualityScorer::default().score(&input);

        assert_close(report.overall_score, 0.0);
        assert_eq!(report.weighting, Weighting::Exact);
        assert_eq!(report.interpretation.level, QualityLevel::Weak);
        assert_eq!(report.gaps.len(), input.selected_characteristics.len());
        assert!(!InputValidator::new(&input).validate().is_empty());
    }
}

#[test]
fn test_tied_gaps_are_ordered_by_id() {
    let report = QualityScorer::default().score(&CaseStudy::Healthcare.to_input());
    let ids: Vec<&str> = report
        .gaps
        .iter()
        .map(|g| g.characteristic_id.as_str())
        .collect();
    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(ids, sorted);
}

#[test]
fn test_from_name_variants() {
    for name in ["iotSystem", "iot-system", "IOT_SYSTEM", "iotsystem"] {
        assert_eq!(CaseStudy::from_name(name).unwrap(), CaseStudy::IotSystem);
    }
    assert_eq!(
        CaseStudy::from_name("mobile-app").unwrap(),
        CaseStudy::MobileApp
    );
    let err = CaseStudy::from_name("spaceship").unwrap_err();
    let cause = std::error::Error::source(&err).map(ToString::to_string);
    assert!(cause.unwrap().contains("spaceship"));
}

#[test]
fn test_exported_yaml_scores_identically() {
    let input = CaseStudy::IotSystem.to_input();
    let yaml = serde_yaml_ng::to_string(&input).unwrap();
    let reparsed = AnalysisInput::parse_str(&yaml).unwrap();
    assert_eq!(reparsed, input);

    let scorer = QualityScorer::default();
    assert_close(
        scorer.score(&reparsed).overall_score,
        scorer.score(&input).overall_score,
    );
}
