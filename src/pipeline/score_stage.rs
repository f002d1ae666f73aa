//! Validation and scoring stage.

use crate::config::{AnalyzeConfig, ConfigError, InputValidator, Validatable};
use crate::model::AnalysisInput;
use crate::quality::{QualityReport, QualityScorer};

/// Validate an analysis input with the configured weight tolerance.
///
/// Returns every problem found; an empty list means the input is valid.
pub fn validate_input(input: &AnalysisInput, weight_tolerance: f64) -> Vec<ConfigError> {
    let errors = InputValidator::new(input)
        .with_weight_tolerance(weight_tolerance)
        .validate();
    for error in &errors {
        tracing::debug!("validation: {}", error);
    }
    errors
}

/// Run the scoring engine over an input.
pub fn score_input(config: &AnalyzeConfig, input: &AnalysisInput) -> QualityReport {
    let quiet = config.behavior.quiet;
    if !quiet {
        tracing::info!("Scoring {} characteristics...", input.selected().len());
    }

    let report = QualityScorer::new(config.scoring.scoring_options()).score(input);

    if report.weighting.is_renormalized() {
        tracing::warn!(
            "Characteristic weights total {:.2}%, overall score was renormalized",
            input.total_weight()
        );
    }
    if !quiet {
        tracing::info!(
            "Overall score {:.1} ({}), {} gap(s)",
            report.overall_score,
            report.interpretation.level,
            report.gaps.len()
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::CaseStudy;
    use std::path::PathBuf;

    #[test]
    fn test_iot_case_study_is_valid() {
        let input = CaseStudy::IotSystem.to_input();
        assert!(validate_input(&input, 0.01).is_empty());
    }

    #[test]
    fn test_weight_tolerance_is_applied() {
        let mut input = CaseStudy::IotSystem.to_input();
        input.weights.insert("security".to_string(), 30.5);
        assert!(!validate_input(&input, 0.01).is_empty());
        assert!(validate_input(&input, 1.0).is_empty());
    }

    #[test]
    fn test_score_input_uses_configured_threshold() {
        let app = AppConfig::builder().gap_threshold(80.0).quiet(true).build();
        let config = AnalyzeConfig::from_app_config(PathBuf::from("iot.yaml"), &app);
        let report = score_input(&config, &CaseStudy::IotSystem.to_input());
        assert!((report.gap_threshold - 80.0).abs() < f64::EPSILON);
        assert!(report.has_gaps());
    }
}
