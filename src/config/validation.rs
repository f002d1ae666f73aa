//! Validation for configuration and analysis inputs.
//!
//! The scoring engine accepts any input; these checks run before it so that
//! malformed documents are reported instead of silently scored.

use super::defaults::DEFAULT_WEIGHT_TOLERANCE;
use super::types::{AppConfig, BehaviorConfig, OutputConfig, ScoringConfig};
use crate::model::AnalysisInput;
use std::collections::HashSet;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration and input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Configuration Validation
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.scoring.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !(0.0..=100.0).contains(&self.gap_threshold) {
            errors.push(ConfigError::new(
                "scoring.gap_threshold",
                format!(
                    "Gap threshold must be between 0 and 100, got {}",
                    self.gap_threshold
                ),
            ));
        }
        if !self.weight_tolerance.is_finite() || self.weight_tolerance < 0.0 {
            errors.push(ConfigError::new(
                "scoring.weight_tolerance",
                format!(
                    "Weight tolerance must be a non-negative number, got {}",
                    self.weight_tolerance
                ),
            ));
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(min_score) = self.min_score {
            if !(0.0..=100.0).contains(&min_score) {
                errors.push(ConfigError::new(
                    "behavior.min_score",
                    format!("Minimum score must be between 0 and 100, got {min_score}"),
                ));
            }
        }
        errors
    }
}

// ============================================================================
// Analysis Input Validation
// ============================================================================

/// Validation of an analysis input with a configurable weight tolerance.
#[derive(Debug, Clone, Copy)]
pub struct InputValidator<'a> {
    input: &'a AnalysisInput,
    weight_tolerance: f64,
}

impl<'a> InputValidator<'a> {
    #[must_use]
    pub const fn new(input: &'a AnalysisInput) -> Self {
        Self {
            input,
            weight_tolerance: DEFAULT_WEIGHT_TOLERANCE,
        }
    }

    #[must_use]
    pub const fn with_weight_tolerance(mut self, tolerance: f64) -> Self {
        self.weight_tolerance = tolerance;
        self
    }

    fn validate_selection(&self, errors: &mut Vec<ConfigError>) {
        let selected = self.input.selected();
        if selected.is_empty() {
            errors.push(ConfigError::new(
                "selected_characteristics",
                "At least one quality characteristic must be selected",
            ));
        }

        let mut seen = HashSet::new();
        for id in &selected {
            if !seen.insert(*id) {
                errors.push(ConfigError::new(
                    "selected_characteristics",
                    format!("Characteristic '{id}' is selected more than once"),
                ));
            }
        }
    }

    fn validate_weights(&self, errors: &mut Vec<ConfigError>) {
        let selected: HashSet<&str> = self.input.selected().into_iter().collect();

        for (id, weight) in &self.input.weights {
            let field = format!("weights.{id}");
            if !weight.is_finite() || *weight < 0.0 {
                errors.push(ConfigError::new(
                    field.as_str(),
                    format!("Weight must be a non-negative number, got {weight}"),
                ));
            }
            if !selected.contains(id.as_str()) {
                errors.push(ConfigError::new(
                    field,
                    format!("Weight given for unselected characteristic '{id}'"),
                ));
            }
        }

        let total = self.input.total_weight();
        if (total - 100.0).abs() > self.weight_tolerance {
            errors.push(ConfigError::new(
                "weights",
                format!("Weights must sum to 100%, got {total:.2}%"),
            ));
        }
    }

    fn validate_metrics(&self, errors: &mut Vec<ConfigError>) {
        for characteristic in self.input.selected() {
            let Some(subs) = self.input.metrics.get(characteristic) else {
                errors.push(ConfigError::new(
                    format!("metrics.{characteristic}"),
                    "No metrics defined for selected characteristic",
                ));
                continue;
            };
            if subs.is_empty() {
                errors.push(ConfigError::new(
                    format!("metrics.{characteristic}"),
                    "At least one sub-characteristic must define a metric",
                ));
            }
            for (sub_id, slot) in subs {
                if slot.is_empty() {
                    errors.push(ConfigError::new(
                        format!("metrics.{characteristic}.{sub_id}"),
                        "At least one metric must be defined",
                    ));
                }
            }
        }

        for entry in self.input.metric_entries() {
            let key = entry.key();
            let metric = entry.definition;
            if !metric.range.is_well_formed() {
                errors.push(ConfigError::new(
                    format!("metrics.{key}.range"),
                    format!(
                        "Range must be finite with min < max, got {}..{}",
                        metric.range.min, metric.range.max
                    ),
                ));
            }
            if let Some(target) = metric.target {
                if !target.is_finite() {
                    errors.push(ConfigError::new(
                        format!("metrics.{key}.target"),
                        format!("Target must be a finite number, got {target}"),
                    ));
                }
            }
        }
    }

    fn validate_values(&self, errors: &mut Vec<ConfigError>) {
        let expected = self.input.expected_value_keys();

        for key in &expected {
            match self.input.values.get(key) {
                None => errors.push(ConfigError::new(
                    format!("values.{key}"),
                    "Missing value for metric",
                )),
                Some(value) if !value.is_finite() => errors.push(ConfigError::new(
                    format!("values.{key}"),
                    format!("Value must be a finite number, got {value}"),
                )),
                Some(_) => {}
            }
        }

        let expected: HashSet<&str> = expected.iter().map(String::as_str).collect();
        for key in self.input.values.keys() {
            if !expected.contains(key.as_str()) {
                errors.push(ConfigError::new(
                    format!("values.{key}"),
                    "Value does not belong to any selected metric",
                ));
            }
        }
    }
}

impl Validatable for InputValidator<'_> {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        self.validate_selection(&mut errors);
        self.validate_weights(&mut errors);
        self.validate_metrics(&mut errors);
        self.validate_values(&mut errors);
        errors
    }
}

impl Validatable for AnalysisInput {
    fn validate(&self) -> Vec<ConfigError> {
        InputValidator::new(self).validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CaseStudy;
    use crate::reports::ReportFormat;
    use std::path::PathBuf;

    fn messages(errors: &[ConfigError]) -> Vec<String> {
        errors.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_app_config_validation() {
        assert!(AppConfig::default().is_valid());

        let mut invalid = AppConfig::default();
        invalid.scoring.gap_threshold = 120.0;
        invalid.behavior.min_score = Some(-1.0);
        let errors = invalid.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "scoring.gap_threshold");
        assert_eq!(errors[1].field, "behavior.min_score");
    }

    #[test]
    fn test_scoring_config_rejects_negative_tolerance() {
        let config = ScoringConfig {
            weight_tolerance: -0.5,
            ..ScoringConfig::default()
        };
        assert!(!config.is_valid());
    }

    #[test]
    fn test_output_config_missing_parent_dir() {
        let config = OutputConfig {
            format: ReportFormat::Json,
            file: Some(PathBuf::from("/nonexistent-dir-for-tests/report.json")),
            ..OutputConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "output.file");
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::new("test_field", "test error message");
        assert_eq!(error.to_string(), "test_field: test error message");
    }

    #[test]
    fn test_iot_case_study_is_valid() {
        let input = CaseStudy::IotSystem.to_input();
        assert!(input.is_valid(), "{:?}", messages(&input.validate()));
    }

    #[test]
    fn test_case_study_without_values_reports_missing_values() {
        let input = CaseStudy::MobileApp.to_input();
        let errors = input.validate();
        assert!(!errors.is_empty());
        assert!(errors
            .iter()
            .all(|e| e.field.starts_with("values.") && e.message == "Missing value for metric"));
    }

    #[test]
    fn test_weights_must_sum_to_one_hundred() {
        let mut input = CaseStudy::IotSystem.to_input();
        input.weights.insert("security".to_string(), 20.0);
        let errors = input.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "weights");
        assert!(errors[0].message.contains("90.00"));
    }

    #[test]
    fn test_weight_tolerance_is_configurable() {
        let mut input = CaseStudy::IotSystem.to_input();
        input.weights.insert("security".to_string(), 29.995);
        assert!(input.is_valid());
        assert!(!InputValidator::new(&input)
            .with_weight_tolerance(0.001)
            .is_valid());
    }

    #[test]
    fn test_unselected_and_negative_weights() {
        let mut input = CaseStudy::IotSystem.to_input();
        input.weights.insert("usability".to_string(), 0.0);
        input.weights.insert("compatibility".to_string(), -20.0);
        input.weights.insert("security".to_string(), 70.0);
        let fields: Vec<String> = input.validate().into_iter().map(|e| e.field).collect();
        assert!(fields.contains(&"weights.usability".to_string()));
        assert!(fields.contains(&"weights.compatibility".to_string()));
    }

    #[test]
    fn test_empty_selection_is_rejected() {
        let errors = AnalysisInput::default().validate();
        assert!(errors
            .iter()
            .any(|e| e.field == "selected_characteristics"));
    }

    #[test]
    fn test_malformed_metric_and_stray_value() {
        let mut input = CaseStudy::IotSystem.to_input();
        if let Some(crate::model::MetricSlot::One(metric)) = input
            .metrics
            .get_mut("security")
            .and_then(|subs| subs.get_mut("integrity"))
        {
            metric.range = crate::model::MetricRange::new(10.0, 10.0);
        }
        input.values.insert("security_integrity_1".to_string(), 5.0);
        input
            .values
            .insert("compatibility_interoperability".to_string(), f64::NAN);

        let fields: Vec<String> = input.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "metrics.security_integrity.range".to_string(),
                "values.compatibility_interoperability".to_string(),
                "values.security_integrity_1".to_string(),
            ]
        );
    }

    #[test]
    fn test_selected_characteristic_without_metrics() {
        let mut input = CaseStudy::IotSystem.to_input();
        input.metrics.shift_remove("compatibility");
        input.values.shift_remove("compatibility_interoperability");
        let errors = input.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "metrics.compatibility");
    }
}
