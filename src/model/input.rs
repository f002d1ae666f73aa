//! The analysis input document.

use super::metric::{MetricDefinition, MetricKey, MetricSlot};
use crate::error::{ErrorContext, QualityEvalError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metric definitions: characteristic id -> sub-characteristic id -> metrics.
pub type MetricMap = IndexMap<String, IndexMap<String, MetricSlot>>;

/// Optional scenario description carried through to reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioInfo {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ScenarioInfo {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}

/// Everything one analysis needs, built once and never mutated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisInput {
    #[serde(skip_serializing_if = "ScenarioInfo::is_empty")]
    pub scenario: ScenarioInfo,
    /// Characteristic ids chosen for evaluation, in display order
    #[serde(alias = "selectedCharacteristics")]
    pub selected_characteristics: Vec<String>,
    pub metrics: MetricMap,
    /// Measured values keyed by [`MetricKey::value_key`]
    pub values: IndexMap<String, f64>,
    /// Weight percentage per characteristic id
    pub weights: IndexMap<String, f64>,
}

/// One metric definition located by its composite key.
#[derive(Debug, Clone, Copy)]
pub struct MetricEntry<'a> {
    pub characteristic: &'a str,
    pub sub_characteristic: &'a str,
    pub index: usize,
    pub definition: &'a MetricDefinition,
}

impl MetricEntry<'_> {
    #[must_use]
    pub fn key(&self) -> MetricKey {
        MetricKey::new(self.characteristic, self.sub_characteristic, self.index)
    }
}

impl AnalysisInput {
    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parse a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Parse either format; documents starting with `{` are read as JSON.
    pub fn parse_str(content: &str) -> Result<Self> {
        let trimmed = content.trim_start_matches('\u{feff}').trim();
        if trimmed.is_empty() {
            return Err(QualityEvalError::empty_input("input document"));
        }
        if trimmed.starts_with('{') {
            Self::from_json_str(trimmed).context("reading JSON input")
        } else {
            Self::from_yaml_str(trimmed).context("reading YAML input")
        }
    }

    /// Characteristic ids taking part in the analysis.
    ///
    /// Falls back to the characteristics that define metrics, then to the
    /// weighted ones, when no explicit selection is given.
    #[must_use]
    pub fn selected(&self) -> Vec<&str> {
        if !self.selected_characteristics.is_empty() {
            return self
                .selected_characteristics
                .iter()
                .map(String::as_str)
                .collect();
        }
        if !self.metrics.is_empty() {
            return self.metrics.keys().map(String::as_str).collect();
        }
        self.weights.keys().map(String::as_str).collect()
    }

    /// Every metric attached to one characteristic, in document order.
    #[must_use]
    pub fn metrics_of<'a>(&'a self, characteristic: &'a str) -> Vec<MetricEntry<'a>> {
        let Some(subs) = self.metrics.get(characteristic) else {
            return Vec::new();
        };
        subs.iter()
            .flat_map(|(sub_id, slot)| {
                slot.as_slice()
                    .iter()
                    .enumerate()
                    .map(move |(index, definition)| MetricEntry {
                        characteristic,
                        sub_characteristic: sub_id.as_str(),
                        index,
                        definition,
                    })
            })
            .collect()
    }

    /// Every metric of every selected characteristic.
    #[must_use]
    pub fn metric_entries(&self) -> Vec<MetricEntry<'_>> {
        self.selected()
            .into_iter()
            .flat_map(|characteristic| self.metrics_of(characteristic))
            .collect()
    }

    /// Value keys the selected metrics expect, in document order.
    #[must_use]
    pub fn expected_value_keys(&self) -> Vec<String> {
        self.metric_entries()
            .iter()
            .map(|entry| entry.key().value_key())
            .collect()
    }

    /// Measured value for a metric, if any.
    #[must_use]
    pub fn value_for(&self, key: &MetricKey) -> Option<f64> {
        self.values.get(&key.value_key()).copied()
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.weights.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML_INPUT: &str = r"
scenario:
  name: Checkout service
selected_characteristics: [reliability]
metrics:
  reliability:
    availability:
      name: Uptime
      unit: '%'
      range: { min: 0, max: 100 }
      direction: higher
      target: 99.9
    recoverability:
      - name: Recovery time
        unit: s
        range: { min: 0, max: 100 }
        direction: lower
        target: 10
      - name: Restore success
        unit: ratio
        range: { min: 0, max: 1 }
        direction: higher
values:
  reliability_availability: 98
  reliability_recoverability: 30
  reliability_recoverability_1: 0.9
weights:
  reliability: 100
";

    #[test]
    fn test_parse_yaml_input() {
        let input = AnalysisInput::parse_str(YAML_INPUT).unwrap();
        assert_eq!(input.scenario.name.as_deref(), Some("Checkout service"));
        assert_eq!(input.selected(), vec!["reliability"]);
        assert_eq!(
            input.expected_value_keys(),
            vec![
                "reliability_availability",
                "reliability_recoverability",
                "reliability_recoverability_1",
            ]
        );
        let key = MetricKey::new("reliability", "recoverability", 1);
        assert_eq!(input.value_for(&key), Some(0.9));
    }

    #[test]
    fn test_parse_json_input_with_camel_case_selection() {
        let input = AnalysisInput::parse_str(
            r#"{"selectedCharacteristics":["security"],"weights":{"security":100}}"#,
        )
        .unwrap();
        assert_eq!(input.selected(), vec!["security"]);
        assert!((input.total_weight() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_selected_falls_back_to_metrics_then_weights() {
        let mut input = AnalysisInput::default();
        input.weights.insert("usability".into(), 100.0);
        assert_eq!(input.selected(), vec!["usability"]);

        input.metrics.insert("security".into(), IndexMap::new());
        assert_eq!(input.selected(), vec!["security"]);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = AnalysisInput::parse_str("  \n ").unwrap_err();
        assert!(matches!(
            err,
            QualityEvalError::Parse {
                source: crate::error::ParseErrorKind::EmptyInput,
                ..
            }
        ));
    }

    #[test]
    fn test_malformed_json_reports_json_error() {
        let err = AnalysisInput::parse_str("{\"weights\": ").unwrap_err();
        match err {
            QualityEvalError::Parse { context, source } => {
                assert!(context.contains("reading JSON input"));
                assert!(matches!(source, crate::error::ParseErrorKind::InvalidJson(_)));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
