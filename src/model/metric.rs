//! Metric definitions and value keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which end of a metric's range is desirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Larger measurements are better (coverage, throughput, uptime)
    Higher,
    /// Smaller measurements are better (response time, failure rate)
    Lower,
}

impl Direction {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Higher => "higher",
            Self::Lower => "lower",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric bounds of a metric. Callers are expected to keep `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }
}

/// Immutable descriptor of one measurable indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDefinition {
    /// Display name
    pub name: String,
    /// Unit of measurement (ms, ratio, %, users, ...)
    #[serde(default)]
    pub unit: String,
    /// Value bounds
    pub range: MetricRange,
    /// Desirable end of the range
    pub direction: Direction,
    /// Reference value used instead of the range bounds when positive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    /// ISO/IEC 25023 measure identifier, e.g. `PTb-1-G`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MetricDefinition {
    /// Create a metric definition without target, code or description.
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        range: MetricRange,
        direction: Direction,
    ) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            range,
            direction,
            target: None,
            code: None,
            description: None,
        }
    }

    /// Set the reference target.
    #[must_use]
    pub fn with_target(mut self, target: f64) -> Self {
        self.target = Some(target);
        self
    }

    /// Target that actually takes part in normalization (positive only).
    #[must_use]
    pub fn effective_target(&self) -> Option<f64> {
        self.target.filter(|t| *t > 0.0)
    }
}

/// One or many metrics attached to a sub-characteristic.
///
/// Input documents may list a single metric object or an array of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricSlot {
    One(MetricDefinition),
    Many(Vec<MetricDefinition>),
}

impl MetricSlot {
    #[must_use]
    pub fn as_slice(&self) -> &[MetricDefinition] {
        match self {
            Self::One(metric) => std::slice::from_ref(metric),
            Self::Many(metrics) => metrics,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<MetricDefinition> for MetricSlot {
    fn from(metric: MetricDefinition) -> Self {
        Self::One(metric)
    }
}

impl From<Vec<MetricDefinition>> for MetricSlot {
    fn from(metrics: Vec<MetricDefinition>) -> Self {
        Self::Many(metrics)
    }
}

/// Composite key locating one metric value.
///
/// A sub-characteristic may carry several metrics, so the ordinal index
/// within that sub-characteristic is part of the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MetricKey {
    pub characteristic: String,
    pub sub_characteristic: String,
    pub index: usize,
}

impl MetricKey {
    pub fn new(
        characteristic: impl Into<String>,
        sub_characteristic: impl Into<String>,
        index: usize,
    ) -> Self {
        Self {
            characteristic: characteristic.into(),
            sub_characteristic: sub_characteristic.into(),
            index,
        }
    }

    /// Key under which the measured value is stored in input documents.
    ///
    /// `{characteristic}_{sub}` for the first metric, `{characteristic}_{sub}_{index}`
    /// for the second and later ones.
    #[must_use]
    pub fn value_key(&self) -> String {
        if self.index == 0 {
            format!("{}_{}", self.characteristic, self.sub_characteristic)
        } else {
            format!(
                "{}_{}_{}",
                self.characteristic, self.sub_characteristic, self.index
            )
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_key_first_metric_has_no_suffix() {
        let key = MetricKey::new("security", "confidentiality", 0);
        assert_eq!(key.value_key(), "security_confidentiality");
    }

    #[test]
    fn test_value_key_later_metrics_are_suffixed() {
        let key = MetricKey::new("security", "confidentiality", 2);
        assert_eq!(key.value_key(), "security_confidentiality_2");
        assert_eq!(key.to_string(), "security_confidentiality_2");
    }

    #[test]
    fn test_effective_target_ignores_non_positive() {
        let base = MetricDefinition::new("m", "ms", MetricRange::new(0.0, 10.0), Direction::Lower);
        assert_eq!(base.effective_target(), None);
        assert_eq!(base.clone().with_target(0.0).effective_target(), None);
        assert_eq!(base.clone().with_target(-1.0).effective_target(), None);
        assert_eq!(base.with_target(2.5).effective_target(), Some(2.5));
    }

    #[test]
    fn test_metric_slot_accepts_object_or_array() {
        let one: MetricSlot = serde_json::from_str(
            r#"{"name":"Uptime","unit":"%","range":{"min":0,"max":100},"direction":"higher"}"#,
        )
        .unwrap();
        assert_eq!(one.len(), 1);

        let many: MetricSlot = serde_json::from_str(
            r#"[
                {"name":"A","range":{"min":0,"max":1},"direction":"higher","target":1},
                {"name":"B","range":{"min":0,"max":10},"direction":"lower"}
            ]"#,
        )
        .unwrap();
        assert_eq!(many.len(), 2);
        assert_eq!(many.as_slice()[1].direction, Direction::Lower);
    }

    #[test]
    fn test_range_well_formed() {
        assert!(MetricRange::new(0.0, 1.0).is_well_formed());
        assert!(!MetricRange::new(1.0, 1.0).is_well_formed());
        assert!(!MetricRange::new(0.0, f64::NAN).is_well_formed());
    }
}
