//! Predefined evaluation scenarios.

use super::catalog::default_metric_set;
use super::input::{AnalysisInput, MetricMap, ScenarioInfo};
use super::metric::{Direction, MetricDefinition, MetricRange, MetricSlot};
use crate::error::{QualityEvalError, Result};
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// A ready-made scenario with selected characteristics and weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStudy {
    IotSystem,
    Healthcare,
    MobileApp,
}

/// Metric of the IoT study together with its example measurement.
struct ExampleMetric {
    characteristic: &'static str,
    sub_characteristic: &'static str,
    name: &'static str,
    unit: &'static str,
    range: (f64, f64),
    direction: Direction,
    target: f64,
    example_value: f64,
}

const IOT_METRICS: &[ExampleMetric] = &[
    ExampleMetric {
        characteristic: "performanceEfficiency",
        sub_characteristic: "timeBehaviour",
        name: "Response time",
        unit: "ms",
        range: (0.0, 1000.0),
        direction: Direction::Lower,
        target: 100.0,
        example_value: 1.0,
    },
    ExampleMetric {
        characteristic: "performanceEfficiency",
        sub_characteristic: "resourceUtilization",
        name: "CPU/Memory usage",
        unit: "%",
        range: (0.0, 100.0),
        direction: Direction::Lower,
        target: 50.0,
        example_value: 80.0,
    },
    ExampleMetric {
        characteristic: "performanceEfficiency",
        sub_characteristic: "capacity",
        name: "Concurrent users",
        unit: "users",
        range: (0.0, 1000.0),
        direction: Direction::Higher,
        target: 1000.0,
        example_value: 800.0,
    },
    ExampleMetric {
        characteristic: "reliability",
        sub_characteristic: "availability",
        name: "Uptime percentage",
        unit: "%",
        range: (0.0, 100.0),
        direction: Direction::Higher,
        target: 99.9,
        example_value: 98.0,
    },
    ExampleMetric {
        characteristic: "reliability",
        sub_characteristic: "recoverability",
        name: "Recovery time",
        unit: "seconds",
        range: (0.0, 100.0),
        direction: Direction::Lower,
        target: 10.0,
        example_value: 30.0,
    },
    ExampleMetric {
        characteristic: "compatibility",
        sub_characteristic: "interoperability",
        name: "Protocol compatibility",
        unit: "score",
        range: (0.0, 100.0),
        direction: Direction::Higher,
        target: 100.0,
        example_value: 85.0,
    },
    ExampleMetric {
        characteristic: "security",
        sub_characteristic: "confidentiality",
        name: "Encryption strength",
        unit: "score",
        range: (0.0, 100.0),
        direction: Direction::Higher,
        target: 100.0,
        example_value: 75.0,
    },
    ExampleMetric {
        characteristic: "security",
        sub_characteristic: "integrity",
        name: "Data integrity score",
        unit: "score",
        range: (0.0, 100.0),
        direction: Direction::Higher,
        target: 100.0,
        example_value: 68.0,
    },
];

impl CaseStudy {
    /// All predefined case studies.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::IotSystem, Self::Healthcare, Self::MobileApp]
    }

    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::IotSystem => "iotSystem",
            Self::Healthcare => "healthcare",
            Self::MobileApp => "mobileApp",
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::IotSystem => "IoT System",
            Self::Healthcare => "Safety Critical (Health)",
            Self::MobileApp => "Mobile Application",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::IotSystem => {
                "Internet of Things device with smart-standards and connectivity requirements. \
                 Measure design-centric with resource-constrained and connectivity requirements."
            }
            Self::Healthcare => "Healthcare system where reliability and accuracy are critical.",
            Self::MobileApp => "A consumer-facing mobile app for quick, secure transactions.",
        }
    }

    /// Characteristic weights in selection order.
    #[must_use]
    pub const fn weights(&self) -> &'static [(&'static str, f64)] {
        match self {
            Self::IotSystem => &[
                ("performanceEfficiency", 30.0),
                ("compatibility", 20.0),
                ("reliability", 20.0),
                ("security", 30.0),
            ],
            Self::Healthcare => &[
                ("functionalSuitability", 25.0),
                ("reliability", 25.0),
                ("security", 20.0),
                ("usability", 15.0),
                ("performanceEfficiency", 10.0),
                ("maintainability", 5.0),
            ],
            Self::MobileApp => &[
                ("usability", 30.0),
                ("performanceEfficiency", 25.0),
                ("security", 25.0),
                ("reliability", 15.0),
                ("compatibility", 5.0),
            ],
        }
    }

    /// Resolve a case study by id (case-insensitive, `-`/`_` tolerant).
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|study| study.id().to_lowercase() == wanted)
            .ok_or_else(|| {
                let ids: Vec<&str> = Self::all().iter().map(Self::id).collect();
                QualityEvalError::unknown_case_study(name, &ids)
            })
    }

    /// Build the analysis input this case study describes.
    ///
    /// The IoT study ships its own metrics and example values. The others
    /// get the first catalog measure of every sub-characteristic and no values.
    #[must_use]
    pub fn to_input(&self) -> AnalysisInput {
        let selected: Vec<String> = self
            .weights()
            .iter()
            .map(|(id, _)| (*id).to_string())
            .collect();
        let weights: IndexMap<String, f64> = self
            .weights()
            .iter()
            .map(|(id, weight)| ((*id).to_string(), *weight))
            .collect();

        let (metrics, values) = match self {
            Self::IotSystem => example_metrics(&selected),
            Self::Healthcare | Self::MobileApp => (default_metric_set(&selected), IndexMap::new()),
        };

        AnalysisInput {
            scenario: ScenarioInfo {
                name: Some(self.name().to_string()),
                description: Some(self.description().to_string()),
            },
            selected_characteristics: selected,
            metrics,
            values,
            weights,
        }
    }
}

fn example_metrics(selected: &[String]) -> (MetricMap, IndexMap<String, f64>) {
    let mut metrics: MetricMap = selected
        .iter()
        .map(|id| (id.clone(), IndexMap::new()))
        .collect();
    let mut values = IndexMap::new();

    for example in IOT_METRICS {
        let definition = MetricDefinition::new(
            example.name,
            example.unit,
            MetricRange::new(example.range.0, example.range.1),
            example.direction,
        )
        .with_target(example.target);
        metrics
            .entry(example.characteristic.to_string())
            .or_default()
            .insert(
                example.sub_characteristic.to_string(),
                MetricSlot::One(definition),
            );
        values.insert(
            format!("{}_{}", example.characteristic, example.sub_characteristic),
            example.example_value,
        );
    }
    (metrics, values)
}

impl fmt::Display for CaseStudy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CaseStudy {
    type Err = QualityEvalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}
