//! Quality scorer.
//!
//! Runs the scoring engine over one [`AnalysisInput`] and assembles the
//! complete [`QualityReport`]: characteristic scores, the weighted overall
//! score, interpretations, gaps and recommendations.

use crate::model::{
    catalog, AnalysisInput, Direction, MetricDefinition, MetricKey, ScenarioInfo,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::aggregate::{
    aggregate_characteristic, aggregate_overall, aggregate_sub_characteristic, Weighting,
};
use super::gaps::{compute_gaps, Gap, DEFAULT_GAP_THRESHOLD};
use super::interpret::{interpret, Interpretation};
use super::normalize::normalize_metric;

/// Quality scoring engine version
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Message rendered when no characteristic falls below the gap threshold.
pub const ALL_CLEAR_MESSAGE: &str = "All quality dimensions meet the expected thresholds. \
     Continue monitoring and maintaining quality standards.";

/// Tunables for a scoring run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringOptions {
    /// Characteristics scoring below this value are reported as gaps
    pub gap_threshold: f64,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            gap_threshold: DEFAULT_GAP_THRESHOLD,
        }
    }
}

/// Score detail of one metric
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricScore {
    /// Value key the measurement was read from
    pub key: String,
    pub name: String,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
    /// Measured value (`None` when missing or not finite)
    pub value: Option<f64>,
    /// Normalized 0-100 score (`None` when no value)
    pub normalized: Option<f64>,
}

/// Score detail of one sub-characteristic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubCharacteristicBreakdown {
    pub id: String,
    pub name: String,
    /// Mean of the resolved metric scores (`None` when no metric had a value)
    pub score: Option<f64>,
    pub metrics: Vec<MetricScore>,
}

/// Score detail of one selected characteristic
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacteristicBreakdown {
    pub id: String,
    pub name: String,
    pub score: f64,
    /// Weight percentage (0 when unweighted)
    pub weight: f64,
    /// Contribution `score * weight / 100`
    pub weighted: f64,
    pub interpretation: Interpretation,
    pub sub_characteristics: Vec<SubCharacteristicBreakdown>,
}

/// Improvement advice for one gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub characteristic_id: String,
    /// Gap size the recommendation addresses
    pub gap: f64,
    pub message: String,
}

impl Recommendation {
    /// Build the advice for a characteristic below threshold.
    #[must_use]
    pub fn for_gap(gap: &Gap) -> Self {
        let message = match gap.characteristic_id.as_str() {
            "security" => "Enhance Security. Implement robust authentication, encrypt data in \
                 transit and at rest, and ensure regular security updates."
                .to_string(),
            "performanceEfficiency" => "Optimize Performance Efficiency. Implement efficient \
                 algorithms, reduce resource usage, and optimize data processing."
                .to_string(),
            "reliability" => "Improve Reliability. Increase system uptime, implement fault \
                 tolerance mechanisms, and reduce recovery time."
                .to_string(),
            other => format!(
                "Focus on improving {} to meet quality standards.",
                catalog::display_name(other)
            ),
        };
        Self {
            characteristic_id: gap.characteristic_id.clone(),
            gap: gap.gap,
            message,
        }
    }
}

/// Complete result of one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct QualityReport {
    /// Scoring engine version
    pub scoring_engine_version: String,
    #[serde(default, skip_serializing_if = "ScenarioInfo::is_empty")]
    pub scenario: ScenarioInfo,
    /// Score (0-100) per selected characteristic, in selection order
    pub characteristic_scores: IndexMap<String, f64>,
    /// Weighted overall score (0-100)
    pub overall_score: f64,
    /// Formula used for the overall score
    pub weighting: Weighting,
    pub interpretation: Interpretation,
    /// Gap threshold the report was computed with
    pub gap_threshold: f64,
    /// Characteristics below threshold, largest gap first
    pub gaps: Vec<Gap>,
    pub breakdown: Vec<CharacteristicBreakdown>,
    /// One entry per gap, same order
    pub recommendations: Vec<Recommendation>,
}

impl QualityReport {
    /// Breakdown entry for a characteristic
    #[must_use]
    pub fn characteristic(&self, id: &str) -> Option<&CharacteristicBreakdown> {
        self.breakdown.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn has_gaps(&self) -> bool {
        !self.gaps.is_empty()
    }
}

/// Quality scorer for analysis inputs
#[derive(Debug, Clone, Default)]
pub struct QualityScorer {
    options: ScoringOptions,
}

impl QualityScorer {
    /// Create a new quality scorer with the given options
    #[must_use]
    pub const fn new(options: ScoringOptions) -> Self {
        Self { options }
    }

    /// Override the gap threshold
    #[must_use]
    pub const fn with_gap_threshold(mut self, threshold: f64) -> Self {
        self.options.gap_threshold = threshold;
        self
    }

    #[must_use]
    pub const fn options(&self) -> &ScoringOptions {
        &self.options
    }

    /// Score an analysis input
    pub fn score(&self, input: &AnalysisInput) -> QualityReport {
        let selected = input.selected();
        tracing::debug!("Scoring {} characteristics", selected.len());

        let mut characteristic_scores = IndexMap::new();
        let mut details = Vec::with_capacity(selected.len());

        for characteristic_id in &selected {
            let (score, subs) = score_characteristic(input, characteristic_id);
            tracing::debug!("{}: {:.2}", characteristic_id, score);
            characteristic_scores.insert((*characteristic_id).to_string(), score);
            details.push(subs);
        }

        let overall = aggregate_overall(&characteristic_scores, &input.weights);
        let gaps = compute_gaps(&characteristic_scores, self.options.gap_threshold);
        let recommendations = gaps.iter().map(Recommendation::for_gap).collect();

        let breakdown = selected
            .iter()
            .zip(details)
            .map(|(id, sub_characteristics)| {
                let score = characteristic_scores.get(*id).copied().unwrap_or(0.0);
                let weight = input.weights.get(*id).copied().unwrap_or(0.0);
                CharacteristicBreakdown {
                    id: (*id).to_string(),
                    name: catalog::display_name(id).to_string(),
                    score,
                    weight,
                    weighted: score * weight / 100.0,
                    interpretation: interpret(score),
                    sub_characteristics,
                }
            })
            .collect();

        QualityReport {
            scoring_engine_version: SCORING_ENGINE_VERSION.to_string(),
            scenario: input.scenario.clone(),
            characteristic_scores,
            overall_score: overall.score,
            weighting: overall.weighting,
            interpretation: interpret(overall.score),
            gap_threshold: self.options.gap_threshold,
            gaps,
            breakdown,
            recommendations,
        }
    }
}

/// Score one characteristic and collect its sub-characteristic details.
fn score_characteristic(
    input: &AnalysisInput,
    characteristic_id: &str,
) -> (f64, Vec<SubCharacteristicBreakdown>) {
    let Some(subs) = input.metrics.get(characteristic_id) else {
        tracing::debug!("{} defines no metrics, scoring 0", characteristic_id);
        return (0.0, Vec::new());
    };

    let mut sub_scores: IndexMap<&str, Option<f64>> = IndexMap::new();
    let mut breakdown = Vec::with_capacity(subs.len());

    for (sub_id, slot) in subs {
        let mut values: IndexMap<usize, f64> = IndexMap::new();
        let mut definitions: IndexMap<usize, MetricDefinition> = IndexMap::new();
        let mut metrics = Vec::with_capacity(slot.len());

        for (index, definition) in slot.as_slice().iter().enumerate() {
            let key = MetricKey::new(characteristic_id, sub_id.as_str(), index);
            let value = input.value_for(&key).filter(|v| v.is_finite());
            if let Some(value) = value {
                values.insert(index, value);
                definitions.insert(index, definition.clone());
            }
            metrics.push(MetricScore {
                key: key.value_key(),
                name: definition.name.clone(),
                unit: definition.unit.clone(),
                code: definition.code.clone(),
                direction: definition.direction,
                target: definition.target,
                value,
                normalized: value.map(|v| normalize_metric(v, definition)),
            });
        }

        let score = if values.is_empty() {
            None
        } else {
            Some(aggregate_sub_characteristic(&values, &definitions))
        };
        sub_scores.insert(sub_id.as_str(), score);
        breakdown.push(SubCharacteristicBreakdown {
            id: sub_id.clone(),
            name: catalog::sub_display_name(characteristic_id, sub_id).to_string(),
            score,
            metrics,
        });
    }

    (aggregate_characteristic(&sub_scores), breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CaseStudy, MetricRange, MetricSlot};
    use crate::quality::QualityLevel;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn single_metric_input(characteristic: &str, value: Option<f64>) -> AnalysisInput {
        let mut input = AnalysisInput::default();
        let metric =
            MetricDefinition::new("Score", "score", MetricRange::new(0.0, 100.0), Direction::Higher);
        input.metrics.insert(
            characteristic.to_string(),
            [("sub".to_string(), MetricSlot::One(metric))]
                .into_iter()
                .collect(),
        );
        if let Some(value) = value {
            input.values.insert(format!("{characteristic}_sub"), value);
        }
        input.weights.insert(characteristic.to_string(), 100.0);
        input
    }

    #[test]
    fn test_iot_case_study_scores() {
        let report = QualityScorer::default().score(&CaseStudy::IotSystem.to_input());

        let perf = report.characteristic_scores["performanceEfficiency"];
        assert!(approx(perf, (100.0 + 62.5 + 80.0) / 3.0));
        assert!(approx(report.characteristic_scores["compatibility"], 85.0));
        let reliability = (98.0 / 99.9 * 100.0 + 100.0 / 3.0) / 2.0;
        assert!(approx(report.characteristic_scores["reliability"], reliability));
        assert!(approx(report.characteristic_scores["security"], 71.5));

        let expected = perf * 0.3 + 85.0 * 0.2 + reliability * 0.2 + 71.5 * 0.3;
        assert!(approx(report.overall_score, expected));
        assert_eq!(report.weighting, Weighting::Exact);
        assert_eq!(report.interpretation.level, QualityLevel::Moderate);
        assert!(report.gaps.is_empty());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_characteristic_without_metrics_scores_zero() {
        let mut input = AnalysisInput::default();
        input.selected_characteristics = vec!["usability".to_string()];
        input.weights.insert("usability".to_string(), 100.0);

        let report = QualityScorer::default().score(&input);
        assert!(approx(report.characteristic_scores["usability"], 0.0));
        assert_eq!(report.gaps.len(), 1);
        assert_eq!(
            report.recommendations[0].message,
            "Focus on improving Usability to meet quality standards."
        );
    }

    #[test]
    fn test_missing_value_leaves_sub_score_absent() {
        let report = QualityScorer::default().score(&single_metric_input("security", None));
        let security = report.characteristic("security").unwrap();
        assert_eq!(security.sub_characteristics[0].score, None);
        assert_eq!(security.sub_characteristics[0].metrics[0].normalized, None);
        assert!(approx(security.score, 0.0));
    }

    #[test]
    fn test_specific_recommendation_texts() {
        let report = QualityScorer::default().score(&single_metric_input("security", Some(20.0)));
        assert_eq!(report.recommendations.len(), 1);
        assert!(report.recommendations[0]
            .message
            .starts_with("Enhance Security."));

        let report =
            QualityScorer::default().score(&single_metric_input("reliability", Some(20.0)));
        assert!(report.recommendations[0]
            .message
            .starts_with("Improve Reliability."));

        let report = QualityScorer::default()
            .score(&single_metric_input("performanceEfficiency", Some(20.0)));
        assert!(report.recommendations[0]
            .message
            .starts_with("Optimize Performance Efficiency."));
    }

    #[test]
    fn test_gap_threshold_option() {
        let input = single_metric_input("security", Some(70.0));
        assert!(!QualityScorer::default().score(&input).has_gaps());

        let report = QualityScorer::default().with_gap_threshold(75.0).score(&input);
        assert_eq!(report.gaps.len(), 1);
        assert!(approx(report.gaps[0].gap, 5.0));
        assert!(approx(report.gap_threshold, 75.0));
    }

    #[test]
    fn test_breakdown_weighted_contribution() {
        let mut input = single_metric_input("security", Some(80.0));
        input.weights.insert("security".to_string(), 40.0);
        let report = QualityScorer::default().score(&input);

        let security = report.characteristic("security").unwrap();
        assert!(approx(security.weighted, 32.0));
        assert_eq!(security.name, "Security");
        assert_eq!(
            report.weighting,
            Weighting::Renormalized { total_weight: 40.0 }
        );
        assert!(approx(report.overall_score, 80.0));
    }

    #[test]
    fn test_scoring_engine_version() {
        assert_eq!(SCORING_ENGINE_VERSION, "1.0");
    }
}
