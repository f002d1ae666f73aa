//! Score aggregation: metrics -> sub-characteristics -> characteristics -> overall.

use super::normalize::{clamp_score, normalize_metric};
use crate::model::MetricDefinition;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Mean normalized score of the metrics under one sub-characteristic.
///
/// Every key in `values` with a matching definition takes part with equal
/// weight. Non-finite measurements and keys without a definition are
/// skipped; nothing resolved scores 0.
#[must_use]
pub fn aggregate_sub_characteristic<K>(
    values: &IndexMap<K, f64>,
    definitions: &IndexMap<K, MetricDefinition>,
) -> f64
where
    K: Hash + Eq,
{
    let scores: Vec<f64> = values
        .iter()
        .filter(|(_, value)| value.is_finite())
        .filter_map(|(key, value)| {
            definitions
                .get(key)
                .map(|definition| normalize_metric(*value, definition))
        })
        .collect();
    mean(&scores)
}

/// Mean of the sub-characteristic scores that could be computed.
///
/// `None` entries do not count toward the denominator; an empty or all-`None`
/// map scores 0.
#[must_use]
pub fn aggregate_characteristic<K>(sub_scores: &IndexMap<K, Option<f64>>) -> f64 {
    let present: Vec<f64> = sub_scores
        .values()
        .filter_map(|score| *score)
        .filter(|score| score.is_finite())
        .collect();
    mean(&present)
}

/// Which formula produced an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Weighting {
    /// Weights summed to exactly 100; the score is the plain weighted sum
    Exact,
    /// Weights did not sum to 100; the weighted sum was rescaled by their total
    Renormalized { total_weight: f64 },
    /// No positive weight was given; the score is the (zero) weighted sum
    Unweighted,
}

impl Weighting {
    #[must_use]
    pub const fn is_renormalized(&self) -> bool {
        matches!(self, Self::Renormalized { .. })
    }
}

/// Overall weighted score together with the formula used.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverallScore {
    pub score: f64,
    pub weighting: Weighting,
}

/// Weighted combination of characteristic scores.
///
/// Each weight is a percentage. Characteristics without a score contribute 0.
/// When the weights do not total exactly 100 the weighted sum is rescaled by
/// the actual total, so mis-specified weights still yield a score on the
/// 0-100 scale. Negative or NaN weights can push the plain sum off that
/// scale; the result is clamped either way.
#[must_use]
pub fn aggregate_overall(
    characteristic_scores: &IndexMap<String, f64>,
    weights: &IndexMap<String, f64>,
) -> OverallScore {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for (id, weight) in weights {
        let score = characteristic_scores.get(id).copied().unwrap_or(0.0);
        weighted_sum += score * weight / 100.0;
        total_weight += weight;
    }

    #[allow(clippy::float_cmp)]
    let exact = total_weight == 100.0;

    if total_weight > 0.0 && !exact {
        OverallScore {
            score: clamp_score(weighted_sum / total_weight * 100.0),
            weighting: Weighting::Renormalized { total_weight },
        }
    } else if exact {
        OverallScore {
            score: clamp_score(weighted_sum),
            weighting: Weighting::Exact,
        }
    } else {
        OverallScore {
            score: clamp_score(weighted_sum),
            weighting: Weighting::Unweighted,
        }
    }
}

fn mean(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}
