//! Gap analysis: characteristics scoring below a threshold.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Threshold used when none is configured.
pub const DEFAULT_GAP_THRESHOLD: f64 = 60.0;

/// Shortfall of one characteristic below the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    pub characteristic_id: String,
    pub score: f64,
    /// `threshold - score`, always positive
    pub gap: f64,
}

/// Characteristics scoring below `threshold`, largest gap first.
///
/// Equal gaps are ordered by characteristic id.
#[must_use]
pub fn compute_gaps(characteristic_scores: &IndexMap<String, f64>, threshold: f64) -> Vec<Gap> {
    let mut gaps: Vec<Gap> = characteristic_scores
        .iter()
        .filter(|(_, score)| **score < threshold)
        .map(|(id, score)| Gap {
            characteristic_id: id.clone(),
            score: *score,
            gap: threshold - score,
        })
        .collect();

    gaps.sort_by(|a, b| {
        b.gap
            .partial_cmp(&a.gap)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.characteristic_id.cmp(&b.characteristic_id))
    });
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(&str, f64)]) -> IndexMap<String, f64> {
        entries
            .iter()
            .map(|(id, score)| ((*id).to_string(), *score))
            .collect()
    }

    #[test]
    fn test_gaps_sorted_by_shortfall() {
        let gaps = compute_gaps(&scores(&[("A", 50.0), ("B", 70.0), ("C", 40.0)]), 60.0);
        assert_eq!(gaps.len(), 2);
        assert_eq!(gaps[0].characteristic_id, "C");
        assert!((gaps[0].gap - 20.0).abs() < 1e-9);
        assert_eq!(gaps[1].characteristic_id, "A");
        assert!((gaps[1].gap - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_at_threshold_is_not_a_gap() {
        assert!(compute_gaps(&scores(&[("A", 60.0)]), 60.0).is_empty());
    }

    #[test]
    fn test_ties_ordered_by_id() {
        let gaps = compute_gaps(&scores(&[("zeta", 30.0), ("alpha", 30.0)]), DEFAULT_GAP_THRESHOLD);
        let ids: Vec<&str> = gaps.iter().map(|g| g.characteristic_id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_custom_threshold() {
        let gaps = compute_gaps(&scores(&[("A", 75.0), ("B", 85.0)]), 80.0);
        assert_eq!(gaps.len(), 1);
        assert!((gaps[0].gap - 5.0).abs() < 1e-9);
    }
}
