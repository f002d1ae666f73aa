//! Quality scoring engine.
//!
//! Pure functions turning measured metric values and characteristic weights
//! into normalized scores, an overall weighted score, a qualitative
//! interpretation and a ranked gap list.
//!
//! # Pipeline
//!
//! 1. [`normalize`]: raw value -> 0-100 desirability score
//! 2. [`aggregate_sub_characteristic`]: mean of metric scores
//! 3. [`aggregate_characteristic`]: mean of sub-characteristic scores
//! 4. [`aggregate_overall`]: weighted combination, renormalized when the
//!    weights do not total 100
//! 5. [`interpret`] and [`compute_gaps`]
//!
//! # Usage
//!
//! ```
//! use quality_eval::model::CaseStudy;
//! use quality_eval::quality::QualityScorer;
//!
//! let input = CaseStudy::IotSystem.to_input();
//! let report = QualityScorer::default().score(&input);
//!
//! println!("Overall score: {:.1}/100", report.overall_score);
//! for gap in &report.gaps {
//!     println!("- {} is {:.1} below threshold", gap.characteristic_id, gap.gap);
//! }
//! ```

mod aggregate;
mod gaps;
mod interpret;
mod normalize;
mod scorer;

pub use aggregate::{
    aggregate_characteristic, aggregate_overall, aggregate_sub_characteristic, OverallScore,
    Weighting,
};
pub use gaps::{compute_gaps, Gap, DEFAULT_GAP_THRESHOLD};
pub use interpret::{interpret, Interpretation, QualityLevel, MODERATE_THRESHOLD, STRONG_THRESHOLD};
pub use normalize::{normalize, normalize_metric, MIN_RANGE_SPAN};
pub use scorer::{
    CharacteristicBreakdown, MetricScore, QualityReport, QualityScorer, Recommendation,
    ScoringOptions, SubCharacteristicBreakdown, ALL_CLEAR_MESSAGE, SCORING_ENGINE_VERSION,
};
