//! Metric normalization.
//!
//! Maps a raw measurement onto the 0-100 desirability scale. The function is
//! total: malformed ranges, non-positive targets and NaN measurements still
//! yield a score inside `[0, 100]`.

use crate::model::{Direction, MetricDefinition};

/// Smallest range width used as a divisor.
pub const MIN_RANGE_SPAN: f64 = 1e-9;

/// Normalize `value` to a 0-100 score.
///
/// The value is clamped into `[min, max]` first. A positive `target` replaces
/// the range bounds as reference point: `value / target` for
/// [`Direction::Higher`], `target / value` for [`Direction::Lower`]. A zero
/// measurement against a lower-is-better target scores 100; negative ones
/// score 0.
#[must_use]
pub fn normalize(value: f64, min: f64, max: f64, direction: Direction, target: Option<f64>) -> f64 {
    // `max`/`min` discard NaN, so a NaN measurement lands on `min`
    let clamped = value.max(min).min(max);
    let span = (max - min).max(MIN_RANGE_SPAN);
    let target = target.filter(|t| *t > 0.0);

    let score = match (direction, target) {
        (Direction::Higher, Some(target)) => clamped / target * 100.0,
        (Direction::Higher, None) => (clamped - min) / span * 100.0,
        #[allow(clippy::float_cmp)]
        (Direction::Lower, Some(_)) if clamped == 0.0 => 100.0,
        (Direction::Lower, Some(target)) => target / clamped * 100.0,
        (Direction::Lower, None) => (max - clamped) / span * 100.0,
    };

    clamp_score(score)
}

/// Normalize a measurement against its metric definition.
#[must_use]
pub fn normalize_metric(value: f64, metric: &MetricDefinition) -> f64 {
    normalize(
        value,
        metric.range.min,
        metric.range.max,
        metric.direction,
        metric.target,
    )
}

/// Clamp into `[0, 100]`; NaN maps to 0.
#[must_use]
pub(crate) fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 100.0)
    }
}
