//! Default configuration values for quality-eval.

use super::types::ScoringConfig;
use crate::quality::DEFAULT_GAP_THRESHOLD;

/// Default deviation from 100 accepted when validating the weight total.
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 0.01;

/// Directory name used under the user config directory.
pub const CONFIG_DIR_NAME: &str = "quality-eval";

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            gap_threshold: DEFAULT_GAP_THRESHOLD,
            weight_tolerance: DEFAULT_WEIGHT_TOLERANCE,
        }
    }
}

impl ScoringConfig {
    /// Scoring options handed to the engine.
    #[must_use]
    pub const fn scoring_options(&self) -> crate::quality::ScoringOptions {
        crate::quality::ScoringOptions {
            gap_threshold: self.gap_threshold,
        }
    }
}
