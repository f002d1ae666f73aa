//! Qualitative interpretation of scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound of the strong band.
pub const STRONG_THRESHOLD: f64 = 80.0;
/// Lower bound of the moderate band.
pub const MODERATE_THRESHOLD: f64 = 60.0;

/// Qualitative band a score falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    /// 80 and above
    Strong,
    /// 60 up to 80
    Moderate,
    /// Below 60
    Weak,
}

impl QualityLevel {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= STRONG_THRESHOLD {
            Self::Strong
        } else if score >= MODERATE_THRESHOLD {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Strong => "Very Good Quality",
            Self::Moderate => "Good Quality",
            Self::Weak => "Needs Improvement",
        }
    }

    /// Hex color used by visual renderers
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Strong => "#4CAF50",
            Self::Moderate => "#FF9800",
            Self::Weak => "#F44336",
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level, label and color for one score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub level: QualityLevel,
    pub label: String,
    pub color: String,
}

impl From<QualityLevel> for Interpretation {
    fn from(level: QualityLevel) -> Self {
        Self {
            level,
            label: level.label().to_string(),
            color: level.color().to_string(),
        }
    }
}

/// Interpret a score. Total over all floats; NaN is weak.
#[must_use]
pub fn interpret(score: f64) -> Interpretation {
    QualityLevel::from_score(score).into()
}
