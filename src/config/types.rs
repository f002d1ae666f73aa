//! Configuration types for quality-eval operations.
//!
//! Provides structured configuration for the analyze and validate operations.

use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring configuration (gap threshold, weight tolerance)
    pub scoring: ScoringConfig,
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the gap threshold.
    pub const fn gap_threshold(mut self, threshold: f64) -> Self {
        self.config.scoring.gap_threshold = threshold;
        self
    }

    /// Set the tolerance allowed when checking that weights total 100.
    pub const fn weight_tolerance(mut self, tolerance: f64) -> Self {
        self.config.scoring.weight_tolerance = tolerance;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Include per-metric details in reports.
    pub const fn show_metrics(mut self, show: bool) -> Self {
        self.config.output.show_metrics = show;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Score inputs even when they fail validation.
    pub const fn skip_validation(mut self, skip: bool) -> Self {
        self.config.behavior.skip_validation = skip;
        self
    }

    /// Fail when the overall score is below this value.
    pub const fn min_score(mut self, min_score: Option<f64>) -> Self {
        self.config.behavior.min_score = min_score;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command Configuration Types
// ============================================================================

/// Configuration for analyze operations
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// Path to the analysis input document
    pub input: PathBuf,
    /// Scoring configuration
    pub scoring: ScoringConfig,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AnalyzeConfig {
    /// Build an analyze configuration from the merged application config.
    #[must_use]
    pub fn from_app_config(input: PathBuf, config: &AppConfig) -> Self {
        Self {
            input,
            scoring: config.scoring.clone(),
            output: config.output.clone(),
            behavior: config.behavior.clone(),
        }
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Scoring-related configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Characteristics scoring below this value are reported as gaps (0-100)
    #[schemars(range(min = 0, max = 100))]
    pub gap_threshold: f64,
    /// Allowed deviation from 100 when validating the weight total
    #[schemars(range(min = 0))]
    pub weight_tolerance: f64,
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Include per-metric details in summary and markdown reports
    pub show_metrics: bool,
}

/// Behavior flags for analyze operations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress non-essential output
    pub quiet: bool,
    /// Score inputs that fail validation (weights are renormalized by the engine)
    pub skip_validation: bool,
    /// Exit with code 1 if the overall score is below this value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_score: Option<f64>,
}
