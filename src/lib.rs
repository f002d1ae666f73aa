//! **Weighted software quality evaluation on the ISO/IEC 25010 model.**
//!
//! `quality-eval` turns measured metric values into a quality assessment:
//! every metric is normalized onto a 0-100 desirability scale, averaged per
//! sub-characteristic and characteristic, combined into a weighted overall
//! score, interpreted qualitatively and checked for gaps below a threshold.
//!
//! ## Key Features
//!
//! - **Quality Model Catalog**: The eight ISO/IEC 25010 product quality
//!   characteristics with their sub-characteristics and the ISO/IEC 25023
//!   standard measures suggested for each.
//! - **Scoring Engine**: Pure, total functions for normalization, aggregation,
//!   interpretation and gap analysis. Weights that do not total 100 are
//!   renormalized instead of producing scores off the 0-100 scale.
//! - **Input Validation**: Catches missing values, malformed ranges and
//!   mis-specified weights before scoring.
//! - **Case Studies**: Predefined IoT, healthcare and mobile app scenarios.
//! - **Flexible Reporting**: Terminal summary, JSON and Markdown reports.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The [`AnalysisInput`] document, metric definitions and the
//!   static quality model [`catalog`](model::catalog).
//! - **[`quality`]**: The scoring engine and the [`QualityScorer`] producing a
//!   [`QualityReport`].
//! - **[`config`]**: Application configuration, config file discovery and the
//!   [`Validatable`] checks for configs and analysis inputs.
//! - **[`pipeline`]**: Load → validate → score → report orchestration.
//! - **[`reports`]**: Report generators for the supported output formats.
//!
//! ## Getting Started
//!
//! ```
//! use quality_eval::{AnalysisInput, QualityScorer};
//!
//! let input = AnalysisInput::parse_str(r#"
//! selected_characteristics: [security]
//! metrics:
//!   security:
//!     confidentiality:
//!       name: Encrypted data
//!       unit: "%"
//!       range: { min: 0, max: 100 }
//!       direction: higher
//! values:
//!   security_confidentiality: 85
//! weights:
//!   security: 100
//! "#)?;
//!
//! let report = QualityScorer::default().score(&input);
//! assert!((report.overall_score - 85.0).abs() < 1e-9);
//! assert_eq!(report.interpretation.label, "Very Good Quality");
//! # Ok::<(), quality_eval::QualityEvalError>(())
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `quality-eval` library crate. The binary of
//! the same name wraps it with `analyze`, `validate`, `catalog` and
//! `case-study` subcommands.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Score math mixes usize counts and f64 means
    clippy::cast_precision_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Report renderers are inherently long
    clippy::too_many_lines,
    // Config structs legitimately use several bools for toggle flags
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    // Variable names like `min`/`max` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod quality;
pub mod reports;

// Re-export main types for convenience
pub use config::{AnalyzeConfig, AppConfig, AppConfigBuilder};
pub use config::{BehaviorConfig, OutputConfig, ScoringConfig};
pub use config::{ConfigError, InputValidator, Validatable};
pub use error::{ErrorContext, QualityEvalError, Result};
pub use model::{
    AnalysisInput, CaseStudy, Direction, MetricDefinition, MetricKey, MetricRange, MetricSlot,
};
pub use quality::{
    normalize, OverallScore, QualityLevel, QualityReport, QualityScorer, ScoringOptions,
    Weighting,
};
pub use reports::{ReportFormat, ReportGenerator};
