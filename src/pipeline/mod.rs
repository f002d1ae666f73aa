//! Pipeline orchestration for quality analyses.
//!
//! This module provides the shared load → validate → score → report workflow
//! used by the CLI command handlers.

mod output;
mod parse;
mod report_stage;
mod score_stage;

pub use output::{resolve_format, should_use_color, write_output, OutputTarget};
pub use parse::{load_input_with_context, ParsedInput};
pub use report_stage::output_report;
pub use score_stage::{score_input, validate_input};

/// Structured pipeline error types for better diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to read or parse an analysis input
    #[error("Parse failed for {path}: {source}")]
    ParseFailed {
        path: String,
        source: anyhow::Error,
    },

    /// The input did not pass validation
    #[error("Validation failed with {count} error(s)")]
    ValidationFailed { count: usize },

    /// Report generation or output failed
    #[error("Report failed: {source}")]
    ReportFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success
    pub const SUCCESS: i32 = 0;
    /// Overall score is below the configured minimum
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// The analysis input is invalid
    pub const VALIDATION_FAILED: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
