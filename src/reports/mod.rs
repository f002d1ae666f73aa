//! Report generation for quality analyses.
//!
//! This module provides multiple output formats for a [`QualityReport`]:
//! - JSON: Structured data for programmatic integration
//! - Markdown: Human-readable documentation
//! - Summary: Compact, colored terminal output
//!
//! # Escaping
//!
//! Scenario names, metric names and units are written by whoever authored the
//! analysis document. The Markdown reporter passes them through the `escape`
//! module so table layout survives pipes, newlines and emphasis markers.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::error::{QualityEvalError, ReportErrorKind};
use crate::quality::QualityReport;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<ReportError> for QualityEvalError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::IoError(e) => Self::from(e),
            ReportError::SerializationError(msg) => Self::report(
                "serializing report",
                ReportErrorKind::JsonSerializationError(msg),
            ),
            ReportError::FormatError(e) => Self::report(
                "formatting report",
                ReportErrorKind::FormatError(e.to_string()),
            ),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a quality report
    fn generate_report(
        &self,
        report: &QualityReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        report: &QualityReport,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate_report(report, config)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

/// Format a score with one decimal, the precision used by every renderer.
pub(crate) fn fmt_score(score: f64) -> String {
    format!("{score:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_formats() {
        assert_eq!(create_reporter(ReportFormat::Json).format(), ReportFormat::Json);
        assert_eq!(
            create_reporter(ReportFormat::Markdown).format(),
            ReportFormat::Markdown
        );
        assert_eq!(
            create_reporter_with_options(ReportFormat::Auto, false).format(),
            ReportFormat::Summary
        );
    }

    #[test]
    fn test_report_error_conversion() {
        let err: QualityEvalError = ReportError::SerializationError("bad".into()).into();
        assert!(matches!(
            err,
            QualityEvalError::Report {
                source: ReportErrorKind::JsonSerializationError(_),
                ..
            }
        ));
    }
}
