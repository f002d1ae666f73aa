//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Pick from the output file extension, summary otherwise
    #[default]
    Auto,
    /// Brief colored terminal summary
    Summary,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl ReportFormat {
    /// Resolve `Auto` against the output destination.
    ///
    /// `.json` files get JSON, `.md`/`.markdown` files get Markdown, anything
    /// else (including stdout) gets the summary.
    #[must_use]
    pub fn resolve(self, output_file: Option<&Path>) -> Self {
        if self != Self::Auto {
            return self;
        }
        let extension = output_file
            .and_then(Path::extension)
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Self::Json,
            Some("md" | "markdown") => Self::Markdown,
            _ => Self::Summary,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Include per-metric details
    pub show_metrics: bool,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl ReportConfig {
    /// Create a config for the given input file
    pub fn for_input(input_path: Option<&Path>) -> Self {
        Self {
            metadata: ReportMetadata {
                input_path: input_path.map(|p| p.display().to_string()),
                ..ReportMetadata::new()
            },
            ..Self::default()
        }
    }

    /// Include per-metric details
    #[must_use]
    pub const fn with_metrics(mut self, show: bool) -> Self {
        self.show_metrics = show;
        self
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Analysis input file path
    pub input_path: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp
    pub generated_at: Option<String>,
}

impl ReportMetadata {
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_format_resolution() {
        assert_eq!(ReportFormat::Auto.resolve(None), ReportFormat::Summary);
        assert_eq!(
            ReportFormat::Auto.resolve(Some(Path::new("out/report.JSON"))),
            ReportFormat::Json
        );
        assert_eq!(
            ReportFormat::Auto.resolve(Some(Path::new("report.md"))),
            ReportFormat::Markdown
        );
        assert_eq!(
            ReportFormat::Auto.resolve(Some(Path::new("report.txt"))),
            ReportFormat::Summary
        );
        assert_eq!(
            ReportFormat::Markdown.resolve(Some(Path::new("report.json"))),
            ReportFormat::Markdown
        );
    }

    #[test]
    fn test_format_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&ReportFormat::Markdown).unwrap(),
            "\"markdown\""
        );
        let parsed: ReportFormat = serde_yaml_ng::from_str("json").unwrap();
        assert_eq!(parsed, ReportFormat::Json);
    }

    #[test]
    fn test_report_config_for_input() {
        let config = ReportConfig::for_input(Some(Path::new("input.yaml"))).with_metrics(true);
        assert_eq!(config.metadata.input_path.as_deref(), Some("input.yaml"));
        assert_eq!(config.metadata.tool_version, env!("CARGO_PKG_VERSION"));
        assert!(config.show_metrics);
    }
}
