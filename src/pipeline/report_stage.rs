//! Report output stage.
//!
//! Handles rendering a quality report and writing it to the configured
//! destination.

use crate::config::AnalyzeConfig;
use crate::quality::QualityReport;
use crate::reports::{create_reporter_with_options, ReportConfig};
use anyhow::Result;

use super::{resolve_format, should_use_color, write_output, OutputTarget, PipelineError};

/// Output a quality report to the configured destination.
///
/// Resolves the `Auto` format against the output file extension, renders
/// the report and writes it to the file or stdout.
pub fn output_report(config: &AnalyzeConfig, report: &QualityReport) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = resolve_format(config.output.format, &output_target);

    let report_config = ReportConfig::for_input(Some(config.input.as_path()))
        .with_metrics(config.output.show_metrics);

    // Never emit ANSI escapes into files
    let use_color = should_use_color(config.output.no_color)
        && matches!(output_target, OutputTarget::Stdout);
    let reporter = create_reporter_with_options(effective_output, use_color);
    let rendered = reporter
        .generate_report(report, &report_config)
        .map_err(|e| PipelineError::ReportFailed { source: e.into() })?;

    write_output(&rendered, &output_target, config.behavior.quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::CaseStudy;
    use crate::quality::QualityScorer;

    #[test]
    fn test_output_report_writes_json_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let app = AppConfig::builder()
            .output_file(Some(path.clone()))
            .quiet(true)
            .build();
        let config = AnalyzeConfig::from_app_config("iot.yaml".into(), &app);

        let report = QualityScorer::default().score(&CaseStudy::IotSystem.to_input());
        output_report(&config, &report).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["metadata"]["input_path"], "iot.yaml");
    }

    #[test]
    fn test_summary_file_has_no_ansi() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");
        let app = AppConfig::builder()
            .output_file(Some(path.clone()))
            .quiet(true)
            .build();
        let config = AnalyzeConfig::from_app_config("iot.yaml".into(), &app);

        let report = QualityScorer::default().score(&CaseStudy::IotSystem.to_input());
        output_report(&config, &report).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Overall Score:"));
        assert!(!written.contains('\x1b'));
    }
}
