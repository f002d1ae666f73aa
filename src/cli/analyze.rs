//! Analyze command handler.
//!
//! Implements the `analyze` subcommand: load, validate, score and report.

use crate::config::AnalyzeConfig;
use crate::pipeline::{
    exit_codes, load_input_with_context, output_report, score_input, validate_input,
    PipelineError,
};
use anyhow::Result;

/// Run the analyze command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_analyze(config: AnalyzeConfig) -> Result<i32> {
    let parsed = load_input_with_context(&config.input, config.behavior.quiet)?;

    if config.behavior.skip_validation {
        tracing::debug!("Input validation skipped");
    } else {
        let errors = validate_input(parsed.input(), config.scoring.weight_tolerance);
        if !errors.is_empty() {
            for error in &errors {
                eprintln!("  - {error}");
            }
            let failure = PipelineError::ValidationFailed {
                count: errors.len(),
            };
            tracing::error!(
                "{}: {failure}; use --skip-validation to score anyway",
                config.input.display()
            );
            return Ok(exit_codes::VALIDATION_FAILED);
        }
    }

    let report = score_input(&config, parsed.input());
    output_report(&config, &report)?;

    // Check minimum score threshold
    if let Some(threshold) = config.behavior.min_score {
        if report.overall_score < threshold {
            tracing::error!(
                "Quality score {:.1} is below minimum threshold {:.1}",
                report.overall_score,
                threshold
            );
            return Ok(exit_codes::BELOW_MIN_SCORE);
        }
    }

    Ok(exit_codes::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::CaseStudy;
    use std::path::Path;

    fn write_input(dir: &Path, input: &crate::model::AnalysisInput) -> std::path::PathBuf {
        let path = dir.join("input.json");
        std::fs::write(&path, serde_json::to_string(input).unwrap()).unwrap();
        path
    }

    fn config_for(path: std::path::PathBuf, dir: &Path, app: AppConfig) -> AnalyzeConfig {
        let mut config = AnalyzeConfig::from_app_config(path, &app);
        config.output.file = Some(dir.join("report.json"));
        config.behavior.quiet = true;
        config
    }

    #[test]
    fn test_analyze_iot_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(dir.path(), &CaseStudy::IotSystem.to_input());
        let config = config_for(path, dir.path(), AppConfig::default());

        assert_eq!(run_analyze(config).unwrap(), exit_codes::SUCCESS);
        assert!(dir.path().join("report.json").exists());
    }

    #[test]
    fn test_analyze_below_min_score() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_input(dir.path(), &CaseStudy::IotSystem.to_input());
        let app = AppConfig::builder().min_score(Some(90.0)).build();

        assert_eq!(
            run_analyze(config_for(path, dir.path(), app)).unwrap(),
            exit_codes::BELOW_MIN_SCORE
        );
    }

    #[test]
    fn test_analyze_invalid_input_and_skip_validation() {
        let dir = tempfile::tempdir().unwrap();
        // Healthcare ships no measured values
        let path = write_input(dir.path(), &CaseStudy::Healthcare.to_input());

        let config = config_for(path.clone(), dir.path(), AppConfig::default());
        assert_eq!(run_analyze(config).unwrap(), exit_codes::VALIDATION_FAILED);
        assert!(!dir.path().join("report.json").exists());

        let app = AppConfig::builder().skip_validation(true).build();
        assert_eq!(
            run_analyze(config_for(path, dir.path(), app)).unwrap(),
            exit_codes::SUCCESS
        );
    }
}
