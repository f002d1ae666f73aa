//! Validate command handler.
//!
//! Implements the `validate` subcommand, checking an analysis input for
//! everything the scorer would otherwise silently tolerate.

use crate::config::ConfigError;
use crate::pipeline::{exit_codes, load_input_with_context, validate_input, write_output, OutputTarget};
use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Machine-readable validation result
#[derive(Serialize)]
struct ValidationSummary<'a> {
    input: String,
    valid: bool,
    errors: Vec<ValidationEntry<'a>>,
}

#[derive(Serialize)]
struct ValidationEntry<'a> {
    field: &'a str,
    message: &'a str,
}

/// Run the validate command, returning the desired exit code.
pub fn run_validate(
    input_path: &Path,
    weight_tolerance: f64,
    json: bool,
    output_file: Option<PathBuf>,
    quiet: bool,
) -> Result<i32> {
    let parsed = load_input_with_context(input_path, quiet)?;
    let errors = validate_input(parsed.input(), weight_tolerance);

    let content = if json {
        format_validation_json(input_path, &errors)?
    } else {
        format_validation_text(input_path, &errors)
    };
    write_output(&content, &OutputTarget::from_option(output_file), quiet)?;

    if errors.is_empty() {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::VALIDATION_FAILED)
    }
}

fn format_validation_json(input_path: &Path, errors: &[ConfigError]) -> Result<String> {
    let summary = ValidationSummary {
        input: input_path.display().to_string(),
        valid: errors.is_empty(),
        errors: errors
            .iter()
            .map(|e| ValidationEntry {
                field: &e.field,
                message: &e.message,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&summary)
        .map_err(|e| anyhow::anyhow!("Failed to serialize validation JSON: {e}"))
}

fn format_validation_text(input_path: &Path, errors: &[ConfigError]) -> String {
    if errors.is_empty() {
        return format!("{}: valid", input_path.display());
    }
    let mut lines = vec![format!(
        "{}: {} problem(s) found",
        input_path.display(),
        errors.len()
    )];
    lines.extend(errors.iter().map(|e| format!("  - {e}")));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CaseStudy;

    #[test]
    fn test_validate_reports_problems_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("input.yaml");
        let mut input = CaseStudy::IotSystem.to_input();
        input.weights.insert("security".to_string(), 50.0);
        std::fs::write(&input_path, serde_yaml_ng::to_string(&input).unwrap()).unwrap();
        let output = dir.path().join("result.json");

        let code = run_validate(&input_path, 0.01, true, Some(output.clone()), true).unwrap();
        assert_eq!(code, exit_codes::VALIDATION_FAILED);

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["errors"][0]["field"], "weights");
    }

    #[test]
    fn test_validate_text_for_valid_input() {
        let text = format_validation_text(Path::new("iot.yaml"), &[]);
        assert_eq!(text, "iot.yaml: valid");
    }
}
