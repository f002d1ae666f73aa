//! Analysis input loading.

use crate::model::AnalysisInput;
use anyhow::{Context, Result};
use std::path::Path;

use super::PipelineError;

/// A loaded analysis input with its origin
#[derive(Debug, Clone)]
pub struct ParsedInput {
    /// The parsed document
    pub input: AnalysisInput,
    /// Path the document was read from
    pub path: std::path::PathBuf,
}

impl ParsedInput {
    #[must_use]
    pub const fn input(&self) -> &AnalysisInput {
        &self.input
    }
}

/// Load a JSON or YAML analysis input with context for error messages
pub fn load_input_with_context(path: &Path, quiet: bool) -> Result<ParsedInput> {
    if !quiet {
        tracing::info!("Loading analysis input: {:?}", path);
    }

    let parse = || -> Result<AnalysisInput> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        Ok(AnalysisInput::parse_str(&content)?)
    };
    let input = parse().map_err(|source| PipelineError::ParseFailed {
        path: path.display().to_string(),
        source,
    })?;

    if !quiet {
        tracing::info!(
            "Loaded {} selected characteristics, {} measured values",
            input.selected().len(),
            input.values.len()
        );
    }

    Ok(ParsedInput {
        input,
        path: path.to_path_buf(),
    })
}
