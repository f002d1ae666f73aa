//! Configuration module for quality-eval.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for configuration values and analysis inputs
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use quality_eval::config::AppConfig;
//!
//! // Use defaults
//! let config = AppConfig::default();
//!
//! // Use builder
//! let config = AppConfig::builder()
//!     .gap_threshold(70.0)
//!     .min_score(Some(65.0))
//!     .build();
//!
//! // Load from file
//! use quality_eval::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.quality-eval.yaml` file in your project root or `~/.config/quality-eval/`:
//!
//! ```yaml
//! scoring:
//!   gap_threshold: 70
//! behavior:
//!   min_score: 65
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{CONFIG_DIR_NAME, DEFAULT_WEIGHT_TOLERANCE};
pub use types::{
    AnalyzeConfig, AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig, ScoringConfig,
};
pub use validation::{ConfigError, InputValidator, Validatable};

pub use file::{
    config_search_dirs, discover_config_file, find_git_root, generate_example_config,
    generate_full_example_config, load_config_file, load_or_default, user_config_dir,
    ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// The schema documents every option that can be set in `.quality-eval.yaml`
/// and can be used by editors for validation and autocompletion.
pub fn generate_json_schema() -> crate::error::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    Ok(serde_json::to_string_pretty(&schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"scoring\""));
        assert!(schema.contains("\"gap_threshold\""));
        assert!(schema.contains("\"behavior\""));
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .gap_threshold(70.0)
            .quiet(true)
            .min_score(Some(55.0))
            .build();
        assert!((config.scoring.gap_threshold - 70.0).abs() < f64::EPSILON);
        assert!(config.behavior.quiet);
        assert_eq!(config.behavior.min_score, Some(55.0));
        assert!(config.is_valid());
    }
}
