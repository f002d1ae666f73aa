//! Unified error types for quality-eval.
//!
//! The scoring engine itself is total and never fails; these errors come from
//! the layers around it (input loading, validation, configuration, reporting).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quality-eval operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum QualityEvalError {
    /// Errors while reading an analysis input document
    #[error("Failed to parse analysis input: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Input document is empty")]
    EmptyInput,

    #[error("Unknown case study '{name}' (available: {available})")]
    UnknownCaseStudy { name: String, available: String },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("Formatting failed: {0}")]
    FormatError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for quality-eval operations
pub type Result<T> = std::result::Result<T, QualityEvalError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl QualityEvalError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for an empty input document
    pub fn empty_input(origin: impl Into<String>) -> Self {
        Self::parse(format!("at {}", origin.into()), ParseErrorKind::EmptyInput)
    }

    /// Create a parse error for an unknown case study name
    pub fn unknown_case_study(name: impl Into<String>, available: &[&str]) -> Self {
        Self::parse(
            "resolving case study",
            ParseErrorKind::UnknownCaseStudy {
                name: name.into(),
                available: available.join(", "),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for QualityEvalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for QualityEvalError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml_ng::Error> for QualityEvalError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are prepended to the existing context, so a failure deep
/// in input loading reads as `outer: middle: inner`.
///
/// ```ignore
/// use quality_eval::error::ErrorContext;
///
/// let content = std::fs::read_to_string(path)
///     .with_context(|| format!("reading {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<QualityEvalError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: QualityEvalError, new_ctx: &str) -> QualityEvalError {
    match err {
        QualityEvalError::Parse {
            context: existing,
            source,
        } => QualityEvalError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        QualityEvalError::Report {
            context: existing,
            source,
        } => QualityEvalError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        QualityEvalError::Io {
            path,
            message,
            source,
        } => QualityEvalError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        QualityEvalError::Config(msg) => QualityEvalError::Config(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
