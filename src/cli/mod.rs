//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod analyze;
mod case_study;
mod catalog;
mod validate;

pub use analyze::run_analyze;
pub use case_study::{run_case_study, ExportFormat};
pub use catalog::run_catalog;
pub use validate::run_validate;

// Re-export config types used by handlers
pub use crate::config::AnalyzeConfig;
