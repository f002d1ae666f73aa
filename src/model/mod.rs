//! Data model for quality evaluations.
//!
//! - [`metric`]: metric definitions, directions and value keys
//! - [`catalog`]: the ISO/IEC 25010 characteristics and ISO/IEC 25023 measures
//! - [`input`]: the analysis input document
//! - [`case_study`]: predefined scenarios

pub mod catalog;
mod case_study;
mod input;
mod metric;

pub use case_study::CaseStudy;
pub use catalog::{
    Characteristic, StandardMetric, SubCharacteristic, CHARACTERISTICS, STANDARD_METRICS,
};
pub use input::{AnalysisInput, MetricEntry, MetricMap, ScenarioInfo};
pub use metric::{Direction, MetricDefinition, MetricKey, MetricRange, MetricSlot};
