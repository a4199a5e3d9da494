//! RustBMI - Body Composition Calculator
//!
//! Computes Body Mass Index, waist-to-height ratio, waist-to-hip ratio and
//! Body Roundness Index from body measurements, classifies each against
//! fixed and age/gender-dependent threshold tables, and converts between
//! metric and imperial units.

pub mod metrics;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use metrics::calculator::{BodyMeasurements, BodyMetrics, Gender};
pub use metrics::thresholds::{Classification, MetricId, Severity};
pub use storage::config::AppSettings;
pub use ui::{InputForm, ResultsPanel};
