//! Metrics module for body composition calculations and classification.

pub mod calculator;
pub mod error;
pub mod thresholds;
pub mod units;

pub use calculator::{BodyMeasurements, BodyMetrics, Gender};
pub use error::{MetricsError, MetricsResult};
pub use thresholds::{
    classify_measurements, Classification, ClassificationContext, MetricId, MetricResult, Scale,
    Severity, Threshold, ThresholdTable,
};
pub use units::Units;
