//! Metrics error types.

use thiserror::Error;

/// Errors that can occur while deriving body metrics.
#[derive(Debug, Error, PartialEq)]
pub enum MetricsError {
    /// A field used as a divisor is zero, negative or not finite.
    #[error("Domain error: {field} must be a positive finite number, got {value}")]
    DomainError {
        /// Name of the offending field
        field: &'static str,
        /// Value that was rejected
        value: f64,
    },

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for metrics operations.
pub type MetricsResult<T> = Result<T, MetricsError>;
