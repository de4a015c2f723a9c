//! Error types for the civic-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors raised by the caller-side helpers.
///
/// The projector itself never fails; degenerate series are clamped instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Unknown reporting granularity code.
    #[error("invalid granularity '{0}': expected 'd', 'w', or 'm'")]
    InvalidGranularity(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Date arithmetic left the representable calendar range.
    #[error("date overflow: {0}")]
    DateOverflow(String),
}
