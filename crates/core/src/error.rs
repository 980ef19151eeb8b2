//! Engine error model.

use thiserror::Error;

/// Result type used across the forecasting engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine-level error.
///
/// Every failure is a caller-input problem: computation is pure and
/// deterministic, so nothing here is transient or worth retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No usable observations remained (empty input or every row dropped).
    #[error("no usable observations in series")]
    EmptySeries,

    /// A run configuration value was outside its documented range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The baseline window had zero length.
    #[error("baseline window is empty")]
    DegenerateBaseline,

    /// A value failed validation (e.g. non-finite observation).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl EngineError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
