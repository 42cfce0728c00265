//! # Error Types
//!
//! Structured error types for detail_core. Every failure in the engine is a
//! deterministic input error raised at the boundary of the offending function,
//! so there are no retry semantics: the orchestration layer is expected to
//! catch per section and skip or flag that section in the schedule.
//!
//! ## Example
//!
//! ```rust
//! use detail_core::errors::{DetailError, DetailResult};
//!
//! fn validate_cover(cover_mm: f64) -> DetailResult<()> {
//!     if cover_mm <= 0.0 {
//!         return Err(DetailError::invalid_section(
//!             "cover_mm",
//!             cover_mm.to_string(),
//!             "Cover must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for detail_core operations
pub type DetailResult<T> = Result<T, DetailError>;

/// Structured error type for the detailing engine.
///
/// Each variant provides specific context about what went wrong. The engine
/// never attempts partial recovery (e.g., clamping a bar count to 2) since
/// that would silently alter engineering intent.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DetailError {
    /// Section geometry or bar arrangement is invalid (bar count < 2,
    /// non-positive dimension, ...)
    #[error("Invalid section input for '{field}': {value} - {reason}")]
    InvalidSection {
        field: String,
        value: String,
        reason: String,
    },

    /// Bar designator absent from the bar catalog
    #[error("Unknown bar size: {designator}")]
    UnknownBarSize { designator: String },

    /// Unit token not recognized (expected "millimeter" or "inch")
    #[error("Unknown unit: {token}")]
    UnknownUnit { token: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DetailError {
    /// Create an InvalidSection error
    pub fn invalid_section(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DetailError::InvalidSection {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownBarSize error
    pub fn unknown_bar_size(designator: impl Into<String>) -> Self {
        DetailError::UnknownBarSize {
            designator: designator.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(token: impl Into<String>) -> Self {
        DetailError::UnknownUnit {
            token: token.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        DetailError::Internal {
            message: message.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DetailError::InvalidSection { .. } => "INVALID_SECTION",
            DetailError::UnknownBarSize { .. } => "UNKNOWN_BAR_SIZE",
            DetailError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            DetailError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = DetailError::invalid_section("bars_along_width", "1", "At least 2 bars required");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: DetailError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DetailError::unknown_bar_size("#99").error_code(),
            "UNKNOWN_BAR_SIZE"
        );
        assert_eq!(
            DetailError::unknown_unit("furlong").error_code(),
            "UNKNOWN_UNIT"
        );
    }

    #[test]
    fn test_error_display() {
        let error = DetailError::unknown_unit("cm");
        assert_eq!(error.to_string(), "Unknown unit: cm");
    }
}
