//! # Error Types
//!
//! Structured error types for proportio_core. Every failure the core can
//! produce is a precondition violation: a caller input that makes the
//! requested formula mathematically undefined or lies outside its declared
//! domain. Errors carry enough context for both humans and LLMs to
//! understand and fix the offending input programmatically.
//!
//! ## Example
//!
//! ```rust
//! use proportio_core::errors::{CalcError, CalcResult};
//!
//! fn validate_whole(whole: f64) -> CalcResult<()> {
//!     if whole == 0.0 {
//!         return Err(CalcError::zero_denominator("whole"));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for proportio_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant identifies exactly which precondition failed,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A divisor required by the chosen formula branch is exactly zero
    #[error("Division by zero: '{field}' cannot be zero")]
    ZeroDenominator { field: String },

    /// The proportion solver received a missing-value count other than one
    #[error("Exactly one value must be missing to solve a proportion, got {count}")]
    InvalidMissingCount { count: usize },

    /// A width or height below zero
    #[error("Negative dimension: '{field}' is {value}, must be non-negative")]
    NegativeDimension { field: String, value: f64 },

    /// A scale factor at or below zero
    #[error("Scale factor must be positive, got {value}")]
    NonPositiveScale { value: f64 },

    /// Dispatch was asked for an operation name the registry does not know
    #[error("Unknown operation: '{name}'")]
    UnknownOperation { name: String },

    /// Dispatch received an argument payload that does not match the
    /// operation's declared parameters
    #[error("Invalid arguments: {reason}")]
    InvalidArguments { reason: String },
}

impl CalcError {
    /// Create a ZeroDenominator error naming the offending argument
    pub fn zero_denominator(field: impl Into<String>) -> Self {
        CalcError::ZeroDenominator {
            field: field.into(),
        }
    }

    /// Create an InvalidMissingCount error with the observed count
    pub fn invalid_missing_count(count: usize) -> Self {
        CalcError::InvalidMissingCount { count }
    }

    /// Create a NegativeDimension error
    pub fn negative_dimension(field: impl Into<String>, value: f64) -> Self {
        CalcError::NegativeDimension {
            field: field.into(),
            value,
        }
    }

    /// Create a NonPositiveScale error
    pub fn non_positive_scale(value: f64) -> Self {
        CalcError::NonPositiveScale { value }
    }

    /// Create an UnknownOperation error
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        CalcError::UnknownOperation { name: name.into() }
    }

    /// Create an InvalidArguments error
    pub fn invalid_arguments(reason: impl Into<String>) -> Self {
        CalcError::InvalidArguments {
            reason: reason.into(),
        }
    }

    /// True for precondition violations on operation inputs, false for
    /// dispatch-boundary failures (unknown name, malformed payload).
    pub fn is_precondition(&self) -> bool {
        !matches!(
            self,
            CalcError::UnknownOperation { .. } | CalcError::InvalidArguments { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::ZeroDenominator { .. } => "ZERO_DENOMINATOR",
            CalcError::InvalidMissingCount { .. } => "INVALID_MISSING_COUNT",
            CalcError::NegativeDimension { .. } => "NEGATIVE_DIMENSION",
            CalcError::NonPositiveScale { .. } => "NON_POSITIVE_SCALE",
            CalcError::UnknownOperation { .. } => "UNKNOWN_OPERATION",
            CalcError::InvalidArguments { .. } => "INVALID_ARGUMENTS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::negative_dimension("width", -100.0);
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::zero_denominator("whole").error_code(),
            "ZERO_DENOMINATOR"
        );
        assert_eq!(
            CalcError::invalid_missing_count(2).error_code(),
            "INVALID_MISSING_COUNT"
        );
        assert_eq!(
            CalcError::non_positive_scale(0.0).error_code(),
            "NON_POSITIVE_SCALE"
        );
    }

    #[test]
    fn test_display_names_field() {
        let error = CalcError::zero_denominator("d");
        assert_eq!(error.to_string(), "Division by zero: 'd' cannot be zero");
    }

    #[test]
    fn test_precondition_classification() {
        assert!(CalcError::zero_denominator("x").is_precondition());
        assert!(CalcError::invalid_missing_count(0).is_precondition());
        assert!(!CalcError::unknown_operation("no_such_op").is_precondition());
        assert!(!CalcError::invalid_arguments("not an object").is_precondition());
    }
}
