//! # Error Types
//!
//! Structured error types for fitcalc_core. Every error names the field or
//! metric it concerns so the presentation layer can attach a localized
//! message to the right form control.
//!
//! ## Example
//!
//! ```rust
//! use fitcalc_core::errors::{CalcError, CalcResult};
//!
//! fn require_waist(waist_cm: Option<f64>) -> CalcResult<f64> {
//!     waist_cm.ok_or_else(|| CalcError::missing_field("waist"))
//! }
//!
//! assert_eq!(require_waist(None).unwrap_err().error_code(), "MISSING_FIELD");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for fitcalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for validation, computation and classification.
///
/// None of these are fatal: the core performs no I/O on the compute path,
/// so every variant is recoverable at the call boundary.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Raw input could not be parsed as a finite decimal number
    #[error("'{field}' is not a number: {value:?}")]
    NotANumber { field: String, value: String },

    /// Parsed value is below the field's inclusive minimum
    #[error("'{field}' must be at least {min} (got {value})")]
    BelowMinimum { field: String, value: f64, min: f64 },

    /// Parsed value is above the field's inclusive maximum
    #[error("'{field}' must be at most {max} (got {value})")]
    AboveMaximum { field: String, value: f64, max: f64 },

    /// A field required by the selected formula was not supplied
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A value falls outside every band of a classification table
    #[error("Value {value} is outside the classification range of '{metric}'")]
    OutOfRange { metric: String, value: f64 },

    /// An enumerated field holds an unrecognized spelling
    #[error("Invalid choice for '{field}': {value:?} (expected one of: {expected})")]
    InvalidChoice {
        field: String,
        value: String,
        expected: String,
    },

    /// No band table is registered under this key
    #[error("Unknown metric: {metric}")]
    UnknownMetric { metric: String },

    /// No calculator is registered under this slug
    #[error("Unknown calculator: {name}")]
    UnknownCalculator { name: String },

    /// History store I/O failure
    #[error("Store error: {operation} on '{path}' - {reason}")]
    StoreError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Settings file exists but cannot be read or parsed
    #[error("Config error in '{path}': {reason}")]
    ConfigError { path: String, reason: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a NotANumber error
    pub fn not_a_number(field: impl Into<String>, value: impl Into<String>) -> Self {
        CalcError::NotANumber {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an OutOfRange error
    pub fn out_of_range(metric: impl Into<String>, value: f64) -> Self {
        CalcError::OutOfRange {
            metric: metric.into(),
            value,
        }
    }

    /// Create an InvalidChoice error
    pub fn invalid_choice(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        CalcError::InvalidChoice {
            field: field.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Create an UnknownMetric error
    pub fn unknown_metric(metric: impl Into<String>) -> Self {
        CalcError::UnknownMetric {
            metric: metric.into(),
        }
    }

    /// Create an UnknownCalculator error
    pub fn unknown_calculator(name: impl Into<String>) -> Self {
        CalcError::UnknownCalculator { name: name.into() }
    }

    /// Create a StoreError
    pub fn store_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::StoreError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Name of the form field this error is attached to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::NotANumber { field, .. }
            | CalcError::BelowMinimum { field, .. }
            | CalcError::AboveMaximum { field, .. }
            | CalcError::MissingField { field }
            | CalcError::InvalidChoice { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::NotANumber { .. } => "NOT_A_NUMBER",
            CalcError::BelowMinimum { .. } => "BELOW_MINIMUM",
            CalcError::AboveMaximum { .. } => "ABOVE_MAXIMUM",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::OutOfRange { .. } => "OUT_OF_RANGE",
            CalcError::InvalidChoice { .. } => "INVALID_CHOICE",
            CalcError::UnknownMetric { .. } => "UNKNOWN_METRIC",
            CalcError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            CalcError::StoreError { .. } => "STORE_ERROR",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::BelowMinimum {
            field: "age".to_string(),
            value: 5.0,
            min: 15.0,
        };
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"BelowMinimum\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("waist").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::out_of_range("bmi", -1.0).error_code(), "OUT_OF_RANGE");
        assert_eq!(CalcError::unknown_metric("foo").error_code(), "UNKNOWN_METRIC");
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(CalcError::not_a_number("height", "abc").field(), Some("height"));
        assert_eq!(CalcError::unknown_calculator("x").field(), None);
    }

    #[test]
    fn test_invalid_choice_lists_expected() {
        let err = CalcError::invalid_choice("sex", "x", &["male", "female"]);
        assert_eq!(
            err.to_string(),
            "Invalid choice for 'sex': \"x\" (expected one of: male, female)"
        );
    }
}
