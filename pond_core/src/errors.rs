//! # Error Types
//!
//! Structured error types for pond_core. Validation errors carry the
//! field-specific guidance computed at validation time, so a caller can
//! render an inline message without knowing anything about the field.
//!
//! ## Example
//!
//! ```rust
//! use pond_core::errors::{ValidationError, ValidationResult};
//!
//! fn check_depth(depth_ft: f64) -> ValidationResult<f64> {
//!     if depth_ft > 30.0 {
//!         return Err(ValidationError::value_too_high(
//!             "Pond Depth",
//!             depth_ft,
//!             30.0,
//!             "Most farm ponds are 6-15 feet deep",
//!         ));
//!     }
//!     Ok(depth_ft)
//! }
//!
//! let err = check_depth(40.0).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Value 40 is too high. Maximum: 30. Most farm ponds are 6-15 feet deep"
//! );
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type alias for calculation operations
pub type CalcResult<T> = Result<T, CalculationError>;

/// A rejected input value.
///
/// Every variant except `Configuration` names the field it was raised for and
/// carries the guidance text for that field.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ValidationError {
    /// Empty input, or a numeric value that is not positive
    #[error("{field} is required. {guidance}")]
    RequiredField { field: String, guidance: String },

    /// Input could not be parsed as a number
    #[error("'{input}' is not a valid number for {field}. {guidance}")]
    InvalidFormat {
        field: String,
        input: String,
        guidance: String,
    },

    /// Value is below the configured minimum
    #[error("Value {actual} is too low. Minimum: {minimum}. {guidance}")]
    ValueTooLow {
        field: String,
        actual: f64,
        minimum: f64,
        guidance: String,
    },

    /// Value is above the configured maximum
    #[error("Value {actual} is too high. Maximum: {maximum}. {guidance}")]
    ValueTooHigh {
        field: String,
        actual: f64,
        maximum: f64,
        guidance: String,
    },

    /// Value has more decimal places than allowed
    #[error("Value {actual} has too many decimal places. Maximum: {max_decimals}. {guidance}")]
    DecimalPrecision {
        field: String,
        actual: f64,
        max_decimals: u32,
        guidance: String,
    },

    /// Negative, zero, or non-finite value
    #[error("{issue}. {guidance}")]
    EdgeCase {
        field: String,
        issue: String,
        guidance: String,
    },

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ValidationError {
    /// Create a RequiredField error
    pub fn required_field(field: impl Into<String>, guidance: impl Into<String>) -> Self {
        ValidationError::RequiredField {
            field: field.into(),
            guidance: guidance.into(),
        }
    }

    /// Create an InvalidFormat error
    pub fn invalid_format(
        field: impl Into<String>,
        input: impl Into<String>,
        guidance: impl Into<String>,
    ) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            input: input.into(),
            guidance: guidance.into(),
        }
    }

    /// Create a ValueTooLow error
    pub fn value_too_low(
        field: impl Into<String>,
        actual: f64,
        minimum: f64,
        guidance: impl Into<String>,
    ) -> Self {
        ValidationError::ValueTooLow {
            field: field.into(),
            actual,
            minimum,
            guidance: guidance.into(),
        }
    }

    /// Create a ValueTooHigh error
    pub fn value_too_high(
        field: impl Into<String>,
        actual: f64,
        maximum: f64,
        guidance: impl Into<String>,
    ) -> Self {
        ValidationError::ValueTooHigh {
            field: field.into(),
            actual,
            maximum,
            guidance: guidance.into(),
        }
    }

    /// Create a DecimalPrecision error
    pub fn decimal_precision(
        field: impl Into<String>,
        actual: f64,
        max_decimals: u32,
        guidance: impl Into<String>,
    ) -> Self {
        ValidationError::DecimalPrecision {
            field: field.into(),
            actual,
            max_decimals,
            guidance: guidance.into(),
        }
    }

    /// Create an EdgeCase error
    pub fn edge_case(
        field: impl Into<String>,
        issue: impl Into<String>,
        guidance: impl Into<String>,
    ) -> Self {
        ValidationError::EdgeCase {
            field: field.into(),
            issue: issue.into(),
            guidance: guidance.into(),
        }
    }

    /// Create a Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        ValidationError::Configuration {
            message: message.into(),
        }
    }

    /// Field the error was raised for (`None` for configuration errors)
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::RequiredField { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::ValueTooLow { field, .. }
            | ValidationError::ValueTooHigh { field, .. }
            | ValidationError::DecimalPrecision { field, .. }
            | ValidationError::EdgeCase { field, .. } => Some(field),
            ValidationError::Configuration { .. } => None,
        }
    }

    /// Guidance text attached at validation time
    pub fn guidance(&self) -> Option<&str> {
        match self {
            ValidationError::RequiredField { guidance, .. }
            | ValidationError::InvalidFormat { guidance, .. }
            | ValidationError::ValueTooLow { guidance, .. }
            | ValidationError::ValueTooHigh { guidance, .. }
            | ValidationError::DecimalPrecision { guidance, .. }
            | ValidationError::EdgeCase { guidance, .. } => Some(guidance),
            ValidationError::Configuration { .. } => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidFormat { .. } => "INVALID_FORMAT",
            ValidationError::ValueTooLow { .. } => "VALUE_TOO_LOW",
            ValidationError::ValueTooHigh { .. } => "VALUE_TOO_HIGH",
            ValidationError::DecimalPrecision { .. } => "DECIMAL_PRECISION",
            ValidationError::EdgeCase { .. } => "EDGE_CASE",
            ValidationError::Configuration { .. } => "CONFIGURATION_ERROR",
        }
    }
}

/// The supplied fleet or parameters cannot produce an estimate.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalculationError {
    /// No active excavator or no active truck
    #[error(
        "Insufficient equipment: at least one active excavator and one active truck are required \
         ({active_excavators} excavators, {active_trucks} trucks active)"
    )]
    InsufficientEquipment {
        active_excavators: usize,
        active_trucks: usize,
    },

    /// Project parameters or equipment specs cannot yield a positive rate
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

impl CalculationError {
    /// Create an InvalidConfiguration error
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        CalculationError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalculationError::InsufficientEquipment { .. } => "INSUFFICIENT_EQUIPMENT",
            CalculationError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
        }
    }
}

/// Failure of the combined validate-then-calculate pipeline.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "stage", content = "error")]
pub enum EstimateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Calculation(#[from] CalculationError),
}

impl EstimateError {
    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EstimateError::Validation(e) => e.error_code(),
            EstimateError::Calculation(e) => e.error_code(),
        }
    }
}

/// A field name that matches no [`InputField`](crate::validation::InputField).
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[error("Unknown input field '{0}'")]
pub struct UnknownField(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ValidationError::value_too_low("Cycle Time", 0.2, 0.5, "Check your stopwatch");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"ValueTooLow\""));
        let roundtrip: ValidationError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_message_includes_guidance() {
        let error = ValidationError::value_too_low("Cycle Time", 0.2, 0.5, "Check your stopwatch");
        assert_eq!(
            error.to_string(),
            "Value 0.2 is too low. Minimum: 0.5. Check your stopwatch"
        );

        let error = ValidationError::invalid_format("Truck Capacity", "abc", "Enter a number");
        assert_eq!(
            error.to_string(),
            "'abc' is not a valid number for Truck Capacity. Enter a number"
        );
    }

    #[test]
    fn test_field_and_guidance_accessors() {
        let error = ValidationError::edge_case("Pond Depth", "Negative values are not allowed", "Use a positive depth");
        assert_eq!(error.field(), Some("Pond Depth"));
        assert_eq!(error.guidance(), Some("Use a positive depth"));

        let error = ValidationError::configuration("bad range");
        assert_eq!(error.field(), None);
        assert_eq!(error.guidance(), None);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ValidationError::required_field("x", "y").error_code(), "REQUIRED_FIELD");
        assert_eq!(ValidationError::configuration("x").error_code(), "CONFIGURATION_ERROR");
        assert_eq!(
            CalculationError::invalid_configuration("x").error_code(),
            "INVALID_CONFIGURATION"
        );

        let wrapped: EstimateError = CalculationError::InsufficientEquipment {
            active_excavators: 0,
            active_trucks: 1,
        }
        .into();
        assert_eq!(wrapped.error_code(), "INSUFFICIENT_EQUIPMENT");
    }

    #[test]
    fn test_estimate_error_is_transparent() {
        let inner = CalculationError::invalid_configuration("Pond volume must be positive");
        let wrapped = EstimateError::from(inner.clone());
        assert_eq!(wrapped.to_string(), inner.to_string());
    }
}
