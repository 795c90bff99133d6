//! # Input Validation
//!
//! Gates every numeric field before it reaches the calculator. Rejections
//! come back as [`ValidationError`] values with field-specific guidance
//! already attached.
//!
//! ## Check Order
//!
//! [`validate_with_edge_cases`] runs its checks in a fixed priority:
//!
//! 1. decimal precision (at most [`MAX_DECIMAL_PLACES`] places)
//! 2. negative
//! 3. zero
//! 4. non-finite (NaN, ±infinity)
//! 5. range (via [`validate_range`])
//!
//! so `-3.0` against `[5, 30]` reports a negative-value edge case, not
//! `ValueTooLow`.
//!
//! ## Fail-Fast vs. Accumulate
//!
//! [`validate_all_inputs`] stops at the first bad field (the simple form
//! shows one problem at a time). [`validate_excavator_fleet`] and
//! [`validate_truck_fleet`] collect every problem on every unit.
//!
//! ## Example
//!
//! ```rust
//! use pond_core::errors::ValidationError;
//! use pond_core::validation::{validate_string_input, InputField, ValidationRange};
//!
//! let range = ValidationRange::new(0.5, 15.0);
//! assert_eq!(validate_string_input(InputField::ExcavatorCapacity, range, " 2.5 "), Ok(2.5));
//!
//! let err = validate_string_input(InputField::ExcavatorCapacity, range, "abc").unwrap_err();
//! assert!(matches!(err, ValidationError::InvalidFormat { ref input, .. } if input == "abc"));
//! ```

pub mod fields;
pub mod rules;

pub use fields::{FieldCategory, InputField};
pub use rules::{ValidationRange, ValidationRules};

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::equipment::{Equipment, Excavator, Truck};
use crate::errors::{ValidationError, ValidationResult};
use crate::project::ProjectInputs;

/// Maximum digits allowed after the decimal point
pub const MAX_DECIMAL_PLACES: u32 = 2;

/// Check a positive value against an inclusive range.
///
/// # Returns
///
/// * `Err(RequiredField)` - value is not greater than zero (including NaN)
/// * `Err(ValueTooLow)` - value is below `range.min`
/// * `Err(ValueTooHigh)` - value is above `range.max`
/// * `Ok(value)` - otherwise
pub fn validate_range(field: InputField, range: ValidationRange, value: f64) -> ValidationResult<f64> {
    let category = field.category();

    if !(value > 0.0) {
        return Err(ValidationError::required_field(
            field.display_name(),
            category.required_guidance(),
        ));
    }
    if range.contains(value) {
        return Ok(value);
    }
    if value < range.min {
        Err(ValidationError::value_too_low(
            field.display_name(),
            value,
            range.min,
            category.range_guidance(),
        ))
    } else {
        Err(ValidationError::value_too_high(
            field.display_name(),
            value,
            range.max,
            category.range_guidance(),
        ))
    }
}

/// Parse and validate raw text from an input box.
///
/// Surrounding whitespace is ignored. The remaining text must parse as a
/// number in full; `"12abc"` is an invalid format, not 12.
pub fn validate_string_input(field: InputField, range: ValidationRange, raw: &str) -> ValidationResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::required_field(
            field.display_name(),
            field.category().required_guidance(),
        ));
    }

    let value: f64 = trimmed.parse().map_err(|_| {
        ValidationError::invalid_format(field.display_name(), trimmed, field.invalid_format_guidance())
    })?;

    validate_with_edge_cases(field, range, value)
}

/// Full check of a numeric value: precision, sign, zero, finiteness, range.
pub fn validate_with_edge_cases(field: InputField, range: ValidationRange, value: f64) -> ValidationResult<f64> {
    validate_decimal_precision(field, value)?;

    if value < 0.0 {
        return Err(ValidationError::edge_case(
            field.display_name(),
            "Negative values are not allowed",
            field.negative_guidance(),
        ));
    }
    if value == 0.0 {
        return Err(ValidationError::edge_case(
            field.display_name(),
            "Zero is not a practical value",
            field.zero_guidance(),
        ));
    }
    if !value.is_finite() {
        return Err(ValidationError::edge_case(
            field.display_name(),
            "Invalid number format",
            field.non_finite_guidance(),
        ));
    }

    validate_range(field, range, value)
}

/// Reject values whose default rendering shows more than
/// [`MAX_DECIMAL_PLACES`] digits after the point.
///
/// This looks at the formatted string, not the numeric value, so a result
/// like `0.1 + 0.2` (rendered `0.30000000000000004`) is rejected.
pub fn validate_decimal_precision(field: InputField, value: f64) -> ValidationResult<f64> {
    let rendered = value.to_string();
    let decimals = rendered
        .split_once('.')
        .map(|(_, fraction)| fraction.len())
        .unwrap_or(0);

    if decimals > MAX_DECIMAL_PLACES as usize {
        return Err(ValidationError::decimal_precision(
            field.display_name(),
            value,
            MAX_DECIMAL_PLACES,
            field.precision_guidance(MAX_DECIMAL_PLACES),
        ));
    }
    Ok(value)
}

/// Validate one field against its configured range
pub fn validate_field(rules: &ValidationRules, field: InputField, value: f64) -> ValidationResult<f64> {
    validate_with_edge_cases(field, rules.range_for(field.category()), value)
}

/// Validate every single-equipment input, stopping at the first failure.
///
/// Fields are checked in the order of [`InputField::ALL`]: excavator
/// capacity, cycle time, truck capacity, round trip, work hours, then pond
/// length, width, and depth.
pub fn validate_all_inputs(rules: &ValidationRules, inputs: &ProjectInputs) -> ValidationResult<ProjectInputs> {
    for field in InputField::ALL {
        validate_field(rules, field, inputs.value(field))?;
    }
    Ok(*inputs)
}

/// One spec violation on one fleet unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetIssue {
    pub equipment_id: Uuid,
    pub field: InputField,
    pub error: ValidationError,
}

fn validate_fleet<E: Equipment>(rules: &ValidationRules, units: &[E]) -> Vec<FleetIssue> {
    let issues: Vec<FleetIssue> = units
        .iter()
        .flat_map(|unit| {
            unit.spec_fields()
                .into_iter()
                .filter_map(move |(field, value)| {
                    validate_field(rules, field, value).err().map(|error| FleetIssue {
                        equipment_id: unit.id(),
                        field,
                        error,
                    })
                })
        })
        .collect();

    if !issues.is_empty() {
        debug!(kind = E::KIND, units = units.len(), issues = issues.len(), "Fleet validation found issues");
    }
    issues
}

/// Check bucket capacity and cycle time on every excavator, collecting all
/// violations.
pub fn validate_excavator_fleet(rules: &ValidationRules, excavators: &[Excavator]) -> Vec<FleetIssue> {
    validate_fleet(rules, excavators)
}

/// Check capacity and round-trip time on every truck, collecting all
/// violations.
pub fn validate_truck_fleet(rules: &ValidationRules, trucks: &[Truck]) -> Vec<FleetIssue> {
    validate_fleet(rules, trucks)
}
