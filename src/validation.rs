//! Input validation
//!
//! Enforces the numeric constraints on `RooftopInput` before the calculator
//! sees it. Enum membership is already guaranteed by deserialization.

use thiserror::Error;

use crate::model::RooftopInput;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be greater than 0 (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
}

/// Check area, rainfall and occupants in that order, reporting the first
/// violation.
pub fn validate(input: &RooftopInput) -> Result<(), ValidationError> {
    check_positive("roof_area_m2", input.roof_area_m2)?;
    check_positive("annual_rainfall_mm", input.annual_rainfall_mm)?;
    if input.num_occupants == 0 {
        return Err(ValidationError::NonPositive {
            field: "num_occupants",
            value: 0.0,
        });
    }
    Ok(())
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositive { field, value });
    }
    Ok(())
}
