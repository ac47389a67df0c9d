//! Validation Error Types

use thiserror::Error;

/// A raw value that was rejected and replaced by its default
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Value could not be parsed as a floating-point number
    #[error("Invalid input {value} for {field}, input must be float, default value {default} is set")]
    NotANumber {
        field: &'static str,
        value: String,
        default: f64,
    },

    /// Value is not one of the allowed road types
    #[error("Invalid Road_Type {value}, default value is set to {default}")]
    UnknownRoadType { value: String, default: &'static str },

    /// Value is not one of the allowed road conditions
    #[error("Invalid Condition {value}, default value is set to {default}")]
    UnknownCondition { value: String, default: &'static str },
}

impl ValidationError {
    /// Name of the parameter the rejected value was supplied for
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NotANumber { field, .. } => field,
            ValidationError::UnknownRoadType { .. } => "road_type",
            ValidationError::UnknownCondition { .. } => "condition",
        }
    }
}
