//! Raw Value Coercion with Default Fallback

use crate::error::ValidationError;
use crate::params::{ParameterDefaults, RawArgs, RoadCondition, RoadType, SimulationParameters};
use tracing::{debug, warn};

/// Outcome of coercing one raw value
#[derive(Debug, Clone, PartialEq)]
pub struct Coerced<T> {
    /// Usable value; the default when the input was rejected
    pub value: T,
    /// Why the input was rejected, if it was
    pub rejected: Option<ValidationError>,
}

impl<T> Coerced<T> {
    fn accepted(value: T) -> Self {
        Self {
            value,
            rejected: None,
        }
    }

    fn fallback(value: T, error: ValidationError) -> Self {
        warn!("{}", error);
        Self {
            value,
            rejected: Some(error),
        }
    }
}

/// Diagnostics gathered while validating a full parameter set
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Rejected values, in positional order
    pub errors: Vec<ValidationError>,
    /// Number of values actually supplied by the user
    pub fields_checked: usize,
}

impl ValidationReport {
    /// Whether every supplied value was accepted as-is
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    fn record<T>(&mut self, coerced: Coerced<T>) -> T {
        self.fields_checked += 1;
        if let Some(error) = coerced.rejected {
            self.errors.push(error);
        }
        coerced.value
    }
}

/// Validator for the five positional simulation parameters
pub struct Validator {
    defaults: ParameterDefaults,
}

impl Validator {
    /// Create a new validator with given defaults
    pub fn new(defaults: ParameterDefaults) -> Self {
        Self { defaults }
    }

    /// Parse a float; no range is enforced, only parse success.
    pub fn coerce_float(&self, field: &'static str, raw: &str, default: f64) -> Coerced<f64> {
        match raw.trim().parse::<f64>() {
            Ok(value) => Coerced::accepted(value),
            Err(_) => Coerced::fallback(
                default,
                ValidationError::NotANumber {
                    field,
                    value: raw.to_string(),
                    default,
                },
            ),
        }
    }

    /// Accept one of the known road types
    pub fn coerce_road_type(&self, raw: &str) -> Coerced<RoadType> {
        match RoadType::parse(raw) {
            Some(road) => Coerced::accepted(road),
            None => Coerced::fallback(
                self.defaults.road_type,
                ValidationError::UnknownRoadType {
                    value: raw.to_string(),
                    default: self.defaults.road_type.as_str(),
                },
            ),
        }
    }

    /// Accept one of the known road conditions
    pub fn coerce_condition(&self, raw: &str) -> Coerced<RoadCondition> {
        match RoadCondition::parse(raw) {
            Some(condition) => Coerced::accepted(condition),
            None => Coerced::fallback(
                self.defaults.condition,
                ValidationError::UnknownCondition {
                    value: raw.to_string(),
                    default: self.defaults.condition.as_str(),
                },
            ),
        }
    }

    /// Validate all positional values. Never fails: absent values take their
    /// default silently, rejected values take it with a diagnostic.
    pub fn validate(&self, raw: &RawArgs) -> (SimulationParameters, ValidationReport) {
        let mut report = ValidationReport::default();
        let mut params = SimulationParameters::from(&self.defaults);

        if let Some(mass) = raw.mass.as_deref() {
            params.mass_kg = report.record(self.coerce_float("mass", mass, self.defaults.mass_kg));
        }
        if let Some(road) = raw.road_type.as_deref() {
            params.road_type = report.record(self.coerce_road_type(road));
        }
        if let Some(condition) = raw.condition.as_deref() {
            params.condition = report.record(self.coerce_condition(condition));
        }
        if let Some(velocity) = raw.velocity.as_deref() {
            params.velocity_ms =
                report.record(self.coerce_float("velocity", velocity, self.defaults.velocity_ms));
        }
        if let Some(slope) = raw.slope.as_deref() {
            params.slope_deg =
                report.record(self.coerce_float("slope", slope, self.defaults.slope_deg));
        }

        debug!(
            "Validated {} values ({} rejected): {:?}",
            report.fields_checked,
            report.errors.len(),
            params
        );

        (params, report)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ParameterDefaults::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn raw(values: &[&str]) -> RawArgs {
        RawArgs::from_positional(values.iter().copied()).0
    }

    #[test]
    fn test_float_accepts_number() {
        let validator = Validator::default();
        let coerced = validator.coerce_float("velocity", "15.5", 27.5);
        assert_eq!(coerced.value, 15.5);
        assert!(coerced.rejected.is_none());
    }

    #[test]
    fn test_float_rejects_text() {
        let validator = Validator::default();
        let coerced = validator.coerce_float("mass", "abc", 2000.0);
        assert_eq!(coerced.value, 2000.0);
        let error = coerced.rejected.expect("abc must be rejected");
        assert_eq!(error.field(), "mass");
        assert!(error.to_string().contains("abc"));
    }

    #[test]
    fn test_float_keeps_negative_and_zero() {
        let validator = Validator::default();
        assert_eq!(validator.coerce_float("slope", "-12", 0.0).value, -12.0);
        assert_eq!(validator.coerce_float("mass", "0", 2000.0).value, 0.0);
        assert_eq!(validator.coerce_float("mass", "1e3", 2000.0).value, 1000.0);
    }

    #[test]
    fn test_unknown_road_type() {
        let validator = Validator::default();
        let coerced = validator.coerce_road_type("asphalt");
        assert_eq!(coerced.value, RoadType::Concrete);
        assert!(matches!(
            coerced.rejected,
            Some(ValidationError::UnknownRoadType { ref value, .. }) if value == "asphalt"
        ));
    }

    #[test]
    fn test_unknown_condition() {
        let validator = Validator::default();
        let coerced = validator.coerce_condition("snowy");
        assert_eq!(coerced.value, RoadCondition::Dry);
        assert!(coerced.rejected.is_some());
    }

    #[test]
    fn test_validate_full_set() {
        let validator = Validator::default();
        let (params, report) = validator.validate(&raw(&["1500", "ice", "wet", "20", "3.5"]));
        assert!(report.is_clean());
        assert_eq!(report.fields_checked, 5);
        assert_eq!(params.mass_kg, 1500.0);
        assert_eq!(params.road_type, RoadType::Ice);
        assert_eq!(params.condition, RoadCondition::Wet);
        assert_eq!(params.velocity_ms, 20.0);
        assert_eq!(params.slope_deg, 3.5);
    }

    #[test]
    fn test_validate_collects_every_rejection() {
        let validator = Validator::default();
        let (params, report) = validator.validate(&raw(&["heavy", "mud", "wet", "fast"]));
        assert_eq!(report.errors.len(), 3);
        assert_eq!(report.fields_checked, 4);
        assert_eq!(params.mass_kg, 2000.0);
        assert_eq!(params.road_type, RoadType::Concrete);
        assert_eq!(params.condition, RoadCondition::Wet);
        assert_eq!(params.velocity_ms, 27.5);
        assert_eq!(params.slope_deg, 0.0);
    }

    #[test]
    fn test_validate_empty_uses_defaults() {
        let validator = Validator::default();
        let (params, report) = validator.validate(&RawArgs::default());
        assert!(report.is_clean());
        assert_eq!(report.fields_checked, 0);
        assert_eq!(params, SimulationParameters::default());
    }

    proptest! {
        #[test]
        fn prop_finite_floats_round_trip(value in -1.0e6f64..1.0e6) {
            let validator = Validator::default();
            let coerced = validator.coerce_float("mass", &value.to_string(), 2000.0);
            prop_assert_eq!(coerced.value, value);
            prop_assert!(coerced.rejected.is_none());
        }

        #[test]
        fn prop_alphabetic_text_falls_back(text in "[a-zA-Z]{1,12}") {
            // "inf", "nan" and "infinity" parse as floats
            prop_assume!(text.parse::<f64>().is_err());
            let validator = Validator::default();
            let coerced = validator.coerce_float("velocity", &text, 27.5);
            prop_assert_eq!(coerced.value, 27.5);
            prop_assert!(coerced.rejected.is_some());
        }
    }
}
