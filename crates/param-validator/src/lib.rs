//! Simulation Parameter Validation
//!
//! Coerces raw command-line values into typed braking parameters, substituting
//! documented defaults for anything that cannot be used.

mod error;
mod params;
mod validator;

pub use error::ValidationError;
pub use params::{ParameterDefaults, RawArgs, RoadCondition, RoadType, SimulationParameters};
pub use validator::{Coerced, ValidationReport, Validator};
