//! Braking Simulation Parameter Types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Road surface the vehicle is braking on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadType {
    Concrete,
    Ice,
    Water,
    Gravel,
    Sand,
}

impl RoadType {
    /// Every accepted road type, in command-line help order
    pub const ALL: [RoadType; 5] = [
        RoadType::Concrete,
        RoadType::Ice,
        RoadType::Water,
        RoadType::Gravel,
        RoadType::Sand,
    ];

    /// Command-line spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            RoadType::Concrete => "concrete",
            RoadType::Ice => "ice",
            RoadType::Water => "water",
            RoadType::Gravel => "gravel",
            RoadType::Sand => "sand",
        }
    }

    /// Exact, case-sensitive match against the command-line spelling
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|road| road.as_str() == value)
    }
}

impl fmt::Display for RoadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Surface condition of the road
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoadCondition {
    Dry,
    Wet,
    Aquaplaning,
}

impl RoadCondition {
    /// Every accepted condition, in command-line help order
    pub const ALL: [RoadCondition; 3] = [
        RoadCondition::Dry,
        RoadCondition::Wet,
        RoadCondition::Aquaplaning,
    ];

    /// Command-line spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            RoadCondition::Dry => "dry",
            RoadCondition::Wet => "wet",
            RoadCondition::Aquaplaning => "aquaplaning",
        }
    }

    /// Exact, case-sensitive match against the command-line spelling
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|condition| condition.as_str() == value)
    }
}

impl fmt::Display for RoadCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fallback values used when a parameter is absent or rejected
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterDefaults {
    /// Vehicle mass (kg)
    pub mass_kg: f64,
    /// Road surface
    pub road_type: RoadType,
    /// Road condition
    pub condition: RoadCondition,
    /// Initial velocity (m/s)
    pub velocity_ms: f64,
    /// Road inclination (degrees)
    pub slope_deg: f64,
}

impl Default for ParameterDefaults {
    fn default() -> Self {
        Self {
            mass_kg: 2000.0,
            road_type: RoadType::Concrete,
            condition: RoadCondition::Dry,
            velocity_ms: 27.5,
            slope_deg: 0.0,
        }
    }
}

/// Positional values exactly as the user typed them; `None` when omitted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArgs {
    pub mass: Option<String>,
    pub road_type: Option<String>,
    pub condition: Option<String>,
    pub velocity: Option<String>,
    pub slope: Option<String>,
}

impl RawArgs {
    /// Assign positional values in order: mass, road type, condition, velocity, slope.
    ///
    /// Returns the values together with anything past the fifth position.
    pub fn from_positional<I, S>(values: I) -> (Self, Vec<String>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = values.into_iter().map(Into::<String>::into);
        let raw = Self {
            mass: values.next(),
            road_type: values.next(),
            condition: values.next(),
            velocity: values.next(),
            slope: values.next(),
        };
        (raw, values.collect())
    }
}

/// Fully validated inputs of one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Vehicle mass (kg)
    pub mass_kg: f64,
    /// Road surface
    pub road_type: RoadType,
    /// Road condition
    pub condition: RoadCondition,
    /// Velocity when braking starts (m/s)
    pub velocity_ms: f64,
    /// Road inclination (degrees)
    pub slope_deg: f64,
}

impl From<&ParameterDefaults> for SimulationParameters {
    fn from(defaults: &ParameterDefaults) -> Self {
        Self {
            mass_kg: defaults.mass_kg,
            road_type: defaults.road_type,
            condition: defaults.condition,
            velocity_ms: defaults.velocity_ms,
            slope_deg: defaults.slope_deg,
        }
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::from(&ParameterDefaults::default())
    }
}
