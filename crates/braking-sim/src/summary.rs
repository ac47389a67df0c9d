//! Read-Only Summary Handed to the Renderer

use crate::error::SimError;
use friction_resolver::FrictionResolution;
use kinematics::KinematicSeries;
use param_validator::{RoadCondition, RoadType, SimulationParameters};
use rule_of_thumb::ThumbEstimates;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Lines of the hint panel
pub const HINT_LINES: [&str; 5] = [
    "Hint: The rule of thumb does not consider",
    "the mass of the vehicle,",
    "the road-condition,",
    "the type of the road,",
    "the steepness of the road!",
];

/// Effective parameters and headline results of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub mass_kg: f64,
    /// Road type after the unsupported-combination override
    pub road_type: RoadType,
    pub condition: RoadCondition,
    pub velocity_ms: f64,
    pub slope_deg: f64,
    pub friction: f64,
    pub deceleration: f64,
    pub stop_time_s: f64,
    pub stop_distance_m: f64,
    pub thumb_normal_distance_m: f64,
    pub thumb_normal_time_s: f64,
    pub thumb_danger_distance_m: f64,
    pub thumb_danger_time_s: f64,
}

impl SimulationSummary {
    /// Assemble from the pipeline stages
    pub fn new(
        params: &SimulationParameters,
        friction: &FrictionResolution,
        series: &KinematicSeries,
        thumb: &ThumbEstimates,
    ) -> Self {
        Self {
            mass_kg: params.mass_kg,
            road_type: friction.road_type,
            condition: friction.condition,
            velocity_ms: params.velocity_ms,
            slope_deg: params.slope_deg,
            friction: friction.coefficient,
            deceleration: series.deceleration,
            stop_time_s: series.stop_time_s,
            stop_distance_m: series.stop_distance_m,
            thumb_normal_distance_m: thumb.normal.stop_distance_m,
            thumb_normal_time_s: thumb.normal.stop_time_s,
            thumb_danger_distance_m: thumb.danger.stop_distance_m,
            thumb_danger_time_s: thumb.danger.stop_time_s,
        }
    }

    /// Output file name without extension, unique per effective parameter set
    pub fn file_stem(&self) -> String {
        format!(
            "Mass_{}_Road_{}_Condition_{}_V0_{}_Angle{}",
            self.mass_kg, self.road_type, self.condition, self.velocity_ms, self.slope_deg
        )
    }

    /// Text of the parameter panel
    pub fn parameter_lines(&self) -> Vec<String> {
        vec![
            "Your parameters for the plots:".to_string(),
            format!("Velocity: {} m/s", self.velocity_ms),
            format!("Mass: {} kg", self.mass_kg),
            format!("Type of road: {}", self.road_type),
            format!("Condition: {}", self.condition),
            format!("Friction-Coefficient: {}", self.friction),
            format!("Angle of surface: {} degrees", self.slope_deg),
            format!("Acceleration: -{} m/s^2", round2(self.deceleration)),
        ]
    }

    /// Info box of the physics velocity panel
    pub fn velocity_lines(&self) -> Vec<String> {
        vec![
            format!("Initial-Velocity: {}m/s", round2(self.velocity_ms)),
            format!("Braking-Time: {} s", round2(self.stop_time_s)),
        ]
    }

    /// Info box of the physics distance panel
    pub fn distance_lines(&self) -> Vec<String> {
        braking_lines(self.stop_distance_m, self.stop_time_s)
    }

    /// Info box of the rule-of-thumb normal panel
    pub fn thumb_normal_lines(&self) -> Vec<String> {
        braking_lines(self.thumb_normal_distance_m, self.thumb_normal_time_s)
    }

    /// Info box of the rule-of-thumb danger panel
    pub fn thumb_danger_lines(&self) -> Vec<String> {
        braking_lines(self.thumb_danger_distance_m, self.thumb_danger_time_s)
    }

    /// Write as pretty JSON to `<dir>/<file_stem>.json`
    pub fn save(&self, dir: &Path) -> Result<PathBuf, SimError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.json", self.file_stem()));
        std::fs::write(&path, serde_json::to_string_pretty(self)?)?;
        info!("Summary written to {}", path.display());
        Ok(path)
    }
}

fn braking_lines(distance_m: f64, time_s: f64) -> Vec<String> {
    vec![
        format!("Braking-Distance: {} m", round2(distance_m)),
        format!("Braking-Time: {} s", round2(time_s)),
    ]
}

/// Round to two decimals for display
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
