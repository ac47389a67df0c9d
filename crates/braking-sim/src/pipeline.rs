//! Simulation Pipeline
//!
//! raw args -> validator -> friction resolver -> kinematics engine,
//! validated velocity -> rule of thumb, both -> summary.

use crate::error::SimError;
use crate::settings::AppConfig;
use crate::summary::SimulationSummary;
use friction_resolver::{FrictionResolution, FrictionResolver};
use kinematics::{BrakingInput, KinematicSeries, KinematicsEngine};
use param_validator::{RawArgs, SimulationParameters, ValidationReport, Validator};
use rule_of_thumb::{RuleOfThumb, ThumbEstimates};
use tracing::info;

/// Everything one run produces; never mutated after construction
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    /// Effective parameters, road type already overridden on fallback
    pub params: SimulationParameters,
    pub validation: ValidationReport,
    pub friction: FrictionResolution,
    pub series: KinematicSeries,
    pub thumb: ThumbEstimates,
    pub summary: SimulationSummary,
}

/// Stages of one braking simulation
pub struct Simulation {
    validator: Validator,
    resolver: FrictionResolver,
    engine: KinematicsEngine,
    thumb: RuleOfThumb,
}

impl Simulation {
    /// Build the stages from configuration
    pub fn new(config: &AppConfig) -> Self {
        Self {
            validator: Validator::new(config.defaults.clone()),
            resolver: FrictionResolver::default(),
            engine: KinematicsEngine::new(config.samples),
            thumb: RuleOfThumb::new(config.samples),
        }
    }

    /// Validate raw positional values, then simulate
    pub fn run_raw(&self, raw: &RawArgs) -> Result<SimulationOutcome, SimError> {
        let (params, validation) = self.validator.validate(raw);
        self.simulate(params, validation)
    }

    /// Simulate already validated parameters
    pub fn run(&self, params: SimulationParameters) -> Result<SimulationOutcome, SimError> {
        self.simulate(params, ValidationReport::default())
    }

    fn simulate(
        &self,
        params: SimulationParameters,
        validation: ValidationReport,
    ) -> Result<SimulationOutcome, SimError> {
        let friction = self.resolver.resolve(params.road_type, params.condition);
        let params = SimulationParameters {
            road_type: friction.road_type,
            ..params
        };

        let series = self.engine.simulate(&BrakingInput {
            mass_kg: params.mass_kg,
            slope_deg: params.slope_deg,
            velocity_ms: params.velocity_ms,
            friction: friction.coefficient,
        })?;
        let thumb = self.thumb.estimate(params.velocity_ms);
        let summary = SimulationSummary::new(&params, &friction, &series, &thumb);

        info!(
            "{} kg on {} {} at {} m/s, {} deg: mu={} a=-{:.3} m/s^2, stop {:.2} m in {:.2} s",
            summary.mass_kg,
            summary.condition,
            summary.road_type,
            summary.velocity_ms,
            summary.slope_deg,
            summary.friction,
            summary.deceleration,
            summary.stop_distance_m,
            summary.stop_time_s
        );

        Ok(SimulationOutcome {
            params,
            validation,
            friction,
            series,
            thumb,
            summary,
        })
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
