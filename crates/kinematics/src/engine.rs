//! Constant Deceleration Braking Model

use crate::error::KinematicsError;
use crate::series::KinematicSeries;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Standard acceleration of gravity (m/s^2)
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Default number of samples per curve
pub const DEFAULT_SAMPLES: usize = 50;

/// Fewest samples that still describe a curve (start and stop)
pub const MIN_SAMPLES: usize = 2;

/// Cosines this close to zero count as a vertical road
const COS_EPSILON: f64 = 1e-12;

/// Physical inputs of one braking run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrakingInput {
    /// Vehicle mass (kg)
    pub mass_kg: f64,
    /// Road inclination (degrees)
    pub slope_deg: f64,
    /// Velocity when braking starts (m/s)
    pub velocity_ms: f64,
    /// Road friction coefficient
    pub friction: f64,
}

impl BrakingInput {
    fn check_finite(&self) -> Result<(), KinematicsError> {
        let fields = [
            ("velocity", self.velocity_ms),
            ("mass", self.mass_kg),
            ("slope", self.slope_deg),
            ("friction", self.friction),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(KinematicsError::NonFiniteInput { field, value });
            }
        }
        if self.velocity_ms < 0.0 {
            return Err(KinematicsError::NegativeVelocity(self.velocity_ms));
        }
        Ok(())
    }

    /// Normal force on the inclined road (N); zero on a vertical road
    pub fn normal_force(&self) -> f64 {
        let cos = self.slope_deg.to_radians().cos();
        let cos = if cos.abs() < COS_EPSILON { 0.0 } else { cos };
        self.mass_kg * STANDARD_GRAVITY * cos
    }

    /// Friction force opposing the motion (N)
    pub fn friction_force(&self) -> f64 {
        self.friction * self.normal_force()
    }

    /// Deceleration from friction force over mass (m/s^2).
    ///
    /// Mass cancels out algebraically but is kept in the computation.
    pub fn deceleration(&self) -> f64 {
        self.friction_force() / self.mass_kg
    }
}

/// Produces braking curves with a fixed sample count
#[derive(Debug, Clone)]
pub struct KinematicsEngine {
    samples: usize,
}

impl KinematicsEngine {
    /// Create an engine; counts below `MIN_SAMPLES` are raised to it
    pub fn new(samples: usize) -> Self {
        Self {
            samples: samples.max(MIN_SAMPLES),
        }
    }

    /// Number of samples per curve
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Simulate braking until standstill
    pub fn simulate(&self, input: &BrakingInput) -> Result<KinematicSeries, KinematicsError> {
        input.check_finite()?;

        let deceleration = input.deceleration();
        if !deceleration.is_finite() || deceleration <= 0.0 {
            return Err(KinematicsError::InvalidPhysicsState { deceleration });
        }

        let series = KinematicSeries::sample(input.velocity_ms, deceleration, self.samples);
        debug!(
            "Braking from {} m/s at {:.4} m/s^2: stop after {:.3} s / {:.3} m",
            input.velocity_ms, deceleration, series.stop_time_s, series.stop_distance_m
        );
        Ok(series)
    }
}

impl Default for KinematicsEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES)
    }
}
