//! Braking Kinematics Engine
//!
//! Derives a constant deceleration from mass, road inclination and friction
//! coefficient, then samples velocity and distance until the vehicle stops.
//!
//! The slope only reduces the normal force through its cosine. The component
//! of gravity along the slope is not part of the model.

mod engine;
mod error;
mod series;

pub use engine::{BrakingInput, KinematicsEngine, DEFAULT_SAMPLES, MIN_SAMPLES, STANDARD_GRAVITY};
pub use error::KinematicsError;
pub use series::{KinematicSample, KinematicSeries};
