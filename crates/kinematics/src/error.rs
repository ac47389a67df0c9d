//! Kinematics Error Types

use thiserror::Error;

/// Inputs for which no braking curve can be produced
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinematicsError {
    /// Input is NaN or infinite
    #[error("{field} must be finite, got {value}")]
    NonFiniteInput { field: &'static str, value: f64 },

    /// Vehicle would be moving backwards
    #[error("Initial velocity must not be negative, got {0} m/s")]
    NegativeVelocity(f64),

    /// Deceleration is zero, negative or not finite so the vehicle never stops
    #[error("Invalid physics state: deceleration {deceleration} m/s^2 must be finite and positive")]
    InvalidPhysicsState { deceleration: f64 },
}
