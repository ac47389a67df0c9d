//! Application Error Types

use kinematics::KinematicsError;
use thiserror::Error;

/// Errors that stop a simulation run
#[derive(Debug, Error)]
pub enum SimError {
    /// Braking curve could not be computed
    #[error("Simulation failed: {0}")]
    Kinematics(#[from] KinematicsError),

    /// Configuration could not be loaded or is out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chart backend failed
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Output directory or file error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Summary could not be serialized
    #[error("Summary serialization failed: {0}")]
    Summary(#[from] serde_json::Error),
}

impl From<config::ConfigError> for SimError {
    fn from(err: config::ConfigError) -> Self {
        SimError::Config(err.to_string())
    }
}
