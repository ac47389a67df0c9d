//! Application Configuration
//!
//! Built-in defaults, overridden by an optional `braking-sim.{toml,yaml,json}`
//! in the working directory, overridden by `BRAKING_SIM_*` environment
//! variables (nested keys separated by `__`, e.g. `BRAKING_SIM_DEFAULTS__MASS_KG`).

use crate::error::SimError;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use kinematics::{DEFAULT_SAMPLES, MIN_SAMPLES};
use param_validator::ParameterDefaults;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Base name of the optional configuration file
pub const CONFIG_FILE: &str = "braking-sim";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "BRAKING_SIM";

/// Output file format of the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    Svg,
    Png,
}

impl ChartFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ChartFormat::Svg => "svg",
            ChartFormat::Png => "png",
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Samples per braking curve and rule-of-thumb ramp
    pub samples: usize,
    /// Directory the chart is written to
    pub output_dir: PathBuf,
    /// Chart file format
    pub format: ChartFormat,
    /// Also write the summary record as JSON next to the chart
    pub write_summary: bool,
    /// trace, debug, info, warn or error
    pub log_level: String,
    /// Emit log events as JSON lines
    pub log_json: bool,
    /// Values used for missing or rejected parameters
    pub defaults: ParameterDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            output_dir: PathBuf::from("."),
            format: ChartFormat::Svg,
            write_summary: false,
            log_level: "info".to_string(),
            log_json: false,
            defaults: ParameterDefaults::default(),
        }
    }
}

impl AppConfig {
    /// Load from the working-directory file and the environment
    pub fn load() -> Result<Self, SimError> {
        let builder = config::Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        Self::build(builder)
    }

    /// Deserialize and check a prepared set of sources
    pub fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, SimError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no run can use
    pub fn validate(&self) -> Result<(), SimError> {
        if self.samples < MIN_SAMPLES {
            return Err(SimError::Config(format!(
                "samples must be at least {}, got {}",
                MIN_SAMPLES, self.samples
            )));
        }
        Ok(())
    }
}
