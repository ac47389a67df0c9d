//! Braking Simulation
//!
//! Compares a friction-based braking model (mass, road surface, inclination)
//! with the driver-education rule of thumb and renders both as a chart.

mod args;
mod error;
mod pipeline;
mod render;
mod settings;
mod summary;

pub use args::{usage, Args, Command};
pub use error::SimError;
pub use pipeline::{Simulation, SimulationOutcome};
pub use render::ChartRenderer;
pub use settings::{AppConfig, ChartFormat};
pub use summary::{round2, SimulationSummary};

use param_validator::RawArgs;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Files written by one run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub outcome: SimulationOutcome,
    pub chart: PathBuf,
    pub summary: Option<PathBuf>,
}

/// Initialize logging to stderr at the configured level
pub fn init_logging(config: &AppConfig) -> Result<(), SimError> {
    let level = Level::from_str(&config.log_level).unwrap_or(Level::INFO);
    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    let installed = if config.log_json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed.map_err(|err| SimError::Logging(err.to_string()))
}

/// Simulate, render the chart and optionally write the summary
pub fn run(raw: &RawArgs, config: &AppConfig) -> Result<RunReport, SimError> {
    let outcome = Simulation::new(config).run_raw(raw)?;
    if !outcome.validation.is_clean() {
        warn!(
            "{} of {} parameters replaced by defaults",
            outcome.validation.errors.len(),
            outcome.validation.fields_checked
        );
    }

    let chart = ChartRenderer::from_config(config).render(&outcome)?;
    let summary = if config.write_summary {
        Some(outcome.summary.save(&config.output_dir)?)
    } else {
        None
    };

    info!("Braking simulation finished");
    Ok(RunReport {
        outcome,
        chart,
        summary,
    })
}
