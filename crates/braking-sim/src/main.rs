//! Braking Simulation - Main Entry Point

use anyhow::Context;
use braking_sim::{init_logging, run, usage, AppConfig, Args, Command};
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    let (raw, extra) = match Args::parse().command {
        Command::Help => {
            print!("{}", usage());
            return Ok(());
        }
        Command::Version => {
            println!("braking-sim {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Simulate { raw, extra } => (raw, extra),
    };

    let config = AppConfig::load().context("failed to load configuration")?;
    init_logging(&config)?;

    info!("=== Braking Simulation v{} ===", env!("CARGO_PKG_VERSION"));
    if !extra.is_empty() {
        warn!("Ignoring extra arguments: {}", extra.join(" "));
    }

    let report = run(&raw, &config).context("braking simulation failed")?;
    println!("Plots have been saved to {}", report.chart.display());
    Ok(())
}
