//! weathering: run the chemical weathering feedback box model and plot the
//! resulting time series.
//!
//! Usage:
//!   cargo run -p weathering-cli --
//!   cargo run -p weathering-cli -- --steps 2000 --output outputs/long_run.png
//!   cargo run -p weathering-cli -- --config run.toml

mod plot;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use weathering_core::config::ModelConfig;
use weathering_core::integrator::Integrator;

use crate::plot::PlotConfig;

/// Two-box carbon cycle model with a chemical weathering temperature feedback
#[derive(Parser, Debug)]
#[command(name = "weathering")]
#[command(about = "Run the weathering feedback box model and plot the time series")]
struct Args {
    /// Path to a TOML run configuration; defaults apply for omitted values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of time steps
    #[arg(short, long)]
    steps: Option<usize>,

    /// Output image path
    #[arg(short, long, default_value = "outputs/time_series_plot.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ModelConfig::from_path(path)
            .with_context(|| format!("load run configuration from {}", path.display()))?,
        None => ModelConfig::default(),
    };
    if let Some(steps) = args.steps {
        config.steps = steps;
    }

    let trajectory = Integrator::from_config(config)
        .run()
        .context("run the box model")?;

    if let Some(dir) = args.output.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("create output directory {}", dir.display()))?;
        }
    }
    plot::render_time_series(&trajectory, &args.output, &PlotConfig::default())
        .with_context(|| format!("render plot to {}", args.output.display()))?;

    let last = trajectory.last();
    log::info!(
        "wrote {} steps to {} (final: rock={:.1} GtC, atmosphere={:.1} GtC, temperature={:.2} °C)",
        trajectory.len(),
        args.output.display(),
        last.rock,
        last.atmosphere,
        last.temperature
    );

    Ok(())
}
