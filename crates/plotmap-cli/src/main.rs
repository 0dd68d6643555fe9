mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "plotmap", about = "Offline plot-map data and calibration tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show plot data file metadata
    Info(commands::info::InfoArgs),
    /// Apply an affine correction to every plot position
    Correct(commands::correct::CorrectArgs),
    /// Apply exact per-plot position overrides from a calibration list
    Calibrate(commands::calibrate::CalibrateArgs),
    /// Interpolate positions between known calibration anchors
    Interpolate(commands::interpolate::InterpolateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Correct(args) => commands::correct::run(args),
        Commands::Calibrate(args) => commands::calibrate::run(args),
        Commands::Interpolate(args) => commands::interpolate::run(args),
    }
}
