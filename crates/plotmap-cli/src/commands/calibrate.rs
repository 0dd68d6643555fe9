use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use plotmap_core::calibrate::apply_overrides;
use plotmap_core::io::{load_map_data, save_map_data};

use super::load_calibration_points;

#[derive(Args)]
pub struct CalibrateArgs {
    /// Input plot data file (JSON)
    pub file: PathBuf,

    /// Output file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Calibration list: [{ "plotNumber": "...", "x": ..., "y": ... }]
    #[arg(long)]
    pub points: PathBuf,
}

pub fn run(args: &CalibrateArgs) -> Result<()> {
    let mut data = load_map_data(&args.file)?;
    let points = load_calibration_points(&args.points)?;

    let applied = apply_overrides(&mut data.plots, &points);
    save_map_data(&args.output, &data)?;

    println!(
        "{} {applied} of {} plots from {} calibration points -> {}",
        console::style("Updated").green(),
        data.plots.len(),
        points.len(),
        args.output.display()
    );
    if applied < points.len() {
        println!(
            "{}",
            console::style(format!(
                "Warning: {} calibration points matched no plot",
                points.len() - applied
            ))
            .yellow()
        );
    }
    Ok(())
}
