use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use plotmap_core::calibrate::interpolate_positions;
use plotmap_core::io::{load_map_data, save_map_data};

use super::load_calibration_points;

#[derive(Args)]
pub struct InterpolateArgs {
    /// Input plot data file (JSON)
    pub file: PathBuf,

    /// Output file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Anchor list: [{ "plotNumber": "...", "x": ..., "y": ... }]
    #[arg(long)]
    pub anchors: PathBuf,
}

pub fn run(args: &InterpolateArgs) -> Result<()> {
    let mut data = load_map_data(&args.file)?;
    let anchors = load_calibration_points(&args.anchors)?;
    if anchors.len() < 2 {
        bail!("interpolation needs at least 2 anchors, got {}", anchors.len());
    }

    interpolate_positions(&mut data.plots, &anchors);
    save_map_data(&args.output, &data)?;

    println!(
        "{} {} plots between {} anchors -> {}",
        console::style("Interpolated").green(),
        data.plots.len(),
        anchors.len(),
        args.output.display()
    );
    Ok(())
}
