use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use plotmap_core::calibrate::{
    apply_global_correction, Correction, ASPECT_CORRECTION, GENERAL_SHIFT, MAJOR_SHIFT,
};
use plotmap_core::io::{load_map_data, save_map_data};

#[derive(Clone, ValueEnum)]
pub enum PresetArg {
    /// Shift all plots slightly up and left
    GeneralShift,
    /// Compress horizontally, expand vertically
    Aspect,
    /// Major repositioning
    MajorShift,
}

#[derive(Args)]
pub struct CorrectArgs {
    /// Input plot data file (JSON)
    pub file: PathBuf,

    /// Output file path
    #[arg(short, long)]
    pub output: PathBuf,

    /// Named correction preset (overridden by explicit values below)
    #[arg(long, value_enum)]
    pub preset: Option<PresetArg>,

    /// Normalized X offset added after scaling
    #[arg(long)]
    pub offset_x: Option<f64>,

    /// Normalized Y offset added after scaling
    #[arg(long)]
    pub offset_y: Option<f64>,

    /// X scale factor
    #[arg(long)]
    pub scale_x: Option<f64>,

    /// Y scale factor
    #[arg(long)]
    pub scale_y: Option<f64>,
}

impl CorrectArgs {
    fn correction(&self) -> Correction {
        let base = match self.preset {
            Some(PresetArg::GeneralShift) => GENERAL_SHIFT,
            Some(PresetArg::Aspect) => ASPECT_CORRECTION,
            Some(PresetArg::MajorShift) => MAJOR_SHIFT,
            None => Correction::default(),
        };
        Correction {
            offset_x: self.offset_x.unwrap_or(base.offset_x),
            offset_y: self.offset_y.unwrap_or(base.offset_y),
            scale_x: self.scale_x.unwrap_or(base.scale_x),
            scale_y: self.scale_y.unwrap_or(base.scale_y),
        }
    }
}

pub fn run(args: &CorrectArgs) -> Result<()> {
    let mut data = load_map_data(&args.file)?;
    let correction = args.correction();
    tracing::debug!(?correction, "applying global correction");

    let pb = ProgressBar::new(data.plots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Correcting plots");

    // Chunked so the bar moves on large files without per-plot overhead.
    for chunk in data.plots.chunks_mut(256) {
        apply_global_correction(chunk, &correction);
        pb.inc(chunk.len() as u64);
    }
    pb.finish_with_message("Corrected");

    save_map_data(&args.output, &data)?;

    println!(
        "{} {} plots (offset {:+.3},{:+.3} scale {:.3},{:.3}) -> {}",
        console::style("Corrected").green(),
        data.plots.len(),
        correction.offset_x,
        correction.offset_y,
        correction.scale_x,
        correction.scale_y,
        args.output.display()
    );
    Ok(())
}
