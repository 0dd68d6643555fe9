use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use plotmap_core::io::load_map_data;

#[derive(Args)]
pub struct InfoArgs {
    /// Input plot data file (JSON)
    pub file: PathBuf,

    /// Base map image to check against the metadata dimensions
    #[arg(long)]
    pub image: Option<PathBuf>,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let data = load_map_data(&args.file)?;

    println!("File:        {}", args.file.display());
    println!("Map source:  {}", data.map.source);
    println!("Dimensions:  {}x{}", data.map.width, data.map.height);
    println!("Plots:       {}", data.plots.len());

    if !data.plots.is_empty() {
        let (mut min_x, mut max_x) = (f64::MAX, f64::MIN);
        let (mut min_y, mut max_y) = (f64::MAX, f64::MIN);
        let mut out_of_range = 0usize;
        for plot in &data.plots {
            min_x = min_x.min(plot.x);
            max_x = max_x.max(plot.x);
            min_y = min_y.min(plot.y);
            max_y = max_y.max(plot.y);
            if !(0.0..=1.0).contains(&plot.x) || !(0.0..=1.0).contains(&plot.y) {
                out_of_range += 1;
            }
        }
        println!("X range:     [{min_x:.4}, {max_x:.4}]");
        println!("Y range:     [{min_y:.4}, {max_y:.4}]");
        if out_of_range > 0 {
            println!(
                "{}",
                console::style(format!("Warning: {out_of_range} plots outside [0,1]")).yellow()
            );
        }
    }

    if let Some(ref image_path) = args.image {
        let (w, h) = image::image_dimensions(image_path)?;
        println!("Image:       {} ({w}x{h})", image_path.display());
        if w != data.map.width || h != data.map.height {
            println!(
                "{}",
                console::style(format!(
                    "Warning: image is {w}x{h} but metadata says {}x{}",
                    data.map.width, data.map.height
                ))
                .yellow()
            );
        }
    }

    Ok(())
}
