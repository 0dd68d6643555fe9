//! Loading and saving the plot data file. The same JSON shape is used in
//! both directions; export is a point-in-time snapshot, never an automatic
//! write-back.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PlotMapError, Result};
use crate::plot::MapData;

/// Load and validate a plot data file. A malformed or unreachable file is a
/// reported load failure; the caller keeps an empty store and stays usable.
pub fn load_map_data(path: &Path) -> Result<MapData> {
    let content = fs::read_to_string(path)?;
    let data: MapData = serde_json::from_str(&content)?;

    if data.map.width == 0 || data.map.height == 0 {
        return Err(PlotMapError::InvalidDimensions {
            width: data.map.width,
            height: data.map.height,
        });
    }

    info!(
        plots = data.plots.len(),
        map = %data.map.source,
        "loaded plot data"
    );
    Ok(data)
}

/// Write the data pretty-printed, matching the hand-edited source files.
pub fn save_map_data(path: &Path, data: &MapData) -> Result<()> {
    let content = serde_json::to_string_pretty(data)?;
    fs::write(path, content)?;
    info!(plots = data.plots.len(), path = %path.display(), "saved plot data");
    Ok(())
}
