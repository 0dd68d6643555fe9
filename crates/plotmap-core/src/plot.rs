use serde::{Deserialize, Serialize};

/// Marker fill color used when the data file carries none.
pub const DEFAULT_PLOT_COLOR: &str = "#ff6b6b";

/// One labeled marker, positioned in normalized `[0,1]x[0,1]` coordinates
/// relative to the base image's natural size. The `id` is assigned at load
/// time and never serialized.
#[derive(Clone, Debug, PartialEq)]
pub struct Plot {
    pub id: u64,
    pub number: String,
    pub size: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
}

impl Plot {
    pub fn to_record(&self) -> PlotRecord {
        PlotRecord {
            number: self.number.clone(),
            size: self.size.clone(),
            color: self.color.clone(),
            x: self.x,
            y: self.y,
        }
    }
}

/// On-disk shape of a plot. `size` and `color` may be absent in older files.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlotRecord {
    pub number: String,
    #[serde(default)]
    pub size: String,
    #[serde(default = "default_color")]
    pub color: String,
    pub x: f64,
    pub y: f64,
}

fn default_color() -> String {
    DEFAULT_PLOT_COLOR.to_string()
}

/// Describes the source raster the normalized coordinates refer to. Used to
/// interpret and export coordinates consistently; rendering relies on the
/// decoded image's own dimensions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapMetadata {
    pub width: u32,
    pub height: u32,
    pub source: String,
}

/// Top-level shape of the plot data file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapData {
    pub map: MapMetadata,
    pub plots: Vec<PlotRecord>,
}

/// Parse a `#rrggbb` hex color, falling back to the default accent color on
/// malformed input (data-quality tolerance, not an error).
pub fn parse_hex_color(color: &str) -> [u8; 3] {
    fn parse(s: &str) -> Option<[u8; 3]> {
        let s = s.strip_prefix('#')?;
        if s.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(s.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(s.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(s.get(4..6)?, 16).ok()?;
        Some([r, g, b])
    }
    parse(color)
        .or_else(|| parse(DEFAULT_PLOT_COLOR))
        .unwrap_or([255, 107, 107])
}
