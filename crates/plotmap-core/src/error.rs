use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlotMapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid plot data: {0}")]
    InvalidData(#[from] serde_json::Error),

    #[error("Invalid map dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Plot index {index} out of range (total: {total})")]
    PlotIndexOutOfRange { index: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, PlotMapError>;
