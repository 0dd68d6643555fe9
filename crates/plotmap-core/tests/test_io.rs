use std::io::Write;

use tempfile::NamedTempFile;

use plotmap_core::error::PlotMapError;
use plotmap_core::io::{load_map_data, save_map_data};
use plotmap_core::plot::{MapData, MapMetadata, PlotRecord, DEFAULT_PLOT_COLOR};

fn write_temp(content: &str) -> NamedTempFile {
    let mut tmpfile = NamedTempFile::new().unwrap();
    tmpfile.write_all(content.as_bytes()).unwrap();
    tmpfile.flush().unwrap();
    tmpfile
}

#[test]
fn test_load_full_file() {
    let file = write_temp(
        r##"{
            "map": { "width": 9283, "height": 14028, "source": "map.jpg" },
            "plots": [
                { "number": "Plot 1", "size": "450 sqm", "color": "#4ecdc4", "x": 0.12, "y": 0.34 },
                { "number": "2", "x": 0.56, "y": 0.78 }
            ]
        }"##,
    );

    let data = load_map_data(file.path()).unwrap();
    assert_eq!(data.map.width, 9283);
    assert_eq!(data.plots.len(), 2);
    assert_eq!(data.plots[0].size, "450 sqm");
    // Missing size/color fall back to defaults.
    assert_eq!(data.plots[1].size, "");
    assert_eq!(data.plots[1].color, DEFAULT_PLOT_COLOR);
}

#[test]
fn test_load_malformed_file_is_an_error() {
    let file = write_temp("{ not json");
    assert!(matches!(
        load_map_data(file.path()),
        Err(PlotMapError::InvalidData(_))
    ));
}

#[test]
fn test_load_missing_file_is_an_error() {
    let err = load_map_data(std::path::Path::new("/nonexistent/plots.json")).unwrap_err();
    assert!(matches!(err, PlotMapError::Io(_)));
}

#[test]
fn test_load_rejects_zero_dimensions() {
    let file = write_temp(r#"{ "map": { "width": 0, "height": 100, "source": "m.jpg" }, "plots": [] }"#);
    assert!(matches!(
        load_map_data(file.path()),
        Err(PlotMapError::InvalidDimensions { width: 0, .. })
    ));
}

#[test]
fn test_save_and_reload_round_trip() {
    let data = MapData {
        map: MapMetadata {
            width: 100,
            height: 200,
            source: "map.jpg".to_string(),
        },
        plots: vec![PlotRecord {
            number: "Plot 7".to_string(),
            size: "1 acre".to_string(),
            color: "#aabbcc".to_string(),
            x: 0.25,
            y: 0.5,
        }],
    };

    let file = NamedTempFile::new().unwrap();
    save_map_data(file.path(), &data).unwrap();
    let loaded = load_map_data(file.path()).unwrap();

    assert_eq!(loaded.map.source, "map.jpg");
    assert_eq!(loaded.plots[0].number, "Plot 7");
    assert_eq!(loaded.plots[0].x, 0.25);
}
