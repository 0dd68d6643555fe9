use image::DynamicImage;

/// Largest texture edge we upload. Larger rasters are downscaled for display
/// only; geometry keeps using the natural size.
pub const MAX_TEXTURE_DIM: u32 = 4096;

/// Convert a decoded image to an egui texture image, downscaling if either
/// edge exceeds [`MAX_TEXTURE_DIM`].
pub fn to_color_image(decoded: &DynamicImage) -> egui::ColorImage {
    let (w, h) = (decoded.width(), decoded.height());
    let scaled;
    let display = if w.max(h) > MAX_TEXTURE_DIM {
        let scale = MAX_TEXTURE_DIM as f64 / w.max(h) as f64;
        let dw = ((w as f64 * scale) as u32).max(1);
        let dh = ((h as f64 * scale) as u32).max(1);
        scaled = decoded.resize_exact(dw, dh, image::imageops::FilterType::Triangle);
        &scaled
    } else {
        decoded
    };

    let rgba = display.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}
