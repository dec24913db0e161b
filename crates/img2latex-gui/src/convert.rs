use img2latex_core::selection::SelectedImage;

/// Longest edge of the dropzone thumbnail, in pixels.
const THUMBNAIL_EDGE: u32 = 256;

/// Decode the selection into a downscaled egui ColorImage for preview.
pub fn thumbnail(image: &SelectedImage) -> Option<egui::ColorImage> {
    let decoded = image::load_from_memory(image.bytes()).ok()?;
    let rgba = decoded.thumbnail(THUMBNAIL_EDGE, THUMBNAIL_EDGE).to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
