/// Thumbnail of the held image.
#[derive(Default)]
pub struct PreviewState {
    pub texture: Option<egui::TextureHandle>,
}

impl PreviewState {
    pub fn clear(&mut self) {
        self.texture = None;
    }
}
