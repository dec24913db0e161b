use egui::Color32;

use crate::app::Img2LatexApp;
use crate::panels::helpers::dashed_rect;

const DROPZONE_MIN_HEIGHT: f32 = 160.0;
const PREVIEW_MAX_HEIGHT: f32 = 140.0;

const BORDER_IDLE: Color32 = Color32::from_gray(120);
const BORDER_HOVER: Color32 = Color32::from_gray(170);
const BORDER_ACTIVE: Color32 = Color32::from_rgb(96, 165, 250);
const FILL_ACTIVE: Color32 = Color32::from_gray(34);

pub(super) fn dropzone_section(ui: &mut egui::Ui, app: &mut Img2LatexApp) {
    let drag_active = app.ui_state.drag_active;
    let width = ui.available_width();

    let inner = egui::Frame::NONE
        .fill(if drag_active {
            FILL_ACTIVE
        } else {
            Color32::TRANSPARENT
        })
        .corner_radius(12.0)
        .inner_margin(24.0)
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(width - 48.0, DROPZONE_MIN_HEIGHT));
            ui.vertical_centered(|ui| {
                if let Some(ref texture) = app.preview.texture {
                    ui.add(egui::Image::new(texture).max_height(PREVIEW_MAX_HEIGHT));
                    ui.add_space(6.0);
                }
                if app.state.has_file() {
                    ui.label(app.state.dropzone_text());
                } else {
                    ui.weak(app.state.dropzone_text());
                }
            });
        });

    let rect = inner.response.rect;
    let response = ui
        .interact(rect, ui.id().with("dropzone"), egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    let border = if drag_active {
        BORDER_ACTIVE
    } else if response.hovered() {
        BORDER_HOVER
    } else {
        BORDER_IDLE
    };
    dashed_rect(ui, rect, egui::Stroke::new(2.0, border));

    if response.clicked() {
        app.browse();
    }
}
