use crate::app::Img2LatexApp;

const LOG_LINES: f32 = 3.0;

pub fn show(ctx: &egui::Context, app: &mut Img2LatexApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * LOG_LINES + spacing * (LOG_LINES - 1.0);

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for msg in &app.ui_state.log_messages {
                    ui.label(msg);
                }
            });

        ui.horizontal(|ui| {
            ui.label(format!("Endpoint: {}", app.config.endpoint));
            ui.separator();
            ui.label(format!("Field: {}", app.config.field_name));
            ui.separator();
            ui.label(if app.state.is_submitting() {
                "Converting"
            } else {
                "Idle"
            });
        });

        ui.add_space(2.0);
    });
}
