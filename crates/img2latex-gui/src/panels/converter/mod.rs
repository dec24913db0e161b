mod actions;
mod dropzone;
mod output;

const CONTENT_MAX_WIDTH: f32 = 560.0;

pub fn show(ctx: &egui::Context, app: &mut crate::app::Img2LatexApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(CONTENT_MAX_WIDTH);
                ui.add_space(12.0);
                ui.heading("Image to LaTeX");
                ui.add_space(12.0);

                dropzone::dropzone_section(ui, app);
                ui.add_space(12.0);
                actions::actions_section(ui, app);
                ui.add_space(16.0);
                output::output_section(ui, app);
            });
        });
    });
}
