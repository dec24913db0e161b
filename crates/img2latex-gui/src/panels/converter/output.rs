use crate::app::Img2LatexApp;
use crate::panels::helpers::section_header;

const OUTPUT_ROWS: usize = 6;

pub(super) fn output_section(ui: &mut egui::Ui, app: &mut Img2LatexApp) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
        section_header(ui, "LaTeX Output:", None);

        // `&str` is a read-only text buffer: selectable, never editable.
        let mut text: &str = app.state.output_text();
        ui.add(
            egui::TextEdit::multiline(&mut text)
                .desired_rows(OUTPUT_ROWS)
                .desired_width(f32::INFINITY)
                .code_editor(),
        );

        let has_result = !app.state.result_text().is_empty();
        ui.add_space(4.0);
        if ui
            .add_enabled(has_result, egui::Button::new("Copy"))
            .clicked()
        {
            ui.ctx().copy_text(app.state.result_text().to_string());
            app.ui_state.add_log("Copied LaTeX to clipboard".into());
        }
    });
}
