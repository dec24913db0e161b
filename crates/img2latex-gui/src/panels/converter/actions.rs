use crate::app::Img2LatexApp;

pub(super) fn actions_section(ui: &mut egui::Ui, app: &mut Img2LatexApp) {
    let controls = app.state.controls();

    ui.horizontal(|ui| {
        // Centre the two buttons under the dropzone.
        let spacing = ui.spacing().item_spacing.x;
        let approx_width = 220.0 + spacing;
        ui.add_space(((ui.available_width() - approx_width) / 2.0).max(0.0));

        if ui
            .add_enabled(
                controls.browse_enabled,
                egui::Button::new(controls.browse_label).min_size(egui::vec2(100.0, 28.0)),
            )
            .clicked()
        {
            app.browse();
        }

        let submit = ui.add_enabled(
            controls.submit_enabled,
            egui::Button::new(controls.submit_label).min_size(egui::vec2(100.0, 28.0)),
        );
        if submit.clicked() {
            app.submit();
        }

        if app.state.is_submitting() {
            ui.add(egui::Spinner::new());
        }
    });
}
