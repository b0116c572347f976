use crate::app::FlexscopeApp;

pub fn show(ctx: &egui::Context, app: &mut FlexscopeApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 3 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

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
            ui.label(format!("Section: {}", app.console.active_section()));
            if let Some(viewport) = app.console.viewport() {
                let t = viewport.current_transform();
                ui.separator();
                ui.label(format!("Zoom: {}%", t.zoom_percent()));
                ui.separator();
                ui.label(format!("Pan: {:.0}, {:.0}", t.pan_x, t.pan_y));
            }
        });

        ui.add_space(2.0);
    });
}
