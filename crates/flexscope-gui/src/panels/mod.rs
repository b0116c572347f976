pub mod central;
pub mod controls;
pub mod gallery;
pub mod menu_bar;
pub mod sidebar;
pub mod splash;
pub mod status;
pub mod viewport;

fn placeholder(ui: &mut egui::Ui, title: &str, detail: Option<&str>) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(title)
                    .size(18.0)
                    .color(egui::Color32::from_gray(120)),
            );
            if let Some(d) = detail {
                ui.small(d);
            }
        });
    });
}
