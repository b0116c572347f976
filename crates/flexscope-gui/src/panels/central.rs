use flexscope_core::console::Section;

use crate::app::FlexscopeApp;

pub fn show(ctx: &egui::Context, app: &mut FlexscopeApp) {
    match app.console.active_section() {
        Section::Gallery => super::gallery::show(ctx, app),
        Section::View => super::viewport::show(ctx, app),
        _ => {
            egui::CentralPanel::default().show(ctx, |ui| {
                super::placeholder(
                    ui,
                    "Microscope Feed",
                    Some("Camera stream will appear here"),
                );
            });
        }
    }
}
