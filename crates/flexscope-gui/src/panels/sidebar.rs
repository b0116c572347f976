use flexscope_core::console::Section;

use crate::app::FlexscopeApp;

const SIDEBAR_WIDTH: f32 = 120.0;

pub fn show(ctx: &egui::Context, app: &mut FlexscopeApp) {
    egui::SidePanel::left("sidebar")
        .exact_width(SIDEBAR_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(8.0);
            ui.spacing_mut().item_spacing.y = 8.0;
            for section in Section::ALL {
                let active = app.console.active_section() == section;
                if ui.selectable_label(active, section.to_string()).clicked() {
                    app.console.set_section(section);
                }
            }
        });
}
