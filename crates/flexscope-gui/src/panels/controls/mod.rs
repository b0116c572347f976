use std::fmt;

use flexscope_core::console::Section;

use crate::app::FlexscopeApp;

mod capture;
mod navigate;

const CONTROLS_WIDTH: f32 = 260.0;

/// Control column next to the feed. Only Navigate and Capture have one.
pub fn show(ctx: &egui::Context, app: &mut FlexscopeApp) {
    let section = app.console.active_section();
    if !matches!(section, Section::Navigate | Section::Capture) {
        return;
    }

    egui::SidePanel::left("controls")
        .default_width(CONTROLS_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(CONTROLS_WIDTH - 20.0);
                ui.heading(section.to_string());
                ui.separator();
                match section {
                    Section::Navigate => navigate::show(ui, app),
                    _ => capture::show(ui, app),
                }
            });
        });
}

fn choice_combo<T>(ui: &mut egui::Ui, label: &str, value: &mut T, all: &[T])
where
    T: Copy + PartialEq + fmt::Display,
{
    egui::ComboBox::from_label(label)
        .selected_text(value.to_string())
        .show_ui(ui, |ui| {
            for &choice in all {
                ui.selectable_value(value, choice, choice.to_string());
            }
        });
}

fn section_placeholder(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).italics().weak());
}
