use crate::app::FlexscopeApp;
use crate::states::AutofocusSpeed;

pub(super) fn show(ui: &mut egui::Ui, app: &mut FlexscopeApp) {
    egui::CollapsingHeader::new("Configure")
        .default_open(false)
        .show(ui, |ui| {
            super::section_placeholder(ui, "Configuration options");
        });

    egui::CollapsingHeader::new("Move-to")
        .default_open(true)
        .show(ui, |ui| {
            let controls = &mut app.ui_state.controls;
            egui::Grid::new("move_to").num_columns(2).show(ui, |ui| {
                for (axis, value) in ["x", "y", "z"].into_iter().zip(controls.move_to.iter_mut()) {
                    ui.label(axis);
                    ui.add(egui::DragValue::new(value));
                    ui.end_row();
                }
            });
            if ui.button("MOVE").clicked() {
                let msg = controls.move_summary();
                tracing::info!("{msg}");
                app.ui_state.add_log(msg);
            }
        });

    egui::CollapsingHeader::new("Autofocus")
        .default_open(true)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                for &speed in AutofocusSpeed::ALL {
                    let active = app.ui_state.controls.autofocus == Some(speed);
                    if ui.selectable_label(active, speed.to_string()).clicked() {
                        app.ui_state.controls.autofocus = Some(speed);
                        app.ui_state.add_log(format!("Autofocus {speed}"));
                    }
                }
            });
        });
}
