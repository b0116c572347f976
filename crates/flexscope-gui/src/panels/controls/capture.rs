use crate::app::FlexscopeApp;
use crate::states::{HomingStyle, ScanAutofocus, ScanOption, ScanStyle};

pub(super) fn show(ui: &mut egui::Ui, app: &mut FlexscopeApp) {
    let controls = &mut app.ui_state.controls;

    ui.label("Filename");
    ui.text_edit_singleline(&mut controls.filename);
    ui.add_space(4.0);

    ui.checkbox(&mut controls.temporary, "Temporary");
    ui.checkbox(&mut controls.full_resolution, "Full resolution");
    ui.checkbox(&mut controls.store_raw, "Store raw data");
    ui.checkbox(&mut controls.resize_capture, "Resize capture");

    // Dimensions only apply to resized captures.
    let resize = controls.resize_capture;
    ui.horizontal(|ui| {
        ui.label("Width");
        ui.add_enabled(resize, egui::DragValue::new(&mut controls.resize[0]).range(1..=8192));
        ui.label("Height");
        ui.add_enabled(resize, egui::DragValue::new(&mut controls.resize[1]).range(1..=8192));
    });
    ui.separator();

    egui::CollapsingHeader::new("Notes")
        .default_open(false)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut controls.notes)
                    .hint_text("Add notes about this capture...")
                    .desired_rows(3),
            );
        });

    egui::CollapsingHeader::new("Annotations")
        .default_open(false)
        .show(ui, |ui| {
            super::section_placeholder(ui, "Annotation tools will appear here");
        });

    egui::CollapsingHeader::new("Tags")
        .default_open(false)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut controls.tags)
                    .hint_text("Add tags (comma separated)"),
            );
        });

    let mut scan_clicked = false;
    egui::CollapsingHeader::new("Stack and Scan")
        .default_open(false)
        .show(ui, |ui| {
            ui.checkbox(&mut controls.scan_capture, "Scan capture");
            ui.add_enabled_ui(controls.scan_capture, |ui| {
                super::choice_combo(ui, "Scan options", &mut controls.scan_option, ScanOption::ALL);
                egui::Grid::new("scan_steps").num_columns(3).show(ui, |ui| {
                    for (axis, (size, count)) in ["x", "y", "z"]
                        .into_iter()
                        .zip(controls.step_size.iter_mut().zip(controls.steps.iter_mut()))
                    {
                        ui.label(format!("{axis} step size"));
                        ui.add(egui::DragValue::new(size));
                        ui.horizontal(|ui| {
                            ui.label("steps");
                            ui.add(egui::DragValue::new(count));
                        });
                        ui.end_row();
                    }
                });
                super::choice_combo(ui, "AutoFocus", &mut controls.scan_autofocus, ScanAutofocus::ALL);
                super::choice_combo(ui, "Scan style", &mut controls.scan_style, ScanStyle::ALL);
                super::choice_combo(ui, "Homing style", &mut controls.homing, HomingStyle::ALL);
                scan_clicked = ui.button("SCAN").clicked();
            });
        });

    egui::CollapsingHeader::new("Smart Stack")
        .default_open(false)
        .show(ui, |ui| {
            super::section_placeholder(ui, "Smart stack options will appear here");
        });

    ui.add_space(8.0);
    let capture_clicked = ui.button("CAPTURE").clicked();

    let summary = if scan_clicked {
        Some(controls.scan_summary())
    } else if capture_clicked {
        Some(controls.capture_summary())
    } else {
        None
    };
    if let Some(msg) = summary {
        tracing::info!("{msg}");
        app.ui_state.add_log(msg);
    }
}
