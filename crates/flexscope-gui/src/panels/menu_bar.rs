use std::path::PathBuf;

use anyhow::Context as _;
use flexscope_core::config::DashboardConfig;
use flexscope_core::input::ViewportEvent;
use flexscope_core::viewport::ZoomDirection;

use crate::app::FlexscopeApp;
use crate::messages::UiMessage;

pub fn show(ctx: &egui::Context, app: &mut FlexscopeApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let has_image = app.console.viewport().is_some();
                ui.add_enabled_ui(has_image, |ui| {
                    if ui.button("Zoom In").clicked() {
                        ui.close();
                        app.send_viewport_event(ViewportEvent::ZoomButton(ZoomDirection::In));
                    }
                    if ui.button("Zoom Out").clicked() {
                        ui.close();
                        app.send_viewport_event(ViewportEvent::ZoomButton(ZoomDirection::Out));
                    }
                    if ui.button("Reset Zoom").clicked() {
                        ui.close();
                        app.send_viewport_event(ViewportEvent::Reset);
                    }
                });

                ui.separator();
                ui.checkbox(&mut app.ui_state.dark_mode, "Dark Mode");
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn import_config(app: &mut FlexscopeApp) {
    let msg_tx = app.msg_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let _ = msg_tx.send(import_message(path));
    });
}

fn export_config(app: &mut FlexscopeApp) {
    let msg_tx = app.msg_tx.clone();
    let config = app.config.clone();

    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("flexscope.toml")
            .save_file()
        else {
            return;
        };
        let _ = msg_tx.send(export_message(&config, path));
    });
}

fn import_message(path: PathBuf) -> UiMessage {
    let loaded = DashboardConfig::load(&path)
        .with_context(|| format!("failed to import {}", path.display()));
    match loaded {
        Ok(config) => UiMessage::ConfigImported { path, config },
        Err(e) => UiMessage::Error {
            message: format!("{e:#}"),
        },
    }
}

fn export_message(config: &DashboardConfig, path: PathBuf) -> UiMessage {
    let saved = config
        .save(&path)
        .with_context(|| format!("failed to export {}", path.display()));
    match saved {
        Ok(()) => UiMessage::ConfigExported { path },
        Err(e) => UiMessage::Error {
            message: format!("{e:#}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_error_names_path_and_cause() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("absent.toml");
        let UiMessage::Error { message } = import_message(path) else {
            panic!("expected an error message");
        };
        assert!(message.starts_with("failed to import"), "got: {message}");
        assert!(message.contains("absent.toml"), "got: {message}");
        // Alternate formatting appends the underlying io error.
        assert!(message.contains(": "), "got: {message}");
    }

    #[test]
    fn export_then_import_round_trips() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("flexscope.toml");
        let config = DashboardConfig::default();
        assert!(matches!(
            export_message(&config, path.clone()),
            UiMessage::ConfigExported { .. }
        ));
        let UiMessage::ConfigImported { config: imported, .. } = import_message(path) else {
            panic!("expected an imported config");
        };
        assert_eq!(imported, config);
    }

    #[test]
    fn export_into_missing_dir_is_reported() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("no_such_dir").join("flexscope.toml");
        let UiMessage::Error { message } = export_message(&DashboardConfig::default(), path) else {
            panic!("expected an error message");
        };
        assert!(message.starts_with("failed to export"), "got: {message}");
    }
}
