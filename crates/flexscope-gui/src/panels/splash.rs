use crate::app::FlexscopeApp;
use crate::states::Screen;

/// Seconds before the connect dialog appears.
const CONNECT_DIALOG_DELAY: f64 = 4.0;

pub fn show(ctx: &egui::Context, app: &mut FlexscopeApp) {
    let now = ctx.input(|i| i.time);
    let started = *app.ui_state.splash_started_at.get_or_insert(now);
    let elapsed = now - started;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.heading("Open Flexure Connect");
            ui.add_space(12.0);
            let progress = (elapsed / CONNECT_DIALOG_DELAY).min(1.0) as f32;
            ui.add(egui::ProgressBar::new(progress).desired_width(240.0));
        });
    });

    if elapsed < CONNECT_DIALOG_DELAY {
        ctx.request_repaint();
        return;
    }
    if app.ui_state.connect_dismissed {
        return;
    }

    egui::Window::new("Connect to Local Host")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Would you like to connect to the local host?");
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    app.ui_state.connect_dismissed = true;
                }
                if ui.button("Connect").clicked() {
                    tracing::info!("connected to local host");
                    app.ui_state.screen = Screen::Console;
                }
            });
        });
}
