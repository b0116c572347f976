use std::sync::mpsc;

use flexscope_core::config::DashboardConfig;
use flexscope_core::console::Console;
use flexscope_core::input::{self, ViewportEvent};

use crate::messages::UiMessage;
use crate::panels;
use crate::states::{Screen, UIState};

pub struct FlexscopeApp {
    pub msg_tx: mpsc::Sender<UiMessage>,
    pub msg_rx: mpsc::Receiver<UiMessage>,
    pub ui_state: UIState,
    pub console: Console,
    pub config: DashboardConfig,
}

impl FlexscopeApp {
    pub fn new() -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let config = DashboardConfig::default();

        Self {
            msg_tx,
            msg_rx,
            ui_state: UIState::default(),
            console: console_for(&config),
            config,
        }
    }

    /// Drain all pending results from dialog threads.
    fn poll_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            match msg {
                UiMessage::ConfigImported { path, config } => {
                    self.console = console_for(&config);
                    self.config = config;
                    self.ui_state
                        .add_log(format!("Config imported: {}", path.display()));
                }
                UiMessage::ConfigExported { path } => {
                    self.ui_state
                        .add_log(format!("Config exported: {}", path.display()));
                }
                UiMessage::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    /// Route a viewer event to the active viewport, if any. Returns whether
    /// the host must swallow the original scroll input.
    pub fn send_viewport_event(&mut self, event: ViewportEvent) -> bool {
        let Some(viewport) = self.console.viewport_mut() else {
            return false;
        };
        match input::dispatch(viewport, event) {
            Ok(outcome) => outcome.suppress_default_scroll,
            Err(e) => {
                tracing::warn!("dropped viewer input: {e}");
                self.ui_state.add_log(format!("ERROR: {e}"));
                false
            }
        }
    }
}

fn console_for(config: &DashboardConfig) -> Console {
    Console::new(config.gallery(), config.viewport.zoom_limits())
}

impl eframe::App for FlexscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_messages();

        ctx.set_visuals(if self.ui_state.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        if self.ui_state.screen == Screen::Splash {
            panels::splash::show(ctx, self);
            return;
        }

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::sidebar::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::central::show(ctx, self);

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About Flexscope")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Flexscope");
                        ui.label("Flexure Microscope Console");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
