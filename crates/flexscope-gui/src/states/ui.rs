use super::ControlsState;

/// Top-level screen of the application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Splash,
    Console,
}

/// Local UI toggles that live outside the viewer.
#[derive(Default)]
pub struct UIState {
    pub screen: Screen,
    /// Seconds since app start when the splash was first drawn.
    pub splash_started_at: Option<f64>,
    /// The connect dialog was cancelled.
    pub connect_dismissed: bool,
    pub dark_mode: bool,
    pub show_about: bool,
    pub controls: ControlsState,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
