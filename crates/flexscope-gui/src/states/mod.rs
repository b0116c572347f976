mod controls;
mod ui;

pub use controls::{AutofocusSpeed, ControlsState, HomingStyle, ScanAutofocus, ScanOption, ScanStyle};
pub use ui::{Screen, UIState};
