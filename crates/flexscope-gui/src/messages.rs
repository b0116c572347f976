use std::path::PathBuf;

use flexscope_core::config::DashboardConfig;

/// Results sent from dialog helper threads back to the UI thread.
pub enum UiMessage {
    ConfigImported {
        path: PathBuf,
        config: DashboardConfig,
    },
    ConfigExported {
        path: PathBuf,
    },
    Error {
        message: String,
    },
}
