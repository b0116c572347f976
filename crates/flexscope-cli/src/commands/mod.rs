pub mod config;
pub mod gallery;
pub mod replay;

use std::path::Path;

use anyhow::{Context, Result};
use flexscope_core::config::DashboardConfig;

/// Load `path`, or fall back to the built-in defaults when no file was given.
pub fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    match path {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(DashboardConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), DashboardConfig::default());
    }

    #[test]
    fn missing_file_error_names_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("absent.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err}").contains("absent.toml"), "got: {err}");
    }
}
