use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use flexscope_core::config::DashboardConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Save the dashboard config to this TOML file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Ignore --config and emit the built-in defaults
    #[arg(long)]
    pub defaults: bool,
}

/// Emit the dashboard config (zoom limits and gallery) that the viewer
/// would run with, to stdout or to `--output`.
pub fn run(args: &ConfigArgs, loaded: &DashboardConfig) -> Result<()> {
    let config = if args.defaults {
        DashboardConfig::default()
    } else {
        loaded.clone()
    };

    let limits = config.viewport.zoom_limits();
    tracing::debug!(step = limits.step(), min = limits.min(), "effective zoom limits");

    match args.output {
        Some(ref path) => {
            config
                .save(path)
                .with_context(|| format!("Cannot write dashboard config {}", path.display()))?;
            println!(
                "Dashboard config ({} images, zoom step {}, floor {}) written to {}",
                config.gallery.len(),
                limits.step(),
                limits.min(),
                path.display()
            );
        }
        None => print!("{}", config.to_toml_string()?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_file_holds_loaded_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("dashboard.toml");
        let mut loaded = DashboardConfig::default();
        loaded.viewport.zoom_step = 0.25;
        loaded.gallery.truncate(2);

        let args = ConfigArgs {
            output: Some(path.clone()),
            defaults: false,
        };
        run(&args, &loaded).unwrap();
        assert_eq!(DashboardConfig::load(&path).unwrap(), loaded);
    }

    #[test]
    fn defaults_flag_ignores_loaded_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("dashboard.toml");
        let mut loaded = DashboardConfig::default();
        loaded.viewport.zoom_min = 0.3;

        let args = ConfigArgs {
            output: Some(path.clone()),
            defaults: true,
        };
        run(&args, &loaded).unwrap();
        assert_eq!(DashboardConfig::load(&path).unwrap(), DashboardConfig::default());
    }
}
