use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use flexscope_core::config::DashboardConfig;
use flexscope_core::console::Console;
use flexscope_core::script::{parse_script, replay};
use tracing::info;

use crate::summary::print_replay;

#[derive(Args)]
pub struct ReplayArgs {
    /// Event script file
    pub script: PathBuf,

    /// Print the CSS transform string instead of the raw triple
    #[arg(long)]
    pub css: bool,
}

pub fn run(args: &ReplayArgs, config: &DashboardConfig) -> Result<()> {
    let source = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read {}", args.script.display()))?;
    let steps = parse_script(&source)
        .with_context(|| format!("Failed to parse {}", args.script.display()))?;
    info!("{} steps in {}", steps.len(), args.script.display());

    let mut console = Console::new(config.gallery(), config.viewport.zoom_limits());
    let frames = replay(&mut console, &steps)
        .with_context(|| format!("Replay of {} failed", args.script.display()))?;

    print_replay(&frames, args.css);
    Ok(())
}
