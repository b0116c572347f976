use anyhow::Result;
use flexscope_core::config::DashboardConfig;

use crate::summary::print_gallery;

pub fn run(config: &DashboardConfig) -> Result<()> {
    print_gallery(&config.gallery());
    Ok(())
}
