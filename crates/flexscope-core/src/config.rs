use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{ZOOM_MIN, ZOOM_STEP};
use crate::error::Result;
use crate::gallery::{sample_items, Gallery, ImageDescriptor};
use crate::viewport::ZoomLimits;

/// Top-level dashboard configuration, stored as TOML.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub viewport: ViewportConfig,
    #[serde(default = "sample_items")]
    pub gallery: Vec<ImageDescriptor>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            viewport: ViewportConfig::default(),
            gallery: sample_items(),
        }
    }
}

impl DashboardConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn gallery(&self) -> Gallery {
        Gallery::new(self.gallery.clone())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Zoom increment per button press or wheel notch.
    pub zoom_step: f64,
    /// Lowest reachable zoom factor.
    pub zoom_min: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            zoom_step: ZOOM_STEP,
            zoom_min: ZOOM_MIN,
        }
    }
}

impl ViewportConfig {
    /// Zoom limits with unusable values replaced by the defaults. Each field
    /// must be a finite value of at least 0.01 with at most two decimals,
    /// otherwise rounding could push zoom under the floor or swallow a step.
    pub fn zoom_limits(&self) -> ZoomLimits {
        let step = usable_or("zoom_step", self.zoom_step, ZOOM_STEP);
        let min = usable_or("zoom_min", self.zoom_min, ZOOM_MIN);
        ZoomLimits::new(step, min).unwrap_or_default()
    }
}

fn usable_or(field: &str, value: f64, fallback: f64) -> f64 {
    if ZoomLimits::is_valid_value(value) {
        value
    } else {
        warn!(
            "viewport.{field} = {value} is not a two-decimal value of at least 0.01, using {fallback}"
        );
        fallback
    }
}
