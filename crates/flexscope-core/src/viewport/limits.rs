use crate::consts::{ZOOM_DECIMALS, ZOOM_MIN, ZOOM_STEP};

/// Smallest step or floor the controller can honour after rounding.
const LIMIT_RESOLUTION: f64 = 0.01;

/// Step size and lower bound for zooming. Zoom has no upper bound.
///
/// Both values are finite, at least `0.01` and already rounded to two
/// decimals, so a clamped zoom never rounds below the floor and a single
/// step always moves the zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    step: f64,
    min: f64,
}

impl ZoomLimits {
    /// Returns `None` unless both `step` and `min` are usable limit values.
    pub fn new(step: f64, min: f64) -> Option<Self> {
        (Self::is_valid_value(step) && Self::is_valid_value(min)).then_some(Self { step, min })
    }

    /// A positive value with at most two decimals.
    pub fn is_valid_value(value: f64) -> bool {
        value.is_finite() && value >= LIMIT_RESOLUTION && round_zoom(value) == value
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn min(&self) -> f64 {
        self.min
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            step: ZOOM_STEP,
            min: ZOOM_MIN,
        }
    }
}

pub(crate) fn round_zoom(zoom: f64) -> f64 {
    let scale = 10f64.powi(ZOOM_DECIMALS);
    (zoom * scale).round() / scale
}
