use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::consts::DEFAULT_ZOOM;
use crate::gallery::ImageDescriptor;

use super::limits::{round_zoom, ZoomLimits};
use super::state::{DragState, ViewportState};
use super::transform::ViewportTransform;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl fmt::Display for ZoomDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => write!(f, "in"),
            Self::Out => write!(f, "out"),
        }
    }
}

impl FromStr for ZoomDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in" | "+" => Ok(Self::In),
            "out" | "-" => Ok(Self::Out),
            other => Err(format!("expected 'in' or 'out', got '{other}'")),
        }
    }
}

/// Owns the [`ViewportState`] of the active image and turns pointer and
/// wheel input into a pan/zoom transform.
///
/// Every operation is total: calls that make no sense in the current drag
/// state are no-ops, and non-finite inputs flow straight into the transform.
#[derive(Clone, Debug)]
pub struct ViewportController {
    state: ViewportState,
    limits: ZoomLimits,
}

impl ViewportController {
    pub fn new(image: ImageDescriptor, limits: ZoomLimits) -> Self {
        debug!(id = image.id, name = %image.name, "viewport opened");
        Self {
            state: ViewportState::new(image),
            limits,
        }
    }

    pub fn with_default_limits(image: ImageDescriptor) -> Self {
        Self::new(image, ZoomLimits::default())
    }

    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    pub fn active_image(&self) -> &ImageDescriptor {
        &self.state.active_image
    }

    pub fn drag_state(&self) -> DragState {
        self.state.drag_state()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.dragging()
    }

    /// Switch to `image` and re-center. Reselecting the active image still
    /// resets the view.
    pub fn select_image(&mut self, image: ImageDescriptor) {
        debug!(id = image.id, name = %image.name, "image selected");
        self.state = ViewportState::new(image);
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        // Anchor against the current pan so a new session continues from it.
        let anchor = (x - self.state.pan_x, y - self.state.pan_y);
        trace!(x, y, ?anchor, "drag started");
        self.state.drag_anchor = Some(anchor);
    }

    pub fn update_drag(&mut self, x: f64, y: f64) {
        let Some((ax, ay)) = self.state.drag_anchor else {
            return;
        };
        self.state.pan_x = x - ax;
        self.state.pan_y = y - ay;
        trace!(pan_x = self.state.pan_x, pan_y = self.state.pan_y, "drag moved");
    }

    pub fn end_drag(&mut self) {
        if self.state.drag_anchor.take().is_some() {
            trace!(pan_x = self.state.pan_x, pan_y = self.state.pan_y, "drag ended");
        }
    }

    pub fn zoom_by(&mut self, direction: ZoomDirection) {
        let zoom = self.state.zoom;
        // Clamp first, then round.
        let next = match direction {
            ZoomDirection::In => zoom + self.limits.step(),
            ZoomDirection::Out => (zoom - self.limits.step()).max(self.limits.min()),
        };
        self.state.zoom = round_zoom(next);
        trace!(%direction, zoom = self.state.zoom, "zoomed");
    }

    /// Negative `delta_y` (wheel pushed away from the user) zooms in.
    ///
    /// The caller must stop the wheel event from scrolling anything else.
    pub fn zoom_at_wheel(&mut self, delta_y: f64) {
        let direction = if delta_y < 0.0 {
            ZoomDirection::In
        } else {
            ZoomDirection::Out
        };
        self.zoom_by(direction);
    }

    /// Back to natural size and centered. Leaves the drag session and the
    /// active image alone.
    pub fn reset_view(&mut self) {
        self.state.zoom = DEFAULT_ZOOM;
        self.state.pan_x = 0.0;
        self.state.pan_y = 0.0;
        trace!("view reset");
    }

    pub fn current_transform(&self) -> ViewportTransform {
        ViewportTransform {
            pan_x: self.state.pan_x,
            pan_y: self.state.pan_y,
            zoom: self.state.zoom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_direction_parses_symbols() {
        assert_eq!("+".parse::<ZoomDirection>(), Ok(ZoomDirection::In));
        assert_eq!("OUT".parse::<ZoomDirection>(), Ok(ZoomDirection::Out));
        assert!("sideways".parse::<ZoomDirection>().is_err());
    }
}
