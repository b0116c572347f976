use crate::consts::DEFAULT_ZOOM;
use crate::gallery::ImageDescriptor;

/// Whether a pointer drag session is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Pan/zoom state for the active image.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportState {
    /// Scale factor, 1.0 = natural size.
    pub zoom: f64,
    /// Translation in screen pixels, applied after scaling.
    pub pan_x: f64,
    pub pan_y: f64,
    /// Pointer position minus pan at drag start. `Some` exactly while dragging.
    pub drag_anchor: Option<(f64, f64)>,
    pub active_image: ImageDescriptor,
}

impl ViewportState {
    pub fn new(active_image: ImageDescriptor) -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan_x: 0.0,
            pan_y: 0.0,
            drag_anchor: None,
            active_image,
        }
    }

    pub fn dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn drag_state(&self) -> DragState {
        if self.dragging() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }
}
