#![allow(dead_code)]

use flexscope_core::gallery::{Gallery, ImageDescriptor};
use flexscope_core::viewport::{ViewportController, ViewportTransform};

pub fn image(id: u32) -> ImageDescriptor {
    ImageDescriptor::new(id, format!("{id}.jpeg"))
}

/// Controller on a fresh image with default zoom limits.
pub fn controller() -> ViewportController {
    ViewportController::with_default_limits(image(1))
}

/// Controller dragged and zoomed away from the identity transform.
pub fn moved_controller() -> ViewportController {
    let mut c = controller();
    c.begin_drag(0.0, 0.0);
    c.update_drag(-42.0, 17.5);
    c.end_drag();
    c.zoom_at_wheel(-1.0);
    c.zoom_at_wheel(-1.0);
    c
}

pub fn transform(pan_x: f64, pan_y: f64, zoom: f64) -> ViewportTransform {
    ViewportTransform { pan_x, pan_y, zoom }
}

pub fn sample_gallery() -> Gallery {
    Gallery::sample()
}
