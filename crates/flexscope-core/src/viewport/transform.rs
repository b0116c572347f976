/// Translate-then-scale transform handed to the rendering surface.
///
/// The scale pivot is the viewport's geometric center, so content grows and
/// shrinks around the middle of the viewer regardless of the current pan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTransform {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl ViewportTransform {
    pub const IDENTITY: Self = Self {
        pan_x: 0.0,
        pan_y: 0.0,
        zoom: 1.0,
    };

    /// Zoom as a whole-number percentage for display.
    pub fn zoom_percent(&self) -> i64 {
        (self.zoom * 100.0).round() as i64
    }

    /// CSS-style transform string, e.g. `translate(20px, 30px) scale(1.2)`.
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.pan_x, self.pan_y, self.zoom
        )
    }

    /// Map a content point to screen space.
    pub fn apply(&self, point: [f64; 2], center: [f64; 2]) -> [f64; 2] {
        [
            center[0] + (point[0] - center[0]) * self.zoom + self.pan_x,
            center[1] + (point[1] - center[1]) * self.zoom + self.pan_y,
        ]
    }

    /// Screen-space `(min, max)` corners of an image of `size` that sits
    /// centered in a viewport whose center is `center`.
    pub fn image_rect(&self, center: [f64; 2], size: [f64; 2]) -> ([f64; 2], [f64; 2]) {
        let half_w = size[0] * self.zoom / 2.0;
        let half_h = size[1] * self.zoom / 2.0;
        let cx = center[0] + self.pan_x;
        let cy = center[1] + self.pan_y;
        ([cx - half_w, cy - half_h], [cx + half_w, cy + half_h])
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_uses_plain_float_formatting() {
        let t = ViewportTransform {
            pan_x: 20.0,
            pan_y: -3.5,
            zoom: 1.2,
        };
        assert_eq!(t.to_css(), "translate(20px, -3.5px) scale(1.2)");
    }

    #[test]
    fn center_is_fixed_under_zoom_without_pan() {
        let t = ViewportTransform {
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 3.0,
        };
        assert_eq!(t.apply([50.0, 40.0], [50.0, 40.0]), [50.0, 40.0]);
        assert_eq!(t.apply([60.0, 40.0], [50.0, 40.0]), [80.0, 40.0]);
    }
}
