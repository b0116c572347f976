/// Zoom increment applied per button press or wheel notch.
pub const ZOOM_STEP: f64 = 0.2;

/// Lowest zoom factor the viewport can reach. There is no upper bound.
pub const ZOOM_MIN: f64 = 0.5;

/// Natural-size zoom factor used on image selection and reset.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom values are rounded to this many decimal places after every step
/// so the displayed percentage never shows accumulated float drift.
pub const ZOOM_DECIMALS: i32 = 2;

/// Logical size of the placeholder surface drawn for an image, in pixels.
pub const PLACEHOLDER_IMAGE_SIZE: [f64; 2] = [640.0, 480.0];
