use flexscope_core::viewport::ViewportTransform;

pub fn to_point(pos: egui::Pos2) -> [f64; 2] {
    [pos.x as f64, pos.y as f64]
}

pub fn to_pos(point: [f64; 2]) -> egui::Pos2 {
    egui::pos2(point[0] as f32, point[1] as f32)
}

/// Screen rect of an image of `image_size` drawn through `transform` in `viewport`.
pub fn image_rect(
    transform: &ViewportTransform,
    viewport: egui::Rect,
    image_size: [f64; 2],
) -> egui::Rect {
    let (min, max) = transform.image_rect(to_point(viewport.center()), image_size);
    egui::Rect::from_min_max(to_pos(min), to_pos(max))
}
