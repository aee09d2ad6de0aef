use glam::Vec2;

/// Latest pointer sample in canvas-relative normalized device coordinates.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub ndc: Vec2,
}

/// Convert client (CSS px) coordinates to normalized device coordinates
/// (`[-1, 1]` on both axes, y up) within the given bounding rect.
#[inline]
pub fn client_to_ndc(
    client_x: f32,
    client_y: f32,
    rect_left: f32,
    rect_top: f32,
    rect_width: f32,
    rect_height: f32,
) -> Vec2 {
    if rect_width <= 0.0 || rect_height <= 0.0 {
        return Vec2::ZERO;
    }
    let x = (client_x - rect_left) / rect_width;
    let y = (client_y - rect_top) / rect_height;
    Vec2::new(2.0 * x - 1.0, 1.0 - 2.0 * y)
}
