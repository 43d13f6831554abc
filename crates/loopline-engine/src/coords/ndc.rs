/// Converts a window-space position to normalized device coordinates.
///
/// Window space has its origin at the top-left corner with +Y down; NDC spans
/// [-1, 1] on both axes with +Y up, so the Y axis is flipped:
///
/// - the window center maps to (0, 0)
/// - the top-left pixel (0, 0) maps to (-1, 1)
/// - the bottom-right corner maps to (1, -1)
///
/// `width`/`height` are the current window dimensions in the same units as
/// `x`/`y` (logical pixels in this engine).
pub fn window_to_ndc(x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
    let nx = (x / width) * 2.0 - 1.0;
    let ny = 1.0 - (y / height) * 2.0;
    (nx, ny)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_maps_to_origin() {
        assert_eq!(window_to_ndc(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));
    }

    #[test]
    fn top_left_maps_to_minus_one_plus_one() {
        assert_eq!(window_to_ndc(0.0, 0.0, 800.0, 600.0), (-1.0, 1.0));
    }

    #[test]
    fn bottom_right_maps_to_plus_one_minus_one() {
        assert_eq!(window_to_ndc(800.0, 600.0, 800.0, 600.0), (1.0, -1.0));
    }

    #[test]
    fn y_axis_is_flipped() {
        // A quarter of the way down the window sits above the NDC origin.
        let (_, ny) = window_to_ndc(0.0, 150.0, 800.0, 600.0);
        assert_eq!(ny, 0.5);
    }
}
