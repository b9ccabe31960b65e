//! Display-space to grid-space coordinate mapping.

/// Map a display-space position into simulation grid coordinates.
///
/// Divides each display coordinate by `scale` and truncates toward zero
/// (floor for the non-negative inputs a display produces). No bounds
/// clamping happens here; clipping to grid extents is the brush expander's
/// job, so callers can feed positions that lie outside the grid.
///
/// Pure and stable: the same input always maps to the same cell.
pub fn map_to_grid(display_x: f64, display_y: f64, scale: f64) -> (i32, i32) {
    debug_assert!(scale > 0.0, "display scale must be positive");
    (
        (display_x / scale).trunc() as i32,
        (display_y / scale).trunc() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_by_scale_and_truncates() {
        assert_eq!(map_to_grid(0.0, 0.0, 1.0), (0, 0));
        assert_eq!(map_to_grid(10.0, 20.0, 1.0), (10, 20));
        assert_eq!(map_to_grid(10.0, 20.0, 2.0), (5, 10));
        assert_eq!(map_to_grid(11.0, 21.0, 2.0), (5, 10));
        assert_eq!(map_to_grid(7.9, 7.9, 4.0), (1, 1));
    }

    #[test]
    fn truncates_toward_zero_for_negative_inputs() {
        // Positions left/above the view origin map toward zero, not -inf.
        assert_eq!(map_to_grid(-1.0, -1.0, 2.0), (0, 0));
        assert_eq!(map_to_grid(-5.0, -3.0, 2.0), (-2, -1));
    }

    #[test]
    fn mapping_is_idempotent() {
        let first = map_to_grid(123.0, 77.0, 3.0);
        let second = map_to_grid(123.0, 77.0, 3.0);
        assert_eq!(first, second);
    }

    #[test]
    fn fractional_scale_is_supported() {
        assert_eq!(map_to_grid(3.0, 3.0, 0.5), (6, 6));
    }
}
