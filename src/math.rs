//! Mapping between the normalized plane and pixel buffers.
//!
//! Grid points live on the plane `[-1, 1] × [-1, 1]` (with a small permitted
//! overshoot near the edges), independent of any pixel resolution. The same
//! plane point is mapped twice per circle: once into the *source* image to
//! sample a color, and once into the *canvas* to place the circle.

use crate::grid::PlanePoint;

/// Maps a plane point into canvas pixel space: `x = (px+1)/2 * width`.
///
/// No clamping: points slightly outside the plane map to canvas-adjacent
/// positions, which is how circles whose centers fall off the canvas still
/// get their visible part drawn.
pub fn to_canvas((px, py): PlanePoint, width: u32, height: u32) -> (f64, f64) {
    (
        (px + 1.0) / 2.0 * f64::from(width),
        (py + 1.0) / 2.0 * f64::from(height),
    )
}

/// Maps a plane point to the nearest pixel index of a `width × height` image,
/// clamping each axis independently into `[0, dim - 1]`.
///
/// Rounding error or deliberately out-of-range points (the edge overshoot of
/// the grid generators) resolve to the closest edge pixel rather than failing.
pub fn to_source_pixel((px, py): PlanePoint, width: u32, height: u32) -> (u32, u32) {
    let x = ((px + 1.0) / 2.0 * f64::from(width)).round();
    let y = ((py + 1.0) / 2.0 * f64::from(height)).round();
    (clamp_axis(x, width), clamp_axis(y, height))
}

fn clamp_axis(v: f64, dim: u32) -> u32 {
    let max = f64::from(dim - 1);
    v.clamp(0.0, max) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_canvas() {
        assert_eq!(to_canvas((0.0, 0.0), 100, 50), (50.0, 25.0));
        assert_eq!(to_canvas((-1.0, -1.0), 100, 50), (0.0, 0.0));
        assert_eq!(to_canvas((1.0, 1.0), 100, 50), (100.0, 50.0));
        assert_eq!(to_canvas((-0.5, 0.5), 200, 200), (50.0, 150.0));
    }

    #[test]
    fn test_to_canvas_does_not_clamp() {
        // Overshooting points land just off the canvas by design.
        assert_eq!(to_canvas((1.5, -1.5), 100, 100), (125.0, -25.0));
    }

    #[test]
    fn test_to_source_pixel_in_range() {
        assert_eq!(to_source_pixel((0.0, 0.0), 4, 4), (2, 2));
        assert_eq!(to_source_pixel((-1.0, -1.0), 4, 4), (0, 0));
    }

    #[test]
    fn test_to_source_pixel_clamps_each_axis() {
        assert_eq!(to_source_pixel((1.0, 1.0), 4, 4), (3, 3));
        assert_eq!(to_source_pixel((1.5, -2.0), 4, 4), (3, 0));
        assert_eq!(to_source_pixel((-3.0, 0.0), 4, 4), (0, 2));
        // Non-square image: each axis clamps against its own dimension.
        assert_eq!(to_source_pixel((2.0, 2.0), 10, 3), (9, 2));
    }
}
