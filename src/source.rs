//! The source image being pointillized.

use std::path::Path;

use crate::canvas::Color;
use crate::error::Error;
use crate::grid::PlanePoint;
use crate::math;

/// A decoded source image: a read-only row-major RGB buffer. Sampling is the
/// only lookup the renderer performs against it.
pub struct SourceImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl SourceImage {
    /// Decodes the image at `path` (any format the `image` crate recognizes)
    /// into an RGB buffer.
    pub fn open(path: &Path) -> Result<SourceImage, Error> {
        let img = image::open(path)?.into_rgb8();
        let (width, height) = img.dimensions();
        Ok(SourceImage {
            width,
            height,
            data: img.into_raw(),
        })
    }

    /// Wraps an existing row-major RGB buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data` is not exactly `width * height * 3` bytes.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> SourceImage {
        assert_eq!(
            data.len(),
            3 * width as usize * height as usize,
            "buffer length does not match dimensions"
        );
        SourceImage {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let i = 3 * (y as usize * self.width as usize + x as usize);
        (self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Looks up the color under a plane point, clamping to the image bounds.
    ///
    /// This never fails: points outside the plane (including the grid
    /// generators' deliberate edge overshoot) resolve to the nearest edge
    /// pixel. That clamping is a boundary policy, not an error path.
    pub fn sample(&self, point: PlanePoint) -> Color {
        let (x, y) = math::to_source_pixel(point, self.width, self.height);
        self.pixel(x, y)
    }
}
