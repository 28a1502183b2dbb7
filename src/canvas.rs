//! The output canvas and its circle rasterizer.

use std::path::Path;

use crate::error::Error;

/// An opaque RGB triple, 8 bits per channel. There is no alpha anywhere in
/// the rendering path; overlapping circles composite by overwrite.
pub type Color = (u8, u8, u8);

pub const WHITE: Color = (255, 255, 255);

/// A mutable row-major RGB pixel buffer (top-to-bottom, left-to-right, three
/// bytes per pixel). One canvas is allocated per render, painted in a single
/// pass, and then handed off; it is never reused.
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Canvas {
        let (r, g, b) = background;
        let data = [r, g, b].repeat(width as usize * height as usize);
        Canvas {
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

    /// The raw buffer, `width * height * 3` bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let i = 3 * (y as usize * self.width as usize + x as usize);
        (self.data[i], self.data[i + 1], self.data[i + 2])
    }

    fn put(&mut self, x: u32, y: u32, color: Color) {
        let i = 3 * (y as usize * self.width as usize + x as usize);
        self.data[i] = color.0;
        self.data[i + 1] = color.1;
        self.data[i + 2] = color.2;
    }

    /// Fills the circle of the given center and radius, overwriting whatever
    /// is underneath. `center` is in canvas pixel space and may lie partly or
    /// wholly outside the canvas; anything off-canvas is silently clipped.
    ///
    /// If `outline` is given, pixels within one pixel of the rim get that
    /// color instead of the fill. The pointillizing pipeline never passes an
    /// outline.
    pub fn fill_circle(
        &mut self,
        (cx, cy): (f64, f64),
        radius: f64,
        fill: Color,
        outline: Option<Color>,
    ) {
        // Scan the bounding box, clipped to the canvas, and test each pixel
        // center against the circle.
        let x0 = ((cx - radius).floor() as i64).max(0);
        let y0 = ((cy - radius).floor() as i64).max(0);
        let x1 = ((cx + radius).ceil() as i64).min(i64::from(self.width) - 1);
        let y1 = ((cy + radius).ceil() as i64).min(i64::from(self.height) - 1);

        let r2 = radius * radius;
        let inner = (radius - 1.0).max(0.0);
        let inner2 = inner * inner;
        for y in y0..=y1 {
            let dy = y as f64 + 0.5 - cy;
            for x in x0..=x1 {
                let dx = x as f64 + 0.5 - cx;
                let d2 = dx * dx + dy * dy;
                if d2 > r2 {
                    continue;
                }
                let color = match outline {
                    Some(stroke) if d2 >= inner2 => stroke,
                    _ => fill,
                };
                self.put(x as u32, y as u32, color);
            }
        }
    }

    /// Encodes the canvas to `path`; the format is chosen by the extension.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        image::save_buffer(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        Ok(())
    }
}
