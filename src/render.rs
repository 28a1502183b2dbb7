//! The pointillizer: one pass from source image to finished canvas.

use crate::canvas::{Canvas, WHITE};
use crate::config::Config;
use crate::error::Error;
use crate::grid::{self, GridType, MAX_GRID_SIZE};
use crate::math;
use crate::source::SourceImage;

/// Slight under-sizing of circles relative to exact tiling, to limit overlap
/// artifacts while keeping near-full coverage.
const RADIUS_SLACK: f64 = 1.05;

/// Renders `source` as a field of colored circles.
///
/// The output is `output_width` pixels wide; the height follows the source's
/// aspect ratio. Circle radius scales inversely with `grid_size`. Each grid
/// point is sampled from the source and drawn as an opaque filled circle, in
/// grid order; since circles overlap at this radius, that order is part of
/// the output.
///
/// Configuration errors (grid size outside `[1, MAX_GRID_SIZE]`, zero output
/// width) are returned before any canvas is allocated.
pub fn render(
    source: &SourceImage,
    grid_type: GridType,
    grid_size: u32,
    output_width: u32,
    config: &Config,
) -> Result<Canvas, Error> {
    if !(1..=MAX_GRID_SIZE).contains(&grid_size) {
        return Err(Error::GridSizeOutOfRange(grid_size));
    }
    if output_width == 0 {
        return Err(Error::OutputWidthZero);
    }

    let mut rng = config.rng();
    let grid = grid::generate(grid_type, grid_size, &mut rng)?;

    let height = (f64::from(output_width) * f64::from(source.height())
        / f64::from(source.width()))
    .round() as u32;
    // Extreme aspect ratios can round the height to zero; keep one row.
    let height = height.max(1);

    let mut canvas = Canvas::new(output_width, height, WHITE);
    let radius = f64::from(output_width) / (4.0 * f64::from(grid_size) * RADIUS_SLACK);
    for &point in &grid {
        let color = source.sample(point);
        let center = math::to_canvas(point, output_width, height);
        canvas.fill_circle(center, radius, color, None);
    }
    Ok(canvas)
}
