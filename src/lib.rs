//! Pointillist rendering: cover a canvas with filled circles whose colors are
//! sampled from a source image, at positions taken from a hex, square, or
//! random grid.

pub mod canvas;
pub mod config;
pub mod error;
pub mod grid;
pub mod math;
pub mod rand;
pub mod render;
pub mod source;

pub use canvas::{Canvas, Color};
pub use config::Config;
pub use error::Error;
pub use grid::{GridType, MAX_GRID_SIZE};
pub use render::render;
pub use source::SourceImage;
