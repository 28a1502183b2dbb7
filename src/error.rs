use crate::grid::MAX_GRID_SIZE;

/// Errors surfaced by the rendering pipeline.
///
/// Configuration problems (bad grid size, unknown grid type token, zero
/// output width, unsupported output extension) are raised before any canvas
/// is allocated. Image errors come straight from decoding a source or
/// encoding a finished canvas and are propagated, never retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("grid size must be between 1 and {MAX_GRID_SIZE}, got {0}")]
    GridSizeOutOfRange(u32),

    #[error("output width must be positive")]
    OutputWidthZero,

    #[error("unknown grid type {0:?} (expected hex, square, or random)")]
    UnknownGridType(String),

    #[error("unsupported output extension {0:?} (expected png, jpg, or jpeg)")]
    UnsupportedExtension(String),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}
