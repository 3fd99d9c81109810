//! Error types for block downsampling

use thiserror::Error;

/// Error returned when a grid cannot be computed or applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownsampleError {
    /// The target terminal has no columns or no rows
    #[error("target grid must be at least 1x1, got {columns}x{rows}")]
    EmptyTarget { columns: usize, rows: usize },

    /// The grid's blocks would reach past the edge of the pixel buffer
    #[error(
        "block grid {columns}x{rows} of {block_width}x{block_height} blocks \
         exceeds {width}x{height} image"
    )]
    BlockOutOfBounds {
        columns: usize,
        rows: usize,
        block_width: usize,
        block_height: usize,
        width: usize,
        height: usize,
    },
}
