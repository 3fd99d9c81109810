//! Block downsampling
//!
//! Reduces a decoded image to the terminal's character grid by averaging
//! rectangular blocks of source pixels. See [`BlockGrid::compute`] for how
//! the block size and 2:1 aspect correction are derived.

mod error;
mod grid;

pub use error::DownsampleError;
pub use grid::BlockGrid;
