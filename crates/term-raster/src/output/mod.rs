//! Output types for the rendering pipeline.
//!
//! [`CellImage`] holds one averaged color per terminal cell;
//! [`CellRenderer`] turns it into escape-sequence text in one of three
//! [`ColorMode`]s:
//!
//! - **Indexed**: nearest entry of the 256-color palette
//! - **TrueColor**: the averaged 24-bit color unchanged
//! - **Threshold**: 8 basic colors by per-channel cutoff

mod cell_image;
mod render;

pub use cell_image::CellImage;
pub use render::{CellRenderer, ColorMode, RESET};
