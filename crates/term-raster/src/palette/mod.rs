//! Color quantization
//!
//! [`Palette`] maps averaged cell colors to the nearest entry of the
//! 256-color terminal palette. [`Threshold`] is the simpler 8-color
//! alternative for terminals without 256-color support.

mod palette;
mod threshold;

pub use palette::{Palette, PALETTE_SIZE, XTERM_256};
pub use threshold::{Threshold, DEFAULT_THRESHOLD};
