//! Per-channel threshold quantizer for 8-color terminals.

use crate::color::Rgb;

/// Default cutoff for every channel.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Maps a color to one of the 8 basic ANSI colors by thresholding each
/// channel independently.
///
/// A channel is lit when its value is at or above the cutoff. The result is
/// `red | green << 1 | blue << 2`, which is the ANSI color order: black,
/// red, green, yellow, blue, magenta, cyan, white.
///
/// # Example
///
/// ```
/// use term_raster::{Rgb, Threshold};
///
/// let t = Threshold::default();
/// assert_eq!(t.classify(Rgb::new(200, 200, 10)), 3); // yellow
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Threshold {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// The same cutoff for all three channels.
    pub const fn uniform(cutoff: u8) -> Self {
        Self::new(cutoff, cutoff, cutoff)
    }

    /// The 3-bit ANSI color (0..=7) for `color`.
    #[inline]
    pub fn classify(&self, color: Rgb) -> u8 {
        let r = (color.r >= self.red) as u8;
        let g = (color.g >= self.green) as u8;
        let b = (color.b >= self.blue) as u8;
        r | (g << 1) | (b << 2)
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::uniform(DEFAULT_THRESHOLD)
    }
}
