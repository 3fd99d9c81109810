//! The fixed 256-color terminal palette and nearest-color matching.

use crate::color::Rgb;

/// Number of entries in the terminal palette.
pub const PALETTE_SIZE: usize = 256;

/// Channel levels of the 6×6×6 color cube (entries 16-231).
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// The conventional 16 system colors (entries 0-15).
const SYSTEM_COLORS: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(128, 0, 0),
    Rgb::new(0, 128, 0),
    Rgb::new(128, 128, 0),
    Rgb::new(0, 0, 128),
    Rgb::new(128, 0, 128),
    Rgb::new(0, 128, 128),
    Rgb::new(192, 192, 192),
    Rgb::new(128, 128, 128),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 255),
];

const fn build_xterm_table() -> [Rgb; PALETTE_SIZE] {
    let mut table = [Rgb::new(0, 0, 0); PALETTE_SIZE];

    let mut i = 0;
    while i < 16 {
        table[i] = SYSTEM_COLORS[i];
        i += 1;
    }

    // 16 + 36r + 6g + b
    let mut i = 0;
    while i < 216 {
        table[16 + i] = Rgb::new(
            CUBE_LEVELS[i / 36],
            CUBE_LEVELS[(i / 6) % 6],
            CUBE_LEVELS[i % 6],
        );
        i += 1;
    }

    // 8, 18, ..., 238
    let mut i = 0;
    while i < 24 {
        let v = 8 + 10 * i as u8;
        table[232 + i] = Rgb::new(v, v, v);
        i += 1;
    }

    table
}

/// The xterm 256-color table, computed at compile time.
pub const XTERM_256: [Rgb; PALETTE_SIZE] = build_xterm_table();

/// A read-only terminal color palette.
///
/// The palette is the standard 256-color table terminals use for
/// `ESC[48;5;Nm`: 16 system colors, a 6×6×6 RGB cube and a 24-step
/// grayscale ramp. It is a compile-time constant, so [`Palette::XTERM`] can
/// be shared freely.
///
/// # Example
///
/// ```
/// use term_raster::{Palette, Rgb};
///
/// let (index, distance) = Palette::XTERM.find_nearest(Rgb::new(255, 0, 0));
/// assert_eq!(index, 9);
/// assert_eq!(distance, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: [Rgb; PALETTE_SIZE],
}

impl Palette {
    /// The xterm 256-color palette.
    pub const XTERM: Palette = Palette {
        entries: XTERM_256,
    };

    /// Returns the number of colors in the palette (always 256).
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The color at `index`.
    #[inline]
    pub fn entry(&self, index: u8) -> Rgb {
        self.entries[index as usize]
    }

    /// All entries in index order.
    #[inline]
    pub fn entries(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.entries
    }

    /// Find the palette entry closest to `color`.
    ///
    /// Distance is Euclidean in RGB space, compared as exact integer
    /// squared distances. All 256 entries are scanned; when several entries
    /// are equally close the lowest index wins.
    ///
    /// Returns `(index, squared_distance)`.
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> (u8, u32) {
        let mut best_idx = 0usize;
        let mut best_dist = u32::MAX;

        for (i, &entry) in self.entries.iter().enumerate() {
            let dist = color.distance_squared(entry);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
                if dist == 0 {
                    break;
                }
            }
        }

        (best_idx as u8, best_dist)
    }

    /// Shorthand for the index half of [`find_nearest`](Self::find_nearest).
    #[inline]
    pub fn quantize(&self, color: Rgb) -> u8 {
        self.find_nearest(color).0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::XTERM
    }
}
