//! Owned pixel storage

use crate::color::Rgb;

/// A decoded image: `width × height` pixels in one contiguous, row-major
/// buffer.
///
/// Row 0 is the top of the image regardless of the order rows were stored
/// in the file. Pixel `(row, column)` lives at `row * width + column`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<Rgb>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Wrap existing pixels.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len() != width * height`.
    pub fn new(pixels: Vec<Rgb>, width: usize, height: usize) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "pixel count ({}) must match width * height ({}x{})",
            pixels.len(),
            width,
            height,
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    /// A buffer filled with a single color.
    pub fn filled(width: usize, height: usize, color: Rgb) -> Self {
        Self::new(vec![color; width * height], width, height)
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// The pixel at `(row, column)`, or `None` outside the image.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<Rgb> {
        if row < self.height && column < self.width {
            Some(self.pixels[row * self.width + column])
        } else {
            None
        }
    }

    /// One row of pixels, top row first.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row(&self, row: usize) -> &[Rgb] {
        let start = row * self.width;
        &self.pixels[start..start + self.width]
    }
}
