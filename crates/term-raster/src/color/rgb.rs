//! 8-bit RGB color type

/// A color as three 8-bit channels.
///
/// Used for decoded pixels, averaged cell colors and palette entries alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from red, green and blue channel values.
    ///
    /// # Example
    /// ```
    /// use term_raster::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.to_bytes(), [255, 0, 0]);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from bytes in file order `[B, G, R]`.
    ///
    /// # Example
    /// ```
    /// use term_raster::Rgb;
    /// let color = Rgb::from_bgr([0x10, 0x20, 0x30]);
    /// assert_eq!(color, Rgb::new(0x30, 0x20, 0x10));
    /// ```
    #[inline]
    pub const fn from_bgr(bytes: [u8; 3]) -> Self {
        Self {
            r: bytes[2],
            g: bytes[1],
            b: bytes[0],
        }
    }

    /// Convert to bytes in file order `[B, G, R]`.
    #[inline]
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared Euclidean distance in RGB space.
    ///
    /// Exact integer arithmetic; the maximum value is `3 * 255^2`, which
    /// fits comfortably in a `u32`.
    ///
    /// # Example
    /// ```
    /// use term_raster::Rgb;
    /// let black = Rgb::new(0, 0, 0);
    /// let white = Rgb::new(255, 255, 255);
    /// assert_eq!(black.distance_squared(white), 3 * 255 * 255);
    /// ```
    #[inline]
    pub const fn distance_squared(self, other: Rgb) -> u32 {
        let dr = self.r.abs_diff(other.r) as u32;
        let dg = self.g.abs_diff(other.g) as u32;
        let db = self.b.abs_diff(other.b) as u32;
        dr * dr + dg * dg + db * db
    }
}

impl From<[u8; 3]> for Rgb {
    /// Interpret the array as `[R, G, B]`.
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}
