//! Encoder producing the bitmap subset the decoder accepts

use super::header::{
    row_padding, BitmapHeader, BITMAP_MAGIC, COMPRESSION_NONE, HEADER_SIZE, INFO_HEADER_SIZE,
    SUPPORTED_BIT_DEPTH,
};
use super::pixels::PixelBuffer;

/// 72 DPI, the resolution most tools write.
const PIXELS_PER_METER: i32 = 2835;

/// Encode pixels as a complete 24-bit, uncompressed, bottom-up bitmap.
///
/// # Panics
///
/// Panics if either dimension does not fit in an `i32` or the file would
/// exceed 4 GiB.
///
/// # Example
///
/// ```
/// use term_raster::{encode, PixelBuffer, Rgb};
///
/// let bytes = encode(&PixelBuffer::filled(5, 1, Rgb::new(0, 0, 0)));
/// // 54 header bytes + 15 pixel bytes + 1 padding byte
/// assert_eq!(bytes.len(), 70);
/// ```
pub fn encode(pixels: &PixelBuffer) -> Vec<u8> {
    let data = encode_pixel_data(pixels);
    let header = header_for(pixels, data.len());

    let mut out = Vec::with_capacity(HEADER_SIZE + data.len());
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(&data);
    out
}

/// Encode only the pixel rows: bottom row first, B, G, R per pixel, each
/// row followed by `width mod 4` zero bytes.
pub fn encode_pixel_data(pixels: &PixelBuffer) -> Vec<u8> {
    let padding = row_padding(pixels.width());
    let stride = pixels.width() * 3 + padding;
    let mut out = Vec::with_capacity(stride * pixels.height());

    for row in (0..pixels.height()).rev() {
        for pixel in pixels.row(row) {
            out.extend_from_slice(&pixel.to_bgr());
        }
        out.resize(out.len() + padding, 0);
    }
    out
}

fn header_for(pixels: &PixelBuffer, data_len: usize) -> BitmapHeader {
    let width = i32::try_from(pixels.width()).expect("width exceeds i32");
    let height = i32::try_from(pixels.height()).expect("height exceeds i32");
    let image_data_size = u32::try_from(data_len).expect("pixel data exceeds 4 GiB");

    BitmapHeader {
        magic: BITMAP_MAGIC,
        file_size: HEADER_SIZE as u32 + image_data_size,
        reserved1: 0,
        reserved2: 0,
        pixel_data_offset: HEADER_SIZE as u32,
        header_size: INFO_HEADER_SIZE as u32,
        width,
        height,
        planes: 1,
        bits_per_pixel: SUPPORTED_BIT_DEPTH,
        compression: COMPRESSION_NONE,
        image_data_size,
        x_pixels_per_meter: PIXELS_PER_METER,
        y_pixels_per_meter: PIXELS_PER_METER,
        colors_used: 0,
        colors_important: 0,
    }
}
