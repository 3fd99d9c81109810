//! Streaming decoder for 24-bit bottom-up bitmaps

use std::io::{self, Read};

use super::error::DecodeError;
use super::header::{BitmapHeader, HEADER_SIZE};
use super::pixels::PixelBuffer;
use crate::color::Rgb;

/// A decoded bitmap: the header as read from the file and its pixels.
#[derive(Debug, Clone)]
pub struct Bitmap {
    pub header: BitmapHeader,
    pub pixels: PixelBuffer,
}

impl Bitmap {
    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.pixels.height()
    }
}

/// Decode a bitmap from a byte stream.
///
/// Reads the headers, validates them, then reads every pixel row. The
/// reader is consumed strictly front to back, so any `Read` works,
/// including pipes. All validation happens before the first pixel byte is
/// read.
///
/// # Errors
///
/// See [`DecodeError`]. On error no pixel buffer is returned; anything
/// allocated so far is dropped.
///
/// # Example
///
/// ```
/// use term_raster::{decode, encode, PixelBuffer, Rgb};
///
/// let image = PixelBuffer::filled(3, 2, Rgb::new(255, 0, 0));
/// let bytes = encode(&image);
///
/// let bitmap = decode(&mut bytes.as_slice()).unwrap();
/// assert_eq!(bitmap.pixels, image);
/// ```
pub fn decode<R: Read>(reader: &mut R) -> Result<Bitmap, DecodeError> {
    let header = BitmapHeader::read_from(reader)?;
    header.validate()?;

    let width = header.width_px();
    let height = header.height_px();

    skip_to_pixel_data(reader, header.pixel_data_offset)?;

    if height == 0 {
        return Ok(Bitmap {
            header,
            pixels: PixelBuffer::new(Vec::new(), width, 0),
        });
    }

    let mut pixels = allocate(width, height)?;
    read_rows(reader, &mut pixels, width, height, header.row_padding())?;
    flip_rows(&mut pixels, width);

    Ok(Bitmap {
        header,
        pixels: PixelBuffer::new(pixels, width, height),
    })
}

/// Pixels converted per read while filling a row.
const CHUNK_PIXELS: usize = 4096;

/// Reserve room for `width × height` pixels without aborting on
/// out-of-memory.
///
/// Nothing is written here; the buffer only grows as rows are read, so a
/// file that claims a huge image but ends early costs no more memory than
/// the data it actually holds.
fn allocate(width: usize, height: usize) -> Result<Vec<Rgb>, DecodeError> {
    let alloc_error = || DecodeError::Allocation { width, height };

    let count = width.checked_mul(height).ok_or_else(alloc_error)?;
    let mut pixels: Vec<Rgb> = Vec::new();
    pixels
        .try_reserve_exact(count)
        .map_err(|_| alloc_error())?;

    Ok(pixels)
}

/// Consume any gap between the end of the headers and the pixel data.
///
/// The decoder never seeks, so the gap is read and discarded. Offsets that
/// point inside the headers are treated as "immediately after".
fn skip_to_pixel_data<R: Read>(reader: &mut R, offset: u32) -> Result<(), DecodeError> {
    let gap = (offset as u64).saturating_sub(HEADER_SIZE as u64);
    if gap == 0 {
        return Ok(());
    }

    let skipped = io::copy(&mut reader.by_ref().take(gap), &mut io::sink())
        .map_err(|e| DecodeError::from_read(e, "gap before pixel data"))?;
    if skipped < gap {
        return Err(DecodeError::Truncated {
            section: "gap before pixel data".to_string(),
        });
    }
    Ok(())
}

/// Append every row to `pixels` in file order, bottom row of the image
/// first.
///
/// Each file row is `3 * width` bytes of B, G, R triples followed by
/// `padding` bytes that are discarded. Rows are read through a fixed-size
/// chunk, so no per-row buffer is sized from the header.
fn read_rows<R: Read>(
    reader: &mut R,
    pixels: &mut Vec<Rgb>,
    width: usize,
    height: usize,
    padding: usize,
) -> Result<(), DecodeError> {
    let mut chunk = [0u8; CHUNK_PIXELS * 3];
    let mut pad = [0u8; 3];

    for file_row in 0..height {
        let section = || format!("pixel row {file_row}");

        let mut remaining = width;
        while remaining > 0 {
            let n = remaining.min(CHUNK_PIXELS);
            let bytes = &mut chunk[..n * 3];
            reader
                .read_exact(bytes)
                .map_err(|e| DecodeError::from_read(e, section()))?;
            pixels.extend(
                bytes
                    .chunks_exact(3)
                    .map(|bgr| Rgb::from_bgr([bgr[0], bgr[1], bgr[2]])),
            );
            remaining -= n;
        }

        reader
            .read_exact(&mut pad[..padding])
            .map_err(|e| DecodeError::from_read(e, section()))?;
    }

    Ok(())
}

/// Reverse the row order of a row-major buffer in place.
fn flip_rows(pixels: &mut [Rgb], width: usize) {
    if width == 0 {
        return;
    }
    let height = pixels.len() / width;
    for top in 0..height / 2 {
        let bottom = height - 1 - top;
        let (upper, lower) = pixels.split_at_mut(bottom * width);
        upper[top * width..(top + 1) * width].swap_with_slice(&mut lower[..width]);
    }
}
