//! Bitmap file header and info header

use std::io::Read;

use super::error::DecodeError;

/// The two-byte tag every Windows bitmap starts with.
pub const BITMAP_MAGIC: [u8; 2] = *b"BM";

/// Size of the file header in bytes.
pub const FILE_HEADER_SIZE: usize = 14;

/// Size of the `BITMAPINFOHEADER` in bytes.
pub const INFO_HEADER_SIZE: usize = 40;

/// Combined size of both headers; pixel data normally starts here.
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// Bits per pixel of the only supported pixel format.
pub const SUPPORTED_BIT_DEPTH: u16 = 24;

/// `BI_RGB`, i.e. uncompressed.
pub const COMPRESSION_NONE: u32 = 0;

/// The 14-byte file header followed by the 40-byte info header.
///
/// All fields are kept exactly as stored in the file (little-endian on
/// disk). Use [`BitmapHeader::validate`] to check that the header
/// describes a bitmap this crate can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapHeader {
    pub magic: [u8; 2],
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset from the start of the file to the first pixel byte
    pub pixel_data_offset: u32,
    pub header_size: u32,
    pub width: i32,
    /// Positive for bottom-up row order, negative for top-down
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_data_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

/// Little-endian cursor over a fixed header block.
struct FieldReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.bytes[self.pos..self.pos + N]);
        self.pos += N;
        out
    }

    fn u16(&mut self) -> u16 {
        u16::from_le_bytes(self.take())
    }

    fn u32(&mut self) -> u32 {
        u32::from_le_bytes(self.take())
    }

    fn i32(&mut self) -> i32 {
        i32::from_le_bytes(self.take())
    }
}

impl BitmapHeader {
    /// Read both headers from the start of a stream.
    ///
    /// Consumes exactly [`HEADER_SIZE`] bytes on success. The magic tag is
    /// checked as soon as it is read, so non-bitmap input is reported as
    /// [`DecodeError::NotABitmap`] even when it is shorter than a header.
    /// No other field is validated here.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self, DecodeError> {
        let mut magic = [0u8; 2];
        reader
            .read_exact(&mut magic)
            .map_err(|e| DecodeError::from_read(e, "file header"))?;
        if magic != BITMAP_MAGIC {
            return Err(DecodeError::NotABitmap { magic });
        }

        let mut file_rest = [0u8; FILE_HEADER_SIZE - 2];
        reader
            .read_exact(&mut file_rest)
            .map_err(|e| DecodeError::from_read(e, "file header"))?;

        let mut info = [0u8; INFO_HEADER_SIZE];
        reader
            .read_exact(&mut info)
            .map_err(|e| DecodeError::from_read(e, "info header"))?;

        let mut f = FieldReader::new(&file_rest);
        let file_size = f.u32();
        let reserved1 = f.u16();
        let reserved2 = f.u16();
        let pixel_data_offset = f.u32();

        let mut i = FieldReader::new(&info);
        Ok(Self {
            magic,
            file_size,
            reserved1,
            reserved2,
            pixel_data_offset,
            header_size: i.u32(),
            width: i.i32(),
            height: i.i32(),
            planes: i.u16(),
            bits_per_pixel: i.u16(),
            compression: i.u32(),
            image_data_size: i.u32(),
            x_pixels_per_meter: i.i32(),
            y_pixels_per_meter: i.i32(),
            colors_used: i.u32(),
            colors_important: i.u32(),
        })
    }

    /// Serialize both headers into their 54-byte on-disk form.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        let mut pos = 0;
        let mut put = |bytes: &[u8]| {
            out[pos..pos + bytes.len()].copy_from_slice(bytes);
            pos += bytes.len();
        };
        put(&self.magic);
        put(&self.file_size.to_le_bytes());
        put(&self.reserved1.to_le_bytes());
        put(&self.reserved2.to_le_bytes());
        put(&self.pixel_data_offset.to_le_bytes());
        put(&self.header_size.to_le_bytes());
        put(&self.width.to_le_bytes());
        put(&self.height.to_le_bytes());
        put(&self.planes.to_le_bytes());
        put(&self.bits_per_pixel.to_le_bytes());
        put(&self.compression.to_le_bytes());
        put(&self.image_data_size.to_le_bytes());
        put(&self.x_pixels_per_meter.to_le_bytes());
        put(&self.y_pixels_per_meter.to_le_bytes());
        put(&self.colors_used.to_le_bytes());
        put(&self.colors_important.to_le_bytes());
        out
    }

    /// Check that the header describes a supported bitmap.
    ///
    /// Checks run in a fixed order: width, row order, bit depth,
    /// compression. The magic tag has already been checked by
    /// [`read_from`](Self::read_from) but is checked again so headers
    /// built in memory are covered too.
    pub fn validate(&self) -> Result<(), DecodeError> {
        if self.magic != BITMAP_MAGIC {
            return Err(DecodeError::NotABitmap { magic: self.magic });
        }
        if self.width <= 0 {
            return Err(DecodeError::InvalidWidth { width: self.width });
        }
        if self.height < 0 {
            return Err(DecodeError::UnsupportedOrientation {
                height: self.height,
            });
        }
        if self.bits_per_pixel != SUPPORTED_BIT_DEPTH {
            return Err(DecodeError::UnsupportedBitDepth {
                bits: self.bits_per_pixel,
            });
        }
        if self.compression != COMPRESSION_NONE {
            return Err(DecodeError::UnsupportedCompression {
                compression: self.compression,
            });
        }
        Ok(())
    }

    /// Image width in pixels, for a validated header.
    #[inline]
    pub fn width_px(&self) -> usize {
        self.width.max(0) as usize
    }

    /// Image height in pixels, for a validated header.
    #[inline]
    pub fn height_px(&self) -> usize {
        self.height.max(0) as usize
    }

    /// Padding bytes after each row of pixel data.
    ///
    /// A row of `width` 24-bit pixels is `3 * width` bytes, and since
    /// `3 ≡ -1 (mod 4)` the bytes needed to reach a multiple of four are
    /// exactly `width mod 4`.
    #[inline]
    pub fn row_padding(&self) -> usize {
        row_padding(self.width_px())
    }
}

/// Padding bytes after a 24-bit row of `width` pixels.
#[inline]
pub const fn row_padding(width: usize) -> usize {
    width % 4
}
