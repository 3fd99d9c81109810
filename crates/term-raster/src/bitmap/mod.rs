//! Bitmap decoding
//!
//! Supports the subset of Windows bitmaps the viewer renders: a 14-byte
//! file header, a 40-byte `BITMAPINFOHEADER`, 24 bits per pixel, no
//! compression, bottom-up rows padded to four bytes. Everything else is
//! rejected with a specific [`DecodeError`].
//!
//! [`encode`] writes the same subset and exists mainly so that round trips
//! can be checked.

mod decode;
mod encode;
mod error;
mod header;
mod pixels;

pub use decode::{decode, Bitmap};
pub use encode::{encode, encode_pixel_data};
pub use error::DecodeError;
pub use header::{row_padding, BitmapHeader, HEADER_SIZE};
pub use pixels::PixelBuffer;
