//! Error types for bitmap decoding

use thiserror::Error;

/// Error returned when a byte stream cannot be decoded into a pixel buffer.
///
/// Every variant is fatal to the decode; nothing is retried and no partial
/// buffer is returned.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The stream ended before `section` was complete
    #[error("file is truncated: unexpected end of data in {section}")]
    Truncated {
        /// The part of the file being read when the data ran out
        section: String,
    },

    /// The two-byte magic tag is not `BM`
    #[error("input is not a bitmap (magic {:#04x} {:#04x}, expected \"BM\")", .magic[0], .magic[1])]
    NotABitmap {
        /// The tag actually found
        magic: [u8; 2],
    },

    /// Width is zero or negative
    #[error("invalid bitmap width: {width}")]
    InvalidWidth {
        /// Width field from the info header
        width: i32,
    },

    /// Negative height (top-down row order)
    #[error("top-down bitmaps (height {height}) are not supported")]
    UnsupportedOrientation {
        /// Height field from the info header
        height: i32,
    },

    /// Anything other than 24 bits per pixel
    #[error("{bits}-bit bitmaps are not supported (only 24-bit)")]
    UnsupportedBitDepth {
        /// Bits-per-pixel field from the info header
        bits: u16,
    },

    /// Any compression method other than `BI_RGB` (0)
    #[error("compressed bitmaps are not supported (compression {compression})")]
    UnsupportedCompression {
        /// Compression field from the info header
        compression: u32,
    },

    /// The pixel buffer could not be allocated
    #[error("cannot allocate pixel buffer for {width}x{height} image")]
    Allocation {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
    },

    /// Read failure other than end of data
    #[error("read error: {0}")]
    Io(#[source] std::io::Error),
}

impl DecodeError {
    /// Map an I/O error raised while reading `section`.
    ///
    /// End of data becomes [`DecodeError::Truncated`]; anything else is
    /// kept as [`DecodeError::Io`].
    pub(crate) fn from_read(err: std::io::Error, section: impl Into<String>) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            DecodeError::Truncated {
                section: section.into(),
            }
        } else {
            DecodeError::Io(err)
        }
    }

    /// Returns true for the format features this decoder deliberately
    /// rejects (bit depth, compression, row order).
    ///
    /// These are well-formed bitmaps outside the supported subset, as
    /// opposed to broken or unreadable input.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(
            self,
            DecodeError::UnsupportedOrientation { .. }
                | DecodeError::UnsupportedBitDepth { .. }
                | DecodeError::UnsupportedCompression { .. }
        )
    }
}
