//! Unified error type for the term-raster public API.
//!
//! [`RasterError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use std::path::PathBuf;

use thiserror::Error;

use crate::bitmap::DecodeError;
use crate::downsample::DownsampleError;

/// How serious a failure is, for callers that pick an exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A valid bitmap in a format this crate does not render
    Soft,
    /// Unreadable, corrupt or non-bitmap input, or an output failure
    Hard,
}

/// Unified error type for the term-raster public API.
///
/// # Example
///
/// ```
/// use term_raster::{RasterError, Rasterizer};
///
/// fn preview(bytes: &[u8]) -> Result<String, RasterError> {
///     let rasterizer = Rasterizer::new(80, 24);
///     let bitmap = rasterizer.decode(&mut &bytes[..])?;
///     let cells = rasterizer.rasterize(&bitmap)?;
///     Ok(rasterizer.render_to_string(&cells))
/// }
///
/// assert!(matches!(preview(b"GIF89a"), Err(RasterError::Decode(_))));
/// ```
#[derive(Debug, Error)]
pub enum RasterError {
    /// The input file could not be opened for reading
    #[error("cannot open {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header or pixel data could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The image could not be mapped onto the target grid
    #[error(transparent)]
    Downsample(#[from] DownsampleError),

    /// Writing the rendered cells failed
    #[error("output error: {0}")]
    Output(#[source] std::io::Error),
}

impl RasterError {
    /// Classify the error: unsupported-but-valid formats are
    /// [`Severity::Soft`], everything else is [`Severity::Hard`].
    pub fn severity(&self) -> Severity {
        match self {
            RasterError::Decode(e) if e.is_unsupported_format() => Severity::Soft,
            _ => Severity::Hard,
        }
    }
}
