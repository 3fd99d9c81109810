use term_raster::{RasterError, Severity};
use thiserror::Error;

use crate::models::ConfigError;

/// Exit status for formats the viewer deliberately does not render
pub const EXIT_UNSUPPORTED: u8 = 2;

/// Exit status for every other failure
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Raster(#[from] RasterError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ViewError {
    pub fn severity(&self) -> Severity {
        match self {
            ViewError::Raster(e) => e.severity(),
            ViewError::Config(_) => Severity::Hard,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self.severity() {
            Severity::Soft => EXIT_UNSUPPORTED,
            Severity::Hard => EXIT_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use term_raster::DecodeError;

    #[test]
    fn test_unsupported_bit_depth_is_soft() {
        let error: ViewError = RasterError::from(DecodeError::UnsupportedBitDepth { bits: 8 }).into();
        assert_eq!(error.severity(), Severity::Soft);
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_unsupported_orientation_is_soft() {
        let error: ViewError =
            RasterError::from(DecodeError::UnsupportedOrientation { height: -10 }).into();
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_not_a_bitmap_is_hard() {
        let error: ViewError = RasterError::from(DecodeError::NotABitmap { magic: *b"PK" }).into();
        assert_eq!(error.severity(), Severity::Hard);
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_file_open_is_hard() {
        let error: ViewError = RasterError::FileOpen {
            path: PathBuf::from("gone.bmp"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .into();
        assert_eq!(error.exit_code(), 1);
        assert!(error.to_string().starts_with("cannot open gone.bmp: "));
    }

    #[test]
    fn test_config_error_is_hard() {
        let error: ViewError = ConfigError::Read {
            path: PathBuf::from("bmpterm.yaml"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        }
        .into();
        assert_eq!(error.exit_code(), 1);
        assert!(error.to_string().starts_with("cannot read config bmpterm.yaml: "));
    }

    #[test]
    fn test_message_is_transparent() {
        let error: ViewError =
            RasterError::from(DecodeError::UnsupportedCompression { compression: 1 }).into();
        assert_eq!(
            error.to_string(),
            RasterError::from(DecodeError::UnsupportedCompression { compression: 1 }).to_string()
        );
    }
}
