//! Test fixtures: bitmap and config files in a temporary directory.

use std::path::PathBuf;
use std::process::{Command, Output};

use term_raster::{encode, PixelBuffer, Rgb};

/// Offset of the bits-per-pixel field
pub const BITS_PER_PIXEL_OFFSET: usize = 28;

/// Offset of the compression field
pub const COMPRESSION_OFFSET: usize = 30;

/// Offset of the height field
pub const HEIGHT_OFFSET: usize = 22;

/// Colors used across tests
pub mod colors {
    use term_raster::Rgb;

    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const MID_GRAY: Rgb = Rgb::new(128, 128, 128);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
}

/// A temporary directory holding test files, removed on drop
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write raw bytes and return the file path
    pub fn write(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("write test file");
        path
    }

    /// Write a solid-color 24-bit bitmap
    pub fn solid_bitmap(&self, name: &str, width: usize, height: usize, color: Rgb) -> PathBuf {
        self.write(name, &encode(&PixelBuffer::filled(width, height, color)))
    }

    /// Write a bitmap whose left half is `left` and right half is `right`
    pub fn split_bitmap(
        &self,
        name: &str,
        width: usize,
        height: usize,
        left: Rgb,
        right: Rgb,
    ) -> PathBuf {
        let pixels = (0..height)
            .flat_map(|_| (0..width).map(move |col| if col < width / 2 { left } else { right }))
            .collect();
        self.write(name, &encode(&PixelBuffer::new(pixels, width, height)))
    }

    /// Write a valid 2x2 bitmap with one header field patched
    pub fn patched_bitmap(&self, name: &str, offset: usize, value: &[u8]) -> PathBuf {
        let mut bytes = encode(&PixelBuffer::filled(2, 2, colors::RED));
        bytes[offset..offset + value.len()].copy_from_slice(value);
        self.write(name, &bytes)
    }
}

/// Run the `bmpterm` binary with a clean environment
pub fn run_bmpterm(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bmpterm"))
        .args(args)
        .env_remove("BMPTERM_CONFIG")
        .env_remove("RUST_LOG")
        .env_remove("COLUMNS")
        .env_remove("LINES")
        .output()
        .expect("run bmpterm")
}
