#![allow(clippy::module_inception)]

//! term-raster: bitmaps as colored terminal cells
//!
//! This library turns an uncompressed 24-bit bitmap into text that shows
//! the image in a terminal: each character cell is painted with a
//! background color approximating a block of source pixels.
//!
//! # Quick Start
//!
//! The [`Rasterizer`] builder is the primary entry point:
//!
//! ```
//! use term_raster::{encode, PixelBuffer, Rasterizer, Rgb};
//!
//! // Any 24-bit bitmap works; build one in memory for the example
//! let bytes = encode(&PixelBuffer::filled(160, 96, Rgb::new(0, 128, 0)));
//!
//! let rasterizer = Rasterizer::new(80, 24);
//! let mut out = Vec::new();
//! rasterizer.render_reader(&mut bytes.as_slice(), &mut out).unwrap();
//!
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("\x1b[48;5;2m "));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! file bytes
//!     |
//!     v
//! decode()                 (bitmap: header checks, bottom-up BGR rows)
//!     |
//!     v
//! PixelBuffer              (width x height Rgb, row 0 on top)
//!     |
//!     v
//! BlockGrid::average()     (2:1 aspect-corrected block means)
//!     |
//!     v
//! CellImage                (one Rgb per terminal cell)
//!     |
//!     v
//! CellRenderer::render()   (Palette / Threshold / true color)
//!     |
//!     v
//! ESC[48;5;Nm<space> ... ESC[0m\n
//! ```
//!
//! # Block Size and Aspect Ratio
//!
//! Blocks start as the largest size that fits the image into the terminal
//! on each axis. Terminal glyphs are about twice as tall as they are wide,
//! so the block is then corrected to be twice as tall as it is wide: a
//! narrow block has its width halved from its height, otherwise the height
//! becomes double the width. Only whole blocks are drawn; leftover pixels
//! on the right and bottom edges are dropped.
//!
//! # Color Matching
//!
//! In the default [`ColorMode::Indexed`] mode each averaged color is
//! matched to the closest entry of the standard 256-color terminal palette
//! ([`Palette::XTERM`]) by exact integer Euclidean distance in RGB. Ties go
//! to the lowest index, so pure colors that appear both among the 16 system
//! colors and in the color cube resolve to the system color.
//!
//! [`ColorMode::TrueColor`] skips matching and emits the averaged color
//! directly. [`ColorMode::Threshold`] reduces each color to one of 8 basic
//! colors by comparing each channel against a cutoff.

pub mod api;
pub mod bitmap;
pub mod color;
pub mod downsample;
pub mod output;
pub mod palette;


pub use api::{RasterError, Rasterizer, Severity};
pub use bitmap::{decode, encode, Bitmap, BitmapHeader, DecodeError, PixelBuffer};
pub use color::Rgb;
pub use downsample::{BlockGrid, DownsampleError};
pub use output::{CellImage, CellRenderer, ColorMode};
pub use palette::{Palette, Threshold};
