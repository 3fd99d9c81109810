//! Public API for the term-raster crate.
//!
//! This module provides the high-level API: the [`Rasterizer`] builder and
//! the [`RasterError`] unified error type.

mod builder;
mod error;

pub use builder::Rasterizer;
pub use error::{RasterError, Severity};
