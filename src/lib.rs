//! bmpterm - bitmaps in the terminal
//!
//! Command-line front end for the `term-raster` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
