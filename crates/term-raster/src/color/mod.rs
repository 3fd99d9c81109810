//! Color types
//!
//! The whole pipeline works on 8-bit RGB triples. Bitmap files store pixels
//! in B, G, R byte order; [`Rgb::from_bgr`] and [`Rgb::to_bgr`] are the only
//! places where that order is handled.

mod rgb;

pub use rgb::Rgb;
