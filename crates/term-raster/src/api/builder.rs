//! Rasterizer builder -- the primary ergonomic entry point for the crate.
//!
//! [`Rasterizer`] wires decoding, downsampling, quantization and rendering
//! together behind a small fluent configuration.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use super::RasterError;
use crate::bitmap::{decode, Bitmap};
use crate::downsample::BlockGrid;
use crate::output::{CellImage, CellRenderer, ColorMode};

/// High-level bitmap-to-terminal pipeline.
///
/// # Design
///
/// - Constructor requires the target grid size
/// - Configuration methods consume and return `self`
/// - Pipeline methods take `&self`, so one `Rasterizer` can be reused for
///   many images
/// - Each stage is also available on its own, so callers can inspect the
///   header or grid between stages
///
/// # Example
///
/// ```
/// use term_raster::{encode, ColorMode, PixelBuffer, Rasterizer, Rgb};
///
/// let bytes = encode(&PixelBuffer::filled(4, 4, Rgb::new(0, 0, 255)));
///
/// let rasterizer = Rasterizer::new(4, 2).color_mode(ColorMode::TrueColor);
/// let mut out = Vec::new();
/// rasterizer.render_reader(&mut bytes.as_slice(), &mut out).unwrap();
///
/// assert!(String::from_utf8(out).unwrap().starts_with("\x1b[48;2;0;0;255m "));
/// ```
#[derive(Debug, Clone)]
pub struct Rasterizer {
    columns: usize,
    rows: usize,
    renderer: CellRenderer,
}

impl Rasterizer {
    /// Create a rasterizer targeting a `columns × rows` terminal.
    ///
    /// Default color mode is [`ColorMode::Indexed`].
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            renderer: CellRenderer::new(ColorMode::Indexed),
        }
    }

    /// Set the color mode.
    #[inline]
    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.renderer = CellRenderer::new(mode);
        self
    }

    /// Target terminal size as `(columns, rows)`.
    #[inline]
    pub fn target(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    /// The configured color mode.
    #[inline]
    pub fn mode(&self) -> ColorMode {
        self.renderer.mode()
    }

    /// Open and decode the bitmap at `path`.
    pub fn open(&self, path: impl AsRef<Path>) -> Result<Bitmap, RasterError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| RasterError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        self.decode(&mut BufReader::new(file))
    }

    /// Decode a bitmap from any reader.
    pub fn decode<R: Read>(&self, reader: &mut R) -> Result<Bitmap, RasterError> {
        Ok(decode(reader)?)
    }

    /// The block grid this rasterizer would use for `bitmap`.
    pub fn grid_for(&self, bitmap: &Bitmap) -> Result<BlockGrid, RasterError> {
        Ok(BlockGrid::compute(
            bitmap.width(),
            bitmap.height(),
            self.columns,
            self.rows,
        )?)
    }

    /// Downsample `bitmap` to one averaged color per terminal cell.
    pub fn rasterize(&self, bitmap: &Bitmap) -> Result<CellImage, RasterError> {
        let grid = self.grid_for(bitmap)?;
        Ok(grid.average(&bitmap.pixels)?)
    }

    /// Write `cells` as escape sequences.
    pub fn render<W: Write>(&self, cells: &CellImage, out: &mut W) -> Result<(), RasterError> {
        self.renderer
            .render(cells, out)
            .map_err(RasterError::Output)
    }

    /// Render `cells` into a `String`.
    pub fn render_to_string(&self, cells: &CellImage) -> String {
        self.renderer.render_to_string(cells)
    }

    /// Decode, downsample and render a bitmap read from `reader`.
    pub fn render_reader<R: Read, W: Write>(
        &self,
        reader: &mut R,
        out: &mut W,
    ) -> Result<(), RasterError> {
        let bitmap = self.decode(reader)?;
        let cells = self.rasterize(&bitmap)?;
        self.render(&cells, out)
    }

    /// Decode, downsample and render the bitmap at `path`.
    ///
    /// The pixel buffer is dropped as soon as the cells are computed, on
    /// every path out of this function.
    pub fn render_file<W: Write>(
        &self,
        path: impl AsRef<Path>,
        out: &mut W,
    ) -> Result<(), RasterError> {
        let cells = {
            let bitmap = self.open(path)?;
            self.rasterize(&bitmap)?
        };
        self.render(&cells, out)
    }
}
