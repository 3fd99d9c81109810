//! CellImage: one averaged color per terminal cell.

use crate::color::Rgb;
use crate::downsample::BlockGrid;
use crate::palette::Palette;

/// The downsampled image, ready to be rendered.
///
/// Stores one averaged [`Rgb`] per cell in row-major order, along with the
/// [`BlockGrid`] that produced it. Quantization happens at render time, so
/// the same `CellImage` can be rendered in any color mode.
///
/// # Example
///
/// ```
/// use term_raster::{BlockGrid, PixelBuffer, Rgb};
///
/// let pixels = PixelBuffer::filled(4, 4, Rgb::new(255, 0, 0));
/// let grid = BlockGrid::compute(4, 4, 4, 2).unwrap();
/// let cells = grid.average(&pixels).unwrap();
///
/// assert_eq!(cells.columns(), 4);
/// assert_eq!(cells.rows(), 2);
/// assert_eq!(cells.palette_indices(), vec![9; 8]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellImage {
    /// Averaged colors, one per cell, row-major order.
    colors: Vec<Rgb>,
    /// The grid the colors were averaged with.
    grid: BlockGrid,
}

impl CellImage {
    /// Create a `CellImage` from averaged colors.
    ///
    /// # Panics
    ///
    /// Panics if `colors.len() != grid.columns * grid.rows`.
    pub fn new(colors: Vec<Rgb>, grid: BlockGrid) -> Self {
        assert_eq!(
            colors.len(),
            grid.cell_count(),
            "colors length ({}) must match columns * rows ({}x{})",
            colors.len(),
            grid.columns,
            grid.rows,
        );
        Self { colors, grid }
    }

    /// Returns the averaged colors as a slice.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Returns the grid used for averaging.
    #[inline]
    pub fn grid(&self) -> &BlockGrid {
        &self.grid
    }

    /// Returns the number of cells per row.
    #[inline]
    pub fn columns(&self) -> usize {
        self.grid.columns
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows
    }

    /// True when there is nothing to draw.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over the rows of cell colors, top row first.
    pub fn cell_rows(&self) -> impl Iterator<Item = &[Rgb]> {
        // chunks_exact panics on 0; an empty grid has no rows anyway
        self.colors.chunks_exact(self.grid.columns.max(1))
    }

    /// Quantize every cell against the 256-color palette.
    pub fn palette_indices(&self) -> Vec<u8> {
        let palette = Palette::XTERM;
        self.colors.iter().map(|&c| palette.quantize(c)).collect()
    }
}
