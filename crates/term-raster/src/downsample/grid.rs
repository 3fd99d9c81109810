//! Aspect-corrected block grid and block averaging

use super::error::DownsampleError;
use crate::bitmap::PixelBuffer;
use crate::color::Rgb;
use crate::output::CellImage;

/// How source pixels are grouped into terminal cells.
///
/// Each output cell covers a `block_width × block_height` rectangle of
/// source pixels. Terminal glyphs are roughly twice as tall as they are
/// wide, so blocks are twice as tall as they are wide to keep the image
/// proportions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGrid {
    /// Source pixels per cell horizontally (>= 1)
    pub block_width: usize,
    /// Source pixels per cell vertically (>= 1)
    pub block_height: usize,
    /// Output cells per row
    pub columns: usize,
    /// Output rows
    pub rows: usize,
}

impl BlockGrid {
    /// Compute the grid for a `width × height` image shown on a terminal of
    /// `term_columns × term_rows` cells.
    ///
    /// 1. Start from the largest blocks that fit each axis:
    ///    `max(width / term_columns, 1)` and `max(height / term_rows, 1)`.
    /// 2. Apply the 2:1 aspect correction. If the block is narrower than it
    ///    is tall, the width becomes half the height (at least 1);
    ///    otherwise the height becomes twice the width.
    /// 3. Only whole blocks are kept; pixels past the last whole block on
    ///    the right and bottom edges are dropped.
    ///
    /// # Errors
    ///
    /// [`DownsampleError::EmptyTarget`] if either terminal dimension is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use term_raster::BlockGrid;
    ///
    /// let grid = BlockGrid::compute(800, 400, 80, 24).unwrap();
    /// assert_eq!((grid.block_width, grid.block_height), (8, 16));
    /// assert_eq!((grid.columns, grid.rows), (100, 25));
    /// ```
    pub fn compute(
        width: usize,
        height: usize,
        term_columns: usize,
        term_rows: usize,
    ) -> Result<Self, DownsampleError> {
        if term_columns == 0 || term_rows == 0 {
            return Err(DownsampleError::EmptyTarget {
                columns: term_columns,
                rows: term_rows,
            });
        }

        let mut block_width = (width / term_columns).max(1);
        let mut block_height = (height / term_rows).max(1);

        if block_width < block_height {
            block_width = (block_height / 2).max(1);
        } else {
            block_height = block_width * 2;
        }

        Ok(Self {
            block_width,
            block_height,
            columns: width / block_width,
            rows: height / block_height,
        })
    }

    /// Number of output cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Check that every block lies inside a `width × height` image.
    ///
    /// [`compute`](Self::compute) only produces grids that pass, but the
    /// check is explicit so a grid built by hand, or computed for a
    /// different image, can never index outside the buffer.
    pub fn check_bounds(&self, width: usize, height: usize) -> Result<(), DownsampleError> {
        let fits = |cells: usize, block: usize, limit: usize| {
            block >= 1 && cells.checked_mul(block).is_some_and(|span| span <= limit)
        };
        if fits(self.columns, self.block_width, width) && fits(self.rows, self.block_height, height)
        {
            Ok(())
        } else {
            Err(DownsampleError::BlockOutOfBounds {
                columns: self.columns,
                rows: self.rows,
                block_width: self.block_width,
                block_height: self.block_height,
                width,
                height,
            })
        }
    }

    /// Average every block of `pixels` into one color per cell.
    ///
    /// Each channel is summed over the block and divided by the block area
    /// with integer division.
    ///
    /// # Errors
    ///
    /// [`DownsampleError::BlockOutOfBounds`] if the grid does not fit the
    /// buffer. Nothing is read in that case.
    pub fn average(&self, pixels: &PixelBuffer) -> Result<CellImage, DownsampleError> {
        self.check_bounds(pixels.width(), pixels.height())?;

        let area = (self.block_width * self.block_height) as u64;
        let mut colors = Vec::with_capacity(self.cell_count());

        for cell_row in 0..self.rows {
            let top = cell_row * self.block_height;
            for cell_col in 0..self.columns {
                let left = cell_col * self.block_width;

                let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
                for y in top..top + self.block_height {
                    for p in &pixels.row(y)[left..left + self.block_width] {
                        r += p.r as u64;
                        g += p.g as u64;
                        b += p.b as u64;
                    }
                }

                colors.push(Rgb::new(
                    (r / area) as u8,
                    (g / area) as u8,
                    (b / area) as u8,
                ));
            }
        }

        Ok(CellImage::new(colors, *self))
    }
}
