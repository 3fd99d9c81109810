use std::io::Write;
use std::path::Path;

use term_raster::{CellImage, ColorMode, RasterError, Rasterizer};

use crate::models::{TerminalSize, ViewerConfig};

/// Draws bitmap files into a terminal-sized grid of colored cells
#[derive(Debug, Clone)]
pub struct ViewService {
    rasterizer: Rasterizer,
}

impl ViewService {
    pub fn new(size: TerminalSize, mode: ColorMode) -> Self {
        Self {
            rasterizer: Rasterizer::new(size.columns, size.rows).color_mode(mode),
        }
    }

    /// Build from merged settings, taking any axis the settings leave open
    /// from `detected`.
    pub fn from_config(config: &ViewerConfig, detected: TerminalSize) -> Self {
        let size = detected.with_overrides(config);
        let mode = config.color_mode();
        tracing::debug!(
            columns = size.columns,
            rows = size.rows,
            ?mode,
            "Viewer settings"
        );
        Self::new(size, mode)
    }

    pub fn rasterizer(&self) -> &Rasterizer {
        &self.rasterizer
    }

    /// Decode the bitmap at `path` and write it to `out`.
    ///
    /// The pixel buffer is released before any output is written.
    pub fn view<W: Write>(&self, path: &Path, out: &mut W) -> Result<(), RasterError> {
        let cells = self.cells_for(path)?;

        self.rasterizer.render(&cells, out)?;
        out.flush().map_err(RasterError::Output)?;

        tracing::debug!(
            columns = cells.columns(),
            rows = cells.rows(),
            "Render complete"
        );
        Ok(())
    }

    fn cells_for(&self, path: &Path) -> Result<CellImage, RasterError> {
        tracing::debug!(path = %path.display(), "Opening bitmap");
        let bitmap = self.rasterizer.open(path)?;

        let header = &bitmap.header;
        tracing::debug!(
            width = header.width,
            height = header.height,
            bits_per_pixel = header.bits_per_pixel,
            compression = header.compression,
            pixel_data_offset = header.pixel_data_offset,
            "Header accepted"
        );
        tracing::debug!(
            bytes = bitmap.width() * bitmap.height() * 3,
            "Pixel data decoded"
        );

        let grid = self.rasterizer.grid_for(&bitmap)?;
        tracing::debug!(
            block_width = grid.block_width,
            block_height = grid.block_height,
            columns = grid.columns,
            rows = grid.rows,
            "Block grid"
        );

        Ok(grid.average(&bitmap.pixels)?)
    }
}
