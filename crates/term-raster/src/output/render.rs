//! Escape-sequence renderer for [`CellImage`]s.
//!
//! Every cell becomes a background-color sequence followed by a single
//! space; every row ends with a reset and a newline.

use std::io::{self, Write};

use super::CellImage;
use crate::color::Rgb;
use crate::palette::{Palette, Threshold};

/// Resets all attributes to the terminal default.
pub const RESET: &str = "\x1b[0m";

/// How cell colors are expressed to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// 256-color mode: `ESC[48;5;Nm` with the nearest palette index.
    #[default]
    Indexed,

    /// 24-bit mode: `ESC[48;2;R;G;Bm` with the averaged color as is.
    ///
    /// The palette is not consulted.
    TrueColor,

    /// 8-color mode: `ESC[4Nm` with each channel thresholded
    /// independently. For terminals without 256-color support.
    Threshold(Threshold),
}

/// Writes a [`CellImage`] as colored terminal cells.
///
/// # Example
///
/// ```
/// use term_raster::{BlockGrid, CellRenderer, ColorMode, PixelBuffer, Rgb};
///
/// let pixels = PixelBuffer::filled(2, 2, Rgb::new(255, 0, 0));
/// let cells = BlockGrid::compute(2, 2, 2, 1).unwrap().average(&pixels).unwrap();
///
/// let text = CellRenderer::new(ColorMode::Indexed).render_to_string(&cells);
/// assert_eq!(text, "\x1b[48;5;9m \x1b[48;5;9m \x1b[0m\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CellRenderer {
    mode: ColorMode,
    palette: Palette,
}

impl CellRenderer {
    /// Create a renderer for the given color mode.
    pub fn new(mode: ColorMode) -> Self {
        Self {
            mode,
            palette: Palette::XTERM,
        }
    }

    /// The configured color mode.
    #[inline]
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Write `image` to `out`, one terminal line per cell row.
    ///
    /// Writes are issued per cell; wrap unbuffered sinks such as stdout in
    /// a [`std::io::BufWriter`].
    pub fn render<W: Write>(&self, image: &CellImage, out: &mut W) -> io::Result<()> {
        for row in image.cell_rows() {
            for &color in row {
                self.write_cell(color, out)?;
            }
            out.write_all(RESET.as_bytes())?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Render into a `String`.
    pub fn render_to_string(&self, image: &CellImage) -> String {
        let mut buf = Vec::new();
        self.render(image, &mut buf)
            .expect("writing to a Vec cannot fail");
        // only ASCII is ever written
        String::from_utf8(buf).expect("rendered output is ASCII")
    }

    fn write_cell<W: Write>(&self, color: Rgb, out: &mut W) -> io::Result<()> {
        match self.mode {
            ColorMode::Indexed => {
                let index = self.palette.quantize(color);
                write!(out, "\x1b[48;5;{index}m ")
            }
            ColorMode::TrueColor => {
                write!(out, "\x1b[48;2;{};{};{}m ", color.r, color.g, color.b)
            }
            ColorMode::Threshold(threshold) => {
                let index = threshold.classify(color);
                write!(out, "\x1b[4{index}m ")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::downsample::BlockGrid;
    use pretty_assertions::assert_eq;

    fn image(colors: Vec<Rgb>, columns: usize, rows: usize) -> CellImage {
        CellImage::new(
            colors,
            BlockGrid {
                block_width: 1,
                block_height: 2,
                columns,
                rows,
            },
        )
    }

    #[test]
    fn test_indexed_rows() {
        let img = image(
            vec![
                Rgb::new(0, 0, 0),
                Rgb::new(255, 255, 255),
                Rgb::new(128, 128, 128),
                Rgb::new(255, 0, 0),
            ],
            2,
            2,
        );
        let text = CellRenderer::new(ColorMode::Indexed).render_to_string(&img);
        assert_eq!(
            text,
            "\x1b[48;5;0m \x1b[48;5;15m \x1b[0m\n\x1b[48;5;8m \x1b[48;5;9m \x1b[0m\n"
        );
    }

    #[test]
    fn test_truecolor_bypasses_palette() {
        let img = image(vec![Rgb::new(1, 2, 3)], 1, 1);
        let text = CellRenderer::new(ColorMode::TrueColor).render_to_string(&img);
        assert_eq!(text, "\x1b[48;2;1;2;3m \x1b[0m\n");
    }

    #[test]
    fn test_threshold_mode() {
        let img = image(vec![Rgb::new(200, 10, 200), Rgb::new(10, 10, 10)], 2, 1);
        let text =
            CellRenderer::new(ColorMode::Threshold(Threshold::default())).render_to_string(&img);
        assert_eq!(text, "\x1b[45m \x1b[40m \x1b[0m\n");
    }

    #[test]
    fn test_empty_image_renders_nothing() {
        let img = image(Vec::new(), 3, 0);
        let text = CellRenderer::new(ColorMode::Indexed).render_to_string(&img);
        assert!(text.is_empty());
    }

    #[test]
    fn test_each_row_ends_with_reset() {
        let img = image(vec![Rgb::new(9, 9, 9); 12], 4, 3);
        let text = CellRenderer::new(ColorMode::Indexed).render_to_string(&img);
        let lines: Vec<&str> = text.split_terminator('\n').collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            assert!(line.ends_with(RESET));
            assert_eq!(line.matches(' ').count(), 4);
        }
    }

    #[test]
    fn test_write_error_propagates() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let img = image(vec![Rgb::new(0, 0, 0)], 1, 1);
        let err = CellRenderer::new(ColorMode::Indexed)
            .render(&img, &mut Broken)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
