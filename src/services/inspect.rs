use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use term_raster::{BitmapHeader, DecodeError, RasterError};

/// Header fields of a bitmap file and whether the viewer can draw it
#[derive(Debug)]
pub struct HeaderReport {
    pub header: BitmapHeader,
    /// Why the header was rejected, if it was
    pub rejection: Option<DecodeError>,
}

impl HeaderReport {
    /// Read and check the header of the file at `path`.
    ///
    /// Only the 54 header bytes are read. A file that is too short or does
    /// not start with `BM` is an error; any other rejection is part of the
    /// report.
    pub fn read(path: &Path) -> Result<Self, RasterError> {
        let file = File::open(path).map_err(|source| RasterError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let header = BitmapHeader::read_from(&mut BufReader::new(file))?;
        let rejection = header.validate().err();

        match &rejection {
            None => tracing::debug!(path = %path.display(), "Header accepted"),
            Some(e) => tracing::debug!(path = %path.display(), %e, "Header rejected"),
        }
        Ok(Self { header, rejection })
    }

    pub fn is_accepted(&self) -> bool {
        self.rejection.is_none()
    }

    /// Write one `name: value` line per header field, then the verdict.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let h = &self.header;
        writeln!(out, "file header")?;
        writeln!(
            out,
            "  magic:              {}",
            String::from_utf8_lossy(&h.magic)
        )?;
        writeln!(out, "  file size:          {}", h.file_size)?;
        writeln!(out, "  reserved:           {} {}", h.reserved1, h.reserved2)?;
        writeln!(out, "  pixel data offset:  {}", h.pixel_data_offset)?;
        writeln!(out, "info header")?;
        writeln!(out, "  header size:        {}", h.header_size)?;
        writeln!(out, "  width:              {}", h.width)?;
        writeln!(out, "  height:             {}", h.height)?;
        writeln!(out, "  planes:             {}", h.planes)?;
        writeln!(out, "  bits per pixel:     {}", h.bits_per_pixel)?;
        writeln!(out, "  compression:        {}", h.compression)?;
        writeln!(out, "  image data size:    {}", h.image_data_size)?;
        writeln!(out, "  x pixels per meter: {}", h.x_pixels_per_meter)?;
        writeln!(out, "  y pixels per meter: {}", h.y_pixels_per_meter)?;
        writeln!(out, "  colors used:        {}", h.colors_used)?;
        writeln!(out, "  colors important:   {}", h.colors_important)?;
        match &self.rejection {
            None => writeln!(out, "status: accepted")?,
            Some(e) => writeln!(out, "status: rejected ({e})")?,
        }
        out.flush()
    }
}
