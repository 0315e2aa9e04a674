use std::fs::File;
use std::io;
use std::io::Write;
use std::path::Path;

use crate::low_level::rle::Compressor;
use crate::low_level::Header;
use crate::palette::ColorLookupTable;
use crate::picture::PixelBuffer;
use crate::{EncoderOptions, EncodingError};

/// Rows between two progress dots.
const PROGRESS_INTERVAL: usize = 10;

/// Sizes of the picture as they are stored in the header.
#[derive(Copy, Clone, Debug)]
struct Layout {
    end: (u16, u16),
    stride: usize,
    true_color: bool,
}

impl Layout {
    fn new<B: PixelBuffer + ?Sized>(buffer: &B) -> Result<Self, EncodingError> {
        let depth = buffer.depth();
        let true_color = match depth {
            1 => false,
            2..=8 => true,
            _ => return Err(EncodingError::UnsupportedDepth(depth)),
        };

        let (width, height, stride) = (buffer.width(), buffer.height(), buffer.row_stride());
        if width == 0 || height == 0 || stride == 0 {
            return Err(EncodingError::InvalidDimensions { width, height, stride });
        }

        let end = match (u16::try_from(width - 1), u16::try_from(height - 1)) {
            (Ok(x_end), Ok(y_end)) => (x_end, y_end),
            _ => return Err(EncodingError::DimensionsTooLarge),
        };

        let layout = Layout {
            end,
            stride,
            true_color,
        };
        layout.header_lane_length()?;
        Ok(layout)
    }

    /// Bytes in each lane: the packed row for monochrome, one byte per pixel for RGB planes.
    fn lane_length(&self) -> usize {
        if self.true_color {
            8 * self.stride
        } else {
            self.stride
        }
    }

    fn header_lane_length(&self) -> Result<u16, EncodingError> {
        u16::try_from(self.lane_length()).map_err(|_| EncodingError::DimensionsTooLarge)
    }

    fn header(&self, dpi: (u16, u16)) -> Result<Header, EncodingError> {
        let lane_length = self.header_lane_length()?;
        Ok(if self.true_color {
            Header::true_color(self.end, dpi, lane_length)
        } else {
            Header::monochrome(self.end, dpi, lane_length)
        })
    }
}

fn allocate_lane(length: usize) -> Result<Vec<u8>, EncodingError> {
    let mut lane = Vec::new();
    lane.try_reserve_exact(length)
        .map_err(|_| EncodingError::OutOfMemory { requested: length })?;
    lane.resize(length, 0);
    Ok(lane)
}

/// Write `buffer` as PCX image to `stream`.
///
/// Monochrome pictures (depth 1) are written as 1-bit images, all other pictures are converted to 24-bit RGB
/// through `palette`. Bits and colors are inverted on the way: the picture uses 0 for background while PCX uses it
/// for black.
///
/// On error the stream is left with a partially written image, nothing is written after the failed write.
pub fn write_pcx<B, P, W>(
    buffer: &B,
    palette: &P,
    options: &EncoderOptions,
    stream: &mut W,
) -> Result<(), EncodingError>
where
    B: PixelBuffer + ?Sized,
    P: ColorLookupTable + ?Sized,
    W: io::Write,
{
    encode_with_progress(buffer, palette, options, stream, &mut io::stderr())
}

/// Progress messages are not part of the image, failures to write them are ignored.
fn encode_with_progress<B, P, W, E>(
    buffer: &B,
    palette: &P,
    options: &EncoderOptions,
    stream: &mut W,
    progress: &mut E,
) -> Result<(), EncodingError>
where
    B: PixelBuffer + ?Sized,
    P: ColorLookupTable + ?Sized,
    W: io::Write,
    E: io::Write,
{
    let layout = Layout::new(buffer)?;
    let header = layout.header(options.get_dpi())?;

    log::debug!(
        "writing PCX {}x{}, depth {}, version {:?}, {} plane(s) of {} bytes",
        buffer.width(),
        buffer.height(),
        buffer.depth(),
        header.version,
        header.number_of_color_planes,
        header.lane_length
    );

    let lane_length = layout.lane_length();
    // Allocated before anything is written so that a failure leaves the stream untouched.
    let mut planes = if layout.true_color {
        [
            allocate_lane(lane_length)?,
            allocate_lane(lane_length)?,
            allocate_lane(lane_length)?,
        ]
    } else {
        [allocate_lane(lane_length)?, Vec::new(), Vec::new()]
    };

    if !options.get_quiet() {
        let _ = writeln!(progress, "Writing PCX output");
    }

    header.write(stream)?;

    let mut compressor = Compressor::new(&mut *stream);

    // Rows are stored from top to bottom, which is from the highest index down.
    for y in (0..buffer.height()).rev() {
        if !options.get_quiet() && y % PROGRESS_INTERVAL == 0 {
            let _ = write!(progress, ".");
        }
        log::trace!("row {}", y);

        if layout.true_color {
            let row_length = buffer.row(y).len();
            if row_length < buffer.depth() as usize * layout.stride {
                return Err(EncodingError::InvalidDimensions {
                    width: buffer.width(),
                    height: buffer.height(),
                    stride: row_length,
                });
            }

            let [r, g, b] = &mut planes;
            for x in 0..lane_length {
                let index = buffer.color_index(y, x);
                let [red, green, blue] = palette
                    .color(index)
                    .ok_or_else(|| EncodingError::PaletteIndexOutOfRange {
                        index,
                        len: palette.len(),
                    })?;
                r[x] = 255 - red;
                g[x] = 255 - green;
                b[x] = 255 - blue;
            }

            for plane in &planes {
                compressor.encode_lane(plane)?;
            }
        } else {
            let row = buffer.row(y);
            let row = row.get(..lane_length).ok_or(EncodingError::InvalidDimensions {
                width: buffer.width(),
                height: buffer.height(),
                stride: row.len(),
            })?;

            let lane = &mut planes[0];
            for (inverted, &byte) in lane.iter_mut().zip(row) {
                *inverted = !byte;
            }
            compressor.encode_lane(lane)?;
        }
    }

    if !options.get_quiet() {
        let _ = writeln!(progress);
    }

    log::info!("PCX written, {} rows", buffer.height());
    Ok(())
}

/// Write `buffer` as PCX image to a new file at `path`.
///
/// A partially written file is left in place on error.
pub fn write_pcx_file<B, P, Q>(
    path: Q,
    buffer: &B,
    palette: &P,
    options: &EncoderOptions,
) -> Result<(), EncodingError>
where
    B: PixelBuffer + ?Sized,
    P: ColorLookupTable + ?Sized,
    Q: AsRef<Path>,
{
    let file = File::create(path)?;
    let mut stream = io::BufWriter::new(file);
    write_pcx(buffer, palette, options, &mut stream)?;
    stream.flush()?;
    Ok(())
}

/// Create PCX images.
#[derive(Debug)]
pub struct PcxWriter<W: io::Write> {
    stream: W,
    options: EncoderOptions,
}

impl<W: io::Write> PcxWriter<W> {
    /// Create new PCX writer.
    pub fn new(stream: W, options: EncoderOptions) -> Self {
        PcxWriter { stream, options }
    }

    /// Write one complete image.
    pub fn write_picture<B, P>(&mut self, buffer: &B, palette: &P) -> Result<(), EncodingError>
    where
        B: PixelBuffer + ?Sized,
        P: ColorLookupTable + ?Sized,
    {
        write_pcx(buffer, palette, &self.options, &mut self.stream)
    }

    /// Flush the stream and get it back.
    pub fn into_inner(mut self) -> io::Result<W> {
        self.stream.flush()?;
        Ok(self.stream)
    }
}
