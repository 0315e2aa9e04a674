use std::{error, fmt, io};

/// Error returned when a picture cannot be encoded.
///
/// Output written before the failure is not removed, the caller must discard it.
#[derive(Debug)]
pub enum EncodingError {
    /// Writing to the output stream failed.
    Io(io::Error),
    /// Scratch buffers for RGB conversion could not be allocated.
    OutOfMemory { requested: usize },
    /// Only depth 1 (monochrome) and 2 to 8 (color index planes) are supported.
    UnsupportedDepth(u8),
    /// Width, height or row stride is zero.
    InvalidDimensions {
        width: usize,
        height: usize,
        stride: usize,
    },
    /// Image does not fit into 16-bit fields of the header.
    DimensionsTooLarge,
    /// Picture refers to a color which is not in the palette.
    PaletteIndexOutOfRange { index: u8, len: usize },
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::Io(err) => write!(f, "I/O error while writing PCX: {err}"),
            EncodingError::OutOfMemory { requested } => {
                write!(f, "cannot allocate {requested} bytes for color conversion")
            }
            EncodingError::UnsupportedDepth(depth) => {
                write!(f, "unsupported picture depth {depth}, expected 1 to 8")
            }
            EncodingError::InvalidDimensions {
                width,
                height,
                stride,
            } => write!(
                f,
                "invalid picture dimensions {width}x{height} with row stride {stride}"
            ),
            EncodingError::DimensionsTooLarge => {
                write!(f, "picture is too large for the PCX header")
            }
            EncodingError::PaletteIndexOutOfRange { index, len } => {
                write!(f, "color index {index} is outside of palette with {len} entries")
            }
        }
    }
}

impl error::Error for EncodingError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            EncodingError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for EncodingError {
    fn from(err: io::Error) -> EncodingError {
        EncodingError::Io(err)
    }
}
