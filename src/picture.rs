//! Rasterized pictures which can be written as PCX.

/// Read access to a rasterized picture.
///
/// Row 0 is the bottom row of the picture. A row consists of `depth()` bit planes, each `row_stride()` bytes long.
pub trait PixelBuffer {
    /// Number of columns.
    fn width(&self) -> usize;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Bytes in one bit plane of a row.
    fn row_stride(&self) -> usize;

    /// Number of bit planes. 1 means monochrome, anything larger is a color index.
    fn depth(&self) -> u8;

    /// Raw bytes of row `y`. For monochrome pictures at least `row_stride()` bytes.
    fn row(&self, y: usize) -> &[u8];

    /// Color index of pixel `x` in row `y`.
    ///
    /// `x` may go up to `8 * row_stride()`, past the width, when the last byte of a row is padded.
    fn color_index(&self, y: usize, x: usize) -> u8 {
        let mask = 0x80u8 >> (x & 7);
        let row = self.row(y);
        let stride = self.row_stride();

        (0..self.depth() as usize)
            .filter(|&plane| row[plane * stride + (x >> 3)] & mask != 0)
            .fold(0, |index, plane| index | (1 << plane))
    }
}

/// Number of bytes needed for one bit plane of `width` pixels.
pub fn row_stride_for(width: usize) -> usize {
    (width + 7) / 8
}

/// Picture stored as bit planes, row after row.
///
/// Bits are stored most significant first, plane 0 holds the lowest bit of the color index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PicBuf {
    width: usize,
    height: usize,
    depth: u8,
    stride: usize,
    data: Vec<u8>,
}

impl PicBuf {
    /// Create picture filled with color index 0.
    pub fn new(width: usize, height: usize, depth: u8) -> Self {
        let stride = row_stride_for(width);
        PicBuf {
            width,
            height,
            depth,
            stride,
            data: vec![0; stride * depth as usize * height],
        }
    }

    fn row_length(&self) -> usize {
        self.stride * self.depth as usize
    }

    /// Mutable raw bytes of row `y`.
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let length = self.row_length();
        &mut self.data[y * length..(y + 1) * length]
    }

    /// Color index of pixel at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.color_index(y, x)
    }

    /// Set color index of pixel at `(x, y)`. Bits of `index` above the depth are ignored.
    ///
    /// Panics if the pixel is outside of the picture.
    pub fn set_pixel(&mut self, x: usize, y: usize, index: u8) {
        assert!(x < self.width && y < self.height, "pcx_raster::PicBuf::set_pixel: pixel outside of picture");

        let mask = 0x80u8 >> (x & 7);
        let stride = self.stride;
        let depth = self.depth as usize;
        let row = self.row_mut(y);

        for plane in 0..depth {
            let byte = &mut row[plane * stride + (x >> 3)];
            if index & (1 << plane) != 0 {
                *byte |= mask;
            } else {
                *byte &= !mask;
            }
        }
    }
}

impl PixelBuffer for PicBuf {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn row_stride(&self) -> usize {
        self.stride
    }

    fn depth(&self) -> u8 {
        self.depth
    }

    fn row(&self, y: usize) -> &[u8] {
        let length = self.row_length();
        &self.data[y * length..(y + 1) * length]
    }
}
