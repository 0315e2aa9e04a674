//! PCX file header.
use byteorder::{LittleEndian, WriteBytesExt};
use std::io;

use crate::low_level::MAGIC_BYTE;

/*
typedef struct _PcxHeader
{
    BYTE	Identifier;        /* PCX Id Number (Always 0x0A) */
    BYTE	Version;           /* Version Number */
    BYTE	Encoding;          /* Encoding Format */
    BYTE	BitsPerPixel;      /* Bits per Pixel */
    WORD	XStart;            /* Left of image */
    WORD	YStart;            /* Top of Image */
    WORD	XEnd;              /* Right of Image */
    WORD	YEnd;              /* Bottom of image */
    WORD	HorzRes;           /* Horizontal Resolution */
    WORD	VertRes;           /* Vertical Resolution */
    BYTE	Palette[48];       /* 16-Color EGA Palette */
    BYTE	Reserved1;         /* Reserved (Always 0) */
    BYTE	NumBitPlanes;      /* Number of Bit Planes */
    WORD	BytesPerLine;      /* Bytes per Scan-line */
    WORD	PaletteType;       /* Palette Type */
    BYTE	Reserved2[58];     /* Reserved (Always 0) */
} PCXHEAD;
*/

/// Size of the header in bytes. Pixel data starts right after it.
pub const HEADER_LENGTH: usize = 128;

const RESERVED_TAIL_LENGTH: usize = 58;

/// Encoding byte for RLE-compressed data, the only encoding this crate writes.
pub const ENCODING_RLE: u8 = 1;

/// Palette info value meaning "color or black & white".
pub const PALETTE_INFO_COLOR: u16 = 1;

/// 16-color palette stored in the header of monochrome images.
pub const DEFAULT_PALETTE_16: [[u8; 3]; 16] = [
    [0, 0, 0],
    [255, 255, 255],
    [0, 128, 0],
    [128, 128, 0],
    [0, 0, 128],
    [128, 0, 128],
    [0, 128, 128],
    [192, 192, 192],
    [0, 0, 0],
    [255, 0, 0],
    [0, 255, 0],
    [255, 255, 0],
    [0, 0, 255],
    [255, 0, 255],
    [0, 255, 255],
    [255, 255, 255],
];

/// File format version.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Version {
    /// PC Paintbrush 2.8 with palette information. Used for monochrome images.
    V2 = 2,
    /// PC Paintbrush 3.0 and later. Used for 24-bit RGB images.
    V5 = 5,
}

/// Header of PCX file to be written.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Header {
    /// Version of the file format.
    pub version: Version,

    /// Bits per pixel per color plane. Either 1 or 8.
    pub bit_depth: u8,

    /// Coordinates of the bottom right pixel, that is width and height minus one.
    pub end: (u16, u16),

    /// Dots per inch.
    pub dpi: (u16, u16),

    /// Color palette.
    pub palette: [[u8; 3]; 16],

    /// Number of color planes in the image.
    pub number_of_color_planes: u8,

    /// Bytes in each lane (one color plane of one row).
    pub lane_length: u16,
}

impl Header {
    /// Header of 1-bit image with a single plane and the default 16-color palette.
    pub fn monochrome(end: (u16, u16), dpi: (u16, u16), lane_length: u16) -> Self {
        Header {
            version: Version::V2,
            bit_depth: 1,
            end,
            dpi,
            palette: DEFAULT_PALETTE_16,
            number_of_color_planes: 1,
            lane_length,
        }
    }

    /// Header of 24-bit image with three 8-bit planes and an empty 16-color palette.
    pub fn true_color(end: (u16, u16), dpi: (u16, u16), lane_length: u16) -> Self {
        Header {
            version: Version::V5,
            bit_depth: 8,
            end,
            dpi,
            palette: [[0; 3]; 16],
            number_of_color_planes: 3,
            lane_length,
        }
    }

    /// Write header to the stream.
    ///
    /// Every field is written separately in little-endian order, so the output is the same on every host.
    pub fn write<W: io::Write>(&self, stream: &mut W) -> io::Result<()> {
        stream.write_u8(MAGIC_BYTE)?;
        stream.write_u8(self.version as u8)?;
        stream.write_u8(ENCODING_RLE)?;
        stream.write_u8(self.bit_depth)?;
        stream.write_u16::<LittleEndian>(0)?; // x_start
        stream.write_u16::<LittleEndian>(0)?; // y_start
        stream.write_u16::<LittleEndian>(self.end.0)?;
        stream.write_u16::<LittleEndian>(self.end.1)?;
        stream.write_u16::<LittleEndian>(self.dpi.0)?;
        stream.write_u16::<LittleEndian>(self.dpi.1)?;

        for color in &self.palette {
            stream.write_all(color)?;
        }

        stream.write_u8(0)?; // reserved
        stream.write_u8(self.number_of_color_planes)?;
        stream.write_u16::<LittleEndian>(self.lane_length)?;
        stream.write_u16::<LittleEndian>(PALETTE_INFO_COLOR)?;

        // Screen size is not filled in, it is a part of the zeroed tail.
        stream.write_all(&[0; RESERVED_TAIL_LENGTH])?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Header, Version, DEFAULT_PALETTE_16, HEADER_LENGTH};

    fn u16_at(data: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes([data[offset], data[offset + 1]])
    }

    fn written(header: &Header) -> Vec<u8> {
        let mut data = Vec::new();
        header.write(&mut data).unwrap();
        data
    }

    #[test]
    fn monochrome_layout() {
        let data = written(&Header::monochrome((99, 49), (300, 150), 13));
        assert_eq!(data.len(), HEADER_LENGTH);

        assert_eq!(&data[0..4], &[0x0A, 2, 1, 1]);
        assert_eq!(u16_at(&data, 4), 0);
        assert_eq!(u16_at(&data, 6), 0);
        assert_eq!(u16_at(&data, 8), 99);
        assert_eq!(u16_at(&data, 10), 49);
        assert_eq!(u16_at(&data, 12), 300);
        assert_eq!(u16_at(&data, 14), 150);

        let palette: Vec<u8> = DEFAULT_PALETTE_16.iter().flatten().copied().collect();
        assert_eq!(&data[16..64], &palette[..]);
        assert_eq!(&data[16..22], &[0, 0, 0, 255, 255, 255]);

        assert_eq!(data[64], 0);
        assert_eq!(data[65], 1);
        assert_eq!(u16_at(&data, 66), 13);
        assert_eq!(u16_at(&data, 68), 1);
        assert!(data[70..].iter().all(|&b| b == 0));
    }

    #[test]
    fn true_color_layout() {
        let header = Header::true_color((0, 0), (72, 72), 8);
        assert_eq!(header.version, Version::V5);

        let data = written(&header);
        assert_eq!(data.len(), HEADER_LENGTH);
        assert_eq!(&data[0..4], &[0x0A, 5, 1, 8]);
        assert_eq!(u16_at(&data, 8), 0);
        assert_eq!(u16_at(&data, 10), 0);
        assert!(data[16..64].iter().all(|&b| b == 0));
        assert_eq!(data[65], 3);
        assert_eq!(u16_at(&data, 66), 8);
        assert_eq!(u16_at(&data, 68), 1);
    }

    #[test]
    fn multi_byte_fields_are_little_endian() {
        let data = written(&Header::monochrome((0x1234, 0x0100), (0xABCD, 0x00FF), 0x0247));
        assert_eq!(&data[8..10], &[0x34, 0x12]);
        assert_eq!(&data[10..12], &[0x00, 0x01]);
        assert_eq!(&data[12..16], &[0xCD, 0xAB, 0xFF, 0x00]);
        assert_eq!(&data[66..68], &[0x47, 0x02]);
    }

    #[test]
    fn largest_image() {
        let data = written(&Header::monochrome((0xFFFF, 0xFFFF), (300, 300), 0x2000));
        assert_eq!(&data[8..12], &[0xFF, 0xFF, 0xFF, 0xFF]);
    }
}
