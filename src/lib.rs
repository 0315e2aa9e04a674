//! Library for writing rasterized pictures as PCX images.
//!
//! Monochrome pictures are written as 1-bit PCX version 2 files with a 16-color header palette, color pictures are
//! converted through a palette into 24-bit RGB PCX version 5 files. Output is the same on every platform.
//!
//! # Example
//!
//! ```
//! use pcx_raster::{write_pcx, EncoderOptions, Palette, PicBuf};
//!
//! let mut picture = PicBuf::new(100, 50, 3);
//! picture.set_pixel(10, 10, 2);
//!
//! let mut pcx = Vec::new();
//! write_pcx(&picture, &Palette::default_pens(), &EncoderOptions::default(), &mut pcx).unwrap();
//! ```
#![deny(missing_debug_implementations)]

pub mod low_level;
pub mod palette;
pub mod picture;

mod error;
mod options;
mod writer;

pub use crate::error::EncodingError;
pub use crate::options::EncoderOptions;
pub use crate::palette::{ColorLookupTable, Palette};
pub use crate::picture::{PicBuf, PixelBuffer};
pub use crate::writer::{write_pcx, write_pcx_file, PcxWriter};

/// Same as `write_pcx`.
pub use crate::writer::write_pcx as serialize;
