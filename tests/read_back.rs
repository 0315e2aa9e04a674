//! Images written by this crate are read back by the independent `pcx` crate.

use pcx_raster::{write_pcx, write_pcx_file, ColorLookupTable, EncoderOptions, Palette, PicBuf, PixelBuffer};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn diagonal_picture(width: usize, height: usize, depth: u8) -> PicBuf {
    let mut picture = PicBuf::new(width, height, depth);
    let colors = 1u8 << depth;
    for y in 0..height {
        for x in 0..width {
            if (x + y) % 3 == 0 {
                picture.set_pixel(x, y, ((x + 2 * y) % colors as usize) as u8);
            }
        }
    }
    picture
}

#[test]
fn monochrome() {
    init_logger();

    let picture = diagonal_picture(21, 7, 1);
    let mut data = Vec::new();
    write_pcx(&picture, &Palette::default(), &EncoderOptions::default().set_dpi((100, 200)), &mut data).unwrap();

    let mut reader = pcx::Reader::from_mem(&data).unwrap();
    assert_eq!(reader.dimensions(), (21, 7));
    assert_eq!(reader.header.dpi, (100, 200));
    assert_eq!(reader.header.bit_depth, 1);
    assert_eq!(reader.header.number_of_color_planes, 1);
    assert!(reader.is_paletted());

    let mut row = vec![0; 21];
    for y in (0..7).rev() {
        reader.next_row_paletted(&mut row).unwrap();
        for x in 0..21 {
            // Bits are inverted: set pixels are black in the file.
            assert_eq!(row[x], 1 - picture.pixel(x, y), "pixel ({x}, {y})");
        }
    }
}

#[test]
fn true_color() {
    init_logger();

    let picture = diagonal_picture(13, 5, 3);
    let palette = Palette::default_pens();
    let mut data = Vec::new();
    write_pcx(&picture, &palette, &EncoderOptions::default(), &mut data).unwrap();

    let mut reader = pcx::Reader::from_mem(&data).unwrap();
    assert_eq!(reader.dimensions(), (13, 5));
    assert_eq!(reader.header.bit_depth, 8);
    assert_eq!(reader.header.number_of_color_planes, 3);
    assert_eq!(reader.header.lane_length, 16);
    assert!(!reader.is_paletted());

    let (mut r, mut g, mut b) = (vec![0; 13], vec![0; 13], vec![0; 13]);
    for y in (0..picture.height()).rev() {
        reader.next_row_rgb_separate(&mut r, &mut g, &mut b).unwrap();
        for x in 0..picture.width() {
            let [red, green, blue] = palette.color(picture.pixel(x, y)).unwrap();
            assert_eq!([r[x], g[x], b[x]], [255 - red, 255 - green, 255 - blue], "pixel ({x}, {y})");
        }
    }
}

#[test]
fn long_rows() {
    init_logger();

    // Rows longer than one run.
    let picture = PicBuf::new(1000, 3, 2);
    let mut data = Vec::new();
    write_pcx(&picture, &Palette::default_pens(), &EncoderOptions::default(), &mut data).unwrap();

    let mut reader = pcx::Reader::from_mem(&data).unwrap();
    let mut rgb = vec![0xAA; 1000 * 3];
    for _ in 0..3 {
        reader.next_row_rgb(&mut rgb).unwrap();
        assert!(rgb.iter().all(|&c| c == 0));
    }
}

#[test]
fn file() {
    init_logger();

    let path = std::env::temp_dir().join(format!("pcx-raster-{}.pcx", std::process::id()));
    let picture = diagonal_picture(30, 10, 1);
    write_pcx_file(&path, &picture, &Palette::default(), &EncoderOptions::default()).unwrap();

    let reader = pcx::Reader::from_file(&path).unwrap();
    assert_eq!(reader.dimensions(), (30, 10));

    std::fs::remove_file(&path).unwrap();
}
