#![no_main]
use libfuzzer_sys::fuzz_target;
use pcx_raster::{write_pcx, EncoderOptions, Palette, PicBuf};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    let (size, data) = data.split_at(3);
    let width = size[0] as usize;
    let height = size[1] as usize;
    let depth = size[2] % 4 + 1;

    if width == 0 || height == 0 {
        return;
    }

    let mut picture = PicBuf::new(width, height, depth);
    for (i, &index) in data.iter().take(width * height).enumerate() {
        picture.set_pixel(i % width, i / width, index);
    }

    let mut palette = Palette::default_pens();
    palette.set(15, [1, 2, 3]);

    let mut pcx = Vec::new();
    write_pcx(&picture, &palette, &EncoderOptions::default(), &mut pcx).unwrap();

    assert!(pcx.len() > 128);
    assert_eq!(pcx[0], 0x0A);
});
