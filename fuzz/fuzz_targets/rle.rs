#![no_main]
use libfuzzer_sys::fuzz_target;
use pcx_raster::low_level::rle::compress_lane;

fuzz_target!(|data: &[u8]| {
    let mut compressed = Vec::new();
    compress_lane(data, &mut compressed).unwrap();

    let mut decompressed = Vec::with_capacity(data.len());
    let mut i = 0;
    while i < compressed.len() {
        let byte = compressed[i];
        if byte & 0xC0 == 0xC0 {
            let count = byte & 0x3F;
            assert!(count > 0);
            decompressed.extend(std::iter::repeat(compressed[i + 1]).take(count as usize));
            i += 2;
        } else {
            decompressed.push(byte);
            i += 1;
        }
    }
    assert!(decompressed == data);
});
