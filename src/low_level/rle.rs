//! Implementation of compression using variant of RLE (run-length-encoding) used in PCX files.
//!
//! A byte with both high bits set (`0xC0..=0xFF`) is a run marker whose low 6 bits hold the count, the next byte is the
//! value. Any other byte is a literal. Because of that a literal in the marker range must always be written as a
//! run of one.

use byteorder::WriteBytesExt;
use std::io;

/// Longest run which fits into the 6-bit count of a marker byte.
pub const MAX_RUN_LENGTH: u8 = 63;

const RUN_MARKER: u8 = 0xC0;

/// Compress using RLE.
///
/// Compressor works in sessions: a session is started with `reset` and terminated with `flush_run`. Runs never
/// cross session boundaries, so each lane of the image must be compressed in its own session (see `encode_lane`).
///
/// Warning: compressor does not implement `Drop` and will not automatically get flushed on destruction. Call `finish`
/// or `flush_run` to flush it.
#[derive(Debug)]
pub struct Compressor<S: io::Write> {
    stream: S,

    run_count: u8,
    // `None` can never be equal to an incoming byte, so the first byte of a session always starts a new run.
    run_value: Option<u8>,
}

impl<S: io::Write> Compressor<S> {
    /// Create new compressor which will write to the stream.
    pub fn new(stream: S) -> Self {
        Compressor {
            stream,
            run_count: 0,
            run_value: None,
        }
    }

    /// Start a new session. Pending run, if any, is discarded, so call `flush_run` first.
    pub fn reset(&mut self) {
        self.run_count = 0;
        self.run_value = None;
    }

    /// Compress one byte.
    pub fn feed(&mut self, byte: u8) -> io::Result<()> {
        if self.run_value == Some(byte) {
            self.run_count += 1;
            if self.run_count == MAX_RUN_LENGTH {
                write_run(&mut self.stream, byte, self.run_count)?;
                // Value is kept: the next byte is still compared against it.
                self.run_count = 0;
            }
            return Ok(());
        }

        self.flush_run()?;

        self.run_count = 1;
        self.run_value = Some(byte);
        Ok(())
    }

    /// Write the pending run. Must be called at the end of every session, otherwise the last run is lost.
    pub fn flush_run(&mut self) -> io::Result<()> {
        match (self.run_value, self.run_count) {
            (_, 0) | (None, _) => {}
            (Some(run_value), run_count) => write_run(&mut self.stream, run_value, run_count)?,
        }
        self.run_count = 0;
        Ok(())
    }

    /// Compress one lane as a complete session: reset, compress every byte and flush.
    pub fn encode_lane(&mut self, lane: &[u8]) -> io::Result<()> {
        self.reset();
        for &byte in lane {
            self.feed(byte)?;
        }
        self.flush_run()
    }

    /// Get mutable reference to the underlying stream.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Stop compression process and get underlying stream.
    pub fn finish(mut self) -> io::Result<S> {
        self.flush_run()?;
        Ok(self.stream)
    }
}

impl<S: io::Write> io::Write for Compressor<S> {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        for &byte in buffer {
            self.feed(byte)?;
        }
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_run()?;
        self.stream.flush()
    }
}

/// Compress `lane` as one session into `stream`.
pub fn compress_lane<W: io::Write>(lane: &[u8], stream: &mut W) -> io::Result<()> {
    Compressor::new(stream).encode_lane(lane)
}

fn write_run<W: io::Write>(stream: &mut W, value: u8, count: u8) -> io::Result<()> {
    debug_assert!((1..=MAX_RUN_LENGTH).contains(&count));

    match (count, value) {
        (1, 0..=0xBF) => stream.write_u8(value),
        (count, value) => {
            stream.write_u8(RUN_MARKER | count)?;
            stream.write_u8(value)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{compress_lane, Compressor, MAX_RUN_LENGTH};
    use byteorder::WriteBytesExt;

    /// Reference decoder for the PCX RLE variant.
    pub(crate) fn decompress(mut data: &[u8]) -> Vec<u8> {
        let mut result = Vec::new();
        while let Some((&byte, rest)) = data.split_first() {
            if (byte & 0xC0) != 0xC0 {
                // 1-byte code
                result.push(byte);
                data = rest;
            } else {
                // 2-byte code
                let (&value, rest) = rest.split_first().expect("truncated run");
                result.extend(std::iter::repeat(value).take((byte & 0x3F) as usize));
                data = rest;
            }
        }
        result
    }

    fn compress(data: &[u8]) -> Vec<u8> {
        let mut compressed = Vec::new();
        compress_lane(data, &mut compressed).unwrap();
        compressed
    }

    fn round_trip(data: &[u8]) {
        assert_eq!(decompress(&compress(data)), data);
    }

    fn round_trip_one_by_one(data: &[u8]) {
        use std::io::Write;

        let mut compressed = Vec::new();
        {
            let mut compressor = Compressor::new(&mut compressed);
            for &d in data {
                compressor.write_u8(d).unwrap();
            }
            compressor.flush().unwrap();
        }

        assert_eq!(decompress(&compressed), data);
    }

    #[test]
    fn round_trip_mixed() {
        let data = [
            0, 1, 2, 3, 5, 5, 5, 128, 128, 128, 7, 7, 255, 7, 255, 255, 254, 0, 0, 0, 4, 4, 177, 177, 4, 177, 177, 0xC0,
        ];
        round_trip_one_by_one(&data);
        round_trip(&data);
    }

    #[test]
    fn round_trip_lengths() {
        for &len in &[0usize, 1, 62, 63, 64, 70, 126, 127, 200] {
            for &value in &[0x00u8, 0x41, 0xC5, 0xFF] {
                let data = vec![value; len];
                round_trip(&data);
                round_trip_one_by_one(&data);
            }
        }
    }

    #[test]
    fn empty_lane_writes_nothing() {
        assert!(compress(&[]).is_empty());
    }

    #[test]
    fn literal_below_marker_range() {
        assert_eq!(compress(&[0x05]), [0x05]);
        assert_eq!(compress(&[0xBF]), [0xBF]);
    }

    #[test]
    fn literal_in_marker_range_is_escaped() {
        assert_eq!(compress(&[0xC5]), [0xC1, 0xC5]);
        assert_eq!(compress(&[0xFF]), [0xC1, 0xFF]);
        assert_eq!(compress(&[0xC0]), [0xC1, 0xC0]);
    }

    #[test]
    fn run_is_capped() {
        assert_eq!(compress(&[0x41; 70]), [0xFF, 0x41, 0xC7, 0x41]);
        assert_eq!(compress(&[0x41; 63]), [0xFF, 0x41]);
        assert_eq!(compress(&[0x41; 64]), [0xFF, 0x41, 0x41]);
        assert_eq!(compress(&[0x41; 2]), [0xC2, 0x41]);
    }

    #[test]
    fn run_count_never_exceeds_cap() {
        let compressed = compress(&[0x10; 1000]);
        let mut i = 0;
        while i < compressed.len() {
            assert_eq!(compressed[i] & 0xC0, 0xC0);
            assert!(compressed[i] & 0x3F <= MAX_RUN_LENGTH);
            assert!(compressed[i] & 0x3F > 0);
            i += 2;
        }
    }

    #[test]
    fn sessions_do_not_share_runs() {
        let mut compressed = Vec::new();
        {
            let mut compressor = Compressor::new(&mut compressed);
            compressor.encode_lane(&[7, 7]).unwrap();
            compressor.encode_lane(&[7, 7]).unwrap();
        }
        assert_eq!(compressed, [0xC2, 7, 0xC2, 7]);
    }

    #[test]
    fn reset_forgets_previous_value() {
        let mut compressed = Vec::new();
        {
            let mut compressor = Compressor::new(&mut compressed);
            compressor.feed(9).unwrap();
            compressor.flush_run().unwrap();
            compressor.reset();
            compressor.feed(9).unwrap();
            compressor.finish().unwrap();
        }
        assert_eq!(compressed, [9, 9]);
    }
}
