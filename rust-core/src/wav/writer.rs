//! WAV container serialization

use super::header::{WavHeader, HEADER_LEN};
use crate::audio::SampleBuffer;
use std::io::{self, Write};

/// Header with size fields synced to the payload about to be written
fn synced_header(header: &WavHeader, samples: &SampleBuffer) -> WavHeader {
    debug_assert_eq!(
        header.bits_per_sample,
        samples.bits_per_sample(),
        "payload width must match the header"
    );
    let mut header = *header;
    header.set_data_size(samples.len());
    header
}

/// Serialize header and payload into one contiguous WAV byte stream
///
/// `subchunk2_size` and `chunk_size` are rewritten from the payload length,
/// so the output is always self-consistent.
pub fn write_wav(header: &WavHeader, samples: &SampleBuffer) -> Vec<u8> {
    let header = synced_header(header, samples);

    let mut out = Vec::with_capacity(HEADER_LEN + samples.len());
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(samples.as_bytes());

    assert_eq!(out.len(), HEADER_LEN + header.data_size());
    out
}

/// Stream header and payload into `writer`
pub fn write_wav_to<W: Write>(
    writer: &mut W,
    header: &WavHeader,
    samples: &SampleBuffer,
) -> io::Result<()> {
    let header = synced_header(header, samples);
    writer.write_all(&header.to_bytes())?;
    writer.write_all(samples.as_bytes())?;
    writer.flush()
}
