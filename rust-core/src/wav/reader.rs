//! WAV container parsing
//!
//! Splits a byte stream into its header and the declared sample payload.

use super::header::{WavError, WavHeader, HEADER_LEN};
use crate::audio::SampleBuffer;
use std::io::Read;

/// Parsed WAV file: header plus owned payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavFile {
    pub header: WavHeader,
    pub samples: SampleBuffer,
}

impl WavFile {
    /// Pair a header with its payload
    pub fn new(header: WavHeader, samples: SampleBuffer) -> Self {
        Self { header, samples }
    }

    /// Consume the file, returning header and payload
    pub fn into_parts(self) -> (WavHeader, SampleBuffer) {
        (self.header, self.samples)
    }
}

/// Parse an in-memory WAV file
///
/// Reads the 44-byte header and exactly `subchunk2_size` payload bytes.
/// Trailing bytes after the payload (e.g. LIST chunks) are ignored.
///
/// # Errors
/// * `InvalidTag` on a bad "RIFF"/"WAVE" tag
/// * `Truncated` if the buffer is shorter than header + declared payload
pub fn read_wav(bytes: &[u8]) -> Result<WavFile, WavError> {
    let header = WavHeader::parse(bytes)?;

    let available = bytes.len() - HEADER_LEN;
    let needed = header.data_size();
    if needed > available {
        return Err(WavError::Truncated { needed, available });
    }

    let payload = bytes[HEADER_LEN..HEADER_LEN + needed].to_vec();
    if available > needed {
        log::debug!("Ignoring {} bytes after the data subchunk", available - needed);
    }

    Ok(WavFile::new(
        header,
        SampleBuffer::new(payload, header.bits_per_sample),
    ))
}

/// Parse a WAV file from a stream, leaving it positioned after the payload
pub fn read_wav_from<R: Read>(reader: &mut R) -> Result<WavFile, WavError> {
    let mut header_bytes = Vec::with_capacity(HEADER_LEN);
    reader
        .by_ref()
        .take(HEADER_LEN as u64)
        .read_to_end(&mut header_bytes)?;
    let header = WavHeader::parse(&header_bytes)?;

    let needed = header.data_size();
    let mut payload = Vec::new();
    reader
        .by_ref()
        .take(needed as u64)
        .read_to_end(&mut payload)?;

    if payload.len() < needed {
        return Err(WavError::Truncated {
            needed,
            available: payload.len(),
        });
    }

    Ok(WavFile::new(
        header,
        SampleBuffer::new(payload, header.bits_per_sample),
    ))
}
