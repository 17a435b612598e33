//! Canonical 44-byte RIFF/WAVE header
//!
//! Layout (all integers little-endian):
//!
//! | offset | size | field            |
//! |--------|------|------------------|
//! | 0      | 4    | chunk_id "RIFF"  |
//! | 4      | 4    | chunk_size       |
//! | 8      | 4    | format "WAVE"    |
//! | 12     | 4    | subchunk1_id     |
//! | 16     | 4    | subchunk1_size   |
//! | 20     | 2    | audio_format     |
//! | 22     | 2    | num_channels     |
//! | 24     | 4    | sample_rate      |
//! | 28     | 4    | byte_rate        |
//! | 32     | 2    | block_align      |
//! | 34     | 2    | bits_per_sample  |
//! | 36     | 4    | subchunk2_id     |
//! | 40     | 4    | subchunk2_size   |

use thiserror::Error;

/// Size of the fixed header region in bytes
pub const HEADER_LEN: usize = 44;

/// Bytes of the RIFF chunk that follow `chunk_size` but precede the payload
pub const RIFF_OVERHEAD: u32 = 36;

pub const RIFF_TAG: [u8; 4] = *b"RIFF";
pub const WAVE_TAG: [u8; 4] = *b"WAVE";
pub const FMT_TAG: [u8; 4] = *b"fmt ";
pub const DATA_TAG: [u8; 4] = *b"data";

/// Audio format code for uncompressed PCM
pub const PCM_FORMAT: u16 = 1;

#[derive(Error, Debug)]
pub enum WavError {
    #[error("Not a valid WAV file: expected {expected} tag, found {found:?}")]
    InvalidTag {
        expected: &'static str,
        found: String,
    },

    #[error("Truncated input: {needed} bytes required, only {available} available")]
    Truncated { needed: usize, available: usize },

    #[error("Failed to read WAV stream: {0}")]
    Io(#[from] std::io::Error),
}

/// Fixed-layout WAV header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub chunk_id: [u8; 4],
    /// Size of the file minus the first 8 bytes
    pub chunk_size: u32,
    pub format: [u8; 4],
    pub subchunk1_id: [u8; 4],
    pub subchunk1_size: u32,
    pub audio_format: u16,
    pub num_channels: u16,
    pub sample_rate: u32,
    /// Bytes per second of playback
    pub byte_rate: u32,
    /// Bytes per frame (all channels)
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub subchunk2_id: [u8; 4],
    /// Payload length in bytes
    pub subchunk2_size: u32,
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}

fn read_tag(bytes: &[u8], offset: usize) -> [u8; 4] {
    [
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ]
}

impl WavHeader {
    /// Build a canonical PCM header with consistent derived fields
    ///
    /// Derived fields saturate at their field width for out-of-range inputs.
    pub fn pcm(num_channels: u16, sample_rate: u32, bits_per_sample: u16, data_size: u32) -> Self {
        let frame_bytes = num_channels as u32 * (bits_per_sample as u32).div_ceil(8);
        let block_align = u16::try_from(frame_bytes).unwrap_or(u16::MAX);
        let byte_rate = u32::try_from(sample_rate as u64 * frame_bytes as u64).unwrap_or(u32::MAX);

        Self {
            chunk_id: RIFF_TAG,
            chunk_size: RIFF_OVERHEAD.saturating_add(data_size),
            format: WAVE_TAG,
            subchunk1_id: FMT_TAG,
            subchunk1_size: 16,
            audio_format: PCM_FORMAT,
            num_channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            subchunk2_id: DATA_TAG,
            subchunk2_size: data_size,
        }
    }

    /// Parse the fixed header region at the start of `bytes`
    ///
    /// # Errors
    /// * `Truncated` if fewer than 44 bytes are available
    /// * `InvalidTag` if the container tag is not "RIFF" or the format tag is
    ///   not "WAVE"
    pub fn parse(bytes: &[u8]) -> Result<Self, WavError> {
        if bytes.len() < HEADER_LEN {
            return Err(WavError::Truncated {
                needed: HEADER_LEN,
                available: bytes.len(),
            });
        }

        let header = Self {
            chunk_id: read_tag(bytes, 0),
            chunk_size: read_u32(bytes, 4),
            format: read_tag(bytes, 8),
            subchunk1_id: read_tag(bytes, 12),
            subchunk1_size: read_u32(bytes, 16),
            audio_format: read_u16(bytes, 20),
            num_channels: read_u16(bytes, 22),
            sample_rate: read_u32(bytes, 24),
            byte_rate: read_u32(bytes, 28),
            block_align: read_u16(bytes, 32),
            bits_per_sample: read_u16(bytes, 34),
            subchunk2_id: read_tag(bytes, 36),
            subchunk2_size: read_u32(bytes, 40),
        };

        header.check_tags()?;
        header.warn_on_inconsistencies();

        Ok(header)
    }

    fn check_tags(&self) -> Result<(), WavError> {
        if self.chunk_id != RIFF_TAG {
            return Err(WavError::InvalidTag {
                expected: "RIFF",
                found: String::from_utf8_lossy(&self.chunk_id).into_owned(),
            });
        }
        if self.format != WAVE_TAG {
            return Err(WavError::InvalidTag {
                expected: "WAVE",
                found: String::from_utf8_lossy(&self.format).into_owned(),
            });
        }
        Ok(())
    }

    // Anything beyond the two magic tags is tolerated, only reported
    fn warn_on_inconsistencies(&self) {
        if self.subchunk1_id != FMT_TAG || self.subchunk1_size != 16 {
            log::warn!(
                "Non-canonical fmt subchunk ({:?}, {} bytes); header fields may be misread",
                String::from_utf8_lossy(&self.subchunk1_id),
                self.subchunk1_size
            );
        }
        if self.subchunk2_id != DATA_TAG {
            log::warn!(
                "Expected data subchunk at offset 36, found {:?}",
                String::from_utf8_lossy(&self.subchunk2_id)
            );
        }
        if self.audio_format != PCM_FORMAT {
            log::warn!("Audio format code {} is not PCM", self.audio_format);
        }
        let expected_align = self.num_channels as u32 * (self.bits_per_sample as u32).div_ceil(8);
        if self.block_align as u32 != expected_align {
            log::warn!(
                "Block align {} does not match {} channels x {} bits",
                self.block_align,
                self.num_channels,
                self.bits_per_sample
            );
        }
    }

    /// Serialize into the fixed 44-byte layout
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(&self.chunk_id);
        out[4..8].copy_from_slice(&self.chunk_size.to_le_bytes());
        out[8..12].copy_from_slice(&self.format);
        out[12..16].copy_from_slice(&self.subchunk1_id);
        out[16..20].copy_from_slice(&self.subchunk1_size.to_le_bytes());
        out[20..22].copy_from_slice(&self.audio_format.to_le_bytes());
        out[22..24].copy_from_slice(&self.num_channels.to_le_bytes());
        out[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
        out[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        out[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        out[36..40].copy_from_slice(&self.subchunk2_id);
        out[40..44].copy_from_slice(&self.subchunk2_size.to_le_bytes());
        out
    }

    /// Payload length in bytes
    pub fn data_size(&self) -> usize {
        self.subchunk2_size as usize
    }

    /// Set payload length and keep the RIFF chunk size consistent
    ///
    /// # Panics
    /// If `len` cannot be expressed in a 32-bit RIFF size field
    pub fn set_data_size(&mut self, len: usize) {
        let len = u32::try_from(len)
            .ok()
            .filter(|&l| l <= u32::MAX - RIFF_OVERHEAD)
            .unwrap_or_else(|| panic!("payload of {} bytes does not fit a RIFF chunk", len));
        self.subchunk2_size = len;
        self.chunk_size = RIFF_OVERHEAD + len;
    }

    /// Playback duration in seconds
    pub fn duration_secs(&self) -> f64 {
        if self.byte_rate == 0 {
            return 0.0;
        }
        self.subchunk2_size as f64 / self.byte_rate as f64
    }
}
