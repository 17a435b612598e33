//! Raw PCM sample buffer
//!
//! Owns the data-subchunk bytes of a WAV file and converts them to and from
//! f64 amplitudes for spectral processing

use crate::filters::FilterError;

/// PCM sample encodings the filter can process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// 8-bit unsigned, silence at 128
    U8,

    /// 16-bit signed little-endian
    S16,
}

impl SampleFormat {
    /// Map a header's bits-per-sample field to a sample format
    ///
    /// # Errors
    /// `FilterError::UnsupportedFormat` for anything other than 8 or 16
    pub fn from_bits_per_sample(bits: u16) -> Result<Self, FilterError> {
        match bits {
            8 => Ok(SampleFormat::U8),
            16 => Ok(SampleFormat::S16),
            other => Err(FilterError::UnsupportedFormat(other)),
        }
    }

    /// Bytes occupied by one sample
    pub fn bytes_per_sample(&self) -> usize {
        match self {
            SampleFormat::U8 => 1,
            SampleFormat::S16 => 2,
        }
    }

    /// Smallest centered amplitude the format can hold
    pub fn min_amplitude(&self) -> f64 {
        match self {
            SampleFormat::U8 => -128.0,
            SampleFormat::S16 => i16::MIN as f64,
        }
    }

    /// Largest centered amplitude the format can hold
    pub fn max_amplitude(&self) -> f64 {
        match self {
            SampleFormat::U8 => 127.0,
            SampleFormat::S16 => i16::MAX as f64,
        }
    }

    /// Divisor mapping centered amplitudes onto [-1.0, 1.0)
    pub fn full_scale(&self) -> f64 {
        match self {
            SampleFormat::U8 => 128.0,
            SampleFormat::S16 => 32768.0,
        }
    }

    /// Round to the nearest representable amplitude, clamping at the rails
    ///
    /// # Returns
    /// Quantized amplitude and whether clamping was needed
    pub fn quantize(&self, amplitude: f64) -> (f64, bool) {
        let rounded = amplitude.round();
        let clamped = rounded.clamp(self.min_amplitude(), self.max_amplitude());
        (clamped, clamped != rounded)
    }
}

/// Data-subchunk payload plus the width it is encoded with
///
/// Amplitudes are exposed centered on zero: 8-bit samples are shifted down by
/// 128, 16-bit samples are taken as-is. A trailing partial sample (odd byte
/// count at 16 bits) is carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    data: Vec<u8>,
    bits_per_sample: u16,
}

impl SampleBuffer {
    /// Wrap raw payload bytes
    pub fn new(data: Vec<u8>, bits_per_sample: u16) -> Self {
        Self {
            data,
            bits_per_sample,
        }
    }

    /// Build a 16-bit buffer from signed samples
    pub fn from_i16(samples: &[i16]) -> Self {
        let data = samples.iter().flat_map(|s| s.to_le_bytes()).collect();
        Self::new(data, 16)
    }

    /// Build an 8-bit buffer from unsigned samples
    pub fn from_u8(samples: &[u8]) -> Self {
        Self::new(samples.to_vec(), 8)
    }

    /// Raw payload bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the payload bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Payload length in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the payload is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bits per sample as declared by the header
    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// Validated sample format
    pub fn format(&self) -> Result<SampleFormat, FilterError> {
        SampleFormat::from_bits_per_sample(self.bits_per_sample)
    }

    /// Number of whole samples in the payload
    pub fn sample_count(&self) -> Result<usize, FilterError> {
        Ok(self.data.len() / self.format()?.bytes_per_sample())
    }

    /// Decode every whole sample into a centered f64 amplitude
    ///
    /// # Errors
    /// `UnsupportedFormat` for widths other than 8/16, `Resource` if the
    /// output vector cannot be allocated
    pub fn decode(&self) -> Result<Vec<f64>, FilterError> {
        let format = self.format()?;
        let count = self.data.len() / format.bytes_per_sample();

        let mut amplitudes = Vec::new();
        amplitudes
            .try_reserve_exact(count)
            .map_err(|_| FilterError::Resource { requested: count })?;

        match format {
            SampleFormat::U8 => {
                amplitudes.extend(self.data.iter().map(|&b| b as f64 - 128.0));
            }
            SampleFormat::S16 => {
                amplitudes.extend(
                    self.data
                        .chunks_exact(2)
                        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f64),
                );
            }
        }

        Ok(amplitudes)
    }

    /// Re-encode amplitudes into the payload in place
    ///
    /// Values are rounded to nearest and clamped to the format's range.
    ///
    /// # Panics
    /// If `amplitudes` does not hold exactly one value per whole sample
    ///
    /// # Returns
    /// Number of samples that had to be clamped
    pub fn encode(&mut self, amplitudes: &[f64]) -> Result<usize, FilterError> {
        let format = self.format()?;
        let width = format.bytes_per_sample();
        assert_eq!(
            amplitudes.len(),
            self.data.len() / width,
            "amplitude count must match sample count"
        );

        let mut clipped = 0;
        for (slot, &amplitude) in self.data.chunks_exact_mut(width).zip(amplitudes) {
            let (value, was_clamped) = format.quantize(amplitude);
            if was_clamped {
                clipped += 1;
            }
            match format {
                SampleFormat::U8 => slot[0] = (value + 128.0) as u8,
                SampleFormat::S16 => slot.copy_from_slice(&(value as i16).to_le_bytes()),
            }
        }

        Ok(clipped)
    }

    /// Samples as stored on disk: unsigned for 8-bit, signed for 16-bit
    pub fn raw_values(&self) -> Result<Vec<i32>, FilterError> {
        let offset = match self.format()? {
            SampleFormat::U8 => 128.0,
            SampleFormat::S16 => 0.0,
        };
        Ok(self
            .decode()?
            .into_iter()
            .map(|a| (a + offset) as i32)
            .collect())
    }

    /// Samples scaled to [-1.0, 1.0) as f32
    pub fn to_normalized_f32(&self) -> Result<Vec<f32>, FilterError> {
        let scale = self.format()?.full_scale();
        Ok(self
            .decode()?
            .into_iter()
            .map(|a| (a / scale) as f32)
            .collect())
    }
}
