//! Brick-wall bandpass filter in the frequency domain
//!
//! Transforms the whole sample buffer at once, zeroes every bin outside the
//! passband and transforms back. There is no transition band: bins are
//! either kept untouched or removed.
//! Complexity: O(N log N) with the default FFT backend

use super::passband::{BinRange, PassbandSpec};
use crate::audio::SampleBuffer;
use crate::spectrum::fft::{alloc_complex, RustFftTransform, SpectralTransform};
use num_complex::Complex64;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Unsupported bits per sample: {0} (only 8 and 16 bit PCM can be filtered)")]
    UnsupportedFormat(u16),

    #[error("Failed to allocate scratch buffer of {requested} elements")]
    Resource { requested: usize },

    #[error("Invalid passband: upper cutoff {upper} Hz is below lower cutoff {lower} Hz")]
    InvalidPassband { lower: u32, upper: u32 },

    #[error("Sample rate must be greater than 0 Hz")]
    InvalidSampleRate,

    #[error("Transform failed: {0}")]
    Transform(String),
}

/// Outcome of one filtering call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterReport {
    /// Bins that were kept
    pub bins: BinRange,

    /// Number of samples processed
    pub samples: usize,

    /// Samples clamped at the format's rails on re-encode
    pub clipped: usize,
}

impl FilterReport {
    /// Whether the passband removed the whole signal
    pub fn silenced(&self) -> bool {
        self.bins.is_silent()
    }
}

/// Stateless bandpass filter over a pluggable DFT backend
#[derive(Debug, Default, Clone, Copy)]
pub struct BandpassFilter<T = RustFftTransform> {
    transform: T,
}

impl BandpassFilter<RustFftTransform> {
    /// Create a filter using the rustfft backend
    pub fn new() -> Self {
        Self {
            transform: RustFftTransform,
        }
    }
}

impl<T: SpectralTransform> BandpassFilter<T> {
    /// Create a filter over a custom transform backend
    pub fn with_transform(transform: T) -> Self {
        Self { transform }
    }

    /// Filter a PCM buffer in place
    ///
    /// # Arguments
    /// * `samples` - 8 or 16-bit PCM payload, rewritten in place
    /// * `sample_rate_hz` - Sample rate of the payload
    /// * `passband` - Inclusive passband edges in Hz
    ///
    /// # Errors
    /// Format and parameter errors are raised before any transform buffer is
    /// allocated; the buffer is left untouched on every error path.
    pub fn apply(
        &self,
        samples: &mut SampleBuffer,
        sample_rate_hz: u32,
        passband: &PassbandSpec,
    ) -> Result<FilterReport, FilterError> {
        let count = samples.sample_count()?;

        // Nothing to filter: no parameter checks either
        if count == 0 {
            return Ok(FilterReport {
                bins: BinRange {
                    lower: 0,
                    upper: 0,
                    num_bins: 0,
                },
                samples: 0,
                clipped: 0,
            });
        }

        let bins = BinRange::resolve(passband, count, sample_rate_hz)?;

        log::debug!(
            "Bandpass {}-{} Hz over {} samples @ {} Hz -> bins {}..={}",
            passband.lower_cutoff_hz,
            passband.upper_cutoff_hz,
            count,
            sample_rate_hz,
            bins.lower,
            bins.upper
        );

        let mut amplitudes = samples.decode()?;
        self.filter_amplitudes(&mut amplitudes, &bins)?;
        let clipped = samples.encode(&amplitudes)?;

        if clipped > 0 {
            log::warn!("{} of {} samples clamped after filtering", clipped, count);
        }

        Ok(FilterReport {
            bins,
            samples: count,
            clipped,
        })
    }

    /// Filter centered f64 amplitudes in place
    ///
    /// # Algorithm
    /// 1. Load amplitudes as the real part of a complex sequence
    /// 2. Forward DFT
    /// 3. Zero every bin outside `bins`
    /// 4. Inverse DFT
    /// 5. Scale by 1/N and keep only the real part
    pub fn filter_amplitudes(&self, amplitudes: &mut [f64], bins: &BinRange) -> Result<(), FilterError> {
        let n = amplitudes.len();
        debug_assert_eq!(n, bins.num_bins);

        if bins.is_silent() {
            amplitudes.fill(0.0);
            return Ok(());
        }

        // 1. Real input, zero imaginary part
        let mut spectrum = alloc_complex(n)?;
        for (bin, &a) in spectrum.iter_mut().zip(amplitudes.iter()) {
            *bin = Complex64::new(a, 0.0);
        }

        // 2. Forward FFT
        self.transform.forward(&mut spectrum)?;

        // 3. Brick-wall mask
        for (k, bin) in spectrum.iter_mut().enumerate() {
            if !bins.retains(k) {
                *bin = Complex64::new(0.0, 0.0);
            }
        }

        // 4. Inverse FFT
        self.transform.inverse(&mut spectrum)?;

        // 5. Scale by 1/N, imaginary part is rounding residue
        let scale = 1.0 / n as f64;
        for (a, bin) in amplitudes.iter_mut().zip(spectrum.iter()) {
            *a = bin.re * scale;
        }

        Ok(())
    }
}

/// Filter a PCM buffer in place with the default FFT backend
pub fn apply_bandpass(
    samples: &mut SampleBuffer,
    sample_rate_hz: u32,
    passband: &PassbandSpec,
) -> Result<FilterReport, FilterError> {
    BandpassFilter::new().apply(samples, sample_rate_hz, passband)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::fft::NaiveDft;
    use std::f64::consts::PI;

    fn as_i16(buffer: &SampleBuffer) -> Vec<i16> {
        buffer
            .as_bytes()
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect()
    }

    fn tone(freq_hz: f64, amplitude: f64, len: usize, sample_rate: f64) -> Vec<f64> {
        (0..len)
            .map(|n| amplitude * (2.0 * PI * freq_hz * n as f64 / sample_rate).sin())
            .collect()
    }

    fn quantized(signal: &[f64]) -> Vec<i16> {
        signal.iter().map(|&s| s.round() as i16).collect()
    }

    #[test]
    fn test_alternating_signal_dc_only_is_silence() {
        let mut samples = SampleBuffer::from_i16(&[100, -100, 100, -100]);
        let passband = PassbandSpec::new(0, 0).unwrap();

        let report = apply_bandpass(&mut samples, 4, &passband).unwrap();

        assert_eq!(report.samples, 4);
        assert_eq!(as_i16(&samples), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_full_band_round_trip_identity() {
        let input: Vec<i16> = (0..1000)
            .map(|n| ((n * 7919) % 20001) as i16 - 10000)
            .collect();
        let mut samples = SampleBuffer::from_i16(&input);

        apply_bandpass(&mut samples, 8000, &PassbandSpec::full_band(8000)).unwrap();

        for (out, inp) in as_i16(&samples).iter().zip(input.iter()) {
            assert!((*out as i32 - *inp as i32).abs() <= 1, "{} vs {}", out, inp);
        }
    }

    #[test]
    fn test_full_band_round_trip_odd_length() {
        let input = vec![5, -3, 1200, -32768, 32767, 0, 42];
        let mut samples = SampleBuffer::from_i16(&input);

        apply_bandpass(&mut samples, 44100, &PassbandSpec::full_band(44100)).unwrap();

        for (out, inp) in as_i16(&samples).iter().zip(input.iter()) {
            assert!((*out as i32 - *inp as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_dc_only_on_zero_mean_signal_is_silent() {
        let signal = tone(440.0, 8000.0, 4800, 48000.0);
        let mut samples = SampleBuffer::from_i16(&quantized(&signal));

        apply_bandpass(&mut samples, 48000, &PassbandSpec::new(0, 0).unwrap()).unwrap();

        // Only the (near zero) mean survives
        assert!(as_i16(&samples).iter().all(|s| s.abs() <= 1));
    }

    #[test]
    fn test_lowpass_removes_high_tone() {
        // 1 second at 8 kHz: one bin per Hz, tones land exactly on bins
        let low = tone(200.0, 5000.0, 8000, 8000.0);
        let high = tone(3000.0, 5000.0, 8000, 8000.0);
        let mixed: Vec<f64> = low.iter().zip(high.iter()).map(|(a, b)| a + b).collect();
        let mut samples = SampleBuffer::from_i16(&quantized(&mixed));

        apply_bandpass(&mut samples, 8000, &PassbandSpec::lowpass(1000)).unwrap();

        for (out, expected) in as_i16(&samples).iter().zip(low.iter()) {
            assert!((*out as f64 - expected).abs() <= 2.0, "{} vs {}", out, expected);
        }
    }

    #[test]
    fn test_bandpass_keeps_only_middle_tone() {
        let tones = [100.0, 1000.0, 3500.0];
        let parts: Vec<Vec<f64>> = tones.iter().map(|&f| tone(f, 3000.0, 8000, 8000.0)).collect();
        let mixed: Vec<f64> = (0..8000).map(|n| parts.iter().map(|p| p[n]).sum()).collect();
        let mut samples = SampleBuffer::from_i16(&quantized(&mixed));

        apply_bandpass(&mut samples, 8000, &PassbandSpec::new(500, 2000).unwrap()).unwrap();

        for (out, expected) in as_i16(&samples).iter().zip(parts[1].iter()) {
            assert!((*out as f64 - expected).abs() <= 2.0);
        }
    }

    #[test]
    fn test_idempotent_under_same_passband() {
        let signal: Vec<f64> = (0..2048)
            .map(|n| ((n * 31) % 97) as f64 * 150.0 - 7000.0)
            .collect();
        let passband = PassbandSpec::new(300, 3400).unwrap();

        let mut once = SampleBuffer::from_i16(&quantized(&signal));
        apply_bandpass(&mut once, 16000, &passband).unwrap();

        let mut twice = once.clone();
        apply_bandpass(&mut twice, 16000, &passband).unwrap();

        for (a, b) in as_i16(&once).iter().zip(as_i16(&twice).iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 2, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_length_invariance() {
        let passbands = [
            PassbandSpec::new(0, 0).unwrap(),
            PassbandSpec::new(10, 20).unwrap(),
            PassbandSpec::lowpass(1_000_000),
            PassbandSpec::new(90_000, 100_000).unwrap(),
        ];
        for passband in passbands {
            for len in [1usize, 2, 3, 64, 101] {
                let mut samples = SampleBuffer::from_i16(&vec![1000; len]);
                apply_bandpass(&mut samples, 100, &passband).unwrap();
                assert_eq!(samples.len(), len * 2);
            }
        }
    }

    #[test]
    fn test_passband_above_nyquist_silences_8_bit() {
        let mut samples = SampleBuffer::from_u8(&[0, 255, 10, 200, 128, 77]);

        let report = apply_bandpass(&mut samples, 6, &PassbandSpec::new(4, 6).unwrap()).unwrap();

        assert!(report.silenced());
        assert_eq!(samples.as_bytes(), &[128; 6]);
    }

    #[test]
    fn test_8_bit_full_band_round_trip() {
        let input: Vec<u8> = (0..256).map(|n| ((n * 37) % 256) as u8).collect();
        let mut samples = SampleBuffer::from_u8(&input);

        apply_bandpass(&mut samples, 256, &PassbandSpec::full_band(256)).unwrap();

        for (out, inp) in samples.as_bytes().iter().zip(input.iter()) {
            assert!((*out as i32 - *inp as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_unsupported_width_leaves_buffer_untouched() {
        let original = vec![1u8, 2, 3, 4, 5, 6];
        let mut samples = SampleBuffer::new(original.clone(), 24);

        let result = apply_bandpass(&mut samples, 44100, &PassbandSpec::lowpass(1000));

        assert!(matches!(result, Err(FilterError::UnsupportedFormat(24))));
        assert_eq!(samples.as_bytes(), original.as_slice());
    }

    #[test]
    fn test_empty_buffer_is_noop() {
        let mut samples = SampleBuffer::from_i16(&[]);

        let report = apply_bandpass(&mut samples, 44100, &PassbandSpec::lowpass(1000)).unwrap();

        assert_eq!(report.samples, 0);
        assert!(samples.is_empty());
    }

    #[test]
    fn test_empty_buffer_skips_parameter_checks() {
        let mut samples = SampleBuffer::from_u8(&[]);
        let inverted = PassbandSpec {
            lower_cutoff_hz: 500,
            upper_cutoff_hz: 100,
        };

        let report = apply_bandpass(&mut samples, 0, &inverted).unwrap();

        assert_eq!(report.samples, 0);
        assert_eq!(report.clipped, 0);
        assert!(samples.is_empty());
    }

    #[test]
    fn test_empty_buffer_still_rejects_unsupported_width() {
        let mut samples = SampleBuffer::new(Vec::new(), 32);

        let result = apply_bandpass(&mut samples, 0, &PassbandSpec::lowpass(1000));

        assert!(matches!(result, Err(FilterError::UnsupportedFormat(32))));
    }

    #[test]
    fn test_naive_backend_agrees_with_fft() {
        let input: Vec<i16> = (0..48).map(|n| ((n * 13) % 29) as i16 * 100 - 1400).collect();
        let passband = PassbandSpec::new(5, 15).unwrap();

        let mut fast = SampleBuffer::from_i16(&input);
        let mut naive = SampleBuffer::from_i16(&input);
        BandpassFilter::new().apply(&mut fast, 48, &passband).unwrap();
        BandpassFilter::with_transform(NaiveDft)
            .apply(&mut naive, 48, &passband)
            .unwrap();

        for (a, b) in as_i16(&fast).iter().zip(as_i16(&naive).iter()) {
            assert!((*a as i32 - *b as i32).abs() <= 1);
        }
    }

    #[test]
    fn test_clipping_is_reported() {
        // A full-scale square wave's fundamental overshoots the rails
        let input: Vec<i16> = (0..64)
            .map(|n| if (n / 8) % 2 == 0 { i16::MAX } else { i16::MIN + 1 })
            .collect();
        let mut samples = SampleBuffer::from_i16(&input);

        let report = apply_bandpass(&mut samples, 64, &PassbandSpec::new(4, 4).unwrap()).unwrap();

        assert!(report.clipped > 0);
    }
}
