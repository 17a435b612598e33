//! Passband specification and Hz → bin index mapping

use super::FilterError;

/// Passband edges in Hz, both inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassbandSpec {
    /// Lower cutoff in Hz
    pub lower_cutoff_hz: u32,

    /// Upper cutoff in Hz (must be >= lower)
    pub upper_cutoff_hz: u32,
}

impl PassbandSpec {
    /// Create a validated passband
    ///
    /// # Errors
    /// `InvalidPassband` if `upper_cutoff_hz < lower_cutoff_hz`
    pub fn new(lower_cutoff_hz: u32, upper_cutoff_hz: u32) -> Result<Self, FilterError> {
        let spec = Self {
            lower_cutoff_hz,
            upper_cutoff_hz,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Keep everything from DC up to `upper_cutoff_hz`
    pub fn lowpass(upper_cutoff_hz: u32) -> Self {
        Self {
            lower_cutoff_hz: 0,
            upper_cutoff_hz,
        }
    }

    /// Pass the whole representable band, [0, Nyquist]
    pub fn full_band(sample_rate_hz: u32) -> Self {
        Self::lowpass(sample_rate_hz.div_ceil(2))
    }

    /// Check edge ordering (fields are public, so this is rechecked per call)
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.upper_cutoff_hz < self.lower_cutoff_hz {
            return Err(FilterError::InvalidPassband {
                lower: self.lower_cutoff_hz,
                upper: self.upper_cutoff_hz,
            });
        }
        Ok(())
    }
}

/// Map a frequency to its nearest DFT bin: round(hz * N / fs)
pub fn hz_to_bin(cutoff_hz: u32, num_samples: usize, sample_rate_hz: u32) -> usize {
    (cutoff_hz as f64 * num_samples as f64 / sample_rate_hz as f64).round() as usize
}

/// Centre frequency of bin `k`: k * fs / N
pub fn bin_to_hz(bin: usize, num_samples: usize, sample_rate_hz: u32) -> f64 {
    bin as f64 * sample_rate_hz as f64 / num_samples as f64
}

/// Inclusive range of retained bins for one transform length
///
/// Bins are matched on their folded index `min(k, N-k)`, so every
/// negative-frequency mirror is kept or dropped together with its positive
/// partner and the masked spectrum stays conjugate-symmetric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinRange {
    /// Lower retained bin index
    pub lower: usize,

    /// Upper retained bin index, clamped to N-1
    pub upper: usize,

    /// Transform length N
    pub num_bins: usize,
}

impl BinRange {
    /// Resolve a passband against a transform of length `num_bins`
    ///
    /// # Errors
    /// `InvalidSampleRate` for a zero sample rate, `InvalidPassband` for
    /// inverted edges
    pub fn resolve(
        passband: &PassbandSpec,
        num_bins: usize,
        sample_rate_hz: u32,
    ) -> Result<Self, FilterError> {
        if sample_rate_hz == 0 {
            return Err(FilterError::InvalidSampleRate);
        }
        passband.validate()?;

        let lower = hz_to_bin(passband.lower_cutoff_hz, num_bins, sample_rate_hz);
        let upper = hz_to_bin(passband.upper_cutoff_hz, num_bins, sample_rate_hz)
            .min(num_bins.saturating_sub(1));

        Ok(Self {
            lower,
            upper,
            num_bins,
        })
    }

    /// Passband lies entirely above Nyquist (or there is nothing to keep)
    pub fn is_silent(&self) -> bool {
        self.num_bins == 0 || self.lower > self.num_bins / 2
    }

    /// Whether bin `k` (0..N) survives the mask
    pub fn retains(&self, bin: usize) -> bool {
        if self.is_silent() || bin >= self.num_bins {
            return false;
        }
        let folded = bin.min(self.num_bins - bin);
        folded >= self.lower && folded <= self.upper
    }

    /// Count of bins (both halves) that survive the mask
    pub fn retained_count(&self) -> usize {
        (0..self.num_bins).filter(|&k| self.retains(k)).count()
    }
}
