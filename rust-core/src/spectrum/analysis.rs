//! Spectrum summary of a whole buffer
//!
//! Used to report how much of a signal's energy sits inside the passband
//! before and after filtering.

use super::windowing::{apply_window, WindowType};
use crate::filters::{bin_to_hz, BinRange, FilterError, PassbandSpec};
use realfft::RealFftPlanner;

/// Energy breakdown of one buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectrumSummary {
    /// Frequency of the strongest bin in Hz
    pub peak_hz: f64,

    /// Sum of |X[k]|² over the positive-frequency half
    pub total_energy: f64,

    /// Share of `total_energy` whose bins fall inside the passband
    pub passband_energy: f64,

    /// Number of positive-frequency bins (N/2 + 1)
    pub num_bins: usize,
}

impl SpectrumSummary {
    /// Fraction of energy inside the passband (0 for a silent buffer)
    pub fn passband_ratio(&self) -> f64 {
        if self.total_energy > 0.0 {
            self.passband_energy / self.total_energy
        } else {
            0.0
        }
    }
}

/// Whole-buffer spectrum analyzer
pub struct SpectrumAnalyzer {
    window_type: WindowType,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(window_type: WindowType) -> Self {
        Self { window_type }
    }

    /// Window in use
    pub fn window_type(&self) -> WindowType {
        self.window_type
    }

    /// Windowed magnitude spectrum |X[k]| for k = 0..=N/2
    pub fn magnitude_spectrum(&self, signal: &[f64]) -> Result<Vec<f64>, FilterError> {
        if signal.is_empty() {
            return Ok(Vec::new());
        }

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(signal.len());

        let mut input = apply_window(signal, self.window_type);
        let mut output = r2c.make_output_vec();

        r2c.process(&mut input, &mut output)
            .map_err(|e| FilterError::Transform(e.to_string()))?;

        Ok(output.iter().map(|c| c.norm()).collect())
    }

    /// Summarize energy distribution relative to a passband
    pub fn summarize(
        &self,
        signal: &[f64],
        sample_rate_hz: u32,
        passband: &PassbandSpec,
    ) -> Result<SpectrumSummary, FilterError> {
        let n = signal.len();
        let bins = BinRange::resolve(passband, n, sample_rate_hz)?;
        let magnitude = self.magnitude_spectrum(signal)?;

        let mut total_energy = 0.0;
        let mut passband_energy = 0.0;
        for (k, &mag) in magnitude.iter().enumerate() {
            let power = mag * mag;
            total_energy += power;
            if bins.retains(k) {
                passband_energy += power;
            }
        }

        let peak_bin = magnitude
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(k, _)| k)
            .unwrap_or(0);

        Ok(SpectrumSummary {
            peak_hz: if n > 0 { bin_to_hz(peak_bin, n, sample_rate_hz) } else { 0.0 },
            total_energy,
            passband_energy,
            num_bins: magnitude.len(),
        })
    }
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new(WindowType::default())
    }
}
