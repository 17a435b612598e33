//! Window functions for spectral analysis
//!
//! Tapers a block before the FFT to reduce spectral leakage. The filter
//! itself never windows: it transforms the whole buffer as-is.

use std::f64::consts::PI;

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    /// Hann window: w[n] = 0.5 - 0.5*cos(2πn/(M-1))
    #[default]
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/(M-1))
    Hamming,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/(M-1)) + 0.08*cos(4πn/(M-1))
    Blackman,

    /// Rectangular window (no tapering)
    Rectangular,
}

impl WindowType {
    /// Window coefficient w[n] for a window of length `len`
    pub fn coefficient(&self, n: usize, len: usize) -> f64 {
        if len <= 1 {
            return 1.0;
        }
        let phase = 2.0 * PI * n as f64 / (len - 1) as f64;

        match self {
            WindowType::Hann => 0.5 - 0.5 * phase.cos(),
            WindowType::Hamming => 0.54 - 0.46 * phase.cos(),
            WindowType::Blackman => 0.42 - 0.5 * phase.cos() + 0.08 * (2.0 * phase).cos(),
            WindowType::Rectangular => 1.0,
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            WindowType::Hann => "hann",
            WindowType::Hamming => "hamming",
            WindowType::Blackman => "blackman",
            WindowType::Rectangular => "rectangular",
        }
    }
}

/// Generate window coefficients of length `len`
pub fn generate_window(window_type: WindowType, len: usize) -> Vec<f64> {
    (0..len).map(|n| window_type.coefficient(n, len)).collect()
}

/// Apply window to signal, returning the tapered copy
pub fn apply_window(signal: &[f64], window_type: WindowType) -> Vec<f64> {
    let len = signal.len();
    signal
        .iter()
        .enumerate()
        .map(|(n, &s)| s * window_type.coefficient(n, len))
        .collect()
}
