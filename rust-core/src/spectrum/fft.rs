//! Complex DFT backends for the spectral filter
//!
//! The filter engine only talks to `SpectralTransform`, so any library that
//! runs an unnormalized complex DFT in both directions can be plugged in.

use crate::filters::FilterError;
use num_complex::Complex64;
use rustfft::{FftDirection, FftPlanner};
use std::f64::consts::PI;

/// Forward/inverse DFT capability
///
/// Both directions operate in place on a full-length complex sequence and are
/// unnormalized: `inverse(forward(x))` yields `N * x`.
pub trait SpectralTransform {
    /// Forward DFT (time → frequency)
    fn forward(&self, buffer: &mut [Complex64]) -> Result<(), FilterError>;

    /// Inverse DFT (frequency → time), not scaled by 1/N
    fn inverse(&self, buffer: &mut [Complex64]) -> Result<(), FilterError>;
}

/// Allocate a zeroed complex buffer, reporting allocation failure
pub(crate) fn alloc_complex(len: usize) -> Result<Vec<Complex64>, FilterError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| FilterError::Resource { requested: len })?;
    buffer.resize(len, Complex64::new(0.0, 0.0));
    Ok(buffer)
}

/// Mixed-radix FFT backed by rustfft, O(N log N) for any length
///
/// Plans and scratch space are built per call and dropped on return.
#[derive(Debug, Default, Clone, Copy)]
pub struct RustFftTransform;

impl RustFftTransform {
    fn process(buffer: &mut [Complex64], direction: FftDirection) -> Result<(), FilterError> {
        if buffer.is_empty() {
            return Ok(());
        }

        let mut planner = FftPlanner::<f64>::new();
        let fft = planner.plan_fft(buffer.len(), direction);

        let mut scratch = alloc_complex(fft.get_inplace_scratch_len())?;
        fft.process_with_scratch(buffer, &mut scratch);

        Ok(())
    }
}

impl SpectralTransform for RustFftTransform {
    fn forward(&self, buffer: &mut [Complex64]) -> Result<(), FilterError> {
        Self::process(buffer, FftDirection::Forward)
    }

    fn inverse(&self, buffer: &mut [Complex64]) -> Result<(), FilterError> {
        Self::process(buffer, FftDirection::Inverse)
    }
}

/// Direct O(N²) DFT, only sensible for short buffers and cross-checking
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveDft;

impl NaiveDft {
    fn process(buffer: &mut [Complex64], sign: f64) -> Result<(), FilterError> {
        let n = buffer.len();
        if n == 0 {
            return Ok(());
        }

        let mut input = alloc_complex(n)?;
        input.copy_from_slice(buffer);

        for (k, out) in buffer.iter_mut().enumerate() {
            let mut sum = Complex64::new(0.0, 0.0);
            for (t, &x) in input.iter().enumerate() {
                // Reduce k*t mod n first to keep the angle small
                let angle = sign * 2.0 * PI * ((k * t) % n) as f64 / n as f64;
                sum += x * Complex64::from_polar(1.0, angle);
            }
            *out = sum;
        }

        Ok(())
    }
}

impl SpectralTransform for NaiveDft {
    fn forward(&self, buffer: &mut [Complex64]) -> Result<(), FilterError> {
        Self::process(buffer, -1.0)
    }

    fn inverse(&self, buffer: &mut [Complex64]) -> Result<(), FilterError> {
        Self::process(buffer, 1.0)
    }
}
