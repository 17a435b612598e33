//! Python bindings for the bandpass filter

use super::to_py_err;
use crate::diagnostics::LogHook;
use crate::filters::PassbandSpec;
use crate::pipeline::{filter_wav_bytes, process_wav_with_hook};
use pyo3::prelude::*;
use pyo3::types::PyBytes;

/// Filter an in-memory WAV file
///
/// Args:
///     data: Raw WAV file bytes
///     lower_hz: Lower cutoff in Hz
///     upper_hz: Upper cutoff in Hz
///
/// Returns:
///     Filtered WAV file bytes
#[pyfunction]
pub fn bandpass_wav<'py>(
    py: Python<'py>,
    data: &[u8],
    lower_hz: u32,
    upper_hz: u32,
) -> PyResult<&'py PyBytes> {
    let passband = PassbandSpec::new(lower_hz, upper_hz).map_err(to_py_err)?;
    let filtered = filter_wav_bytes(data, &passband).map_err(to_py_err)?;

    Ok(PyBytes::new(py, &filtered))
}

/// Reusable bandpass settings exposed to Python
#[pyclass(name = "BandpassFilter")]
pub struct PyBandpassFilter {
    passband: PassbandSpec,
}

#[pymethods]
impl PyBandpassFilter {
    /// Create a new bandpass filter
    ///
    /// Args:
    ///     lower_hz: Lower cutoff in Hz
    ///     upper_hz: Upper cutoff in Hz
    #[new]
    fn new(lower_hz: u32, upper_hz: u32) -> PyResult<Self> {
        let passband = PassbandSpec::new(lower_hz, upper_hz).map_err(to_py_err)?;
        Ok(Self { passband })
    }

    /// Filter WAV bytes, logging progress through the `log` facade
    ///
    /// Returns:
    ///     Tuple of (filtered WAV bytes, number of clamped samples)
    fn process<'py>(&self, py: Python<'py>, data: &[u8]) -> PyResult<(&'py PyBytes, usize)> {
        let processed =
            process_wav_with_hook(data, &self.passband, &mut LogHook).map_err(to_py_err)?;
        let bytes = PyBytes::new(py, &processed.to_wav_bytes());

        Ok((bytes, processed.report.clipped))
    }

    /// Lower cutoff in Hz
    #[getter]
    fn lower_hz(&self) -> u32 {
        self.passband.lower_cutoff_hz
    }

    /// Upper cutoff in Hz
    #[getter]
    fn upper_hz(&self) -> u32 {
        self.passband.upper_cutoff_hz
    }
}
