//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

mod filter_bindings;
mod wav_bindings;

/// Map any core error onto a Python ValueError
pub(crate) fn to_py_err<E: std::fmt::Display>(err: E) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Python module definition
#[pymodule]
fn wav_bandpass(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<filter_bindings::PyBandpassFilter>()?;

    m.add_function(wrap_pyfunction!(filter_bindings::bandpass_wav, m)?)?;
    m.add_function(wrap_pyfunction!(wav_bindings::read_header, m)?)?;
    m.add_function(wrap_pyfunction!(wav_bindings::decode_samples, m)?)?;

    Ok(())
}
