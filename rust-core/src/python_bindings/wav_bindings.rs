//! Python bindings for WAV parsing

use super::to_py_err;
use crate::wav::read_wav;
use numpy::PyArray1;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Parse the header of an in-memory WAV file
///
/// Args:
///     data: Raw WAV file bytes
///
/// Returns:
///     Dict of header fields
#[pyfunction]
pub fn read_header<'py>(py: Python<'py>, data: &[u8]) -> PyResult<&'py PyDict> {
    let header = read_wav(data).map_err(to_py_err)?.header;

    let dict = PyDict::new(py);
    dict.set_item("num_channels", header.num_channels)?;
    dict.set_item("sample_rate", header.sample_rate)?;
    dict.set_item("byte_rate", header.byte_rate)?;
    dict.set_item("block_align", header.block_align)?;
    dict.set_item("bits_per_sample", header.bits_per_sample)?;
    dict.set_item("audio_format", header.audio_format)?;
    dict.set_item("data_size", header.subchunk2_size)?;
    Ok(dict)
}

/// Decode the payload of an in-memory WAV file to float32
///
/// Args:
///     data: Raw WAV file bytes (8 or 16-bit PCM)
///
/// Returns:
///     Samples scaled to [-1.0, 1.0) as a numpy array
#[pyfunction]
pub fn decode_samples<'py>(py: Python<'py>, data: &[u8]) -> PyResult<&'py PyArray1<f32>> {
    let wav = read_wav(data).map_err(to_py_err)?;
    let samples = wav.samples.to_normalized_f32().map_err(to_py_err)?;

    Ok(PyArray1::from_vec(py, samples))
}
