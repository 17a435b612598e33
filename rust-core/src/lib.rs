//! WAV Bandpass - brick-wall frequency-domain filtering for PCM WAV files
//!
//! Parses a RIFF/WAVE byte stream, removes every spectral bin outside a
//! passband and re-serializes the result. The core works on in-memory
//! buffers only; see `fileio` for the filesystem side.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![allow(non_local_definitions)]

pub mod audio;
pub mod config;
pub mod diagnostics;
pub mod fileio;
pub mod filters;
pub mod pipeline;
pub mod spectrum;
pub mod wav;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use audio::{SampleBuffer, SampleFormat};
pub use config::BandpassConfig;
pub use filters::{apply_bandpass, BandpassFilter, FilterError, PassbandSpec};
pub use pipeline::{process_wav, PipelineError, ProcessedWav};
pub use spectrum::SpectrumAnalyzer;
pub use wav::{read_wav, write_wav, WavError, WavHeader};
