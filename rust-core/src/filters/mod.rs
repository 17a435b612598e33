//! Frequency-domain brick-wall filtering

pub mod passband;
pub mod spectral;

pub use passband::{bin_to_hz, hz_to_bin, BinRange, PassbandSpec};
pub use spectral::{apply_bandpass, BandpassFilter, FilterError, FilterReport};
