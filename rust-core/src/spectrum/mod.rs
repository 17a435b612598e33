//! DFT backends and spectral analysis

pub mod fft;
pub mod windowing;
pub mod analysis;

pub use fft::{NaiveDft, RustFftTransform, SpectralTransform};
pub use windowing::{apply_window, generate_window, WindowType};
pub use analysis::{SpectrumAnalyzer, SpectrumSummary};
