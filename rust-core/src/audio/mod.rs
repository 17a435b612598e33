//! PCM sample storage and amplitude conversion

pub mod buffer;

pub use buffer::{SampleBuffer, SampleFormat};
