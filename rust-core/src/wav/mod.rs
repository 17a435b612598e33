//! RIFF/WAVE container parsing and serialization

pub mod header;
pub mod reader;
pub mod writer;

pub use header::{WavError, WavHeader, HEADER_LEN};
pub use reader::{read_wav, read_wav_from, WavFile};
pub use writer::{write_wav, write_wav_to};
