//! Filesystem helpers around the in-memory core
//!
//! Path resolution, whole-file reads/writes and raw `.dat` dumps of a parsed
//! WAV file.

use crate::wav::WavFile;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the raw header dump
pub const HEADER_DUMP_NAME: &str = "header_data.dat";

/// File name of the raw payload dump
pub const AUDIO_DUMP_NAME: &str = "audio_data.dat";

#[derive(Error, Debug)]
pub enum FileError {
    #[error("Failed to determine current directory: {0}")]
    CurrentDir(#[source] io::Error),

    #[error("Failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Join a relative path onto `base`; absolute paths are returned unchanged
pub fn resolve_path_from(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Resolve a path against the current working directory
pub fn resolve_path(path: &Path) -> Result<PathBuf, FileError> {
    let cwd = std::env::current_dir().map_err(FileError::CurrentDir)?;
    Ok(resolve_path_from(&cwd, path))
}

/// Read a whole file
pub fn read_file(path: &Path) -> Result<Vec<u8>, FileError> {
    fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `data` to `path`, creating parent directories as needed
pub fn write_binary_file(path: &Path, data: &[u8]) -> Result<(), FileError> {
    let to_error = |source| FileError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, data).map_err(to_error)
}

/// Dump the raw header and payload bytes into `dir`
///
/// # Returns
/// Paths of the header dump and payload dump
pub fn dump_raw(dir: &Path, wav: &WavFile) -> Result<(PathBuf, PathBuf), FileError> {
    let header_path = dir.join(HEADER_DUMP_NAME);
    let audio_path = dir.join(AUDIO_DUMP_NAME);

    write_binary_file(&audio_path, wav.samples.as_bytes())?;
    write_binary_file(&header_path, &wav.header.to_bytes())?;

    Ok((header_path, audio_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SampleBuffer;
    use crate::wav::{WavHeader, HEADER_LEN};

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wav-bandpass-{}-{}", name, std::process::id()))
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let base = Path::new("/work");

        assert_eq!(
            resolve_path_from(base, Path::new("data/in.wav")),
            PathBuf::from("/work/data/in.wav")
        );
        assert_eq!(
            resolve_path_from(base, Path::new("/tmp/in.wav")),
            PathBuf::from("/tmp/in.wav")
        );
    }

    #[test]
    fn test_resolve_uses_cwd() {
        let resolved = resolve_path(Path::new("x.wav")).unwrap();

        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("x.wav"));
    }

    #[test]
    fn test_dump_raw_writes_both_files() {
        let dir = scratch_dir("dump");
        let samples = SampleBuffer::from_u8(&[1, 2, 3]);
        let wav = WavFile::new(WavHeader::pcm(1, 8000, 8, 3), samples);

        let (header_path, audio_path) = dump_raw(&dir.join("nested"), &wav).unwrap();

        assert_eq!(read_file(&audio_path).unwrap(), vec![1, 2, 3]);
        assert_eq!(read_file(&header_path).unwrap().len(), HEADER_LEN);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_reports_path() {
        let missing = scratch_dir("missing").join("nope.wav");

        let err = read_file(&missing).unwrap_err();

        assert!(matches!(err, FileError::Read { .. }));
        assert!(err.to_string().contains("nope.wav"));
    }
}
