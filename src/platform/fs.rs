// CsvEdit - platform/fs.rs
//
// Filesystem access for file intake.

use crate::core::intake::decode_text;
use crate::util::error::IntakeError;
use std::path::Path;

/// Read a whole file as text, refusing files above `max_size` bytes.
///
/// The size is checked from metadata before reading so an oversized file is
/// never pulled into memory. Invalid UTF-8 is replaced, not rejected.
pub fn read_text_file(path: &Path, max_size: u64) -> Result<String, IntakeError> {
    let io_err = |source| IntakeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let size = std::fs::metadata(path).map_err(io_err)?.len();
    if size > max_size {
        return Err(IntakeError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size,
        });
    }

    let bytes = std::fs::read(path).map_err(io_err)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read input file");
    Ok(decode_text(&bytes))
}

/// Bare file name of `path` for intake checks and messages.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        fs::write(&path, "a,b\n1,2").unwrap();
        assert_eq!(read_text_file(&path, 1024).unwrap(), "a,b\n1,2");
    }

    #[test]
    fn test_rejects_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.csv");
        fs::write(&path, "x".repeat(100)).unwrap();
        let err = read_text_file(&path, 10).unwrap_err();
        assert!(matches!(
            err,
            IntakeError::FileTooLarge {
                size: 100,
                max_size: 10,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_text_file(&dir.path().join("nope.csv"), 1024).unwrap_err();
        assert!(matches!(err, IntakeError::Io { .. }));
    }

    #[test]
    fn test_file_name_of() {
        assert_eq!(file_name_of(Path::new("/tmp/dir/data.csv")), "data.csv");
    }
}
