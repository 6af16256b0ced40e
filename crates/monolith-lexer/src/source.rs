//! Loading source files.
//!
//! The scanner works on single-byte text only. A file holding any byte that
//! is neither printable nor a control character (anything outside ASCII) is
//! rejected as a whole before scanning starts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::scanner::{Lexed, Scanner};

/// File-level failure. Aborts the run before any token is produced.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Could not open file: '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unprintable chars. UTF16 is probably used")]
    Encoding { path: PathBuf, offset: usize },
}

impl SourceError {
    pub fn path(&self) -> &Path {
        match self {
            SourceError::Io { path, .. } | SourceError::Encoding { path, .. } => path,
        }
    }

    /// Byte offset of the first unprintable byte, for encoding failures.
    pub fn offset(&self) -> Option<usize> {
        match self {
            SourceError::Encoding { offset, .. } => Some(*offset),
            SourceError::Io { .. } => None,
        }
    }
}

/// A fully read source file. Tokens scanned from it borrow its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    /// Read and validate the file at `path`.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(path, bytes)
    }

    /// Validate an in-memory buffer as if it had been read from `path`.
    pub fn from_bytes(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Result<Self, SourceError> {
        let path = path.into();
        if let Some(offset) = bytes.iter().position(|b| !b.is_ascii()) {
            return Err(SourceError::Encoding { path, offset });
        }
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Self { path, text }),
            Err(e) => Err(SourceError::Encoding {
                path,
                offset: e.utf8_error().valid_up_to(),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Tokenize the whole file.
    pub fn scan(&self) -> Lexed<'_> {
        Scanner::tokenize(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ascii_accepted() {
        let file = SourceFile::from_bytes("a.mon", b"x = 1\n\t\x07\r\n".to_vec()).unwrap();
        assert_eq!(file.text(), "x = 1\n\t\x07\r\n");
        assert_eq!(file.path(), Path::new("a.mon"));
    }

    #[test]
    fn test_non_ascii_rejected() {
        let err = SourceFile::from_bytes("a.mon", "x = 'é'\n".as_bytes().to_vec()).unwrap_err();
        assert!(matches!(err, SourceError::Encoding { offset: 5, .. }));
        assert_eq!(err.offset(), Some(5));
        assert_eq!(err.to_string(), "Unprintable chars. UTF16 is probably used");
    }

    #[test]
    fn test_utf16_rejected() {
        let err = SourceFile::from_bytes("a.mon", vec![0xFF, 0xFE, b'x', 0]).unwrap_err();
        assert!(matches!(err, SourceError::Encoding { offset: 0, .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = SourceFile::read("definitely/not/here.mon").unwrap_err();
        assert_eq!(err.to_string(), "Could not open file: 'definitely/not/here.mon'");
        assert_eq!(err.path(), Path::new("definitely/not/here.mon"));
        assert_eq!(err.offset(), None);
    }

    #[test]
    fn test_scan_borrows_file_text() {
        let file = SourceFile::from_bytes("a.mon", b"x\n".to_vec()).unwrap();
        let lexed = file.scan();
        assert_eq!(lexed.tokens[0].content, "x");
    }
}
