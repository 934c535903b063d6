//! Local filesystem backend.

use std::fs;
use std::path::Path;

use crate::buffer::TextBuffer;
use crate::encoding::Encoding;
use crate::error::AccessError;

/// The local filesystem branch of the accessor.
///
/// This is the unpatched behavior: results are the native filesystem's,
/// with decoding applied but no line normalization. A missing file is an
/// I/O error from [`read_text`](Self::read_text), mirroring the throwing
/// accessor it stands in for, while [`exists`](Self::exists) never errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Check whether a path exists on disk.
    pub fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Read a file from disk and decode it.
    ///
    /// Directories are rejected before reading, matching the metadata
    /// check the native accessor performs.
    pub fn read_text(&self, path: &Path, encoding: Encoding) -> Result<TextBuffer, AccessError> {
        let bytes = read_disk(path)?;
        let text = encoding
            .decode(&bytes)
            .map_err(|e| AccessError::decode(path, e))?;
        Ok(TextBuffer::new(text))
    }
}

/// Read file bytes from disk.
fn read_disk(path: &Path) -> Result<Vec<u8>, AccessError> {
    let map_err = |e| AccessError::io(path, e);
    fs::metadata(path).map_err(map_err).and_then(|m| {
        if m.is_dir() {
            Err(AccessError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::IsADirectory, "is a directory"),
            ))
        } else {
            fs::read(path).map_err(map_err)
        }
    })
}
