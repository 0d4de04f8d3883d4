//! Source file reading.

use std::io::ErrorKind;
use std::path::Path;

use textcast_core::SourceFile;

use crate::error::ReadError;

/// Read a directory entry as UTF-8 text.
///
/// No extension filter is applied; anything that is a regular file and decodes
/// as UTF-8 is accepted.
///
/// # Errors
///
/// Returns [`ReadError`] for non-regular entries, I/O failures, and content
/// that is not valid UTF-8.
pub async fn read_source_file(name: &str, path: &Path) -> Result<SourceFile, ReadError> {
    let metadata = tokio::fs::metadata(path).await.map_err(|source| ReadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(ReadError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let text = tokio::fs::read_to_string(path).await.map_err(|source| {
        if source.kind() == ErrorKind::InvalidData {
            ReadError::NotUtf8 {
                path: path.to_path_buf(),
            }
        } else {
            ReadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    Ok(SourceFile {
        name: name.to_owned(),
        path: path.to_path_buf(),
        text,
    })
}
