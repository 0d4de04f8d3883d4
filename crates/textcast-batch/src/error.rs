//! Batch error types.
//!
//! [`FileError`] is isolated to one file and never ends a run. [`BatchError`]
//! is the only error `BatchProcessor::process` returns.

use std::path::PathBuf;

use textcast_aws::{AnalysisError, SynthesisError};
use textcast_core::Stage;
use textcast_store::StorageError;
use thiserror::Error;

/// Reading a source file failed.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The entry is a directory, socket, or other non-regular file.
    #[error("not a regular file: {}", path.display())]
    NotAFile { path: PathBuf },

    /// The entry name is not valid UTF-8, so no stable object key exists for it.
    #[error("file name is not valid UTF-8: {}", path.display())]
    NameNotUtf8 { path: PathBuf },

    /// The content is not valid UTF-8.
    #[error("file is not valid UTF-8 text: {}", path.display())]
    NotUtf8 { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A failure while processing one file, tagged by the step that failed.
#[derive(Debug, Error)]
pub enum FileError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl FileError {
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Read(_) => Stage::Read,
            Self::Analysis(_) => Stage::Analyze,
            Self::Synthesis(_) => Stage::Synthesize,
            Self::Storage(_) => Stage::Store,
        }
    }
}

/// Whole-batch failures.
#[derive(Debug, Error)]
pub enum BatchError {
    /// The source directory could not be listed.
    #[error("failed to list directory {}: {source}", path.display())]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
