//! Entities moved through a batch run.
//!
//! None of these outlive the iteration of the file that produced them.

use std::path::PathBuf;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::enums::AudioFormat;

/// A text file read from the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// File name within the source directory (used to derive the object key).
    pub name: String,
    /// Full path the content was read from.
    pub path: PathBuf,
    /// Entire file content decoded as UTF-8.
    pub text: String,
}

/// One category reported by the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Confidence in `[0, 1]` when the service reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

/// Categorization returned by the analysis service.
///
/// The batch only checks that the call succeeded; categories are carried
/// through for reporting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub categories: Vec<Category>,
}

impl AnalysisResult {
    /// Category names in the order the service returned them.
    #[must_use]
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }
}

/// Encoded audio returned by the synthesis service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    pub format: AudioFormat,
    pub data: Bytes,
}

impl AudioArtifact {
    #[must_use]
    pub fn mp3(data: impl Into<Bytes>) -> Self {
        Self {
            format: AudioFormat::Mp3,
            data: data.into(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Record of a completed object store write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageObject {
    pub bucket: String,
    pub key: String,
    /// Body size in bytes.
    pub size: usize,
}
