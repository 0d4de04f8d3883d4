//! Per-file outcome reporting.
//!
//! The processor never logs directly; it hands every outcome to a [`Reporter`].

use textcast_core::{AnalysisResult, StorageObject};

use crate::error::FileError;

/// Receives exactly one call per processed directory entry.
pub trait Reporter {
    /// The file was analyzed, synthesized and written.
    fn processed(&self, file: &str, object: &StorageObject, analysis: &AnalysisResult);

    /// The file failed at some stage; the batch continues.
    fn failed(&self, file: &str, error: &FileError);
}

/// Default reporter: `info` on success, `error` on failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn processed(&self, file: &str, object: &StorageObject, analysis: &AnalysisResult) {
        tracing::info!(file, key = %object.key, bytes = object.size, "processed file");
        tracing::debug!(file, categories = ?analysis.category_names(), "analysis result");
    }

    fn failed(&self, file: &str, error: &FileError) {
        tracing::error!(file, stage = %error.stage(), %error, "error processing file");
    }
}
