//! The batch loop: list → read → analyze → synthesize → store → report.

use std::ffi::OsStr;
use std::path::Path;

use textcast_aws::{SpeechSynthesizer, TextAnalyzer};
use textcast_core::{AnalysisResult, BatchReport, FileOutcome, StorageObject};
use textcast_store::AudioStore;

use crate::error::{BatchError, FileError, ReadError};
use crate::reporter::Reporter;
use crate::source::read_source_file;

/// Runs one file at a time through analysis, synthesis and storage.
///
/// Collaborators are injected so tests can count calls and fail stages.
/// Nothing is shared across files except the read-only clients.
pub struct BatchProcessor<A, S, R> {
    analyzer: A,
    synthesizer: S,
    store: AudioStore,
    reporter: R,
}

impl<A, S, R> BatchProcessor<A, S, R>
where
    A: TextAnalyzer,
    S: SpeechSynthesizer,
    R: Reporter,
{
    pub const fn new(analyzer: A, synthesizer: S, store: AudioStore, reporter: R) -> Self {
        Self {
            analyzer,
            synthesizer,
            store,
            reporter,
        }
    }

    /// Process every entry of `directory`, writing audio under `prefix` in the
    /// store's bucket.
    ///
    /// Entries are visited in directory enumeration order. A failure in any
    /// per-file step is reported and the loop moves to the next entry. If the
    /// listing breaks off partway, the report is returned with `interrupted`
    /// set and the outcomes gathered so far.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::ListDirectory`] only if the directory itself
    /// cannot be opened for listing.
    pub async fn process(&self, directory: &Path, prefix: &str) -> Result<BatchReport, BatchError> {
        let mut entries = tokio::fs::read_dir(directory)
            .await
            .map_err(|source| BatchError::ListDirectory {
                path: directory.to_path_buf(),
                source,
            })?;
        let mut report = BatchReport::begin(
            directory.display().to_string(),
            self.store.bucket(),
            prefix,
        );

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(error) => {
                    tracing::error!(
                        directory = %directory.display(),
                        %error,
                        "directory listing interrupted"
                    );
                    report.interrupt(format!("failed to read directory entry: {error}"));
                    break;
                }
            };

            let file_name = entry.file_name();
            let name = file_name.to_string_lossy().into_owned();
            let outcome = match self.process_file(&file_name, &entry.path(), prefix).await {
                Ok((object, analysis)) => {
                    self.reporter.processed(&name, &object, &analysis);
                    FileOutcome::Processed {
                        file: name,
                        key: object.key,
                        size: object.size,
                        categories: analysis.category_names(),
                    }
                }
                Err(error) => {
                    self.reporter.failed(&name, &error);
                    FileOutcome::Failed {
                        file: name,
                        stage: error.stage(),
                        error: error.to_string(),
                    }
                }
            };
            report.record(outcome);
        }

        Ok(report.finish())
    }

    async fn process_file(
        &self,
        file_name: &OsStr,
        path: &Path,
        prefix: &str,
    ) -> Result<(StorageObject, AnalysisResult), FileError> {
        let name = file_name.to_str().ok_or_else(|| ReadError::NameNotUtf8 {
            path: path.to_path_buf(),
        })?;
        let source = read_source_file(name, path).await?;

        // TODO: route files to organization-specific handling once category
        // rules are defined; the analysis result is only carried through today.
        let analysis = self.analyzer.analyze(&source.text).await?;
        let audio = self.synthesizer.synthesize(&source.text).await?;
        let object = self.store.put_audio(prefix, &source.name, audio).await?;

        Ok((object, analysis))
    }

    pub const fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub const fn synthesizer(&self) -> &S {
        &self.synthesizer
    }

    pub const fn store(&self) -> &AudioStore {
        &self.store
    }

    pub const fn reporter(&self) -> &R {
        &self.reporter
    }
}
