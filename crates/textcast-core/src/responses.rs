//! Batch report types returned as JSON by `tcast process`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Stage;

/// Outcome of one source file. Exactly one is recorded per directory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Processed {
        file: String,
        key: String,
        size: usize,
        #[serde(default)]
        categories: Vec<String>,
    },
    Failed {
        file: String,
        stage: Stage,
        error: String,
    },
}

impl FileOutcome {
    #[must_use]
    pub fn file(&self) -> &str {
        match self {
            Self::Processed { file, .. } | Self::Failed { file, .. } => file,
        }
    }

    #[must_use]
    pub const fn is_processed(&self) -> bool {
        matches!(self, Self::Processed { .. })
    }
}

/// Summary of one batch run over a directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub directory: String,
    pub bucket: String,
    pub prefix: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub processed: usize,
    pub failed: usize,
    pub outcomes: Vec<FileOutcome>,
    /// Set when the directory listing broke off partway; later entries were never seen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interrupted: Option<String>,
}

impl BatchReport {
    /// Start an empty report stamped with the current time.
    #[must_use]
    pub fn begin(directory: impl Into<String>, bucket: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            bucket: bucket.into(),
            prefix: prefix.into(),
            started_at: Utc::now(),
            finished_at: None,
            processed: 0,
            failed: 0,
            outcomes: Vec::new(),
            interrupted: None,
        }
    }

    /// Append an outcome, keeping the counters in step.
    pub fn record(&mut self, outcome: FileOutcome) {
        if outcome.is_processed() {
            self.processed += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }

    /// Mark the run as cut short. Outcomes recorded so far are kept.
    pub fn interrupt(&mut self, reason: impl Into<String>) {
        self.interrupted = Some(reason.into());
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.interrupted.is_none()
    }

    /// Stamp the finish time.
    #[must_use]
    pub fn finish(mut self) -> Self {
        self.finished_at = Some(Utc::now());
        self
    }

    /// Total number of files attempted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Keys written during this run, in processing order.
    #[must_use]
    pub fn written_keys(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                FileOutcome::Processed { key, .. } => Some(key.as_str()),
                FileOutcome::Failed { .. } => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn processed(file: &str) -> FileOutcome {
        FileOutcome::Processed {
            file: file.into(),
            key: format!("out/{file}.mp3"),
            size: 4,
            categories: vec![],
        }
    }

    #[test]
    fn record_updates_counters() {
        let mut report = BatchReport::begin("/in", "bucket", "out");
        report.record(processed("a.txt"));
        report.record(FileOutcome::Failed {
            file: "b.txt".into(),
            stage: Stage::Synthesize,
            error: "throttled".into(),
        });
        let report = report.finish();

        assert_eq!(report.processed, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.total(), 2);
        assert_eq!(report.written_keys(), vec!["out/a.txt.mp3"]);
        assert!(report.finished_at.is_some());
    }

    #[test]
    fn interrupted_report_keeps_earlier_outcomes() {
        let mut report = BatchReport::begin("/in", "bucket", "out");
        report.record(processed("a.txt"));
        report.interrupt("failed to read directory entry: I/O error");
        let report = report.finish();

        assert!(!report.is_complete());
        assert_eq!(report.written_keys(), vec!["out/a.txt.mp3"]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json["interrupted"],
            "failed to read directory entry: I/O error"
        );
    }

    #[test]
    fn complete_report_omits_interrupted() {
        let report = BatchReport::begin("/in", "bucket", "").finish();
        assert!(report.is_complete());
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("interrupted").is_none());
    }

    #[test]
    fn outcome_json_is_tagged_by_status() {
        let json = serde_json::to_value(FileOutcome::Failed {
            file: "b.txt".into(),
            stage: Stage::Read,
            error: "stream did not contain valid UTF-8".into(),
        })
        .unwrap();

        assert_eq!(json["status"], "failed");
        assert_eq!(json["stage"], "read");
        assert_eq!(json["file"], "b.txt");
    }
}
