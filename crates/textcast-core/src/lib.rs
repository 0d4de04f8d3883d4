//! # textcast-core
//!
//! Core types shared across all textcast crates:
//! - Entities moved through a batch run (source files, analysis results,
//!   audio artifacts, storage objects)
//! - Stage and audio format enums
//! - Deterministic object key derivation
//! - Batch report types rendered by the CLI
//!
//! Error types live in the crate that owns the failing call
//! (`textcast-aws`, `textcast-store`, `textcast-batch`).

pub mod entities;
pub mod enums;
pub mod keys;
pub mod responses;

pub use entities::{AnalysisResult, AudioArtifact, Category, SourceFile, StorageObject};
pub use enums::{AudioFormat, Stage};
pub use keys::object_key;
pub use responses::{BatchReport, FileOutcome};
