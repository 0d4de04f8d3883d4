//! # textcast-batch
//!
//! Sequential batch over a directory of text files. For each entry:
//! 1. Read the file as UTF-8 text
//! 2. Categorize it with a [`textcast_aws::TextAnalyzer`]
//! 3. Render speech with a [`textcast_aws::SpeechSynthesizer`]
//! 4. Write the audio to an [`textcast_store::AudioStore`]
//! 5. Report the outcome through a [`Reporter`]
//!
//! Failures are isolated per file, including read failures. No step is retried.

pub mod error;
pub mod processor;
pub mod reporter;
pub mod source;

pub use error::{BatchError, FileError, ReadError};
pub use processor::BatchProcessor;
pub use reporter::{Reporter, TracingReporter};
pub use source::read_source_file;
