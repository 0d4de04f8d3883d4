//! # textcast-aws
//!
//! Remote text analysis and speech synthesis for textcast.
//!
//! The batch processor only sees the [`TextAnalyzer`] and [`SpeechSynthesizer`]
//! traits. Production implementations call:
//! - Amazon Comprehend `ClassifyDocument` ([`ComprehendAnalyzer`])
//! - Amazon Polly `SynthesizeSpeech` ([`PollySynthesizer`])
//!
//! Both clients are built from one shared [`aws_config::SdkConfig`]
//! (see [`load_sdk_config`]) and are reused read-only across files.

mod comprehend;
mod error;
mod polly;
mod sdk;

pub use comprehend::ComprehendAnalyzer;
pub use error::{AnalysisError, SynthesisError};
pub use polly::PollySynthesizer;
pub use sdk::load_sdk_config;

use std::future::Future;

use textcast_core::{AnalysisResult, AudioArtifact};

/// Categorizes a text with a remote analysis service.
pub trait TextAnalyzer {
    /// Submit `text` for categorization.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError`] if the service call fails.
    fn analyze(&self, text: &str) -> impl Future<Output = Result<AnalysisResult, AnalysisError>> + Send;
}

/// Renders a text as encoded speech with a remote synthesis service.
pub trait SpeechSynthesizer {
    /// Synthesize `text` with the configured voice.
    ///
    /// # Errors
    ///
    /// Returns [`SynthesisError`] if the service call fails or returns no audio.
    fn synthesize(&self, text: &str) -> impl Future<Output = Result<AudioArtifact, SynthesisError>> + Send;
}
