//! Service call error types.

use thiserror::Error;

/// Errors from the text analysis call.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The service rejected the request or could not be reached.
    #[error("analysis service error: {0}")]
    Service(String),
}

/// Errors from the speech synthesis call.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// The service rejected the request or could not be reached.
    #[error("synthesis service error: {0}")]
    Service(String),

    /// The audio stream broke off while being read.
    #[error("audio stream error: {0}")]
    Stream(String),

    /// The service answered with a zero-length audio stream.
    #[error("synthesis service returned no audio")]
    EmptyAudio,
}
