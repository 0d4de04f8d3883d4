//! Amazon Polly speech synthesis.

use aws_config::SdkConfig;
use aws_sdk_polly::error::DisplayErrorContext;
use aws_sdk_polly::types::{Engine, OutputFormat, VoiceId};
use textcast_config::SynthesisConfig;
use textcast_core::{AudioArtifact, AudioFormat};

use crate::{SpeechSynthesizer, SynthesisError};

/// [`SpeechSynthesizer`] backed by Polly. Always requests MP3.
#[derive(Debug, Clone)]
pub struct PollySynthesizer {
    client: aws_sdk_polly::Client,
    voice: VoiceId,
    engine: Option<Engine>,
}

impl PollySynthesizer {
    #[must_use]
    pub fn new(sdk: &SdkConfig, config: &SynthesisConfig) -> Self {
        Self {
            client: aws_sdk_polly::Client::new(sdk),
            voice: VoiceId::from(config.voice_id.trim()),
            engine: config.engine().map(Engine::from),
        }
    }

    #[must_use]
    pub const fn voice(&self) -> &VoiceId {
        &self.voice
    }

    #[must_use]
    pub const fn engine(&self) -> Option<&Engine> {
        self.engine.as_ref()
    }
}

const fn output_format(format: AudioFormat) -> OutputFormat {
    match format {
        AudioFormat::Mp3 => OutputFormat::Mp3,
    }
}

impl SpeechSynthesizer for PollySynthesizer {
    async fn synthesize(&self, text: &str) -> Result<AudioArtifact, SynthesisError> {
        let output = self
            .client
            .synthesize_speech()
            .text(text)
            .output_format(output_format(AudioFormat::Mp3))
            .voice_id(self.voice.clone())
            .set_engine(self.engine.clone())
            .send()
            .await
            .map_err(|error| SynthesisError::Service(DisplayErrorContext(&error).to_string()))?;

        let data = output
            .audio_stream
            .collect()
            .await
            .map_err(|error| SynthesisError::Stream(error.to_string()))?
            .into_bytes();

        if data.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        tracing::debug!(voice = self.voice.as_str(), bytes = data.len(), "speech synthesized");
        Ok(AudioArtifact::mp3(data))
    }
}
