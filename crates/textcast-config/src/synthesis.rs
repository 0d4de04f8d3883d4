//! Speech synthesis configuration.

use serde::{Deserialize, Serialize};

use crate::aws::non_empty;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SynthesisConfig {
    /// Voice selector (e.g., `Joanna`, `Matthew`).
    #[serde(default)]
    pub voice_id: String,

    /// Synthesis engine (`standard`, `neural`, `long-form`, `generative`).
    /// Empty lets the service pick its default for the voice.
    #[serde(default)]
    pub engine: String,
}

impl SynthesisConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.voice_id.trim().is_empty()
    }

    #[must_use]
    pub fn engine(&self) -> Option<&str> {
        non_empty(&self.engine)
    }
}
