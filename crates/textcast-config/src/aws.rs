//! Shared AWS SDK settings for the analysis and synthesis clients.

use serde::{Deserialize, Serialize};

/// Credentials are never configured here; the SDK provider chain resolves them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AwsConfig {
    /// Region override. Empty falls back to the SDK provider chain.
    #[serde(default)]
    pub region: String,

    /// Endpoint override for both service clients (e.g. a local emulator).
    #[serde(default)]
    pub endpoint: String,
}

impl AwsConfig {
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        non_empty(&self.region)
    }

    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        non_empty(&self.endpoint)
    }
}

pub(crate) fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
