//! Text analysis (categorization) configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Routing key selecting the analysis resource.
    ///
    /// For Amazon Comprehend this is the custom classifier endpoint ARN.
    #[serde(default)]
    pub index_id: String,
}

impl AnalysisConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.index_id.trim().is_empty()
    }
}
